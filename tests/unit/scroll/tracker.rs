use super::*;

fn element_at(top: f64, height: f64) -> Rect {
    Rect::new(0.0, top, 1000.0, top + height)
}

#[test]
fn observed_element_is_sampled() {
    let mut t = ScrollTracker::new(800.0).unwrap();
    t.observe(ElementId(1), ScrollWindow::default());
    assert!(t.is_observed(ElementId(1)));
    assert_eq!(t.len(), 1);

    let p = t.sample(ElementId(1), element_at(100.0, 600.0)).unwrap();
    assert_eq!(p.get(), 0.5);
}

#[test]
fn unobserved_element_yields_none() {
    let mut t = ScrollTracker::new(800.0).unwrap();
    assert_eq!(t.sample(ElementId(7), element_at(0.0, 10.0)), None);

    t.observe(ElementId(7), ScrollWindow::default());
    assert!(t.unobserve(ElementId(7)));
    assert!(!t.unobserve(ElementId(7)));
    assert!(t.is_empty());
    assert_eq!(t.sample(ElementId(7), element_at(0.0, 10.0)), None);
}

#[test]
fn resize_changes_progress() {
    let mut t = ScrollTracker::new(800.0).unwrap();
    t.observe(ElementId(1), ScrollWindow::default());
    let bounds = element_at(100.0, 600.0);
    let before = t.sample(ElementId(1), bounds).unwrap();

    t.set_viewport_height(400.0).unwrap();
    let after = t.sample(ElementId(1), bounds).unwrap();
    assert!(after < before);
    assert_eq!(t.viewport_height(), 400.0);
}

#[test]
fn observe_replaces_window() {
    let mut t = ScrollTracker::new(800.0).unwrap();
    t.observe(ElementId(1), ScrollWindow::default());
    t.observe(
        ElementId(1),
        ScrollWindow::parse("start end", "start start").unwrap(),
    );
    assert_eq!(t.len(), 1);
    // Top at viewport top is the end of the new window.
    let p = t.sample(ElementId(1), element_at(0.0, 600.0)).unwrap();
    assert_eq!(p, Progress::END);
}

#[test]
fn invalid_viewport_is_config_error() {
    assert!(ScrollTracker::new(0.0).unwrap_err().is_config());
    assert!(ScrollTracker::new(f64::NAN).unwrap_err().is_config());

    let mut t = ScrollTracker::new(800.0).unwrap();
    assert!(t.set_viewport_height(-1.0).unwrap_err().is_config());
    assert_eq!(t.viewport_height(), 800.0);
}
