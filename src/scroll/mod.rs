pub mod tracker;
pub mod visibility;
pub mod window;
