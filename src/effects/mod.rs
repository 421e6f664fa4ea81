pub mod counter;
pub mod crossfade;
pub mod hover;
pub mod text;
