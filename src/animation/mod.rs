pub mod channels;
pub mod curve;
pub mod ease;
pub mod lerp;
