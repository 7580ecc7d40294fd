pub mod controller;
pub mod meter;

pub use controller::{Capabilities, FormController};
pub use meter::visible_segments;
