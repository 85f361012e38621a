pub mod geolocate;
pub mod resolver;

pub use geolocate::Locator;
pub use resolver::{nearest_province, Position};
