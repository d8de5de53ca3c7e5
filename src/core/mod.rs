pub mod place_result;
pub mod request;

pub use place_result::{CenterPoint, Layer, PlaceResult};
pub use request::{FocusPoint, LatLon, RequestContext};
