use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// User supplied point used to bias ranking toward proximity.
pub type FocusPoint = LatLon;

const FOCUS_LAT_KEY: &str = "focus.point.lat";
const FOCUS_LON_KEY: &str = "focus.point.lon";

/// Cleaned request parameters handed to the comparator factory.
///
/// Only the focus point is read from it. Keys are looked up flat first
/// (`"focus.point.lat"`), then as a nested path (`focus -> point -> lat`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestContext {
    params: Map<String, Value>,
}

impl RequestContext {
    /// Empty context: no focus point
    pub fn new() -> Self {
        Self::default()
    }

    /// Context carrying a focus point
    pub fn with_focus(lat: f64, lon: f64) -> Self {
        let mut params = Map::new();
        params.insert(FOCUS_LAT_KEY.to_string(), Value::from(lat));
        params.insert(FOCUS_LON_KEY.to_string(), Value::from(lon));
        Self { params }
    }

    /// Wrap already-cleaned parameters
    pub fn from_params(params: Map<String, Value>) -> Self {
        Self { params }
    }

    /// Build from any JSON value; non-objects yield an empty context
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(params) => Self { params },
            other => {
                tracing::debug!("Request context is not an object ({}), ignoring it", other);
                Self::default()
            }
        }
    }

    /// Raw parameters
    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// Focus point, present only when both coordinates are numeric
    pub fn focus_point(&self) -> Option<FocusPoint> {
        let lat = self.lookup(FOCUS_LAT_KEY)?;
        let lon = self.lookup(FOCUS_LON_KEY)?;
        Some(LatLon::new(lat, lon))
    }

    fn lookup(&self, key: &str) -> Option<f64> {
        let value = self
            .params
            .get(key)
            .or_else(|| lookup_path(&self.params, key))?;

        match value.as_f64() {
            Some(n) => Some(n),
            None => {
                tracing::debug!("Ignoring non-numeric '{}' value: {}", key, value);
                None
            }
        }
    }
}

fn lookup_path<'a>(params: &'a Map<String, Value>, dotted: &str) -> Option<&'a Value> {
    let mut segments = dotted.split('.');
    let mut current = params.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
