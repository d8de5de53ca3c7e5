use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deserialize a population/popularity count from an int, float or string.
///
/// Negative, non-finite and unparseable values are treated as missing.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CountValue {
        Int(u64),
        Signed(i64),
        Float(f64),
        String(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<CountValue>::deserialize(deserializer)? {
        Some(CountValue::Int(n)) => Some(n),
        Some(CountValue::Signed(n)) => u64::try_from(n).ok(),
        Some(CountValue::Float(f)) if f.is_finite() && f >= 0.0 => Some(f as u64),
        Some(CountValue::String(s)) => s.trim().parse::<u64>().ok(),
        Some(CountValue::Float(_)) | Some(CountValue::Other(_)) | None => None,
    })
}

/// Deserialize a relevance score from a number or a numeric string.
///
/// `"NaN"` decodes to NaN; anything else that is not a number is missing.
fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScoreValue {
        Number(f64),
        String(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<ScoreValue>::deserialize(deserializer)? {
        Some(ScoreValue::Number(score)) => Some(score),
        Some(ScoreValue::String(s)) => s.trim().parse::<f64>().ok(),
        Some(ScoreValue::Other(_)) | None => None,
    })
}

/// Administrative or physical type of a geocoding result.
///
/// Tags the ranking table does not know about are kept verbatim in
/// [`Layer::Other`] so records survive a decode/encode cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Layer {
    Continent,
    Country,
    Dependency,
    Macroregion,
    Region,
    Macrocounty,
    County,
    Borough,
    Localadmin,
    Locality,
    Macrohood,
    Neighbourhood,
    Venue,
    Address,
    Street,
    Postalcode,
    Other(String),
}

impl Layer {
    pub fn as_str(&self) -> &str {
        match self {
            Layer::Continent => "continent",
            Layer::Country => "country",
            Layer::Dependency => "dependency",
            Layer::Macroregion => "macroregion",
            Layer::Region => "region",
            Layer::Macrocounty => "macrocounty",
            Layer::County => "county",
            Layer::Borough => "borough",
            Layer::Localadmin => "localadmin",
            Layer::Locality => "locality",
            Layer::Macrohood => "macrohood",
            Layer::Neighbourhood => "neighbourhood",
            Layer::Venue => "venue",
            Layer::Address => "address",
            Layer::Street => "street",
            Layer::Postalcode => "postalcode",
            Layer::Other(tag) => tag,
        }
    }
}

impl From<&str> for Layer {
    fn from(tag: &str) -> Self {
        match tag {
            "continent" => Layer::Continent,
            "country" => Layer::Country,
            "dependency" => Layer::Dependency,
            "macroregion" => Layer::Macroregion,
            "region" => Layer::Region,
            "macrocounty" => Layer::Macrocounty,
            "county" => Layer::County,
            "borough" => Layer::Borough,
            "localadmin" => Layer::Localadmin,
            "locality" => Layer::Locality,
            "macrohood" => Layer::Macrohood,
            "neighbourhood" => Layer::Neighbourhood,
            "venue" => Layer::Venue,
            "address" => Layer::Address,
            "street" => Layer::Street,
            "postalcode" => Layer::Postalcode,
            other => Layer::Other(other.to_string()),
        }
    }
}

impl From<String> for Layer {
    fn from(tag: String) -> Self {
        match Layer::from(tag.as_str()) {
            Layer::Other(_) => Layer::Other(tag),
            known => known,
        }
    }
}

impl From<Layer> for String {
    fn from(layer: Layer) -> Self {
        match layer {
            Layer::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Center point of a result. Either coordinate may be missing upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CenterPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// A single geocoding result as handed over by the retrieval stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceResult {
    /// Layer tag (country, locality, venue, ...)
    pub layer: Layer,

    /// Population, treated as 0 when absent
    #[serde(default, deserialize_with = "deserialize_count")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,

    /// Popularity, treated as 0 when absent
    #[serde(default, deserialize_with = "deserialize_count")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u64>,

    /// Center coordinate
    #[serde(default, alias = "centerPoint", skip_serializing_if = "Option::is_none")]
    pub center_point: Option<CenterPoint>,

    /// Relevance score from the retrieval stage; may be NaN
    #[serde(default, alias = "_score", deserialize_with = "deserialize_score")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Every other field of the record, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PlaceResult {
    /// Create a result with only the layer set
    pub fn new(layer: impl Into<Layer>) -> Self {
        Self {
            layer: layer.into(),
            population: None,
            popularity: None,
            center_point: None,
            score: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_popularity(mut self, popularity: u64) -> Self {
        self.popularity = Some(popularity);
        self
    }

    /// Set both center coordinates
    pub fn with_center(mut self, lat: f64, lon: f64) -> Self {
        self.center_point = Some(CenterPoint {
            lat: Some(lat),
            lon: Some(lon),
        });
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Population with the missing value defaulted to 0
    pub fn population_or_zero(&self) -> u64 {
        self.population.unwrap_or(0)
    }

    /// Popularity with the missing value defaulted to 0
    pub fn popularity_or_zero(&self) -> u64 {
        self.popularity.unwrap_or(0)
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        match self.extra.get("name").and_then(|v| v.as_str()) {
            Some(name) => format!("{} ({})", name, self.layer),
            None => self.layer.to_string(),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
