use serde::Serialize;
use std::fmt;

use crate::core::{Layer, PlaceResult};

/// Numeric field a sized band is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Population,
    Popularity,
}

impl Field {
    /// Field value of `result`, missing treated as 0
    pub fn value_of(self, result: &PlaceResult) -> u64 {
        match self {
            Field::Population => result.population_or_zero(),
            Field::Popularity => result.popularity_or_zero(),
        }
    }
}

/// Half-open range `[low, high)`; `high == None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeRange {
    pub low: u64,
    pub high: Option<u64>,
}

impl SizeRange {
    pub const fn between(low: u64, high: u64) -> Self {
        Self {
            low,
            high: Some(high),
        }
    }

    pub const fn at_least(low: u64) -> Self {
        Self { low, high: None }
    }

    pub fn contains(&self, value: u64) -> bool {
        value >= self.low && self.high.map_or(true, |high| value < high)
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) => write!(f, "[{}, {})", self.low, high),
            None => write!(f, "[{}, inf)", self.low),
        }
    }
}

pub const MEGA: SizeRange = SizeRange::at_least(4_000_000);
pub const LARGE: SizeRange = SizeRange::between(500_000, 4_000_000);
pub const MEDIUM: SizeRange = SizeRange::between(5_000, 500_000);
pub const SMALL: SizeRange = SizeRange::between(0, 5_000);

pub const VERY_POPULAR: SizeRange = SizeRange::at_least(10_000);
pub const POPULAR: SizeRange = SizeRange::between(1_000, 10_000);
pub const NON_POPULAR: SizeRange = SizeRange::between(0, 1_000);

/// Membership test of a band.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Membership {
    /// Layer equality only
    Layer { layer: Layer },
    /// Layer equality plus `field` within `range`
    Sized {
        layer: Layer,
        field: Field,
        range: SizeRange,
    },
    /// Matches every result
    Any,
}

impl Membership {
    pub fn contains(&self, result: &PlaceResult) -> bool {
        match self {
            Membership::Layer { layer } => result.layer == *layer,
            Membership::Sized {
                layer,
                field,
                range,
            } => result.layer == *layer && range.contains(field.value_of(result)),
            Membership::Any => true,
        }
    }
}

/// How two results of the same band are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Higher population first
    PopulationDescending,
    /// Closer to the focus point first, else higher `field` first
    DistanceThen(Field),
    /// Higher relevance score first
    ScoreDescending,
}

/// One row of the ranking table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    pub name: &'static str,
    pub membership: Membership,
    pub strategy: TieBreak,
}

impl Band {
    pub fn contains(&self, result: &PlaceResult) -> bool {
        self.membership.contains(result)
    }

    /// Whether either side of a pair belongs to this band
    pub fn matches_either(&self, a: &PlaceResult, b: &PlaceResult) -> bool {
        self.contains(a) || self.contains(b)
    }
}
