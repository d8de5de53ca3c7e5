use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::{FocusPoint, PlaceResult};
use crate::error::RankingError;
use crate::geo::{center_of, GeoDistance};
use crate::ranking::band::{Field, Membership};

/// What a score comparison returns when it cannot tell two records apart
/// (equal scores, or a NaN/missing score on either side).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TiePolicy {
    /// The first argument wins. Never `Equal` for two distinct records, which
    /// keeps the relative order of ties fixed under an unstable sort.
    #[default]
    FirstWins,
    /// Ties are `Equal`; use with a stable sort.
    Equal,
}

impl TiePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TiePolicy::FirstWins => "first-wins",
            TiePolicy::Equal => "equal",
        }
    }
}

impl FromStr for TiePolicy {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-wins" | "first_wins" | "firstwins" => Ok(TiePolicy::FirstWins),
            "equal" | "stable" => Ok(TiePolicy::Equal),
            other => Err(RankingError::UnknownTiePolicy(other.to_string())),
        }
    }
}

impl fmt::Display for TiePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side that belongs to the band wins outright; `None` when both belong.
fn membership_winner(membership: &Membership, a: &PlaceResult, b: &PlaceResult) -> Option<Ordering> {
    match (membership.contains(a), membership.contains(b)) {
        (true, true) => None,
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        // the band was selected because one side matched
        (false, false) => Some(Ordering::Equal),
    }
}

fn field_descending(field: Field, a: &PlaceResult, b: &PlaceResult) -> Ordering {
    field.value_of(b).cmp(&field.value_of(a))
}

/// Higher population first; missing population counts as 0.
pub fn population_descending(membership: &Membership, a: &PlaceResult, b: &PlaceResult) -> Ordering {
    membership_winner(membership, a, b)
        .unwrap_or_else(|| field_descending(Field::Population, a, b))
}

/// Closer to the focus point first.
///
/// Without a focus point, or when neither side has a usable center, falls
/// back to `field` descending. A side with a center beats one without.
pub fn distance_then_field<D: GeoDistance + ?Sized>(
    membership: &Membership,
    field: Field,
    focus: Option<FocusPoint>,
    metric: &D,
    a: &PlaceResult,
    b: &PlaceResult,
) -> Ordering {
    if let Some(winner) = membership_winner(membership, a, b) {
        return winner;
    }

    let Some(focus) = focus else {
        return field_descending(field, a, b);
    };

    match (center_of(a), center_of(b)) {
        (Some(center_a), Some(center_b)) => {
            let distance_a = metric.distance(focus, center_a);
            let distance_b = metric.distance(focus, center_b);
            distance_a
                .partial_cmp(&distance_b)
                .unwrap_or(Ordering::Equal)
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => field_descending(field, a, b),
    }
}

fn usable_score(result: &PlaceResult) -> Option<f64> {
    result.score.filter(|score| !score.is_nan())
}

/// Higher relevance score first.
///
/// A record compared with itself is `Equal`. Otherwise ties and unusable
/// (missing or NaN) scores never reach `<`/`>`. Under
/// [`TiePolicy::FirstWins`] they order the first argument first; under
/// [`TiePolicy::Equal`] unusable scores sort after usable ones and
/// remaining ties are `Equal`.
pub fn score_descending(
    membership: &Membership,
    a: &PlaceResult,
    b: &PlaceResult,
    ties: TiePolicy,
) -> Ordering {
    if std::ptr::eq(a, b) {
        return Ordering::Equal;
    }

    if let Some(winner) = membership_winner(membership, a, b) {
        return winner;
    }

    match (usable_score(a), usable_score(b)) {
        (Some(score_a), Some(score_b)) if score_a != score_b => {
            score_b.partial_cmp(&score_a).unwrap_or(Ordering::Equal)
        }
        (score_a, score_b) => match ties {
            TiePolicy::FirstWins => Ordering::Less,
            TiePolicy::Equal => match (score_a, score_b) {
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                _ => Ordering::Equal,
            },
        },
    }
}
