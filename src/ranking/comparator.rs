use std::cmp::Ordering;

use crate::core::{FocusPoint, PlaceResult, RequestContext};
use crate::geo::{GeoDistance, Haversine};
use crate::ranking::band::TieBreak;
use crate::ranking::strategy::{
    distance_then_field, population_descending, score_descending, TiePolicy,
};
use crate::ranking::table::select_band;

/// Pairwise ordering of geocoding results for one request.
///
/// The focus point is read from the request once, at construction. Each
/// comparison walks the band table and applies the strategy of the first
/// band either result belongs to.
#[derive(Debug, Clone)]
pub struct ResultComparator<D = Haversine> {
    focus: Option<FocusPoint>,
    ties: TiePolicy,
    metric: D,
}

impl ResultComparator<Haversine> {
    /// Comparator using haversine distance and [`TiePolicy::FirstWins`]
    pub fn new(ctx: &RequestContext) -> Self {
        Self::with_metric(ctx, Haversine)
    }
}

impl<D: GeoDistance> ResultComparator<D> {
    /// Comparator using a custom distance metric
    pub fn with_metric(ctx: &RequestContext, metric: D) -> Self {
        Self {
            focus: ctx.focus_point(),
            ties: TiePolicy::default(),
            metric,
        }
    }

    /// Set the policy for score ties in the venue and fallback bands
    pub fn with_tie_policy(mut self, ties: TiePolicy) -> Self {
        self.ties = ties;
        self
    }

    pub fn focus_point(&self) -> Option<FocusPoint> {
        self.focus
    }

    pub fn tie_policy(&self) -> TiePolicy {
        self.ties
    }

    /// `Less` when `a` should sort before `b`
    pub fn compare(&self, a: &PlaceResult, b: &PlaceResult) -> Ordering {
        let band = select_band(a, b);
        tracing::trace!(band = band.name, "resolving pair");

        match band.strategy {
            TieBreak::PopulationDescending => population_descending(&band.membership, a, b),
            TieBreak::DistanceThen(field) => {
                distance_then_field(&band.membership, field, self.focus, &self.metric, a, b)
            }
            TieBreak::ScoreDescending => score_descending(&band.membership, a, b, self.ties),
        }
    }
}

/// Build the comparator closure for a request.
///
/// ```
/// use geocode_ranking::{build_comparator, PlaceResult, RequestContext};
///
/// let mut results = vec![
///     PlaceResult::new("neighbourhood"),
///     PlaceResult::new("country"),
/// ];
/// let compare = build_comparator(&RequestContext::new());
/// results.sort_by(|a, b| compare(a, b));
/// assert_eq!(results[0].layer.as_str(), "country");
/// ```
pub fn build_comparator(
    ctx: &RequestContext,
) -> impl Fn(&PlaceResult, &PlaceResult) -> Ordering + Send + Sync {
    let comparator = ResultComparator::new(ctx);
    move |a, b| comparator.compare(a, b)
}
