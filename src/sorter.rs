use std::sync::Arc;
use std::time::Instant;

use crate::config::SortOptions;
use crate::core::{PlaceResult, RequestContext};
use crate::error::Result;
use crate::geo::{GeoDistance, Haversine};
use crate::ranking::{classify, Band, ResultComparator};

/// Sorts result lists for search requests.
///
/// Holds the options and distance metric shared by every request; the
/// per-request state (focus point) lives in the comparator built for each
/// call.
pub struct ResultSorter {
    options: SortOptions,
    metric: Arc<dyn GeoDistance>,
}

impl Default for ResultSorter {
    fn default() -> Self {
        Self::new(SortOptions::default())
    }
}

impl ResultSorter {
    /// Create a sorter using haversine distance
    pub fn new(options: SortOptions) -> Self {
        Self {
            options,
            metric: Arc::new(Haversine),
        }
    }

    /// Replace the distance metric
    pub fn with_metric(mut self, metric: Arc<dyn GeoDistance>) -> Self {
        self.metric = metric;
        self
    }

    pub fn options(&self) -> &SortOptions {
        &self.options
    }

    /// Comparator for one request
    pub fn comparator(&self, ctx: &RequestContext) -> ResultComparator<&dyn GeoDistance> {
        ResultComparator::with_metric(ctx, self.metric.as_ref())
            .with_tie_policy(self.options.tie_policy)
    }

    /// Sort `results` in place, best first, then apply the configured limit
    pub fn sort(&self, results: &mut Vec<PlaceResult>, ctx: &RequestContext) {
        let start = Instant::now();
        let comparator = self.comparator(ctx);

        results.sort_by(|a, b| comparator.compare(a, b));

        if let Some(limit) = self.options.limit {
            results.truncate(limit);
        }

        tracing::debug!(
            results = results.len(),
            focus = ?comparator.focus_point(),
            metric = self.metric.name(),
            tie_policy = %self.options.tie_policy,
            latency_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Sorted results"
        );
    }

    /// Sorted copy of `results`
    pub fn sorted(&self, mut results: Vec<PlaceResult>, ctx: &RequestContext) -> Vec<PlaceResult> {
        self.sort(&mut results, ctx);
        results
    }

    /// Decode a JSON array of results, sort it and encode it back
    pub fn sort_json(&self, json: &str, ctx: &RequestContext) -> Result<String> {
        let results: Vec<PlaceResult> = serde_json::from_str(json)?;
        let sorted = self.sorted(results, ctx);
        Ok(serde_json::to_string(&sorted)?)
    }

    /// Band a single result classifies into
    pub fn rank_band(&self, result: &PlaceResult) -> &'static Band {
        classify(result)
    }
}
