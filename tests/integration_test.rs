use geocode_ranking::{
    build_comparator, PlaceResult, RequestContext, ResultComparator, ResultSorter, SortOptions,
    TiePolicy,
};
use serde_json::json;
use std::cmp::Ordering;

fn result(layer: &str) -> PlaceResult {
    PlaceResult::new(layer)
}

fn origin() -> RequestContext {
    RequestContext::from_value(json!({
        "focus.point.lat": 0,
        "focus.point.lon": 0,
    }))
}

/// One representative per band, highest priority first
fn results_in_order() -> Vec<PlaceResult> {
    vec![
        result("locality").with_population(4_000_000),
        result("localadmin").with_population(4_000_000),
        result("continent"),
        result("country"),
        result("dependency"),
        result("locality").with_population(800_000),
        result("localadmin").with_population(800_000),
        result("macroregion"),
        result("region"),
        result("borough"),
        result("neighbourhood").with_popularity(20_000),
        result("locality").with_population(250_000),
        result("localadmin").with_population(250_000),
        result("macrocounty"),
        result("county"),
        result("macrohood"),
        result("venue"),
        result("neighbourhood").with_popularity(2_000),
        result("locality").with_population(2_000),
        result("localadmin").with_population(2_000),
        result("neighbourhood").with_popularity(500),
    ]
}

const POPULATION_LAYERS: [&str; 9] = [
    "continent",
    "country",
    "dependency",
    "macroregion",
    "region",
    "macrocounty",
    "county",
    "borough",
    "macrohood",
];

#[test]
fn test_every_result_equals_itself() {
    for ctx in [RequestContext::new(), origin()] {
        let compare = build_comparator(&ctx);
        for r in results_in_order() {
            assert_eq!(compare(&r, &r), Ordering::Equal, "{:?}", r);
        }
    }
}

#[test]
fn test_each_result_outranks_all_results_below_it() {
    for ctx in [RequestContext::new(), origin()] {
        let compare = build_comparator(&ctx);
        let ordered = results_in_order();

        for (i, higher) in ordered.iter().enumerate() {
            for lower in &ordered[i + 1..] {
                assert_eq!(compare(higher, lower), Ordering::Less, "{:?} vs {:?}", higher, lower);
                assert_eq!(compare(lower, higher), Ordering::Greater, "{:?} vs {:?}", lower, higher);
            }
        }
    }
}

#[test]
fn test_band_precedence_beats_population() {
    let compare = build_comparator(&RequestContext::new());

    let empty_country = result("country");
    let huge_region = result("region").with_population(50_000_000);
    assert_eq!(compare(&empty_country, &huge_region), Ordering::Less);

    let mega_city = result("locality").with_population(4_000_000);
    let populous_country = result("country").with_population(1_000_000_000);
    assert_eq!(compare(&mega_city, &populous_country), Ordering::Less);
}

#[test]
fn test_population_layers_rank_by_population_descending() {
    let compare = build_comparator(&RequestContext::new());

    for layer in POPULATION_LAYERS {
        let higher = result(layer).with_population(2);
        let lower = result(layer).with_population(1);
        assert_eq!(compare(&higher, &lower), Ordering::Less, "{}", layer);
        assert_eq!(compare(&lower, &higher), Ordering::Greater, "{}", layer);
    }
}

#[test]
fn test_population_defaults_to_zero() {
    let compare = build_comparator(&RequestContext::new());

    for layer in POPULATION_LAYERS {
        let higher = result(layer).with_population(1);
        let missing = result(layer);
        assert_eq!(compare(&higher, &missing), Ordering::Less, "{}", layer);
        assert_eq!(compare(&missing, &higher), Ordering::Greater, "{}", layer);
    }
}

#[test]
fn test_localities_without_focus_rank_by_population() {
    let compare = build_comparator(&RequestContext::new());

    for population in [0, 5_000, 500_000, 4_000_000] {
        for layer in ["locality", "localadmin"] {
            let higher = result(layer).with_population(population + 1);
            let lower = result(layer).with_population(population);
            assert_eq!(compare(&higher, &lower), Ordering::Less, "{} {}", layer, population);
            assert_eq!(compare(&lower, &higher), Ordering::Greater, "{} {}", layer, population);
        }
    }
}

#[test]
fn test_localities_with_focus_rank_by_distance() {
    let compare = build_comparator(&origin());

    for population in [0, 5_000, 500_000] {
        for layer in ["locality", "localadmin"] {
            let closer = result(layer).with_population(population).with_center(1.0, 1.0);
            let farther = result(layer).with_population(population + 1).with_center(2.0, 2.0);
            assert_eq!(compare(&closer, &farther), Ordering::Less, "{} {}", layer, population);
            assert_eq!(compare(&farther, &closer), Ordering::Greater, "{} {}", layer, population);
        }
    }
}

#[test]
fn test_mega_localities_ignore_focus() {
    let compare = build_comparator(&origin());

    let closer = result("locality").with_population(4_000_000).with_center(1.0, 1.0);
    let bigger = result("locality").with_population(9_000_000).with_center(60.0, 60.0);
    assert_eq!(compare(&bigger, &closer), Ordering::Less);
}

#[test]
fn test_located_locality_beats_unlocated() {
    let compare = build_comparator(&origin());

    let located = result("locality").with_population(6_000).with_center(40.0, 40.0);
    let unlocated = result("locality").with_population(400_000);
    assert_eq!(compare(&located, &unlocated), Ordering::Less);
    assert_eq!(compare(&unlocated, &located), Ordering::Greater);
}

#[test]
fn test_partial_center_point_counts_as_missing() {
    let compare = build_comparator(&origin());

    let located = result("locality").with_population(6_000).with_center(40.0, 40.0);
    let half: PlaceResult = serde_json::from_value(json!({
        "layer": "locality",
        "population": 400_000,
        "center_point": { "lat": 0.1 }
    }))
    .unwrap();
    assert_eq!(compare(&located, &half), Ordering::Less);
}

#[test]
fn test_neighbourhoods_without_focus_rank_by_popularity() {
    let compare = build_comparator(&RequestContext::new());

    for popularity in [0, 1_000, 10_000] {
        let higher = result("neighbourhood").with_popularity(popularity + 1);
        let lower = result("neighbourhood").with_popularity(popularity);
        assert_eq!(compare(&higher, &lower), Ordering::Less, "{}", popularity);
        assert_eq!(compare(&lower, &higher), Ordering::Greater, "{}", popularity);
    }
}

#[test]
fn test_neighbourhoods_with_focus_rank_by_distance() {
    let compare = build_comparator(&origin());

    for popularity in [0, 1_000, 10_000] {
        let closer = result("neighbourhood").with_popularity(popularity).with_center(1.0, 1.0);
        let farther = result("neighbourhood")
            .with_popularity(popularity + 1)
            .with_center(2.0, 2.0);
        assert_eq!(compare(&closer, &farther), Ordering::Less, "{}", popularity);
        assert_eq!(compare(&farther, &closer), Ordering::Greater, "{}", popularity);
    }
}

#[test]
fn test_closer_neighbourhood_beats_more_popular_one() {
    let compare = build_comparator(&origin());

    let closer = result("neighbourhood").with_popularity(2_000).with_center(1.0, 1.0);
    let farther = result("neighbourhood").with_popularity(3_000).with_center(2.0, 2.0);
    assert_eq!(compare(&closer, &farther), Ordering::Less);
}

#[test]
fn test_venues_rank_by_score() {
    let compare = build_comparator(&RequestContext::new());

    let strong = result("venue").with_score(12.5);
    let weak = result("venue").with_score(3.0);
    assert_eq!(compare(&strong, &weak), Ordering::Less);
    assert_eq!(compare(&weak, &strong), Ordering::Greater);
}

#[test]
fn test_fallback_never_ties_distinct_records_by_default() {
    let compare = build_comparator(&RequestContext::new());

    let a = result("address").with_score(1.0);
    let b = result("address").with_score(1.0);
    let nan = result("street").with_score(f64::NAN);

    assert_eq!(compare(&a, &b), Ordering::Less);
    assert_eq!(compare(&b, &a), Ordering::Less);
    assert_eq!(compare(&a, &nan), Ordering::Less);
    assert_eq!(compare(&nan, &a), Ordering::Less);
    assert_eq!(compare(&nan, &nan), Ordering::Equal);
}

#[test]
fn test_equal_tie_policy_relaxes_fallback() {
    let comparator =
        ResultComparator::new(&RequestContext::new()).with_tie_policy(TiePolicy::Equal);

    let a = result("address").with_score(1.0);
    let b = result("address").with_score(1.0);
    assert_eq!(comparator.compare(&a, &b), Ordering::Equal);
}

#[test]
fn test_sorter_orders_shuffled_results() {
    let mut shuffled = results_in_order();
    shuffled.reverse();
    shuffled.swap(3, 15);
    shuffled.swap(0, 9);

    let sorter = ResultSorter::new(SortOptions::default());
    let sorted = sorter.sorted(shuffled, &RequestContext::new());
    assert_eq!(sorted, results_in_order());
}

#[test]
fn test_sorter_handles_json_round_trip() {
    let input = json!([
        { "layer": "venue", "name": "Cafe", "_score": 4.0 },
        { "layer": "address", "name": "1 Main St", "_score": 9.0 },
        { "layer": "country", "name": "Nowhere" },
        { "layer": "neighbourhood", "name": "Downtown", "popularity": 1500,
          "centerPoint": { "lat": 0.5, "lon": 0.5 } },
    ]);

    let sorter = ResultSorter::default();
    let out = sorter.sort_json(&input.to_string(), &origin()).unwrap();
    let names: Vec<String> = serde_json::from_str::<Vec<serde_json::Value>>(&out)
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(names, vec!["Nowhere", "Cafe", "Downtown", "1 Main St"]);
}

#[test]
fn test_sorter_degrades_malformed_numbers() {
    let input = json!([
        { "layer": "locality", "population": "many" },
        { "layer": "venue", "score": "NaN" },
    ]);

    let sorter = ResultSorter::default();
    let out = sorter.sort_json(&input.to_string(), &RequestContext::new()).unwrap();
    let layers: Vec<String> = serde_json::from_str::<Vec<serde_json::Value>>(&out)
        .unwrap()
        .iter()
        .map(|v| v["layer"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(layers, vec!["venue", "locality"]);
}

#[test]
fn test_comparator_is_shareable_across_threads() {
    let compare = std::sync::Arc::new(build_comparator(&origin()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let compare = compare.clone();
            std::thread::spawn(move || {
                let mut results = results_in_order();
                results.reverse();
                results.sort_by(|a, b| (*compare)(a, b));
                results
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), results_in_order());
    }
}
