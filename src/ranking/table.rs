//! Priority-ordered ranking table.
//!
//! A pair of results is resolved by the first band either of them belongs
//! to, so row order here is the ranking policy: a band always outranks every
//! band below it, whatever the population, popularity or distance involved.

use crate::core::{Layer, PlaceResult};
use crate::ranking::band::{
    Band, Field, Membership, SizeRange, TieBreak, LARGE, MEDIUM, MEGA, NON_POPULAR, POPULAR,
    SMALL, VERY_POPULAR,
};

const fn by_layer(name: &'static str, layer: Layer) -> Band {
    Band {
        name,
        membership: Membership::Layer { layer },
        strategy: TieBreak::PopulationDescending,
    }
}

const fn sized(name: &'static str, layer: Layer, field: Field, range: SizeRange) -> Band {
    Band {
        name,
        membership: Membership::Sized {
            layer,
            field,
            range,
        },
        strategy: TieBreak::DistanceThen(field),
    }
}

/// Size tier ranked by population descending only (distance is ignored).
const fn sized_by_population(name: &'static str, layer: Layer, range: SizeRange) -> Band {
    Band {
        name,
        membership: Membership::Sized {
            layer,
            field: Field::Population,
            range,
        },
        strategy: TieBreak::PopulationDescending,
    }
}

/// Ranking table, highest priority first. The last row matches everything.
pub static BAND_TABLE: [Band; 22] = [
    sized_by_population("mega_locality", Layer::Locality, MEGA),
    sized_by_population("mega_localadmin", Layer::Localadmin, MEGA),
    by_layer("continent", Layer::Continent),
    by_layer("country", Layer::Country),
    by_layer("dependency", Layer::Dependency),
    sized("large_locality", Layer::Locality, Field::Population, LARGE),
    sized("large_localadmin", Layer::Localadmin, Field::Population, LARGE),
    by_layer("macroregion", Layer::Macroregion),
    by_layer("region", Layer::Region),
    by_layer("borough", Layer::Borough),
    sized("very_popular_neighbourhood", Layer::Neighbourhood, Field::Popularity, VERY_POPULAR),
    sized("medium_locality", Layer::Locality, Field::Population, MEDIUM),
    sized("medium_localadmin", Layer::Localadmin, Field::Population, MEDIUM),
    by_layer("macrocounty", Layer::Macrocounty),
    by_layer("county", Layer::County),
    by_layer("macrohood", Layer::Macrohood),
    Band {
        name: "venue",
        membership: Membership::Layer { layer: Layer::Venue },
        strategy: TieBreak::ScoreDescending,
    },
    sized("popular_neighbourhood", Layer::Neighbourhood, Field::Popularity, POPULAR),
    sized("small_locality", Layer::Locality, Field::Population, SMALL),
    sized("small_localadmin", Layer::Localadmin, Field::Population, SMALL),
    sized("non_popular_neighbourhood", Layer::Neighbourhood, Field::Popularity, NON_POPULAR),
    Band {
        name: "fallback",
        membership: Membership::Any,
        strategy: TieBreak::ScoreDescending,
    },
];

/// Terminal row of [`BAND_TABLE`]
pub fn fallback_band() -> &'static Band {
    &BAND_TABLE[BAND_TABLE.len() - 1]
}

/// Highest-priority band either result belongs to
pub fn select_band(a: &PlaceResult, b: &PlaceResult) -> &'static Band {
    BAND_TABLE
        .iter()
        .find(|band| band.matches_either(a, b))
        .unwrap_or_else(fallback_band)
}

/// Band a single result belongs to
pub fn classify(result: &PlaceResult) -> &'static Band {
    BAND_TABLE
        .iter()
        .find(|band| band.contains(result))
        .unwrap_or_else(fallback_band)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Position of a band in the table, 0 being the highest priority
    fn priority_of(name: &str) -> Option<usize> {
        BAND_TABLE.iter().position(|band| band.name == name)
    }

    #[test]
    fn test_fallback_is_last_and_matches_everything() {
        let fallback = fallback_band();
        assert_eq!(fallback.name, "fallback");
        assert_eq!(fallback.membership, Membership::Any);
        assert!(BAND_TABLE[..BAND_TABLE.len() - 1]
            .iter()
            .all(|band| band.membership != Membership::Any));
    }

    #[test]
    fn test_band_names_are_unique() {
        for (i, band) in BAND_TABLE.iter().enumerate() {
            assert_eq!(priority_of(band.name), Some(i), "duplicate band {}", band.name);
        }
    }

    #[test]
    fn test_locality_and_localadmin_tiers_are_adjacent() {
        for tier in ["mega", "large", "medium", "small"] {
            let locality = priority_of(&format!("{}_locality", tier)).unwrap();
            let localadmin = priority_of(&format!("{}_localadmin", tier)).unwrap();
            assert_eq!(localadmin, locality + 1, "{} tier", tier);
        }
    }

    #[test]
    fn test_precedence_order() {
        let order = [
            "mega_locality",
            "continent",
            "country",
            "dependency",
            "large_locality",
            "macroregion",
            "region",
            "borough",
            "very_popular_neighbourhood",
            "medium_locality",
            "macrocounty",
            "county",
            "macrohood",
            "venue",
            "popular_neighbourhood",
            "small_locality",
            "non_popular_neighbourhood",
            "fallback",
        ];
        let positions: Vec<usize> = order.iter().map(|n| priority_of(n).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_classify() {
        let cases = [
            (PlaceResult::new("locality").with_population(4_000_000), "mega_locality"),
            (PlaceResult::new("localadmin").with_population(800_000), "large_localadmin"),
            (PlaceResult::new("locality"), "small_locality"),
            (PlaceResult::new("neighbourhood").with_popularity(50_000), "very_popular_neighbourhood"),
            (PlaceResult::new("neighbourhood").with_popularity(2_000), "popular_neighbourhood"),
            (PlaceResult::new("neighbourhood"), "non_popular_neighbourhood"),
            (PlaceResult::new("county"), "county"),
            (PlaceResult::new("venue"), "venue"),
            (PlaceResult::new("address"), "fallback"),
        ];
        for (result, expected) in cases {
            assert_eq!(classify(&result).name, expected, "{:?}", result.layer);
        }
    }

    #[test]
    fn test_select_band_uses_either_side() {
        let country = PlaceResult::new("country");
        let region = PlaceResult::new("region");
        assert_eq!(select_band(&region, &country).name, "country");
        assert_eq!(select_band(&country, &region).name, "country");
    }
}
