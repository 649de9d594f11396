//! The search and province filter pipeline.

use crate::record::Municipality;
use crate::regions::RegionSelection;

/// Apply the search term and region selection to the loaded dataset.
///
/// Both predicates are conjunctive. The search term matches
/// case-insensitively against the municipality name (Unicode lowercase fold
/// on both sides, so `č` matches `Č`); the region filter is an exact match
/// on the province field. The dataset's order is preserved: the result is
/// always a subsequence of the input, and equal inputs yield equal outputs.
pub fn filter_municipalities<'a>(
    dataset: &'a [Municipality],
    search_term: &str,
    regions: &RegionSelection,
) -> Vec<&'a Municipality> {
    let needle = search_term.to_lowercase();
    dataset
        .iter()
        .filter(|m| needle.is_empty() || m.name.to_lowercase().contains(&needle))
        .filter(|m| regions.is_empty() || regions.contains(&m.province))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Municipality> {
        // Pre-sorted, as the loader guarantees.
        vec![
            Municipality {
                name: "Ajdovščina".to_string(),
                province: "Primorska".to_string(),
                ..Default::default()
            },
            Municipality {
                name: "Bled".to_string(),
                province: "Gorenjska".to_string(),
                ..Default::default()
            },
            Municipality {
                name: "Bovec".to_string(),
                province: "Primorska".to_string(),
                ..Default::default()
            },
        ]
    }

    fn names(result: &[&Municipality]) -> Vec<String> {
        result.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn test_no_filters_is_identity() {
        let dataset = sample();
        let result = filter_municipalities(&dataset, "", &RegionSelection::new());
        assert_eq!(names(&result), vec!["Ajdovščina", "Bled", "Bovec"]);
    }

    #[test]
    fn test_search_matches_case_insensitive_substring() {
        let dataset = sample();
        let result = filter_municipalities(&dataset, "b", &RegionSelection::new());
        assert_eq!(names(&result), vec!["Bled", "Bovec"]);
    }

    #[test]
    fn test_search_folds_diacritics_by_case() {
        let dataset = sample();
        let result = filter_municipalities(&dataset, "ajd", &RegionSelection::new());
        assert_eq!(names(&result), vec!["Ajdovščina"]);

        // Uppercase caron in the needle still matches the lowercase name.
        let result = filter_municipalities(&dataset, "Šč", &RegionSelection::new());
        assert_eq!(names(&result), vec!["Ajdovščina"]);
    }

    #[test]
    fn test_region_filter_matches_province_exactly() {
        let dataset = sample();
        let mut regions = RegionSelection::new();
        regions.toggle("Primorska");
        let result = filter_municipalities(&dataset, "", &regions);
        assert_eq!(names(&result), vec!["Ajdovščina", "Bovec"]);
    }

    #[test]
    fn test_filters_compose_conjunctively() {
        let dataset = sample();
        let mut regions = RegionSelection::new();
        regions.toggle("Primorska");

        let both = filter_municipalities(&dataset, "b", &regions);
        assert_eq!(names(&both), vec!["Bovec"]);

        // The combined result is a subset of each single-filter result.
        let search_only = filter_municipalities(&dataset, "b", &RegionSelection::new());
        let region_only = filter_municipalities(&dataset, "", &regions);
        for m in &both {
            assert!(search_only.contains(m));
            assert!(region_only.contains(m));
        }
    }

    #[test]
    fn test_clearing_regions_restores_search_only_result() {
        let dataset = sample();
        let mut regions = RegionSelection::new();
        regions.toggle("Primorska");
        regions.clear();
        let cleared = filter_municipalities(&dataset, "b", &regions);
        let search_only = filter_municipalities(&dataset, "b", &RegionSelection::new());
        assert_eq!(names(&cleared), names(&search_only));
    }

    #[test]
    fn test_filter_is_idempotent_for_equal_inputs() {
        let dataset = sample();
        let mut regions = RegionSelection::new();
        regions.toggle("Gorenjska");
        let first = names(&filter_municipalities(&dataset, "b", &regions));
        let second = names(&filter_municipalities(&dataset, "b", &regions));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unmatched_filters_yield_empty_subsequence() {
        let dataset = sample();
        let result = filter_municipalities(&dataset, "xyz", &RegionSelection::new());
        assert!(result.is_empty());

        let mut regions = RegionSelection::new();
        regions.toggle("Prekmurje");
        let result = filter_municipalities(&dataset, "", &regions);
        assert!(result.is_empty());
    }
}
