use super::structure::StructureMap;

/// Helix statistics derived from the secondary-structure assignment of one file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixStats {
    /// Length of the longest run of consecutive alpha-helix residue numbers.
    pub longest_helix: usize,
    /// Fraction of residues in an alpha helix, or `None` when the file had no residues.
    pub helical_content: Option<f64>,
    pub helix_residues: usize,
    pub total_residues: usize,
}

/// Fraction of all residues that are assigned to an alpha helix.
///
/// Returns `None` for an empty map, where the fraction is undefined.
pub fn helical_content(map: &StructureMap) -> Option<f64> {
    let total = map.total_residues();
    if total == 0 {
        return None;
    }
    Some(map.helix_residues().len() as f64 / total as f64)
}

/// Length of the longest stretch of consecutive alpha-helix residue numbers.
///
/// The residue list is sorted first, so the result does not depend on record order.
pub fn longest_helix_run(map: &StructureMap) -> usize {
    longest_consecutive_run(map.helix_residues())
}

pub(crate) fn longest_consecutive_run(residues: &[i32]) -> usize {
    if residues.len() < 2 {
        return residues.len();
    }

    let mut sorted = residues.to_vec();
    sorted.sort_unstable();

    let mut longest = 1;
    let mut current = 1;
    for pair in sorted.windows(2) {
        if pair[0].checked_add(1) == Some(pair[1]) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}

pub fn analyze(map: &StructureMap) -> HelixStats {
    HelixStats {
        longest_helix: longest_helix_run(map),
        helical_content: helical_content(map),
        helix_residues: map.helix_residues().len(),
        total_residues: map.total_residues(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::structure::SecondaryStructure;

    fn map_with(helix: &[i32], coil: &[i32]) -> StructureMap {
        let mut map = StructureMap::new();
        for &r in helix {
            map.push(SecondaryStructure::AlphaHelix, r);
        }
        for &r in coil {
            map.push(SecondaryStructure::Coil, r);
        }
        map
    }

    #[test]
    fn longest_run_finds_first_maximal_stretch() {
        assert_eq!(longest_consecutive_run(&[3, 4, 5, 9, 10]), 3);
    }

    #[test]
    fn longest_run_handles_empty_and_single_residue() {
        assert_eq!(longest_consecutive_run(&[]), 0);
        assert_eq!(longest_consecutive_run(&[7]), 1);
    }

    #[test]
    fn longest_run_is_invariant_to_input_order() {
        assert_eq!(
            longest_consecutive_run(&[5, 4, 3]),
            longest_consecutive_run(&[3, 4, 5])
        );
        assert_eq!(longest_consecutive_run(&[10, 3, 9, 5, 4]), 3);
    }

    #[test]
    fn longest_run_counts_trailing_stretch() {
        assert_eq!(longest_consecutive_run(&[1, 2, 3, 4, 5, 6]), 6);
        assert_eq!(longest_consecutive_run(&[1, 5, 6, 7, 8]), 4);
    }

    #[test]
    fn longest_run_resets_on_gap_and_on_repeated_number() {
        assert_eq!(longest_consecutive_run(&[1, 2, 4, 5]), 2);
        assert_eq!(longest_consecutive_run(&[1, 2, 2, 3]), 2);
    }

    #[test]
    fn longest_run_handles_negative_residue_numbers() {
        assert_eq!(longest_consecutive_run(&[-2, -1, 0, 1]), 4);
    }

    #[test]
    fn helical_content_is_helix_over_total() {
        let map = map_with(&[10, 11, 12], &(1..=17).collect::<Vec<_>>());
        let content = helical_content(&map).unwrap();
        assert!((content - 0.15).abs() < 1e-12);
    }

    #[test]
    fn helical_content_stays_within_unit_interval() {
        assert_eq!(helical_content(&map_with(&[1, 2], &[])), Some(1.0));
        assert_eq!(helical_content(&map_with(&[], &[1, 2])), Some(0.0));
    }

    #[test]
    fn helical_content_of_empty_map_is_not_available() {
        assert_eq!(helical_content(&StructureMap::new()), None);
    }

    #[test]
    fn analyze_bundles_all_statistics() {
        let map = map_with(&[1, 2, 3, 4, 5, 6], &[7, 8, 9, 10]);
        let stats = analyze(&map);
        assert_eq!(stats.longest_helix, 6);
        assert_eq!(stats.helix_residues, 6);
        assert_eq!(stats.total_residues, 10);
        assert!((stats.helical_content.unwrap() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn analyze_empty_map_reports_zero_helix_and_no_content() {
        let stats = analyze(&StructureMap::new());
        assert_eq!(stats.longest_helix, 0);
        assert_eq!(stats.helical_content, None);
    }
}
