//! Tests for compatibility table construction, symmetry, and lookup

#[cfg(test)]
mod tests {
    use wavegrid::CollapseError;
    use wavegrid::catalog::builtin;
    use wavegrid::catalog::table::{CompatibilityTable, NeighborRule};
    use wavegrid::catalog::tiles::Direction;

    fn rule(label: &str, allowed: [&[usize]; 4]) -> NeighborRule {
        NeighborRule {
            label: label.to_string(),
            allowed: [
                allowed[0].to_vec(),
                allowed[1].to_vec(),
                allowed[2].to_vec(),
                allowed[3].to_vec(),
            ],
        }
    }

    fn assert_symmetric(table: &CompatibilityTable) {
        for tile in table.tile_ids() {
            for direction in Direction::ALL {
                for neighbor in table.compatible_neighbors(tile, direction).iter() {
                    assert!(
                        table
                            .compatible_neighbors(neighbor, direction.opposite())
                            .contains(tile),
                        "{} permits {} to its {direction:?} but not vice versa",
                        table.label(tile),
                        table.label(neighbor),
                    );
                }
            }
        }
    }

    // Tests the empty catalog is rejected by both constructors
    // Verified by defaulting to a zero-tile table instead of erroring
    #[test]
    fn test_empty_catalog_is_rejected() {
        let from_lists = CompatibilityTable::from_neighbor_lists(&[], None).unwrap_err();
        assert!(matches!(
            from_lists,
            CollapseError::Configuration { parameter, .. } if parameter == "catalog"
        ));

        let from_patterns = CompatibilityTable::from_quadrant_patterns(&[]).unwrap_err();
        assert!(matches!(
            from_patterns,
            CollapseError::Configuration { parameter, .. } if parameter == "catalog"
        ));
    }

    // Tests malformed and duplicate quadrant patterns are rejected
    // Verified by letting a five-symbol pattern through
    #[test]
    fn test_malformed_patterns_are_rejected() {
        let wrong_length = vec!["lslsl".to_string()];
        assert!(CompatibilityTable::from_quadrant_patterns(&wrong_length).is_err());

        let duplicated = vec!["llss".to_string(), "llss".to_string()];
        let error = CompatibilityTable::from_quadrant_patterns(&duplicated).unwrap_err();
        assert!(matches!(
            error,
            CollapseError::Configuration { parameter, .. } if parameter == "pattern"
        ));
    }

    // Tests out-of-range neighbor indices and blank designations are rejected
    // Verified by silently clamping the offending index
    #[test]
    fn test_out_of_range_indices_are_rejected() {
        let rules = vec![rule("0", [&[1], &[], &[], &[]])];
        let error = CompatibilityTable::from_neighbor_lists(&rules, None).unwrap_err();
        assert!(matches!(
            error,
            CollapseError::Configuration { parameter, .. } if parameter == "neighbor"
        ));

        let valid = vec![rule("0", [&[0], &[0], &[0], &[0]])];
        let error = CompatibilityTable::from_neighbor_lists(&valid, Some(3)).unwrap_err();
        assert!(matches!(
            error,
            CollapseError::Configuration { parameter, .. } if parameter == "blank"
        ));
    }

    // Tests symmetry holds for both built-in encodings
    // Verified by dropping the reverse insertion during construction
    #[test]
    fn test_builtin_tables_are_symmetric() {
        let connector = CompatibilityTable::from_neighbor_lists(&builtin::connector_rules(), None)
            .expect("valid rules");
        assert_symmetric(&connector);

        let quadrant = CompatibilityTable::from_quadrant_patterns(&builtin::binary_patterns())
            .expect("valid patterns");
        assert_symmetric(&quadrant);
    }

    // Tests asymmetric list input is symmetrized by pairwise insertion
    // Verified by honoring the declared lists verbatim, which breaks this
    #[test]
    fn test_one_sided_declarations_become_mutual() {
        // Tile 0 declares 1 to its north; tile 1 declares nothing at all
        let rules = vec![
            rule("0", [&[1], &[], &[], &[]]),
            rule("1", [&[], &[], &[], &[]]),
        ];
        let table = CompatibilityTable::from_neighbor_lists(&rules, None).expect("valid rules");

        let tile_0 = table.tile_id(0).expect("tile exists");
        let tile_1 = table.tile_id(1).expect("tile exists");

        assert!(table.compatible_neighbors(tile_0, Direction::North).contains(tile_1));
        assert!(table.compatible_neighbors(tile_1, Direction::South).contains(tile_0));
        assert!(!table.compatible_neighbors(tile_1, Direction::North).contains(tile_0));
    }

    // Tests a designated blank is universal in every direction
    // Verified by restricting the blank to its declared lists
    #[test]
    fn test_designated_blank_is_universal() {
        let rules = vec![
            rule("blank", [&[], &[], &[], &[]]),
            rule("a", [&[1], &[1], &[], &[]]),
            rule("b", [&[], &[], &[2], &[2]]),
        ];
        let table = CompatibilityTable::from_neighbor_lists(&rules, Some(0)).expect("valid rules");

        let blank = table.blank().expect("blank was designated");
        assert_eq!(blank, table.tile_id(0).expect("tile exists"));

        for direction in Direction::ALL {
            assert_eq!(
                table.compatible_neighbors(blank, direction).count(),
                table.tile_count(),
                "blank must permit every tile to its {direction:?}"
            );
            for tile in table.tile_ids() {
                assert!(table.compatible_neighbors(tile, direction).contains(blank));
            }
        }
    }

    // Tests the all-wildcard pattern is detected as the quadrant blank
    // Verified by requiring an explicit designation for quadrant input
    #[test]
    fn test_wildcard_pattern_becomes_blank() {
        let patterns = vec![
            "llll".to_string(),
            "****".to_string(),
            "ssss".to_string(),
        ];
        let table = CompatibilityTable::from_quadrant_patterns(&patterns).expect("valid patterns");

        let blank = table.blank().expect("wildcard pattern present");
        assert_eq!(table.label(blank), "****");

        for direction in Direction::ALL {
            assert_eq!(
                table.compatible_neighbors(blank, direction).count(),
                table.tile_count()
            );
        }
    }

    // Tests lookup results iterate in ascending tile index order
    // Verified by reversing the iteration order of the backing set
    #[test]
    fn test_compatible_sets_are_ordered() {
        let table = CompatibilityTable::from_neighbor_lists(&builtin::connector_rules(), None)
            .expect("valid rules");

        for tile in table.tile_ids() {
            for direction in Direction::ALL {
                let neighbors = table.compatible_neighbors(tile, direction).to_vec();
                let mut sorted = neighbors.clone();
                sorted.sort_unstable();
                assert_eq!(neighbors, sorted);
            }
        }
    }

    // Tests derived quadrant adjacency against a hand-checked pair
    // Verified against the touching-quadrant rule applied on paper
    #[test]
    fn test_quadrant_adjacency_matches_rule() {
        let patterns = vec!["llss".to_string(), "ssll".to_string()];
        let table = CompatibilityTable::from_quadrant_patterns(&patterns).expect("valid patterns");

        let top = table.tile_id(0).expect("tile exists");
        let bottom = table.tile_id(1).expect("tile exists");

        // llss over ssll: the shared edge pairs s/s, so they stack vertically
        assert!(table.compatible_neighbors(top, Direction::South).contains(bottom));
        assert!(table.compatible_neighbors(bottom, Direction::North).contains(top));
        // Side by side their columns clash: l/s against s/l
        assert!(!table.compatible_neighbors(top, Direction::East).contains(bottom));
        assert!(!table.compatible_neighbors(top, Direction::West).contains(bottom));
    }

    // Tests labels and handles line up with construction order
    // Verified by shuffling label storage
    #[test]
    fn test_labels_follow_construction_order() {
        let table = CompatibilityTable::from_neighbor_lists(&builtin::connector_rules(), None)
            .expect("valid rules");

        assert_eq!(table.tile_count(), 7);
        for (index, tile) in table.tile_ids().enumerate() {
            assert_eq!(tile.index(), index);
            assert_eq!(table.label(tile), index.to_string());
        }
        assert!(table.tile_id(7).is_none());
        assert!(table.blank().is_none());
    }
}
