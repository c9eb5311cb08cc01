//! Tests for quadrant pattern parsing and the edge-matching rule

#[cfg(test)]
mod tests {
    use wavegrid::CollapseError;
    use wavegrid::catalog::quadrant::QuadrantPattern;
    use wavegrid::catalog::tiles::Direction;

    // Tests that patterns must be exactly four symbols
    // Verified by accepting a three-symbol pattern, which this rejects
    #[test]
    fn test_parse_rejects_wrong_length() {
        for malformed in ["", "lll", "lslsl"] {
            let error = QuadrantPattern::parse(malformed).unwrap_err();
            assert!(
                matches!(error, CollapseError::Configuration { parameter, .. } if parameter == "pattern")
            );
        }

        assert!(QuadrantPattern::parse("lsls").is_ok());
    }

    // Tests the touching-quadrant rule for a vertical pairing
    // Verified by matching against the wrong half of the neighbor
    #[test]
    fn test_admits_matches_touching_edge() {
        // NW NE SW SE: a north neighbor touches with its SW/SE pair
        let tile = QuadrantPattern::parse("lsxy").expect("valid pattern");
        let matching_north = QuadrantPattern::parse("zzls").expect("valid pattern");
        let clashing_north = QuadrantPattern::parse("zzsl").expect("valid pattern");

        assert!(tile.admits(&matching_north, Direction::North));
        assert!(!tile.admits(&clashing_north, Direction::North));
    }

    // Tests the touching-quadrant rule for a horizontal pairing
    // Verified by comparing against the neighbor's east column instead
    #[test]
    fn test_admits_matches_east_column() {
        // An east neighbor touches my NE/SE column with its NW/SW column
        let tile = QuadrantPattern::parse("xayb").expect("valid pattern");
        let matching_east = QuadrantPattern::parse("azbz").expect("valid pattern");
        let clashing_east = QuadrantPattern::parse("bzaz").expect("valid pattern");

        assert!(tile.admits(&matching_east, Direction::East));
        assert!(!tile.admits(&clashing_east, Direction::East));
    }

    // Tests admits is symmetric under direction reversal
    // Verified by breaking one direction's quadrant pairing
    #[test]
    fn test_admits_is_symmetric() {
        let patterns = ["llss", "slsl", "ssss", "ls*s", "****"];
        for a in patterns {
            for b in patterns {
                let pattern_a = QuadrantPattern::parse(a).expect("valid pattern");
                let pattern_b = QuadrantPattern::parse(b).expect("valid pattern");
                for direction in Direction::ALL {
                    assert_eq!(
                        pattern_a.admits(&pattern_b, direction),
                        pattern_b.admits(&pattern_a, direction.opposite()),
                        "asymmetry between {a} and {b} toward {direction:?}"
                    );
                }
            }
        }
    }

    // Tests the wildcard quadrant matches any symbol on either side
    // Verified by treating the wildcard as a literal symbol
    #[test]
    fn test_wildcard_matches_everything() {
        let blank = QuadrantPattern::parse("****").expect("valid pattern");
        assert!(blank.is_blank());

        for other in ["llll", "ssss", "lsls", "abcd"] {
            let pattern = QuadrantPattern::parse(other).expect("valid pattern");
            assert!(!pattern.is_blank());
            for direction in Direction::ALL {
                assert!(blank.admits(&pattern, direction));
                assert!(pattern.admits(&blank, direction));
            }
        }
    }
}
