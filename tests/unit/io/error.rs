//! Tests for error display, sources, and constructor helpers

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use wavegrid::CollapseError;
    use wavegrid::io::error::{configuration, invalid_state};

    // Tests each solver-facing variant renders its distinguishing details
    // Verified by swapping the coordinate order in the display impl
    #[test]
    fn test_display_carries_details() {
        let config = configuration("width", &0, &"grid dimensions must be positive");
        let message = config.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("positive"));

        let state = invalid_state(2, 5, "cell is already resolved");
        let message = state.to_string();
        assert!(message.contains("(2, 5)"));
        assert!(message.contains("already resolved"));

        let contradiction = CollapseError::Contradiction { x: 4, y: 1 };
        let message = contradiction.to_string();
        assert!(message.contains("(4, 1)"));
        assert!(message.contains("no remaining candidates"));
    }

    // Tests helper constructors build the matching variants
    // Verified by returning a different variant from a helper
    #[test]
    fn test_helpers_build_expected_variants() {
        assert!(matches!(
            configuration("catalog", &"0 tiles", &"at least one tile is required"),
            CollapseError::Configuration { parameter: "catalog", .. }
        ));
        assert!(matches!(
            invalid_state(1, 2, "test"),
            CollapseError::InvalidState { x: 1, y: 2, .. }
        ));
    }

    // Tests error sources chain for I/O variants and stop for core ones
    // Verified by dropping the source arm for file system errors
    #[test]
    fn test_source_chains_for_io_variants() {
        let file_system = CollapseError::FileSystem {
            path: PathBuf::from("somewhere"),
            operation: "create file",
            source: std::io::Error::other("denied"),
        };
        assert!(file_system.source().is_some());
        assert!(file_system.to_string().contains("create file"));

        let contradiction = CollapseError::Contradiction { x: 0, y: 0 };
        assert!(contradiction.source().is_none());
    }
}
