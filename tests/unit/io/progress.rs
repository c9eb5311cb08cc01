//! Tests for the solve progress display lifecycle

#[cfg(test)]
mod tests {
    use wavegrid::io::progress::SolveProgress;

    // Tests a full attempt lifecycle runs without a terminal attached
    // Verified by driving start, updates, and finish in sequence
    #[test]
    fn test_attempt_lifecycle() {
        let mut progress = SolveProgress::new(true);
        progress.start_attempt(1, 3, 9);
        for _ in 0..9 {
            progress.record_collapse();
        }
        progress.finish();
    }

    // Tests abandoned attempts can be followed by fresh ones
    // Verified by restarting after a contradiction report
    #[test]
    fn test_abandon_then_restart() {
        let mut progress = SolveProgress::new(true);
        progress.start_attempt(1, 2, 4);
        progress.record_collapse();
        progress.abandon_attempt(1, 0);

        progress.start_attempt(2, 2, 4);
        for _ in 0..4 {
            progress.record_collapse();
        }
        progress.finish();
    }

    // Tests the disabled display is inert at every stage
    // Verified by rendering bars despite the quiet flag
    #[test]
    fn test_disabled_display_is_inert() {
        let mut progress = SolveProgress::new(false);
        progress.start_attempt(1, 1, 100);
        progress.record_collapse();
        progress.abandon_attempt(0, 0);
        progress.finish();
    }
}
