//! Tests for progress tracking across puzzle batches

#[cfg(test)]
mod tests {
    use scramblesquares::algorithm::solver::SearchStats;
    use scramblesquares::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use scramblesquares::io::progress::ProgressManager;
    use std::path::Path;
    use std::time::Duration;

    fn stats() -> SearchStats {
        SearchStats {
            candidates_tried: 40,
            placements: 12,
            backtracks: 3,
        }
    }

    // Tests a single file lifecycle
    // Verified by skipping state storage on start
    #[test]
    fn test_single_file_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);

        pm.start_file(0, Path::new("planes.txt"));
        assert_eq!(pm.tracked_files(), 1);

        pm.complete_file(0, true, stats(), Duration::from_millis(3));
        assert_eq!(pm.tracked_files(), 1);
        pm.finish();
    }

    // Tests default construction behaves like new
    // Verified by creating different initial states
    #[test]
    fn test_progress_manager_default() {
        let mut pm = ProgressManager::default();
        assert_eq!(pm.tracked_files(), 0);

        pm.initialize(0);
        pm.finish();
        assert_eq!(pm.tracked_files(), 0);
    }

    // Tests out-of-order starts grow the state table
    // Verified by breaking resize logic
    #[test]
    fn test_sparse_indices() {
        let mut pm = ProgressManager::new();
        pm.initialize(3);

        pm.start_file(2, Path::new("third.txt"));
        assert_eq!(pm.tracked_files(), 1);

        pm.start_file(0, Path::new("first.txt"));
        pm.complete_file(0, false, SearchStats::default(), Duration::ZERO);
        pm.complete_file(2, true, stats(), Duration::from_millis(1));
        assert_eq!(pm.tracked_files(), 2);
        pm.finish();
    }

    // Tests batch mode over the individual line limit
    // Verified by changing batch mode threshold
    #[test]
    fn test_many_files_batch_mode() {
        let mut pm = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS + 5;
        pm.initialize(file_count);

        for i in 0..file_count {
            pm.start_file(i, Path::new(&format!("puzzle{i}.txt")));
            pm.complete_file(i, i % 2 == 0, stats(), Duration::from_millis(1));
        }

        assert_eq!(pm.tracked_files(), file_count);
        pm.finish();
    }

    // Tests completing an unknown index is ignored
    // Verified by indexing the state table directly
    #[test]
    fn test_complete_without_start() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.complete_file(4, true, stats(), Duration::ZERO);
        assert_eq!(pm.tracked_files(), 0);
        pm.finish();
    }
}
