use thiserror::Error;

/// Failure modes recovered during a scan.
///
/// None of these propagate out of the scanner; they exist to classify
/// and format the diagnostics emitted while the batch continues.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read {path}: {source}")]
    UnreadableFile {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to walk scan root: {0}")]
    WalkFailed(walkdir::Error),
}
