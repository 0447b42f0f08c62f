mod labels;
mod manifest;
mod registry;
mod steps;

pub use labels::DockerfileExtractor;
pub use manifest::ManifestExtractor;
pub use registry::ExtractorRegistry;
pub use steps::{classify_steps, split_uses};

use crate::record::{MetadataRecord, StepDecomposition};

/// Core trait for turning raw source content into a metadata record.
///
/// The two implementations intentionally diverge in policy: the manifest
/// extractor sanitizes every field and substitutes the sentinel default,
/// while the label extractor stores raw values and leaves absent fields
/// unset.
pub trait Extractor: Send + Sync {
    /// Produce a record from one file's content.
    ///
    /// # Arguments
    /// * `path` - Scan-root-relative path, used for diagnostics
    /// * `content` - Raw file contents, already read
    ///
    /// # Returns
    /// `None` when the content is not an actionable source (e.g. a
    /// Dockerfile without the required labels). The manifest extractor
    /// always returns `Some`, degrading to defaults on parse failure.
    fn extract(&self, path: &str, content: &str) -> Option<Extraction>;
}

/// Output of one extraction: the record plus the step decomposition.
///
/// The step lists are empty for label-derived records.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub record: MetadataRecord,
    pub steps: StepDecomposition,
}
