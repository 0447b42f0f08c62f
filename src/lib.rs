// Public API exports
pub mod extract;
pub mod record;
pub mod sanitize;
pub mod scan;

// Re-export main types for convenience
pub use record::{MetadataRecord, ReferencedAction, StepDecomposition, UNDEFINED};
pub use sanitize::TextSanitizer;

pub use extract::{
    classify_steps, split_uses, DockerfileExtractor, Extraction, Extractor, ExtractorRegistry,
    ManifestExtractor,
};

pub use scan::{ManifestAction, ScanError, ScanReport, Scanner};
