use super::{DockerfileExtractor, Extractor, ManifestExtractor};
use std::collections::HashMap;
use std::path::Path;

/// Dynamic dispatch table mapping candidate file names to extractors.
pub struct ExtractorRegistry {
    /// Lowercased file name -> Extractor mapping
    map: HashMap<String, Box<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registry with the two built-in extraction paths: YAML manifests
    /// and label-based Dockerfiles.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("action.yml", ManifestExtractor);
        registry.register("action.yaml", ManifestExtractor);
        registry.register("dockerfile", DockerfileExtractor);
        registry
    }

    /// Register an extractor for a specific file name (matched
    /// case-insensitively).
    pub fn register(&mut self, file_name: impl Into<String>, extractor: impl Extractor + 'static) {
        self.map
            .insert(file_name.into().to_lowercase(), Box::new(extractor));
    }

    /// Select the extractor for a given path, or `None` when the file
    /// is not a candidate for extraction at all.
    pub fn select(&self, path: &str) -> Option<&dyn Extractor> {
        let file_name = Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.to_lowercase())?;

        self.map.get(&file_name).map(|extractor| &**extractor)
    }

    /// Number of registered extractors.
    pub fn extractor_count(&self) -> usize {
        self.map.len()
    }

    /// List all registered file names.
    pub fn registered_names(&self) -> Vec<&str> {
        self.map.keys().map(|name| name.as_str()).collect()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
