mod error;
mod tests;

pub use error::ScanError;

use crate::extract::ExtractorRegistry;
use crate::record::{MetadataRecord, StepDecomposition};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Manifest file names recognized as action definitions.
const MANIFEST_NAMES: [&str; 2] = ["action.yml", "action.yaml"];

/// Batch scanner over a root directory of checked-out repositories.
///
/// Partial failure isolation is the key guarantee: one file's read or
/// parse failure never prevents processing of the remaining files.
pub struct Scanner {
    root: PathBuf,
    registry: ExtractorRegistry,
}

/// One manifest-derived result: the record plus its step decomposition,
/// keyed by the scan-root-relative manifest path.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestAction {
    pub path: String,
    pub record: MetadataRecord,
    pub steps: StepDecomposition,
}

/// Aggregated output of one scan, handed to the reporting consumer.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub actions: Vec<ManifestAction>,
    pub docker_actions: Vec<MetadataRecord>,
}

/// Candidate files found under the scan root.
struct Discovered {
    manifests: Vec<PathBuf>,
    dockerfiles: Vec<PathBuf>,
}

impl Scanner {
    /// Create a scanner with the built-in extraction paths.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            registry: ExtractorRegistry::with_defaults(),
        }
    }

    /// Replace the extractor registry.
    pub fn with_registry(mut self, registry: ExtractorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Scan the root and aggregate every extractable record.
    ///
    /// Infallible: every failure mode degrades to fewer or
    /// default-valued results plus a diagnostic.
    pub fn scan(&self) -> ScanReport {
        let discovered = self.discover();
        info!(
            "Scanning {} manifest(s) and {} dockerfile(s) under [{}]",
            discovered.manifests.len(),
            discovered.dockerfiles.len(),
            self.root.display()
        );

        // Manifests are processed synchronously in discovery order; an
        // unreadable manifest still yields its default record so the
        // result count matches the manifest count.
        let actions: Vec<ManifestAction> = discovered
            .manifests
            .iter()
            .filter_map(|path| self.scan_manifest(path))
            .collect();

        // Dockerfiles fan out over the rayon pool; each file is read and
        // parsed independently, with no shared state between tasks.
        let docker_actions: Vec<MetadataRecord> = discovered
            .dockerfiles
            .par_iter()
            .filter_map(|path| self.scan_dockerfile(path))
            .collect();

        ScanReport {
            actions,
            docker_actions,
        }
    }

    /// Walk the root, partitioning candidate files by kind.
    fn discover(&self) -> Discovered {
        let mut manifests = Vec::new();
        let mut dockerfiles = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("{}", ScanError::WalkFailed(err));
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };

            if MANIFEST_NAMES.contains(&name) {
                manifests.push(entry.into_path());
            } else if name.eq_ignore_ascii_case("dockerfile") {
                dockerfiles.push(entry.into_path());
            }
        }

        // Deterministic manifest order; dockerfile order is not
        // observable downstream.
        manifests.sort();

        Discovered {
            manifests,
            dockerfiles,
        }
    }

    fn scan_manifest(&self, path: &Path) -> Option<ManifestAction> {
        let relative = self.relative(path);

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                warn!(
                    "{}",
                    ScanError::UnreadableFile {
                        path: relative.clone(),
                        source,
                    }
                );
                return Some(ManifestAction {
                    path: relative,
                    record: MetadataRecord::undefined(),
                    steps: StepDecomposition::default(),
                });
            }
        };

        let extraction = self.registry.select(&relative)?.extract(&relative, &content)?;
        Some(ManifestAction {
            path: relative,
            record: extraction.record,
            steps: extraction.steps,
        })
    }

    fn scan_dockerfile(&self, path: &Path) -> Option<MetadataRecord> {
        let relative = self.relative(path);

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                warn!(
                    "{}",
                    ScanError::UnreadableFile {
                        path: relative,
                        source,
                    }
                );
                return None;
            }
        };

        let extraction = self.registry.select(&relative)?.extract(&relative, &content)?;
        Some(extraction.record)
    }

    /// Scan-root-relative path with forward slashes.
    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
