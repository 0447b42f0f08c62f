use super::{Extraction, Extractor};
use crate::record::{MetadataRecord, StepDecomposition};
use std::path::Path;
use tracing::{debug, info};

/// Fixed label namespace marking a Dockerfile as an action definition.
pub const LABEL_PREFIX: &str = "LABEL com.github.actions.";

/// Reconstructs the metadata schema from `LABEL com.github.actions.*`
/// directives in a Dockerfile.
///
/// Unlike the manifest path, values are stored raw: no sanitization and
/// no sentinel defaults. Absent labels leave their fields unset.
pub struct DockerfileExtractor;

impl Extractor for DockerfileExtractor {
    fn extract(&self, path: &str, content: &str) -> Option<Extraction> {
        // Both labels are required; a file with only one is excluded
        // exactly like a file with neither.
        let has_name = content.contains(&format!("{LABEL_PREFIX}name="));
        let has_description = content.contains(&format!("{LABEL_PREFIX}description="));
        if !has_name || !has_description {
            debug!("[{}] has no actionable labels, skipping", path);
            return None;
        }

        info!("[{}] has dockerfile as an action!", path);

        let mut record = MetadataRecord::default();
        for line in content.lines() {
            if !line.starts_with(LABEL_PREFIX) {
                continue;
            }

            // Sub-key is the 4th dot-separated segment, before any `=`;
            // the value is the text between the first pair of quotes.
            let Some(sub_key) = line
                .split('.')
                .nth(3)
                .and_then(|segment| segment.split('=').next())
            else {
                continue;
            };
            let Some(value) = line.split('"').nth(1) else {
                continue;
            };

            let value = value.to_string();
            match sub_key {
                "name" => record.name = Some(value),
                "description" => record.description = Some(value),
                "author" => record.author = Some(value),
                "repo" => record.source_repo = Some(value),
                "downloadUrl" => record.download_url = Some(value),
                // No defined consumer yet; kept rather than discarded.
                other => {
                    record.extra.insert(other.to_string(), value);
                }
            }
        }

        if record.source_repo.is_none() {
            record.source_repo = containing_dir(path);
        }

        Some(Extraction {
            record,
            steps: StepDecomposition::default(),
        })
    }
}

/// Repo-relative directory holding the Dockerfile, if any.
fn containing_dir(path: &str) -> Option<String> {
    Path::new(path)
        .parent()
        .and_then(|dir| dir.to_str())
        .filter(|dir| !dir.is_empty())
        .map(|dir| dir.to_string())
}
