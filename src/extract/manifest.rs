use super::{classify_steps, Extraction, Extractor};
use crate::record::{MetadataRecord, StepDecomposition, UNDEFINED};
use crate::sanitize::TextSanitizer;
use serde_yaml::Value;
use tracing::{info, warn};

/// Parses an action's YAML manifest into the fixed metadata schema.
///
/// Every text field is sanitized; absent or unusable fields take the
/// sentinel default. Parse failure is recovered locally and never
/// surfaces as an error value.
pub struct ManifestExtractor;

impl ManifestExtractor {
    /// Parse manifest content, with the source path and originating
    /// repository identifying the file in diagnostics.
    pub fn parse(path: &str, repo: &str, content: &str) -> Extraction {
        let parsed: Value = match serde_yaml::from_str(content) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "Error parsing action file [{}] in repo [{}] with error: {}",
                    path, repo, err
                );
                info!("The parsing error is informational, searching for actions has continued");
                return Extraction {
                    record: MetadataRecord::undefined(),
                    steps: StepDecomposition::default(),
                };
            }
        };

        let record = MetadataRecord {
            name: Some(field_or_default(&parsed, "name")),
            author: Some(field_or_default(&parsed, "author")),
            description: Some(field_or_default(&parsed, "description")),
            // Falls back to the sentinel on its own, even when `runs`
            // is present without `using`.
            runtime: Some(sanitized_or_default(
                parsed.get("runs").and_then(|runs| runs.get("using")),
            )),
            source_repo: None,
            download_url: None,
            extra: Default::default(),
        };

        let steps = parsed
            .get("runs")
            .and_then(|runs| runs.get("steps"))
            .and_then(Value::as_sequence)
            .map(|steps| classify_steps(steps))
            .unwrap_or_default();

        Extraction { record, steps }
    }
}

impl Extractor for ManifestExtractor {
    fn extract(&self, path: &str, content: &str) -> Option<Extraction> {
        // The originating repository is the first path component of the
        // scan-root-relative path.
        let repo = path.split('/').next().unwrap_or(path);
        Some(Self::parse(path, repo, content))
    }
}

/// Default-then-sanitize for a top-level manifest field.
fn field_or_default(parsed: &Value, key: &str) -> String {
    sanitized_or_default(parsed.get(key))
}

fn sanitized_or_default(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(TextSanitizer::sanitize)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNDEFINED.to_string())
}
