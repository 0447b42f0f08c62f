use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel used when a manifest field is absent or unparseable.
pub const UNDEFINED: &str = "Undefined";

/// Unified metadata record produced by both extraction paths.
///
/// Manifest-derived records always carry `Some` for the four metadata
/// fields, holding either the sanitized source value or [`UNDEFINED`].
/// Label-derived records store raw label values and leave absent fields
/// as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution runtime from the manifest (`runs.using`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    /// Originating repository, present on label-derived records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_repo: Option<String>,
    /// Artifact URL; may carry a query-string credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Label sub-keys outside the known field set, kept for later use.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl MetadataRecord {
    /// The fallback record for an unparseable manifest: every metadata
    /// field holds the sentinel.
    pub fn undefined() -> Self {
        Self {
            name: Some(UNDEFINED.to_string()),
            author: Some(UNDEFINED.to_string()),
            description: Some(UNDEFINED.to_string()),
            runtime: Some(UNDEFINED.to_string()),
            source_repo: None,
            download_url: None,
            extra: BTreeMap::new(),
        }
    }

    /// Remove any `?query` suffix from `download_url`, leaving the
    /// record otherwise unchanged. No-op when the URL is absent.
    pub fn without_token(mut self) -> Self {
        if let Some(url) = self.download_url.as_mut() {
            if let Some(idx) = url.find('?') {
                url.truncate(idx);
            }
        }
        self
    }
}

impl Default for MetadataRecord {
    fn default() -> Self {
        Self {
            name: None,
            author: None,
            description: None,
            runtime: None,
            source_repo: None,
            download_url: None,
            extra: BTreeMap::new(),
        }
    }
}

/// One step referencing another action, e.g. `uses: owner/repo@v2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencedAction {
    pub action_id: String,
    pub version_ref: String,
}

/// Typed decomposition of a manifest's execution steps.
///
/// Both sequences preserve the manifest's declared step order. A step
/// declaring neither `uses` nor `run` contributes to neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDecomposition {
    pub referenced_actions: Vec<ReferencedAction>,
    /// Declared names of shell steps; may contain empty strings when a
    /// step has a `run` but no `name`.
    pub shell_steps: Vec<String>,
}
