use crate::record::{ReferencedAction, StepDecomposition};
use serde_yaml::Value;

/// Split a `uses` statement into action id and version ref.
///
/// Only the first `@` splits; anything after it (including further `@`
/// characters) belongs to the ref. A statement without `@` yields an
/// empty ref.
pub fn split_uses(uses: &str) -> ReferencedAction {
    let (action_id, version_ref) = uses.split_once('@').unwrap_or((uses, ""));
    ReferencedAction {
        action_id: action_id.to_string(),
        version_ref: version_ref.to_string(),
    }
}

/// Classify a manifest's step list into referenced actions and shell
/// steps, preserving declaration order.
///
/// The `uses` and `run` checks are independent, not a priority chain: a
/// step declaring both contributes to both sequences. A step declaring
/// neither is skipped silently.
pub fn classify_steps(steps: &[Value]) -> StepDecomposition {
    let mut decomposition = StepDecomposition::default();

    for step in steps {
        if let Some(uses) = step.get("uses").and_then(Value::as_str) {
            decomposition.referenced_actions.push(split_uses(uses));
        }
        if step.get("run").is_some() {
            // The declared name is recorded as-is; absent names stay
            // empty rather than taking the sentinel default.
            let name = step
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            decomposition.shell_steps.push(name);
        }
    }

    decomposition
}
