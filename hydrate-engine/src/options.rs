use serde::{Deserialize, Serialize};

/// Knobs for a hydration run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrateOptions {
    /// Drop diagnostics whose only reason is a missing value.
    pub skip_empty_diagnostics: bool,
}

impl HydrateOptions {
    pub fn skip_empty() -> Self {
        Self {
            skip_empty_diagnostics: true,
        }
    }
}
