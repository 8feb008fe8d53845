//! Options threaded read-only through the analysis and render passes.

use serde::{Deserialize, Serialize};

/// How JSX tag names are rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsxMode {
    /// Leave JSX untouched in the output.
    #[default]
    Preserve,
    /// Rewrite for the classic (createElement) runtime.
    Classic,
    /// Rewrite for the automatic (jsx runtime) transform.
    Automatic,
}

/// Configuration consumed by this core. Read-only once analysis starts.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShakeOptions {
    /// When set, the first statement found to have a side effect is reported
    /// through the diagnostics channel at info level.
    pub experimental_log_side_effects: bool,
    pub jsx: JsxMode,
}
