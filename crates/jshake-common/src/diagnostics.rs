//! Diagnostics emitted by the analysis and render passes.
//!
//! Fatal conditions (parse/panic error nodes) surface as `Err(Diagnostic)`
//! from the initialization pass; advisories (invalid annotations, side-effect
//! tracing) are collected on a side channel and never abort a module.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Info,
}

/// Stable log codes carried by every diagnostic.
pub mod log_codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const MODULE_PARSE_ERROR: &str = "MODULE_PARSE_ERROR";
    pub const INVALID_ANNOTATION: &str = "INVALID_ANNOTATION";
    pub const FIRST_SIDE_EFFECT: &str = "FIRST_SIDE_EFFECT";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: &'static str,
    /// Id of the module the diagnostic belongs to.
    pub module_id: String,
    /// Character offset into the module source, when the condition is
    /// attributable to a position (panic errors are not).
    pub pos: Option<u32>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(
        code: &'static str,
        module_id: impl Into<String>,
        pos: Option<u32>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            module_id: module_id.into(),
            pos,
            message: message.into(),
        }
    }

    pub fn warning(
        code: &'static str,
        module_id: impl Into<String>,
        pos: Option<u32>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code,
            module_id: module_id.into(),
            pos,
            message: message.into(),
        }
    }

    pub fn info(
        code: &'static str,
        module_id: impl Into<String>,
        pos: Option<u32>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Info,
            code,
            module_id: module_id.into(),
            pos,
            message: message.into(),
        }
    }
}

/// Build the nested parse-error message the module driver expects:
/// the raw parser message wrapped with the module id.
pub fn module_parse_error(module_id: &str, message: &str, pos: Option<u32>) -> Diagnostic {
    Diagnostic::error(
        log_codes::MODULE_PARSE_ERROR,
        module_id,
        pos,
        format!("Error parsing {module_id}: {message}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_parse_error_carries_id_and_pos() {
        let diagnostic = module_parse_error("src/main.js", "Unexpected token", Some(12));
        assert_eq!(diagnostic.category, DiagnosticCategory::Error);
        assert_eq!(diagnostic.code, log_codes::MODULE_PARSE_ERROR);
        assert_eq!(diagnostic.module_id, "src/main.js");
        assert_eq!(diagnostic.pos, Some(12));
        assert!(diagnostic.message.contains("src/main.js"));
        assert!(diagnostic.message.contains("Unexpected token"));
    }
}
