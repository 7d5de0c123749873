//! Error kinds for iamgraph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help callers write clear error handling
/// logic. Kinds split into two families: logic errors in the declared graph
/// and environment errors raised at the external-engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid configuration or parameters
    ConfigInvalid,

    // =========================================================================
    // Graph errors
    // =========================================================================
    /// An edge endpoint does not resolve to a declared node
    InvalidNodeRef,

    /// The declared graph violates a structural invariant
    GraphInvalid,

    // =========================================================================
    // Engine/IO errors
    // =========================================================================
    /// The external rendering engine binary is not available
    EngineMissing,

    /// The external rendering engine ran but reported failure
    RenderFailed,

    /// IO operation failed (output file, engine pipes)
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check whether this kind reports a broken environment rather than a
    /// defect in the declared graph.
    pub fn is_environment(&self) -> bool {
        matches!(
            self,
            ErrorKind::EngineMissing | ErrorKind::RenderFailed | ErrorKind::IoFailed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::EngineMissing.to_string(), "EngineMissing");
        assert_eq!(ErrorKind::InvalidNodeRef.to_string(), "InvalidNodeRef");
    }

    #[test]
    fn test_is_environment() {
        assert!(ErrorKind::EngineMissing.is_environment());
        assert!(ErrorKind::IoFailed.is_environment());
        assert!(!ErrorKind::GraphInvalid.is_environment());
        assert!(!ErrorKind::InvalidNodeRef.is_environment());
    }
}
