//! The main Error type for iamgraph.

use crate::ErrorKind;
use std::fmt;

/// Unified error type for all iamgraph operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operation.is_empty() {
            write!(f, "{}", self.kind)?;
        } else {
            write!(f, "{} at {}", self.kind, self.operation)?;
        }

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        if let Some(source) = &self.source {
            write!(f, ", source: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {}", self.kind, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrorKind::IoFailed, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::new(ErrorKind::Unexpected, msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::new(ErrorKind::Unexpected, msg)
    }
}

impl Error {
    /// Create an Unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create a ConfigInvalid error
    pub fn config_invalid(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, reason)
    }

    /// Create an InvalidNodeRef error
    pub fn invalid_node_ref(node: impl Into<String>) -> Self {
        let node = node.into();
        Self::new(
            ErrorKind::InvalidNodeRef,
            format!("node '{}' was not declared in this diagram", node),
        )
        .with_context("node", node)
    }

    /// Create an EngineMissing error
    pub fn engine_missing(program: impl Into<String>) -> Self {
        let program = program.into();
        Self::new(
            ErrorKind::EngineMissing,
            format!("rendering engine '{}' not found on PATH", program),
        )
        .with_context("program", program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::GraphInvalid, "invisible edge carries a label");
        assert_eq!(err.kind(), ErrorKind::GraphInvalid);
        assert_eq!(err.message(), "invisible edge carries a label");
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::InvalidNodeRef, "endpoint out of range")
            .with_operation("diagram::validate")
            .with_context("edge", "7")
            .with_context("endpoint", "target");

        assert_eq!(err.operation(), "diagram::validate");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("edge", "7".to_string()));
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::RenderFailed, "dot exited with status 1")
            .with_operation("graphviz::render")
            .with_operation("run_main");

        assert_eq!(err.operation(), "run_main");
        assert_eq!(err.context().len(), 1);
        assert_eq!(err.context()[0], ("called", "graphviz::render".to_string()));
    }

    #[test]
    fn test_source_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::engine_missing("dot").set_source(io);

        assert_eq!(err.kind(), ErrorKind::EngineMissing);
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::RenderFailed, "dot exited with status 1")
            .with_operation("graphviz::render")
            .with_context("status", "1");

        let text = err.to_string();
        assert!(text.contains("RenderFailed"));
        assert!(text.contains("graphviz::render"));
        assert!(text.contains("status: 1"));
        assert!(text.contains("dot exited with status 1"));
    }

    #[test]
    fn test_from_string() {
        let err: Error = format!("unknown format: {}", "webp").into();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(err.message(), "unknown format: webp");
    }
}
