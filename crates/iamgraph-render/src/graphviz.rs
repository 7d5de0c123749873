//! The Graphviz `dot` engine.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use iamgraph_error::{Error, ErrorKind, Result};

use crate::{ImageFormat, RenderEngine, RenderReport};

/// External Graphviz engine.
///
/// Pipes DOT text to the layout binary's stdin and lets the binary write
/// the output file itself (`-T<format> -o <path>`). The child is waited on
/// before success is reported, so the output file is flushed and closed on
/// every exit path.
#[derive(Debug, Clone)]
pub struct Graphviz {
    program: String,
}

impl Graphviz {
    /// The standard hierarchical layout engine, `dot` on PATH.
    pub fn new() -> Self {
        Self::with_program("dot")
    }

    /// Use a different layout binary (e.g. `neato`, or a stub in tests).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Graphviz {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderEngine for Graphviz {
    fn name(&self) -> &'static str {
        "graphviz"
    }

    fn render(&self, dot: &str, output: &Path, format: ImageFormat) -> Result<RenderReport> {
        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", format.as_str()))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::engine_missing(self.program.clone())
                        .with_operation("graphviz::render")
                        .set_source(e)
                } else {
                    Error::new(ErrorKind::IoFailed, "failed to spawn rendering engine")
                        .with_operation("graphviz::render")
                        .with_context("program", self.program.clone())
                        .set_source(e)
                }
            })?;

        // Feed the whole graph, then close stdin so the engine sees EOF.
        // The child is reaped even when the write fails mid-stream.
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(dot.as_bytes()),
            None => Ok(()),
        };

        let finished = child.wait_with_output().map_err(|e| {
            Error::new(ErrorKind::IoFailed, "failed to collect rendering engine output")
                .with_operation("graphviz::render")
                .with_context("program", self.program.clone())
                .set_source(e)
        })?;

        if let Err(e) = write_result {
            return Err(
                Error::new(ErrorKind::IoFailed, "failed to write DOT to engine stdin")
                    .with_operation("graphviz::render")
                    .with_context("program", self.program.clone())
                    .with_context("stderr", String::from_utf8_lossy(&finished.stderr).trim())
                    .set_source(e),
            );
        }

        if !finished.status.success() {
            return Err(Error::new(
                ErrorKind::RenderFailed,
                format!("rendering engine exited with {}", finished.status),
            )
            .with_operation("graphviz::render")
            .with_context("program", self.program.clone())
            .with_context("stderr", String::from_utf8_lossy(&finished.stderr).trim()));
        }

        tracing::info!(
            path = %output.display(),
            format = format.as_str(),
            "image rendered"
        );
        Ok(RenderReport {
            output: output.to_path_buf(),
            engine: self.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_engine_surfaces_kind() {
        let engine = Graphviz::with_program("iamgraph-no-such-layout-binary");
        let err = engine
            .render("digraph g {\n}\n", Path::new("out.png"), ImageFormat::Png)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EngineMissing);
        assert!(err.to_string().contains("iamgraph-no-such-layout-binary"));
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_default_program_is_dot() {
        let engine = Graphviz::default();
        assert_eq!(engine.program, "dot");
        assert_eq!(engine.name(), "graphviz");
    }
}
