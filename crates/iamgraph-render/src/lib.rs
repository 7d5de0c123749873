//! External rendering-engine boundary.
//!
//! The diagram pipeline only ever consumes one interface from the outside
//! world: "take DOT text, produce an image file". [`RenderEngine`] is that
//! seam. [`Graphviz`] is the real implementation; [`Noop`] completes the
//! declaration and emission phases without touching the filesystem, which
//! is what tests drive.

mod graphviz;

use std::path::{Path, PathBuf};

use iamgraph_error::Result;

pub use graphviz::Graphviz;

/// Output format forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    /// Returns the format as the engine's `-T` argument value
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Outcome of a successful render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Path the image was written to (or would have been, for stub engines)
    pub output: PathBuf,
    /// Name of the engine that produced it
    pub engine: &'static str,
}

/// A graph-layout-and-drawing engine.
pub trait RenderEngine {
    /// Engine name, for reports and logs
    fn name(&self) -> &'static str;

    /// Turn DOT text into an image file at `output`.
    ///
    /// The implementation must not report success until the output file is
    /// flushed and closed on every path.
    fn render(&self, dot: &str, output: &Path, format: ImageFormat) -> Result<RenderReport>;
}

/// Engine stub: accepts the DOT text and succeeds without side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct Noop;

impl RenderEngine for Noop {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn render(&self, dot: &str, output: &Path, format: ImageFormat) -> Result<RenderReport> {
        tracing::debug!(
            bytes = dot.len(),
            path = %output.display(),
            format = format.as_str(),
            "noop engine skipped render"
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
    fn test_format_argument_values() {
        assert_eq!(ImageFormat::Png.as_str(), "png");
        assert_eq!(ImageFormat::Svg.as_str(), "svg");
        assert_eq!(ImageFormat::default(), ImageFormat::Png);
    }

    #[test]
    fn test_noop_engine_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("group6_iam_structure.png");

        let report = Noop
            .render("digraph g {\n}\n", &target, ImageFormat::Png)
            .unwrap();

        assert_eq!(report.output, target);
        assert_eq!(report.engine, "noop");
        assert!(!target.exists());
    }
}
