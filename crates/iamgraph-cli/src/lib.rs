//! iamgraph command-line interface.
//!
pub mod chart;

use std::path::PathBuf;

use iamgraph_dot::render_diagram;
use iamgraph_error::Result;
use iamgraph_render::{ImageFormat, RenderEngine};

/// Options for running iamgraph.
pub struct IamgraphOptions {
    pub output: PathBuf,
    pub dot_only: bool,
    pub format: ImageFormat,
}

impl Default for IamgraphOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(chart::DEFAULT_OUTPUT),
            dot_only: false,
            format: ImageFormat::Png,
        }
    }
}

/// Main entry point
///
/// Declares the chart, checks it structurally, emits DOT and hands it to
/// the engine. Returns the DOT text instead of rendering when `dot_only`
/// is set.
pub fn run_main(opts: &IamgraphOptions, engine: &dyn RenderEngine) -> Result<Option<String>> {
    let diagram = chart::iam_structure();
    diagram.validate()?;
    tracing::info!(
        nodes = diagram.nodes().len(),
        edges = diagram.edges().len(),
        "diagram declared"
    );

    let dot = render_diagram(&diagram);
    if opts.dot_only {
        return Ok(Some(dot));
    }

    let report = engine.render(&dot, &opts.output, opts.format)?;
    tracing::info!(
        path = %report.output.display(),
        engine = report.engine,
        "output written"
    );
    Ok(None)
}
