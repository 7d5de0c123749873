use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use iamgraph::IamgraphOptions;
use iamgraph::chart;
use iamgraph::run_main;
use iamgraph_error::Result;
use iamgraph_render::{Graphviz, ImageFormat};

#[derive(Parser, Debug)]
#[command(
    name = "iamgraph",
    about = "iamgraph: render the Group6 Platform IAM structure chart",
    version
)]
pub struct Cli {
    /// Output file path (overwritten on each run)
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = chart::DEFAULT_OUTPUT
    )]
    output: PathBuf,

    /// Print the generated DOT to stdout instead of rendering an image
    #[arg(long, default_value_t = false)]
    dot: bool,

    /// Image format: 'png' or 'svg'
    #[arg(long, value_name = "FORMAT", default_value = "png")]
    format: String,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let format = match args.format.as_str() {
        "png" => ImageFormat::Png,
        "svg" => ImageFormat::Svg,
        _ => {
            return Err(format!("Unknown format: {}. Use 'png' or 'svg'", args.format).into());
        }
    };

    let opts = IamgraphOptions {
        output: args.output,
        dot_only: args.dot,
        format,
    };

    if !opts.dot_only {
        println!("Đang tạo sơ đồ kiến trúc AWS cho Group6 Platform...");
    }

    match run_main(&opts, &Graphviz::new()) {
        Ok(Some(dot)) => {
            println!("{dot}");
        }
        Ok(None) => {
            println!("✅ Đã tạo sơ đồ cấu trúc IAM: {}", opts.output.display());
            println!();
            println!("📁 Các file sơ đồ đã được tạo trong thư mục hiện tại:");
            println!("   - {}", opts.output.display());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "generation failed");
            std::process::exit(1);
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
