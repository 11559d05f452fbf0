use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mvnscope::export::{self, ExportFormat};
use mvnscope::graph::DependencyGraph;
use mvnscope::parser::classify_report;
use mvnscope::runner::MavenRunner;

#[derive(Parser)]
#[command(name = "mvnscope")]
#[command(version = "0.1.0")]
#[command(about = "Maven dependency tree parser and dependency graph builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run mvn dependency:tree and print the reconstructed graph
    Analyze {
        /// Maven project directory (defaults to current directory)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Maven executable to invoke
        #[arg(long, default_value = "mvn")]
        mvn: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: ExportFormat,
    },
    /// Parse a saved dependency:tree report
    Parse {
        /// Report file to parse ("-" or omitted reads stdin)
        file: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: ExportFormat,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (lines, format) = match cli.command {
        Commands::Analyze { path, mvn, format } => {
            let runner = MavenRunner::new(&path)
                .with_context(|| format!("cannot analyze {}", path.display()))?
                .with_binary(mvn);
            (runner.run()?, format)
        }
        Commands::Parse { file, format } => {
            let content = match file {
                Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
                    .with_context(|| format!("cannot read {}", path.display()))?,
                _ => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("cannot read stdin")?;
                    buffer
                }
            };
            (content.lines().map(str::to_string).collect(), format)
        }
    };

    let report = DependencyGraph::from_tree_entries(classify_report(&lines));

    if report.is_empty() {
        tracing::warn!("report contained no dependency lines");
    }
    if report.unresolved_count() > 0 {
        tracing::warn!(
            count = report.unresolved_count(),
            "some entries could not be attached to an ancestor"
        );
    }

    let rendered = export::export_to_string(format, &report)?;
    print!("{rendered}");

    Ok(())
}
