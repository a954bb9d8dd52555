//! Pretty-print a SELECT statement.
//!
//! ```sh
//! cargo run --example pretty_print -- "select a, b from t where x = 1 and y = 2"
//! echo "select * from t" | cargo run --example pretty_print -- --projections wrap
//! ```

use std::io::Read;

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use sqlpp_core::{format_select, parse, FormatOptions, ProjectionLayout};

/// Formats a SELECT statement read from the arguments or stdin.
#[derive(Parser)]
#[command(name = "pretty_print")]
#[command(about, long_about = None)]
struct Cli {
    /// The query to format. Read from stdin when omitted.
    query: Option<String>,

    /// Projection list layout: "inline" or "wrap".
    #[arg(short, long, default_value = "inline")]
    projections: ProjectionLayout,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::TRACE
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let query = match cli.query {
        Some(query) => query,
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            input
        }
    };
    debug!(bytes = query.len(), "read query");

    let select = parse(&query)?;
    let options = FormatOptions::new().with_projections(cli.projections);
    print!("{}", format_select(&select, options));
    Ok(())
}
