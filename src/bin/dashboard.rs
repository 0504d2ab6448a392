use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use expense_dashboard::{
    DashboardReport, Error, FilterQuery, dashboard_page,
    source::{for_user, load_transactions},
    timezone::local_today,
};

/// Builds the expense dashboard datasets from a file of transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a JSON or CSV file of transactions.
    #[arg(long)]
    transactions: PathBuf,

    /// Only include the transactions owned by this user.
    #[arg(long)]
    user_id: Option<String>,

    /// The month for the daily expenses chart, formatted as YYYY-MM.
    #[arg(long)]
    month: Option<String>,

    /// The year for the monthly expenses chart, formatted as YYYY.
    #[arg(long)]
    year: Option<String>,

    /// The first day for the category chart, formatted as YYYY-MM-DD.
    #[arg(long)]
    from: Option<String>,

    /// The last day for the category chart, formatted as YYYY-MM-DD.
    #[arg(long)]
    to: Option<String>,

    /// The canonical timezone used to work out today's date, e.g. "Asia/Kolkata".
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// Whether to write the datasets as JSON or the dashboard as an HTML page.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// File path to write to. Writes to stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Html,
}

impl Args {
    fn filter_query(&self) -> FilterQuery {
        FilterQuery {
            month: self.month.clone(),
            year: self.year.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let today = local_today(&args.timezone)?;

    let transactions = load_transactions(&args.transactions)?;
    let transactions = match &args.user_id {
        Some(user_id) => for_user(transactions, user_id),
        None => transactions,
    };

    let report = DashboardReport::build(&transactions, &args.filter_query(), today);

    let rendered = match args.format {
        OutputFormat::Json => report.to_json()?,
        OutputFormat::Html => dashboard_page(&report).into_string(),
    };

    match &args.output {
        Some(path) => write_file(path, &rendered),
        None => write_stdout(&rendered),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), Error> {
    fs::write(path, contents).map_err(|error| {
        tracing::error!("Could not write to {}: {error}", path.display());
        Error::WriteError(path.display().to_string(), error.to_string())
    })?;

    tracing::info!("Wrote dashboard to {}", path.display());

    Ok(())
}

fn write_stdout(contents: &str) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{contents}")
        .map_err(|error| Error::WriteError("stdout".to_owned(), error.to_string()))
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(filter))
        .init();
}
