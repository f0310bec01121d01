use clap::Parser;
use moodscan_core::{
    AppConfig, CoreError, ErrorExt, ErrorReporter, FetchSourceKind, DEFAULT_CONFIG_PATH,
};
use post_fetcher::FetchSource;
use report_pipeline::{render_text, Pipeline};
use sentiment_engine::VaderScorer;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "moodscan=info,moodscan_core=info,post_fetcher=info,\
sentiment_engine=info,csv_export=info,report_pipeline=info";

/// Fetch posts for a keyword, classify their sentiment and export a CSV report.
#[derive(Debug, Parser)]
#[command(name = "moodscan", version)]
struct Cli {
    /// Search keyword
    query: String,

    /// Configuration file [default: moodscan.toml, skipped when absent]
    #[arg(long, env = "MOODSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Search endpoint URL (selects the HTTP source)
    #[arg(long, conflicts_with = "dump")]
    endpoint: Option<String>,

    /// JSON or JSONL dump of scraped posts (selects the file source)
    #[arg(long)]
    dump: Option<PathBuf>,

    /// CSV output path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Maximum posts requested from the source
    #[arg(long)]
    max_posts: Option<usize>,

    /// Maximum posts classified after deduplication
    #[arg(long)]
    cap: Option<usize>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// File, then `MOODSCAN_*` variables, then flags. Only the default
    /// location may be missing.
    fn load_config(&self) -> Result<AppConfig, CoreError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
        };
        config.apply_env_overrides()?;
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_to(&self, config: &mut AppConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.fetch.source = FetchSourceKind::Http;
            config.fetch.endpoint = endpoint.clone();
        }
        if let Some(dump) = &self.dump {
            config.fetch.source = FetchSourceKind::Jsonl;
            config.fetch.dump_path = Some(dump.clone());
        }
        if let Some(output) = &self.output {
            config.export.path = output.clone();
        }
        if let Some(max_posts) = self.max_posts {
            config.fetch.max_posts = max_posts;
        }
        if let Some(cap) = self.cap {
            config.pipeline.cap = cap;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorReporter::new().report_error(&e);
            eprintln!("{}", e.user_friendly_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CoreError> {
    let config = cli.load_config()?;

    let scorer = match &config.sentiment.lexicon_path {
        Some(path) => VaderScorer::from_lexicon_file(path)?,
        None => VaderScorer::new(),
    };
    let fetcher = FetchSource::from_config(&config.fetch)?;
    let pipeline = Pipeline::from_config(&config, fetcher, scorer);

    tracing::info!("Starting moodscan for '{}'", cli.query.trim());
    let report = pipeline.run(&cli.query).await?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}
