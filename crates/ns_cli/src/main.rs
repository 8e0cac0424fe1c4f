use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ns_core::config::{load_dotenv, SettingsArgs};
use ns_core::logging::{init_logging, level_from_verbosity};
use ns_core::{Result, Settings};
use ns_digest::{DailyScheduler, DigestBuilder, DigestService};
use ns_inference::SummarizationService;
use ns_sources::{create_source, handle_command, HeadlinesArgs};
use ns_web::AppState;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "nsum", author, version, about = "News summaries and daily digests", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API together with the daily digest scheduler
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
        addr: String,
    },
    /// Print a digest. Today's is built if missing, other dates must be stored
    Digest {
        /// Date in YYYY-MM-DD format. Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Summarize TEXT, a file, or standard input
    Summarize {
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Sentences to keep. Defaults to the configured summary length
        #[arg(long)]
        sentences: Option<usize>,
    },
    /// List top headlines from the configured article source
    Headlines(HeadlinesArgs),
}

async fn digest_service(settings: &Settings, summarizer: SummarizationService) -> Result<Arc<DigestService>> {
    let store = ns_storage::create_storage(settings).await?;
    let source = create_source(settings)?;
    let builder = DigestBuilder::from_settings(settings, store, source, summarizer);
    Ok(Arc::new(DigestService::new(Arc::new(builder), settings.summary_sentences)))
}

async fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(tokio::fs::read_to_string(path).await?);
    }
    let mut buffer = String::new();
    tokio::io::stdin().read_to_string(&mut buffer).await?;
    Ok(buffer)
}

async fn serve(settings: Settings, addr: &str) -> Result<()> {
    let summarizer = SummarizationService::from_settings(&settings)?;
    let digests = digest_service(&settings, summarizer.clone()).await?;
    let source = create_source(&settings)?;

    if summarizer.remote_configured() {
        info!("🧠 Remote summarization enabled (using {})", settings.openai_model);
    } else {
        info!("🧠 Remote summarization disabled, using frequency summarizer only");
    }

    let scheduler = Arc::new(DailyScheduler::new(digests.clone(), settings.daily_digest_time));
    let handle = scheduler.start();

    let state = AppState {
        summarizer,
        digests,
        source,
        default_country: settings.provider_country.clone(),
    };
    info!("✨ {} ({}) starting", settings.app_name, settings.environment);
    let result = ns_web::serve(addr, state).await;
    handle.abort();
    result
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = load_dotenv();
    let cli = Cli::parse();
    init_logging(level_from_verbosity(cli.verbose));
    if let Err(e) = dotenv {
        warn!("{}", e);
    }
    let settings = cli.settings.into_settings()?;

    match cli.command {
        Commands::Serve { addr } => serve(settings, &addr).await?,
        Commands::Digest { date } => {
            let summarizer = SummarizationService::from_settings(&settings)?;
            let service = digest_service(&settings, summarizer).await?;
            let digest = match date {
                Some(date) if date != service.today_date() => service.get(date).await?,
                _ => service.today().await?,
            };
            println!("{}", serde_json::to_string_pretty(&digest)?);
        }
        Commands::Summarize { text, file, sentences } => {
            let text = read_input(text, file).await?;
            let sentences = sentences.unwrap_or(settings.summary_sentences);
            let summarizer = SummarizationService::from_settings(&settings)?;
            let summary = summarizer.summarize(&text, sentences).await?;
            println!("{}", summary);
        }
        Commands::Headlines(args) => {
            let source = create_source(&settings)?;
            handle_command(args, source.as_ref(), &settings.provider_country).await?;
        }
    }

    Ok(())
}
