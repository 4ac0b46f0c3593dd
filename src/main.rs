use clap::{Parser, Subcommand, ValueEnum};
use medassist_client::config::{LoggingSettings, Settings};
use medassist_client::models::{
    ClientConfig, HealthAssessmentRequest, MedicationCheckRequest, OperationResult, TriageRequest,
};
use medassist_client::render::render;
use medassist_client::services::{resolve_base_url, save_base_url, ApiClient, FileStore};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

#[derive(Parser)]
#[command(name = "medassist", about = "Client for the MedAssist triage service")]
struct Args {
    /// Service base URL, overrides the configured and stored values.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Configuration file to load instead of config/default and config/local.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit symptoms for triage.
    Triage {
        symptoms: String,
        #[arg(short, long)]
        user: Option<String>,
        /// Relevant history or recent events.
        #[arg(short, long)]
        context: Option<String>,
    },
    /// Check a comma-separated medication list for interactions.
    Meds {
        medications: String,
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Run triage and medication checks together.
    Assess {
        symptoms: String,
        #[arg(short, long)]
        user: Option<String>,
        /// Comma-separated medications to check alongside the symptoms.
        #[arg(short, long)]
        meds: Option<String>,
        #[arg(short, long)]
        context: Option<String>,
    },
    /// Pause the reminder loop.
    Pause,
    /// Resume the reminder loop.
    Resume,
    /// Show reminder loop status.
    Status,
    /// Check service health.
    Health,
    /// List the tools available to the service's agents.
    Tools,
    /// Show service metrics.
    Metrics,
    /// List stored records for a user.
    History {
        #[arg(value_enum)]
        kind: HistoryKind,
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Show or persist the service base URL.
    BaseUrl {
        #[command(subcommand)]
        action: BaseUrlAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum HistoryKind {
    Events,
    Meds,
    Reminders,
}

#[derive(Subcommand)]
enum BaseUrlAction {
    /// Print the base URL that would be used.
    Show,
    /// Save a base URL for later runs.
    Set { url: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    match run(args, settings).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(logging: &LoggingSettings) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout is reserved for rendered results
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

async fn run(args: Args, settings: Settings) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let store = FileStore::new(&settings.store.path);
    let base_url = resolve_base_url(
        args.base_url.as_deref(),
        settings.client.base_url.as_deref(),
        &store,
    );

    let client = ApiClient::from_settings(ClientConfig::new(&base_url), &settings.client)?;
    let user_or_default =
        |user: Option<String>| client.user_id_or_default(user.as_deref().unwrap_or_default());

    let result = match args.command {
        Command::BaseUrl { action } => {
            match action {
                BaseUrlAction::Show => println!("{}", client.base_url()),
                BaseUrlAction::Set { url } => {
                    save_base_url(&store, &url)?;
                    info!("Saved base URL to {}", store.path().display());
                    println!("saved {}", url);
                }
            }
            return Ok(ExitCode::SUCCESS);
        }
        Command::Triage { symptoms, user, context } => {
            let request = TriageRequest::new(&user_or_default(user), &symptoms, context.as_deref());
            if request.validate().is_err() {
                return Err("symptoms must not be empty".into());
            }
            info!("Submitting triage to {}", client.base_url());
            client.triage(&request).await
        }
        Command::Meds { medications, user } => {
            let request = MedicationCheckRequest::from_free_text(&user_or_default(user), &medications);
            client.check_medications(&request).await
        }
        Command::Assess { symptoms, user, meds, context } => {
            let request = HealthAssessmentRequest::new(
                &user_or_default(user),
                &symptoms,
                meds.as_deref(),
                context.as_deref(),
            );
            if request.validate().is_err() {
                return Err("symptoms must not be empty".into());
            }
            client.health_assessment(&request).await
        }
        Command::Pause => client.pause_reminders().await,
        Command::Resume => client.resume_reminders().await,
        Command::Status => client.reminder_status().await,
        Command::Health => client.health().await,
        Command::Tools => client.tools().await,
        Command::Metrics => client.metrics().await,
        Command::History { kind, user } => {
            let user = user_or_default(user);
            match kind {
                HistoryKind::Events => client.symptom_history(&user).await,
                HistoryKind::Meds => client.medication_history(&user).await,
                HistoryKind::Reminders => client.reminder_history(&user).await,
            }
        }
    };

    println!("{}", render(&result));

    Ok(match result {
        OperationResult::Success(_) => ExitCode::SUCCESS,
        OperationResult::Failure(_) => ExitCode::FAILURE,
    })
}
