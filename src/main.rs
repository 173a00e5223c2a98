use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::{Builder, Env};
use log::{debug, info, LevelFilter};

use premium_estimator::batch::score_csv_file;
use premium_estimator::server::{self, AppState};
use premium_estimator::{ArtifactStore, Predictor, PremiumResponse, RawInput};

#[derive(Parser, Debug)]
#[command(author, version, about = "Health insurance premium estimator", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        env = "PREMIUM_ARTIFACTS",
        default_value = "artifacts",
        help = "Directory holding the model and scaler artifacts"
    )]
    artifacts: PathBuf,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Verbose level")]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve predictions over HTTP
    Serve {
        #[arg(long, env = "PREMIUM_ADDR", default_value = "0.0.0.0:8000")]
        addr: String,
        #[arg(long, env = "PREMIUM_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
    /// Predict the premium for one JSON payload
    Predict {
        #[arg(short, long, help = "Request payload")]
        input: PathBuf,
    },
    /// Score a CSV of payloads
    Score {
        #[arg(short, long, help = "Input csv path")]
        input: PathBuf,
        #[arg(short, long, help = "Output csv path")]
        output: PathBuf,
    },
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Serve { .. } => "serve",
        Command::Predict { .. } => "predict",
        Command::Score { .. } => "score",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let env = Env::new().filter("PREMIUM_LOG");
    Builder::new()
        .filter(Some("premium_estimator"), log_level)
        .parse_env(env)
        .init();

    debug!("artifacts {:?}, command {:?}", cli.artifacts, command_name(&cli.command));

    let store = ArtifactStore::load(&cli.artifacts)
        .with_context(|| format!("cannot load artifacts from {}", cli.artifacts.display()))?;
    let predictor = Predictor::new(Arc::new(store));

    match cli.command {
        Command::Serve { addr, api_key } => {
            if api_key.is_none() {
                info!("no API key configured, /predict is open");
            }
            server::serve(&addr, AppState::new(predictor, api_key)).await?;
        }
        Command::Predict { input } => {
            let file = File::open(&input)
                .with_context(|| format!("cannot open {}", input.display()))?;
            let payload: RawInput = serde_json::from_reader(file)
                .with_context(|| format!("invalid payload in {}", input.display()))?;

            let predicted_premium = predictor.predict(&payload)?;
            println!("{}", serde_json::to_string(&PremiumResponse { predicted_premium })?);
        }
        Command::Score { input, output } => {
            let start_time = Instant::now();
            let rows = score_csv_file(&predictor, &input, &output).with_context(|| {
                format!("cannot score {} into {}", input.display(), output.display())
            })?;
            info!("Scored {} rows in {:?}", rows, start_time.elapsed());
        }
    }

    Ok(())
}
