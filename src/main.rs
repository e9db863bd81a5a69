use std::io::{self, Write};

use clap::{Parser, Subcommand};
use pingpong::api::HttpTransport;
use pingpong::config::ApiProfile;
use pingpong::types::{MatchSubmission, PlayerScore};
use pingpong::{ApiClient, ApiConfig, ApiError, router, views};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("no view at {0}")]
    UnknownRoute(String),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "pingpong", about = "Ping-pong ranking client")]
struct Cli {
    #[arg(long, help = "Overrides PINGPONG_BACKEND_URL")]
    backend_url: Option<String>,

    #[arg(long, help = "Overrides PINGPONG_LOCAL_URL")]
    local_url: Option<String>,

    #[arg(long, help = "Overrides PINGPONG_API_PROFILE (split, local or remote)")]
    profile: Option<ApiProfile>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Environment config with any flags layered on top.
    fn config(&self) -> Result<ApiConfig, ApiError> {
        let env = ApiConfig::from_env()?;
        Ok(ApiConfig::new(
            self.backend_url.as_deref().unwrap_or(&env.backend_url),
            self.local_url.as_deref().unwrap_or(&env.local_url),
            self.profile.unwrap_or(env.profile),
        ))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    Open {
        #[arg(default_value = "/")]
        path: String,
    },
    Ranking,
    Players,
    Matches,
    Submit {
        #[arg(long)]
        winner: String,
        #[arg(long)]
        winner_score: u32,
        #[arg(long)]
        loser: String,
        #[arg(long)]
        loser_score: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    tracing::debug!(
        backend = %config.backend_url,
        local = %config.local_url,
        profile = %config.profile,
        "pingpong client"
    );
    let client = ApiClient::from_config(config)?;

    run(cli.command, &client, &mut io::stdout().lock()).await
}

async fn run<T: HttpTransport>(
    command: Command,
    client: &ApiClient<T>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::Open { path } => {
            let resolved = router::resolve(&path).ok_or(CliError::UnknownRoute(path))?;
            write!(out, "{}", views::render_view(resolved.view, client).await?)?;
        }
        Command::Ranking => write_json(out, &client.fetch_ranking().await?)?,
        Command::Players => write_json(out, &client.fetch_players().await?)?,
        Command::Matches => write_json(out, &client.fetch_matches().await?)?,
        Command::Submit { winner, winner_score, loser, loser_score } => {
            let submission =
                MatchSubmission::new(PlayerScore::new(winner, winner_score), PlayerScore::new(loser, loser_score));
            write_json(out, &client.submit_match(&submission).await?)?;
        }
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(out: &mut impl Write, value: &T) -> Result<(), CliError> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
