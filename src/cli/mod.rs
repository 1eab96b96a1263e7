use crate::scoring::ScoringPolicyKind;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// NDJSON file with one round per line.
    #[arg(long)]
    #[arg(default_value = "rounds.example.ndjson")]
    pub rounds: PathBuf,
    /// Scoring policy used by sessions that don't pick one themselves.
    #[arg(long, value_enum)]
    #[arg(default_value_t = ScoringPolicyKind::Exponential)]
    pub scoring: ScoringPolicyKind,
    #[arg(long)]
    #[arg(default_value_t = 60)]
    pub round_duration_secs: u64,
    #[arg(long)]
    pub shuffle_rounds: bool,
    #[arg(long)]
    #[arg(default_value = "campus_guessr_server=info")]
    pub log_filter: String,
    /// Origins the browser UI is served from.
    #[arg(long, value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
}
