use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;
use poker_hand_lab::{
    analysis_engine::store::summarize_store, analyze_single_hand, analyze_street_by_street,
    json_adapter, parse_cards, synthesize_dataset, AnalyzerConfig, JsonFileStore, Position,
    SingleHandRequest, StreetRequest, SynthesisRequest,
};

#[derive(Parser)]
#[command(author, version, about = "Poker hand analysis and synthetic dataset generation", long_about = None)]
struct Cli {
    /// JSON config file; built-in defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Category, equity and outs for a hand at any board stage", alias = "a")]
    Analyze {
        /// Hero cards, e.g. "As Kh".
        #[arg(required = true)]
        hero: String,
        /// Community cards (0, 3, 4 or 5), e.g. "Qd Jc Ts".
        #[arg(default_value = "")]
        board: String,
        #[arg(long)]
        opponents: Option<u32>,
    },
    #[command(about = "Walk a hand through preflop, flop, turn and river", alias = "s")]
    Streets {
        #[arg(required = true)]
        hero: String,
        #[arg(long, default_value = "BTN")]
        position: String,
    },
    #[command(about = "Generate a synthetic hand dataset", alias = "gen")]
    Synthesize {
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        user: Option<String>,
        /// Output file; defaults to the configured dataset path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    #[command(about = "Summarise a stored dataset")]
    Summary {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn run(command: Command, config: &AnalyzerConfig, seed: Option<u64>) -> poker_hand_lab::Result<Value> {
    Ok(match command {
        Command::Analyze { hero, board, opponents } => {
            let request = SingleHandRequest {
                hero_hand: parse_cards(&hero)?,
                board: parse_cards(&board)?,
                opponents,
                rng_seed: seed,
            };
            json_adapter::single_hand_to_json(&analyze_single_hand(&request, config)?)
        }
        Command::Streets { hero, position } => {
            let request = StreetRequest {
                hero_hand: parse_cards(&hero)?,
                position: position.parse::<Position>()?,
                rng_seed: seed,
            };
            json_adapter::street_analysis_to_json(&analyze_street_by_street(&request, config)?)
        }
        Command::Synthesize { hands, user, output } => {
            let request = SynthesisRequest {
                num_hands: hands.unwrap_or_else(|| config.effective_default_hands()),
                user_id: user.unwrap_or_else(|| config.effective_default_user()),
                rng_seed: seed,
            };
            let mut store = JsonFileStore::new(output.unwrap_or_else(|| config.effective_dataset_path()));
            json_adapter::synthesis_status_to_json(&synthesize_dataset(&request, &mut store)?)
        }
        Command::Summary { path } => {
            let store = JsonFileStore::new(path.unwrap_or_else(|| config.effective_dataset_path()));
            serde_json::to_value(summarize_store(&store)?)?
        }
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };

    match run(cli.command, &config, cli.seed) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(err) => {
            log::error!("{err}");
            println!("{}", serde_json::to_string_pretty(&json_adapter::error_to_json(&err))?);
            std::process::exit(if err.is_invalid_input() { 2 } else { 1 });
        }
    }
}
