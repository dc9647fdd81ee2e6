#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug, info};
use poker_deals::{
    DeckSpec, Stage,
    config::Config,
    deal::{self, Deals},
    high_card::PayoffMatrix,
    rank_deal, unrank_deal,
};
use rand::{SeedableRng, rngs::StdRng};
use std::{fs, path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(about = "Rank, unrank and enumerate short-deck hold'em deals")]
struct Cli {
    /// YAML game configuration, Manila poker when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Per-stage ranks and deal index of the given cards, e.g. `As Ah Ks Kh`
    Rank { cards: Vec<String> },
    /// Cards dealt by the given per-stage ranks
    Unrank { ranks: Vec<usize> },
    /// Number of outcomes per stage
    Count,
    /// Every deal in index order
    Enumerate {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// One uniformly random deal
    Sample {
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Locate the configured scenario in the game tree
    Scenario,
    /// Payoff matrix of the high-card game, as JSON
    Matrix {
        #[arg(short = 'n', long)]
        cards: usize,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logger(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // A logger is only missing if one was already installed
    let _ = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            info!("Reading configuration from {}", path.display());
            Config::from_path(path).with_context(|| format!("loading {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn last_stage(config: &Config) -> Result<Stage> {
    Stage::from_rounds(config.number_of_rounds)
        .ok_or_else(|| anyhow!("bad number_of_rounds ({})", config.number_of_rounds))
}

fn labels(deck: &DeckSpec, cards: &[usize]) -> Result<String> {
    let groups = deal::groups(cards)
        .into_iter()
        .map(|group| {
            let cards = deck.describe(group)?;
            Ok(cards.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(groups.join(" | "))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    let deck = config.deck_spec()?;
    let max = deck.size();
    info!("Deck: {deck}");
    debug!(
        "Betting: ante {}, bet {}, raise {}",
        config.ante, config.bet, config.raise
    );

    match cli.command {
        Command::Rank { cards } => {
            let card_ints = deck.indices(&cards)?;
            let ranks = rank_deal(&card_ints, max)?;
            let index = deal::compose(&ranks, max)?;
            println!("ranks: {ranks:?}");
            println!("deal index: {index}");
        }
        Command::Unrank { ranks } => {
            let cards = unrank_deal(&ranks, max)?;
            println!("{}", labels(&deck, &cards)?);
        }
        Command::Count => {
            let last = last_stage(&config)?;
            for stage in last.through() {
                println!("{stage:?}: {}", deal::stage_outcomes(stage, max)?);
            }
            println!("total: {}", deal::total_deals(last, max)?);
        }
        Command::Enumerate { limit } => {
            let last = last_stage(&config)?;
            let deals = Deals::new(last, max)?;
            info!("Enumerating {} deals through the {last:?}", deals.total());
            let start_time = Instant::now();
            for (index, cards) in deals.take(limit.unwrap_or(usize::MAX)).enumerate() {
                println!("{index}: {}", labels(&deck, &cards?)?);
                coz::progress!();
            }
            info!("--- {:?} ---", start_time.elapsed());
        }
        Command::Sample { seed } => {
            let last = last_stage(&config)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let cards = deal::random_deal(last, max, &mut rng)?;
            let ranks = rank_deal(&cards, max)?;
            println!("{} {ranks:?}", labels(&deck, &cards)?);
        }
        Command::Scenario => {
            let scenario = &config.scenario;
            let child_indices =
                deck.locate(&scenario.hole, &scenario.flop, &scenario.turn, &scenario.river)?;
            if child_indices.is_empty() {
                info!("No scenario configured");
            }
            println!("child indices: {child_indices:?}");
        }
        Command::Matrix { cards, output } => {
            let start_time = Instant::now();
            let matrix = PayoffMatrix::new(
                cards,
                i64::from(config.ante),
                i64::from(config.bet),
                config.players.clone(),
            )?;
            info!("--- {:?} ---", start_time.elapsed());
            let json = serde_json::to_string_pretty(&matrix)?;
            match output {
                Some(path) => {
                    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
                    info!("Payoff matrix written to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
    }
    Ok(())
}
