use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use validator::{
    print_header, print_summary, validate_bot, BotCommand, ValidationPhase, RED, RESET,
};

#[derive(Parser)]
struct Args {
    /// Path to the bot executable. It is run with the path of a JSON game state as its last argument
    bot: PathBuf,

    /// Extra arguments passed to the bot before the game state path
    #[arg(last = true)]
    bot_args: Vec<String>,

    /// How long the bot may take for one decision, in milliseconds
    #[arg(short, long, default_value_t = 3000)]
    timeout_ms: u64,

    /// Only validate these phases (may be repeated)
    #[arg(short, long, value_enum)]
    phase: Vec<ValidationPhase>,

    /// RNG seed for the synthetic game states
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    if !args.bot.exists() {
        println!(
            "{}Error: Bot file '{}' not found{}",
            RED,
            args.bot.display(),
            RESET
        );
        std::process::exit(1);
    }

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let phases = if args.phase.is_empty() {
        ValidationPhase::ALL.to_vec()
    } else {
        let mut phases = args.phase.clone();
        phases.sort();
        phases.dedup();
        phases
    };

    let bot = BotCommand::new(
        &args.bot,
        args.bot_args,
        Duration::from_millis(args.timeout_ms),
    );

    print_header(&format!("VALIDATING: {}", args.bot.display()));
    let results = validate_bot(&bot, &phases, &mut rng);
    print_summary(&results);

    if !results.iter().all(|(_, outcome)| outcome.passed()) {
        std::process::exit(1);
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
