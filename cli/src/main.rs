use std::io;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use shieldsweep_core::{GameConfig, RejectionSampler, Session};
use tracing_subscriber::filter::LevelFilter;

use crate::app::App;
use crate::render::Renderer;

mod app;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of one taken from the clock
    #[arg(short, long)]
    seed: Option<u64>,

    /// No colours, no screen clearing
    #[arg(long)]
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose)?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);

    let session = Session::new(
        GameConfig::CLASSIC,
        RejectionSampler,
        SmallRng::seed_from_u64(seed),
    );
    let mut app = App::new(session, Renderer::new(!args.plain));

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    app.run(&mut input, &mut out)?;
    log::debug!("Dealt {} boards", app.session().games_started());
    Ok(())
}

/// Diagnostics go to stderr so they never interleave with the board.
fn init_logging(verbose: &clap_verbosity_flag::Verbosity) -> anyhow::Result<()> {
    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("{err}"))
        .context("Error initializing logger")
}

fn clock_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        // low bits change fastest, the truncation keeps them
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
