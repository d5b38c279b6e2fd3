//! Street Runner entry point
//!
//! The browser build runs the interactive game; the native build runs a
//! headless autopilot session and prints its summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    street_runner::platform::web::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use street_runner::Tuning;
    use street_runner::autopilot;
    use street_runner::sim::GameState;

    #[derive(Parser)]
    #[command(name = "street-runner", about = "Headless Street Runner simulation")]
    pub struct Cli {
        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
        /// JSON file overriding tuning values
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// RNG seed for the street layout
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Maximum ticks to simulate
        #[arg(short, long, default_value = "10000")]
        ticks: u64,
        /// Runs to play back to back
        #[arg(short, long, default_value = "1")]
        runs: u32,
        /// Disable the autopilot (the runner just holds the center lane)
        #[arg(long)]
        no_autopilot: bool,
    }

    fn load_tuning(path: Option<&PathBuf>) -> anyhow::Result<Tuning> {
        let Some(path) = path else {
            return Ok(Tuning::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        let tuning = Tuning::from_json(&json)
            .with_context(|| format!("loading tuning file {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn run() -> anyhow::Result<()> {
        let cli = Cli::parse();

        let level = if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();

        log::info!("Street Runner (native) starting...");

        let tuning = load_tuning(cli.tuning.as_ref())?;
        let mut state = GameState::with_tuning(cli.seed, tuning);
        state.assets_ready();

        let mut summaries = Vec::with_capacity(cli.runs as usize);
        for _ in 0..cli.runs {
            let summary = autopilot::play_run(&mut state, cli.ticks, !cli.no_autopilot);
            log::info!(
                "Run {}: {:?} after {} ticks, score {} ({} coins)",
                summary.run,
                summary.phase,
                summary.ticks,
                summary.score,
                summary.coins
            );
            state.drain_events();
            summaries.push(summary);
        }

        println!("{}", serde_json::to_string_pretty(&summaries)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
