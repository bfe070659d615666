// Desktop/tooling crate — unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Millisecond/cycle bookkeeping is u64; overflow needs ~17 M years of
// simulated time.
#![allow(clippy::arithmetic_side_effects)]
#![allow(missing_docs)]

mod scenario;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dice_core::{ButtonLevels, DiceController, PolarityConfig, CLOCK_HZ};
use scenario::Scenario;

/// Fast cycles per multiplexer rotation (units, gap, tens, gap).
const ROTATION_CYCLES: u64 = 4;

#[derive(Parser)]
#[command(name = "dice-sim")]
#[command(about = "Clock the dice controller through a scripted button scenario", long_about = None)]
#[command(version)]
struct Cli {
    /// Scenario JSON file; omit to run the built-in demo script.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// 3-bit polarity strap: bit0 buttons, bit1 segments, bit2 digit
    /// enables active high.
    #[arg(long, default_value_t = 0b001)]
    cfg_bits: u8,

    /// Log every value change at trace level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "trace" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::demo(),
    };

    run(&scenario, cli.cfg_bits)
}

fn released_levels(cfg: PolarityConfig) -> ButtonLevels {
    if cfg.buttons_active_high {
        ButtonLevels::from_bits(0x00)
    } else {
        ButtonLevels::from_bits(0x7f)
    }
}

fn run(scenario: &Scenario, cfg_bits: u8) -> Result<()> {
    let cfg = PolarityConfig::from_bits(cfg_bits);
    let mut dice = DiceController::new(cfg_bits);
    let mut levels = released_levels(cfg);

    tracing::info!(cfg_bits, run_ms = scenario.run_ms, "starting simulation");

    let total_cycles = scenario.run_ms * u64::from(CLOCK_HZ) / 1000;
    let mut events = scenario.events.iter().peekable();

    let mut last_value = dice.value();
    let mut rolling = false;
    let mut rotation_lit = 0u32;
    let mut display_dark = true;

    for cycle in 0..total_cycles {
        let t_ms = cycle * 1000 / u64::from(CLOCK_HZ);

        while let Some(event) = events.peek() {
            if event.at_ms > t_ms {
                break;
            }
            match event.die()? {
                Some(die) => {
                    levels = released_levels(cfg).with_level(die, cfg.buttons_active_high);
                    tracing::info!(t_ms, die = die.faces(), "press");
                }
                None => {
                    levels = released_levels(cfg);
                    tracing::info!(t_ms, "release");
                }
            }
            events.next();
        }

        let frame = dice.clock(levels);

        if dice.ticked() {
            let value = dice.value();
            if value != last_value {
                tracing::trace!(t_ms, value, "count");
                last_value = value;
                rolling = true;
            } else if rolling {
                // First tick with no movement after a run of decrements:
                // the result has frozen.
                rolling = false;
                tracing::info!(t_ms, result = value, "roll frozen");
            }
        }

        if !frame.is_blank(cfg) {
            rotation_lit += 1;
        }
        if (cycle + 1) % ROTATION_CYCLES == 0 {
            let dark = rotation_lit == 0;
            if dark != display_dark {
                display_dark = dark;
                if dark {
                    tracing::info!(t_ms, "display blanked");
                } else {
                    tracing::info!(t_ms, value = dice.value(), "display showing");
                }
            }
            rotation_lit = 0;
        }
    }

    tracing::info!(result = dice.value(), "simulation complete");
    Ok(())
}
