//! Interactive shell for the tabletop robot simulator.
//!
//! Loads the simulation area from `config.yaml`, then reads commands from
//! stdin one line at a time until STOP or end of input.

use anyhow::{Context, Result};
use clap::Parser;
use glam::IVec2;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tabletop_robot::{
    AVAILABLE_COMMANDS, CommandInterpreter, LogLevel, Outcome, Robot, SimulationConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Toy robot simulator on a bounded grid")]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Logging level (DEBUG, INFO, WARNING or ERROR), overriding the config file.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SimulationConfig::load(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    // Precedence: --log-level, then RUST_LOG, then the config file.
    let filter = match cli.log_level {
        Some(level) => EnvFilter::new(level.as_level().to_string()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.logging_level.as_level().to_string())),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("starting simulation");

    let area = config
        .simulation_area()
        .context("invalid simulation area in configuration")?;
    info!(
        width = area.width(),
        height = area.height(),
        "simulation area configured"
    );

    let mut robot = Robot::new(area);
    if let Some(start) = config.start_position {
        robot.place(IVec2::new(start.x, start.y), start.direction);
        info!(
            x = start.x,
            y = start.y,
            direction = %start.direction,
            "robot placed at configured start position"
        );
    }
    let mut interpreter = CommandInterpreter::new(robot);

    println!("Toy Robot Simulation");
    println!("{AVAILABLE_COMMANDS}");
    println!("{}", "-".repeat(70));

    run(&mut interpreter)
}

/// The command loop. Runs until STOP or end of input.
fn run(interpreter: &mut CommandInterpreter) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush().context("failed to flush stdout")?;
        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read command input")?;
        if read == 0 {
            info!("end of input, exiting simulation");
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        match interpreter.execute_line(&line) {
            Outcome::Continue(text) => println!("{text}"),
            Outcome::Stop(text) => {
                info!("exiting simulation");
                println!("{text}");
                println!("Exiting simulation...");
                break;
            }
        }
    }
    println!("Simulation complete.");
    info!("simulation complete");
    Ok(())
}
