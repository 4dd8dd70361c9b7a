use anyhow::Context;
use clap::Parser;
use config::RunConfig;
use driver::FrameDriver;
use filestore::FileStore;
use log::info;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use sweepcore::store::{MemoryStore, SlotStore};
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use tokio::time;

mod config;
mod driver;
mod filestore;

#[derive(Parser)]
#[command(author, version, about = "Headless driver for the radar sweep simulation")]
struct Args {
    /// Number of frames to run in batch mode (one minute at 60 fps)
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Seed for target spawning and blip classification; overrides the
    /// config file's seed when both are given (defaults to 0)
    #[arg(long)]
    seed: Option<u64>,
    /// Frame rate for --realtime mode
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Load a run config from YAML instead of the built-in constants
    #[arg(long)]
    config: Option<PathBuf>,
    /// Persist detections to this file (in-memory store otherwise)
    #[arg(long)]
    store: Option<PathBuf>,
    /// Drive frames from a fixed-rate timer until Ctrl+C
    #[arg(long, default_value_t = false)]
    realtime: bool,
    /// Append a one-line run summary to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let run_config = if let Some(path) = &args.config {
        RunConfig::load(path)?
    } else {
        let defaults = sweepcore::prelude::RadarConfig::default();
        RunConfig::from_args(defaults.radar_radius, defaults.target_floor, 0)
    };

    let store: Box<dyn SlotStore> = match &args.store {
        Some(path) => Box::new(FileStore::new(path.clone())),
        None => Box::new(MemoryStore::new()),
    };

    let seed = effective_seed(args.seed, &run_config);
    let mut driver = FrameDriver::new(run_config.to_radar_config(), seed, store)?;

    let frames = if args.realtime {
        run_realtime(&mut driver, args.fps)?
    } else {
        driver.run_frames(args.frames)?;
        args.frames
    };

    let detections = driver.log().len();
    info!("run finished after {} frames", frames);
    println!(
        "Sweep run -> frames {}, detections {}, live targets {}, live blips {}",
        frames,
        detections,
        driver.state().targets.len(),
        driver.state().blips.len()
    );

    if let Some(report_path) = args.report {
        let report = format!(
            "frames={} detections={} targets={} sweep_angle={:.4}\n",
            frames,
            detections,
            driver.state().targets.len(),
            driver.state().sweep.angle
        );
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }

    Ok(())
}

/// An explicit `--seed` wins over whatever the run config carries.
fn effective_seed(cli_seed: Option<u64>, run_config: &RunConfig) -> u64 {
    cli_seed.unwrap_or(run_config.seed)
}

/// Drives the simulation from a fixed-rate timer until Ctrl+C flips the
/// driver to idle. Returns the number of frames run.
fn run_realtime(driver: &mut FrameDriver, fps: u32) -> anyhow::Result<u64> {
    let period = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
    let runtime = TokioBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("creating runtime for the frame timer")?;

    runtime.block_on(async {
        let mut ticker = time::interval(period);
        let mut frames = 0u64;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    driver.step()?;
                    frames += 1;
                }
                _ = signal::ctrl_c() => {
                    driver.stop();
                }
            }
            if !driver.is_running() {
                break;
            }
        }
        Ok::<u64, anyhow::Error>(frames)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_seed_overrides_config_file_seed() {
        let args = Args::try_parse_from(["simulator", "--config", "run.yaml", "--seed", "9"])
            .unwrap();
        let from_file = RunConfig::from_args(200.0, 2, 11);
        assert_eq!(effective_seed(args.seed, &from_file), 9);
    }

    #[test]
    fn config_file_seed_applies_when_cli_seed_is_absent() {
        let args = Args::try_parse_from(["simulator", "--config", "run.yaml"]).unwrap();
        let from_file = RunConfig::from_args(200.0, 2, 11);
        assert_eq!(effective_seed(args.seed, &from_file), 11);
    }
}
