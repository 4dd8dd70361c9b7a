use anyhow::Context;
use sweepcore::prelude::RadarConfig;
use sweepcore::sim::SimState;
use sweepcore::store::{BlipArchive, SlotStore};
use sweepcore::telemetry::{BlipLog, TableLog};

/// Frame driver: owns the simulation state and routes each fired detection
/// to the archive and the log view. One invocation of `step` is one frame;
/// nothing here is concurrent.
pub struct FrameDriver {
    state: SimState,
    archive: BlipArchive,
    log: TableLog,
    running: bool,
}

impl FrameDriver {
    /// Builds a driver and runs the startup sequence: clear the persisted
    /// slot, then replay whatever it holds into the log view. Replayed
    /// records never re-enter the live fading set; their sweep-time fade
    /// state is not reconstructable.
    pub fn new(config: RadarConfig, seed: u64, store: Box<dyn SlotStore>) -> anyhow::Result<Self> {
        let mut archive = BlipArchive::new(store);
        archive
            .reset()
            .context("clearing the blip slot at startup")?;

        let mut log = TableLog::new();
        for blip in archive.load_all() {
            log.append(&blip);
        }

        Ok(Self {
            state: SimState::new(config, seed),
            archive,
            log,
            running: true,
        })
    }

    /// Runs one frame; returns how many detections fired.
    pub fn step(&mut self) -> anyhow::Result<usize> {
        let fired = self.state.step();
        for blip in &fired {
            self.archive
                .append(blip)
                .context("persisting detection record")?;
            self.log.append(blip);
        }
        Ok(fired.len())
    }

    /// Runs a fixed number of frames back to back; returns the total
    /// detection count.
    pub fn run_frames(&mut self, frames: u64) -> anyhow::Result<u64> {
        let mut detections = 0;
        for _ in 0..frames {
            detections += self.step()? as u64;
        }
        Ok(detections)
    }

    /// Stops the realtime loop on its next tick and releases nothing else;
    /// the driver can keep serving `state()` queries after disposal.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }

    pub fn log(&self) -> &TableLog {
        &self.log
    }

    pub fn archive(&self) -> &BlipArchive {
        &self.archive
    }
}
