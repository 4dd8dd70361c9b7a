use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Fixed scan parameters shared by every component of the simulation.
///
/// The defaults reproduce the reference scope: a 200-unit radius surface,
/// one-degree sweep steps, and the blip fade schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
    /// Radius of the circular scan area; the surface is square with side
    /// `2 * radar_radius`.
    pub radar_radius: f32,
    /// Angular advance of the sweep line per frame, in radians.
    pub sweep_speed: f32,
    /// Perpendicular distance below which a target counts as on the beam.
    pub beam_tolerance: f32,
    /// Minimum live target population; one target spawns per frame while
    /// the count is below this.
    pub target_floor: usize,
    /// Radius of every spawned target.
    pub target_radius: f32,
    /// Magnitude bound for each spawned velocity component.
    pub spawn_speed: f32,
    /// Initial fade value of a freshly fired blip.
    pub blip_intensity: f32,
    /// Multiplicative fade decay applied each live frame.
    pub blip_decay: f32,
    /// Fade level at or below which a blip is pruned.
    pub blip_floor: f32,
}

impl RadarConfig {
    /// Side length of the square drawing surface.
    pub fn surface_size(&self) -> f32 {
        self.radar_radius * 2.0
    }
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            radar_radius: 200.0,
            sweep_speed: PI / 180.0,
            beam_tolerance: 1.0,
            target_floor: 2,
            target_radius: 2.0,
            spawn_speed: 0.1,
            blip_intensity: 0.2,
            blip_decay: 0.997,
            blip_floor: 0.03,
        }
    }
}

/// Error type for the persistence adapter. Decode failures are not listed
/// here on purpose: a slot that fails to decode reads back as empty.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("store I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("record encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_scope() {
        let config = RadarConfig::default();
        assert_eq!(config.surface_size(), 400.0);
        assert_eq!(config.target_floor, 2);
        assert!(config.blip_decay < 1.0);
    }
}
