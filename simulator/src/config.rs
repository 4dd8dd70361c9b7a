use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use sweepcore::prelude::RadarConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunConfig {
    pub radar_radius: f32,
    pub target_floor: usize,
    pub seed: u64,
}

impl RunConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading run config {}", path_ref.display()))?;
        let config: RunConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing run config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(radar_radius: f32, target_floor: usize, seed: u64) -> Self {
        Self {
            radar_radius,
            target_floor,
            seed,
        }
    }

    pub fn to_radar_config(&self) -> RadarConfig {
        RadarConfig {
            radar_radius: self.radar_radius,
            target_floor: self.target_floor,
            ..RadarConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_radar_config() {
        let cfg = RunConfig::from_args(200.0, 2, 7);
        let radar = cfg.to_radar_config();
        assert_eq!(radar.radar_radius, 200.0);
        assert_eq!(radar.surface_size(), 400.0);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"radar_radius: 150.0\ntarget_floor: 3\nseed: 11\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = RunConfig::load(&path).unwrap();
        assert_eq!(cfg.target_floor, 3);
        assert_eq!(cfg.seed, 11);
    }
}
