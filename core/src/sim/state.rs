use crate::prelude::RadarConfig;
use crate::scene::{Blip, Classification, SweepLine, Target};
use rand::{rngs::StdRng, SeedableRng};

/// Owned simulation state: live targets, live blips, and the sweep line.
///
/// `step` is pure with respect to the outside world. Persistence, logging,
/// and drawing all happen in the drivers, fed by the returned detections.
#[derive(Debug)]
pub struct SimState {
    pub config: RadarConfig,
    pub targets: Vec<Target>,
    pub blips: Vec<Blip>,
    pub sweep: SweepLine,
    rng: StdRng,
    pub frame: u64,
}

impl SimState {
    pub fn new(config: RadarConfig, seed: u64) -> Self {
        let sweep = SweepLine::new(&config);
        Self {
            config,
            targets: Vec::new(),
            blips: Vec::new(),
            sweep,
            rng: StdRng::seed_from_u64(seed),
            frame: 0,
        }
    }

    /// Runs one frame and returns the detections fired during it.
    ///
    /// Order within a frame: population floor, target motion, blip
    /// decay/prune, then sweep advance with collision tests. Pruning before
    /// detection means a blip always survives the frame it fired in.
    pub fn step(&mut self) -> Vec<Blip> {
        let surface = self.config.surface_size();

        // One spawn per frame while under the floor: the population ramps
        // up rather than appearing at once.
        if self.targets.len() < self.config.target_floor {
            self.targets.push(Target::spawn(&self.config, &mut self.rng));
        }

        for target in &mut self.targets {
            target.advance(surface);
        }

        let decay = self.config.blip_decay;
        let floor = self.config.blip_floor;
        self.blips.retain_mut(|blip| {
            if blip.fade > floor {
                blip.fade *= decay;
                true
            } else {
                false
            }
        });

        self.sweep.advance();
        let mut fired = Vec::new();
        for target in &self.targets {
            if self.sweep.detects(target, self.config.beam_tolerance) {
                let blip = Blip::new(
                    target.position.x,
                    target.position.y,
                    self.config.blip_intensity,
                    Classification::random(&mut self.rng),
                );
                fired.push(blip.clone());
                self.blips.push(blip);
            }
        }

        self.frame += 1;
        fired
    }

    /// Removes one target by index. No driver calls this today; the scan
    /// loop only ever grows the population back to the floor.
    pub fn remove_target(&mut self, index: usize) -> Option<Target> {
        if index < self.targets.len() {
            Some(self.targets.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn quiet_config() -> RadarConfig {
        // No spawning: tests place their own targets.
        RadarConfig {
            target_floor: 0,
            ..RadarConfig::default()
        }
    }

    #[test]
    fn empty_state_gains_one_target_per_step_up_to_the_floor() {
        let mut state = SimState::new(RadarConfig::default(), 1);
        state.step();
        assert_eq!(state.targets.len(), 1);
        state.step();
        assert_eq!(state.targets.len(), 2);
        state.step();
        assert_eq!(state.targets.len(), 2);
    }

    #[test]
    fn crafted_target_reflects_off_the_right_wall() {
        let mut state = SimState::new(quiet_config(), 1);
        state
            .targets
            .push(Target::new(Vec2::new(390.0, 200.0), 2.0, Vec2::new(4.0, 0.0)));
        // 390 + 3*4 = 402 > 398, so the third step clamps and reflects.
        for _ in 0..3 {
            state.step();
        }
        let target = &state.targets[0];
        assert_eq!(target.position.x, 398.0);
        assert_eq!(target.velocity.x, -4.0);
    }

    #[test]
    fn sweep_angle_advance_is_independent_of_target_count() {
        let config = quiet_config();
        let mut crowded = SimState::new(config.clone(), 1);
        for i in 0..5 {
            crowded
                .targets
                .push(Target::new(Vec2::new(50.0 + i as f32, 50.0), 2.0, Vec2::default()));
        }
        let mut empty = SimState::new(config, 2);
        for _ in 0..100 {
            crowded.step();
            empty.step();
        }
        assert_eq!(crowded.sweep.angle, empty.sweep.angle);
    }

    #[test]
    fn detection_fires_for_target_on_the_current_beam() {
        let mut state = SimState::new(quiet_config(), 1);
        // First step advances the sweep to one degree; place the target on
        // that ray, halfway along the segment.
        let angle = state.config.sweep_speed;
        let center = state.config.radar_radius;
        let distance = center * 0.5;
        state.targets.push(Target::new(
            Vec2::new(
                center + distance * angle.cos(),
                center + distance * angle.sin(),
            ),
            2.0,
            Vec2::default(),
        ));
        let fired = state.step();
        assert_eq!(fired.len(), 1);
        assert_eq!(state.blips.len(), 1);
        assert_eq!(fired[0].fade, state.config.blip_intensity);
    }

    #[test]
    fn stationary_target_is_detected_once_per_revolution() {
        let mut state = SimState::new(quiet_config(), 1);
        // On the ray the sweep reaches after 90 one-degree steps, at half
        // the segment length: (center, center + 100).
        let center = state.config.radar_radius;
        state.targets.push(Target::new(
            Vec2::new(center, center + 100.0),
            2.0,
            Vec2::default(),
        ));

        let mut hits = Vec::new();
        for frame in 1..=360 {
            if !state.step().is_empty() {
                hits.push(frame);
            }
        }
        assert_eq!(hits, vec![90]);
    }

    #[test]
    fn blip_fade_decreases_and_prunes_at_the_floor() {
        let mut state = SimState::new(quiet_config(), 1);
        state
            .blips
            .push(Blip::new(10.0, 10.0, 0.2, Classification::Unknown));

        let mut last = 0.2;
        while !state.blips.is_empty() {
            state.step();
            if let Some(blip) = state.blips.first() {
                assert!(blip.fade < last);
                last = blip.fade;
            }
        }
        // The final observed fade had already decayed to the floor.
        assert!(last <= 0.03 / 0.997 + 1e-6);
    }

    #[test]
    fn blip_at_the_floor_is_removed_without_another_decay() {
        let mut state = SimState::new(quiet_config(), 1);
        state
            .blips
            .push(Blip::new(10.0, 10.0, 0.03, Classification::Comet));
        state.step();
        assert!(state.blips.is_empty());
    }

    #[test]
    fn remove_target_handles_out_of_range_index() {
        let mut state = SimState::new(quiet_config(), 1);
        assert!(state.remove_target(0).is_none());
        state
            .targets
            .push(Target::new(Vec2::new(50.0, 50.0), 2.0, Vec2::default()));
        assert!(state.remove_target(0).is_some());
        assert!(state.targets.is_empty());
    }
}
