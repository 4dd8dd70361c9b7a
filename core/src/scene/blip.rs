use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

/// Classification attached to a detection. Chosen uniformly at random:
/// the simulation models target kinematics, not target identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Asteroid,
    Satellite,
    Comet,
    Unknown,
}

impl Classification {
    pub fn random(rng: &mut StdRng) -> Self {
        match rng.gen_range(0..4) {
            0 => Classification::Asteroid,
            1 => Classification::Satellite,
            2 => Classification::Comet,
            _ => Classification::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Asteroid => "asteroid",
            Classification::Satellite => "satellite",
            Classification::Comet => "comet",
            Classification::Unknown => "unknown",
        }
    }
}

/// Detection record fired when the sweep line crosses a target. Doubles as
/// the persisted snapshot: position and classification are fixed at
/// detection time, fade is whatever it was when the record was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blip {
    pub x: f32,
    pub y: f32,
    pub fade: f32,
    pub classification: Classification,
}

impl Blip {
    pub fn new(x: f32, y: f32, fade: f32, classification: Classification) -> Self {
        Self {
            x,
            y,
            fade,
            classification,
        }
    }
}
