//! Simulation core for the radar sweep platform.
//!
//! The modules keep the per-frame scan loop pure and headless: geometry,
//! moving targets, the rotating sweep line, blip lifecycle, and the
//! persistence archive are all testable without a drawing surface.

pub mod math;
pub mod prelude;
pub mod scene;
pub mod sim;
pub mod store;
pub mod telemetry;

pub use prelude::{RadarConfig, StoreError, StoreResult};
pub use sim::SimState;
