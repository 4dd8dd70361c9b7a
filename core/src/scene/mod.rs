pub mod blip;
pub mod sweep;
pub mod target;

pub use blip::{Blip, Classification};
pub use sweep::SweepLine;
pub use target::Target;
