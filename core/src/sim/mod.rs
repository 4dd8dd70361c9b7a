pub mod state;

pub use state::SimState;
