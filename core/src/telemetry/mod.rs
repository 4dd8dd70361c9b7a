pub mod log;

pub use log::{BlipLog, BlipRow, TableLog};
