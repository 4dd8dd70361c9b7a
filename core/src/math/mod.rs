pub mod geometry;

pub use geometry::{point_to_line_distance, Vec2};
