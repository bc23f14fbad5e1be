pub mod steps;
pub mod way_count;

pub use steps::{MaxStep, StairCount};
pub use way_count::WayCount;
