pub mod entries;
pub mod misc;
