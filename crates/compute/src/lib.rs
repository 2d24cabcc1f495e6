pub mod analysis;
pub mod config;
pub mod error;

pub use analysis::{
    latitude_bounds, latitude_bounds_with, longitude_bounds, longitude_bounds_with,
    merge_intervals, merge_longitude_bounds,
};
pub use config::*;
pub use error::*;
