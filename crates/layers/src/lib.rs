pub mod directions;
pub mod error;
pub mod geojson;
pub mod heatmap;
pub mod layer;
pub mod locations;
pub mod map;
pub mod markers;
pub mod overlay;
pub mod viewport;

pub use error::*;
pub use layer::*;
pub use map::*;
pub use viewport::*;
