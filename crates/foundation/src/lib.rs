pub mod bounds;
pub mod ids;
pub mod math;

// Foundation crate: small, well-tested geographic primitives only.
pub use bounds::*;
pub use ids::*;
