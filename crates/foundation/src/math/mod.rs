pub mod circular;
pub mod geodesy;
pub mod precision;

pub use circular::*;
pub use geodesy::*;
pub use precision::*;
