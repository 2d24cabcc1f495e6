pub mod guard;
pub mod latitude;
pub mod longitude;
pub mod merge;
pub mod statistics;

pub use latitude::*;
pub use longitude::*;
pub use merge::*;
