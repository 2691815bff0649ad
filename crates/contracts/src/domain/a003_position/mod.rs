pub mod aggregate;

pub use aggregate::{Position, PositionStatus};
