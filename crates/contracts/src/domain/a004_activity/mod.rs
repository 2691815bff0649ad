pub mod aggregate;

pub use aggregate::{recent, Activity, ActivityKind};
