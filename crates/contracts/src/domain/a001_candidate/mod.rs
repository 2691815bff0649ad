pub mod aggregate;

pub use aggregate::{Candidate, CandidateStatus};
