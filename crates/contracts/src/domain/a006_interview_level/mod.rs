pub mod aggregate;

pub use aggregate::{timeline_for, InterviewLevel, InterviewStatus, MAX_INTERVIEW_LEVEL};
