pub mod a001_candidate;
pub mod a002_client;
pub mod a003_position;
pub mod a004_activity;
pub mod a005_comment;
pub mod a006_interview_level;
