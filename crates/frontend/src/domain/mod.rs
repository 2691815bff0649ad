pub mod a001_candidate;
pub mod a002_client;
pub mod a003_position;
