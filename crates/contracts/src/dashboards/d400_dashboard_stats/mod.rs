pub mod dto;

pub use dto::{status_distribution, DashboardStats, StatusCount};
