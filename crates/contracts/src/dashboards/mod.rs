pub mod d400_dashboard_stats;
pub mod d401_reports;
