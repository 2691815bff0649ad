pub mod dto;

pub use dto::{MonthlyPoint, RecruiterPerformance, ReportSeries, ReportTotals};
