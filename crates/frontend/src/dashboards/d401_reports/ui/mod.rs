mod reports;

pub use reports::ReportsPage;
