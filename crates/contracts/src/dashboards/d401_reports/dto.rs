use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub candidates: u32,
    pub placements: u32,
    pub interviews: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterPerformance {
    pub name: String,
    pub candidates: u32,
    pub placements: u32,
}

impl RecruiterPerformance {
    /// Placements per candidate in whole percent.
    pub fn conversion_percent(&self) -> u32 {
        if self.candidates == 0 {
            0
        } else {
            self.placements * 100 / self.candidates
        }
    }
}

/// Series behind the Reports page and the dashboard trend chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSeries {
    pub monthly: Vec<MonthlyPoint>,
    pub recruiter_performance: Vec<RecruiterPerformance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportTotals {
    pub candidates: u32,
    pub placements: u32,
    pub interviews: u32,
}

impl ReportTotals {
    pub fn success_rate_percent(&self) -> u32 {
        if self.candidates == 0 {
            0
        } else {
            self.placements * 100 / self.candidates
        }
    }
}

impl ReportSeries {
    pub fn totals(&self) -> ReportTotals {
        self.monthly.iter().fold(ReportTotals::default(), |acc, p| ReportTotals {
            candidates: acc.candidates + p.candidates,
            placements: acc.placements + p.placements,
            interviews: acc.interviews + p.interviews,
        })
    }

    /// Largest monthly value across all three series; scales bar widths.
    pub fn monthly_peak(&self) -> u32 {
        self.monthly
            .iter()
            .map(|p| p.candidates.max(p.placements).max(p.interviews))
            .max()
            .unwrap_or(0)
    }
}
