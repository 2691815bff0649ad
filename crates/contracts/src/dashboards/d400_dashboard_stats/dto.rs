use serde::{Deserialize, Serialize};

use crate::domain::a001_candidate::{Candidate, CandidateStatus};

/// KPI cards on the dashboard. Trends are percent change vs. last month.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_candidates: u32,
    pub open_positions: u32,
    pub pending_interviews: u32,
    pub placement_rate: f64,
    pub candidates_trend: f64,
    pub positions_trend: f64,
    pub interviews_trend: f64,
    pub placement_trend: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Candidates per pipeline stage, in status order. Interview levels share one
/// bucket; empty stages are left out.
pub fn status_distribution(candidates: &[Candidate]) -> Vec<StatusCount> {
    let mut result: Vec<StatusCount> = Vec::new();
    for status in CandidateStatus::all() {
        let stage = status.pipeline_stage();
        let count = candidates.iter().filter(|c| c.status == status).count();
        if count == 0 {
            continue;
        }
        match result.iter_mut().find(|entry| entry.status == stage) {
            Some(entry) => entry.count += count,
            None => result.push(StatusCount {
                status: stage.to_string(),
                count,
            }),
        }
    }
    result
}
