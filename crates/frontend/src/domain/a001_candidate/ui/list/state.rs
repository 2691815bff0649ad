use contracts::domain::a001_candidate::Candidate;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CandidateListState {
    pub items: Vec<Candidate>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub total_count: usize,
}

impl Default for CandidateListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            // fixture order until a header is clicked
            sort_field: String::new(),
            sort_ascending: true,
            total_count: 0,
        }
    }
}

pub fn create_state() -> RwSignal<CandidateListState> {
    RwSignal::new(CandidateListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_unsorted() {
        let state = CandidateListState::default();
        assert!(state.sort_field.is_empty());
        assert!(state.sort_ascending);
    }
}
