use contracts::system::users::User;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct TeamListState {
    pub items: Vec<User>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub total_count: usize,
}

impl Default for TeamListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            total_count: 0,
        }
    }
}

pub fn create_state() -> RwSignal<TeamListState> {
    RwSignal::new(TeamListState::default())
}
