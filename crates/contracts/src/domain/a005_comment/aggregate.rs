use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::filter::Searchable;

/// Комментарий сотрудника к карточке кандидата
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub candidate_id: String,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Searchable for Comment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.content.as_str(), self.user_name.as_str()]
    }
}
