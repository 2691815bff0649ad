use contracts::domain::a001_candidate::Candidate;
use contracts::domain::a005_comment::Comment;
use contracts::domain::a006_interview_level::InterviewLevel;
use contracts::shared::store::RecordStore;
use leptos::prelude::*;

use crate::shared::store_context::use_record_store;

pub const NOTICE_SAVED: &str = "Changes saved";
pub const NOTICE_COMMENT_ADDED: &str = "Comment added successfully";

/// ViewModel for the candidate card. Edits and comments stay local: nothing
/// is written back to the store.
#[derive(Clone, Copy)]
pub struct CandidateDetailsViewModel {
    pub candidate: StoredValue<Option<Candidate>>,
    pub timeline: StoredValue<Vec<InterviewLevel>>,
    pub comments: StoredValue<Vec<Comment>>,
    /// "Rajesh Iyer, rajesh@techcorp.com" for the candidate's client
    pub client_contact: StoredValue<Option<String>>,
    pub recruiter_email: StoredValue<Option<String>>,
    /// Confirmation shown after the last save or comment
    pub notice: RwSignal<Option<&'static str>>,
    pub is_editing: RwSignal<bool>,
    pub phone: RwSignal<String>,
    pub location: RwSignal<String>,
    pub expected_ctc: RwSignal<String>,
    pub notice_period: RwSignal<String>,
    pub comment_draft: RwSignal<String>,
}

impl CandidateDetailsViewModel {
    pub fn new(id: &str) -> Self {
        use_record_store().with_value(|store| Self::from_store(store, id))
    }

    pub fn from_store(store: &RecordStore, id: &str) -> Self {
        let candidate = store.candidate_by_id(id).cloned();
        let timeline = if candidate.is_some() {
            store.interview_levels_for(id)
        } else {
            Vec::new()
        };
        let comments = store.comments_for(id).into_iter().cloned().collect::<Vec<_>>();
        let client_contact = candidate
            .as_ref()
            .and_then(|c| store.client_by_id(&c.client_id))
            .map(|client| format!("{}, {}", client.contact_person, client.contact_email));
        let recruiter_email = candidate
            .as_ref()
            .and_then(|c| store.user_by_id(&c.assigned_recruiter_id))
            .map(|user| user.email.clone());

        if candidate.is_none() {
            log::warn!("candidate not found: {}", id);
        }

        let vm = Self {
            candidate: StoredValue::new(candidate),
            timeline: StoredValue::new(timeline),
            comments: StoredValue::new(comments),
            client_contact: StoredValue::new(client_contact),
            recruiter_email: StoredValue::new(recruiter_email),
            notice: RwSignal::new(None),
            is_editing: RwSignal::new(false),
            phone: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            expected_ctc: RwSignal::new(String::new()),
            notice_period: RwSignal::new(String::new()),
            comment_draft: RwSignal::new(String::new()),
        };
        vm.reset_form();
        vm
    }

    /// Copies record values into the edit fields.
    pub fn reset_form(&self) {
        self.candidate.with_value(|c| {
            if let Some(c) = c {
                self.phone.set(c.phone.clone());
                self.location.set(c.location.clone());
                self.expected_ctc.set(c.expected_ctc.clone());
                self.notice_period.set(c.notice_period.clone());
            }
        });
    }

    pub fn start_edit(&self) {
        self.reset_form();
        self.notice.set(None);
        self.is_editing.set(true);
    }

    pub fn cancel_edit(&self) {
        self.reset_form();
        self.is_editing.set(false);
    }

    pub fn save_command(&self) {
        log::info!(
            "candidate edit not persisted (demo): phone={}, location={}",
            self.phone.get_untracked(),
            self.location.get_untracked()
        );
        self.is_editing.set(false);
        self.notice.set(Some(NOTICE_SAVED));
    }

    pub fn can_post_comment(&self) -> bool {
        !self.comment_draft.with(|d| d.trim().is_empty())
    }

    pub fn post_comment_command(&self) {
        let draft = self.comment_draft.get_untracked();
        if draft.trim().is_empty() {
            return;
        }
        log::info!("comment not persisted (demo): {} chars", draft.trim().len());
        self.comment_draft.set(String::new());
        self.notice.set(Some(NOTICE_COMMENT_ADDED));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm() -> CandidateDetailsViewModel {
        let store = RecordStore::load_embedded().expect("fixtures");
        CandidateDetailsViewModel::from_store(&store, "1")
    }

    #[test]
    fn test_related_records_are_resolved() {
        let vm = vm();
        assert_eq!(
            vm.client_contact.get_value().as_deref(),
            Some("Rajesh Iyer, rajesh@techcorp.com")
        );
        assert_eq!(vm.recruiter_email.get_value().as_deref(), Some("michael.brown@recruithub.com"));

        let store = RecordStore::load_embedded().expect("fixtures");
        let missing = CandidateDetailsViewModel::from_store(&store, "missing");
        assert!(missing.candidate.get_value().is_none());
        assert!(missing.client_contact.get_value().is_none());
    }

    #[test]
    fn test_save_shows_confirmation() {
        let vm = vm();
        vm.start_edit();
        assert_eq!(vm.notice.get_untracked(), None);
        vm.phone.set("+91 90000 00000".into());
        vm.save_command();
        assert!(!vm.is_editing.get_untracked());
        assert_eq!(vm.notice.get_untracked(), Some(NOTICE_SAVED));

        vm.start_edit();
        assert_eq!(vm.notice.get_untracked(), None);
    }

    #[test]
    fn test_comment_confirmation_needs_text() {
        let vm = vm();
        vm.comment_draft.set("   ".into());
        vm.post_comment_command();
        assert_eq!(vm.notice.get_untracked(), None);

        vm.comment_draft.set("Looks good".into());
        vm.post_comment_command();
        assert_eq!(vm.notice.get_untracked(), Some(NOTICE_COMMENT_ADDED));
        assert!(vm.comment_draft.get_untracked().is_empty());
    }
}
