mod view_model;

use contracts::domain::a001_candidate::Candidate;
use contracts::domain::a005_comment::Comment;
use contracts::domain::a006_interview_level::InterviewLevel;
use contracts::system::navigation::Destination;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::{format_date, format_date_opt, format_datetime};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use view_model::CandidateDetailsViewModel;

#[component]
pub fn CandidateDetails(id: String) -> impl IntoView {
    let ctx = use_global_context();
    let vm = CandidateDetailsViewModel::new(&id);
    let back = move |_| ctx.navigate(Destination::Candidates.path());

    let Some(candidate) = vm.candidate.get_value() else {
        return view! {
            <PageFrame page_id="a001_candidate--detail" category=PAGE_CAT_DETAIL>
                <div class="empty-state">
                    <h2>"Candidate not found"</h2>
                    <p>{format!("There is no candidate with id \"{}\".", id)}</p>
                    <Button appearance=ButtonAppearance::Primary on_click=back>
                        {icon("arrow-left")}
                        " Back to candidates"
                    </Button>
                </div>
            </PageFrame>
        }
        .into_any();
    };

    view! {
        <PageFrame page_id="a001_candidate--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <Button appearance=ButtonAppearance::Subtle on_click=back>
                        {icon("arrow-left")}
                    </Button>
                    <div>
                        <h1 class="page__title">{candidate.name.clone()}</h1>
                        <div class="page__subtitle">
                            {format!("{} at {}", candidate.position, candidate.client_name)}
                        </div>
                    </div>
                    <StatusBadge status=candidate.status.label() />
                </div>
                <div class="page__header-right">
                    <Show
                        when=move || vm.is_editing.get()
                        fallback=move || view! {
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.start_edit()>
                                {icon("edit")}
                                " Edit"
                            </Button>
                        }
                    >
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.save_command()>
                            "Save"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_edit()>
                            "Cancel"
                        </Button>
                    </Show>
                </div>
            </div>

            {move || vm.notice.get().map(|text| view! {
                <div class="page__notice">
                    <MessageBar intent=MessageBarIntent::Success>
                        <span>{text}</span>
                    </MessageBar>
                </div>
            })}

            <div class="page__content detail-grid">
                <div class="detail-grid__main">
                    <PersonalInfo candidate=candidate.clone() vm=vm />
                    <ProfessionalInfo candidate=candidate.clone() vm=vm />
                    <InterviewTimeline levels=vm.timeline.get_value() />
                </div>
                <div class="detail-grid__side">
                    <Skills skills=candidate.skills.clone() />
                    <Comments comments=vm.comments.get_value() vm=vm />
                </div>
            </div>
        </PageFrame>
    }
    .into_any()
}

/// Read-only value, or an input bound to `field` while editing.
fn editable_field(
    label: &'static str,
    icon_name: &'static str,
    value: String,
    field: RwSignal<String>,
    is_editing: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="info-row">
            {icon(icon_name)}
            <span class="info-row__label">{label}</span>
            <Show
                when=move || is_editing.get()
                fallback=move || view! { <span class="info-row__value">{value.clone()}</span> }
            >
                <Input value=field />
            </Show>
        </div>
    }
}

fn info_row(label: &'static str, icon_name: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-row">
            {icon(icon_name)}
            <span class="info-row__label">{label}</span>
            <span class="info-row__value">{value}</span>
        </div>
    }
}

#[component]
fn PersonalInfo(candidate: Candidate, vm: CandidateDetailsViewModel) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">"Personal information"</h3>
            {info_row("Email", "mail", candidate.email.clone())}
            {editable_field("Phone", "phone", candidate.phone.clone(), vm.phone, vm.is_editing)}
            {editable_field("Location", "map-pin", candidate.location.clone(), vm.location, vm.is_editing)}
            {info_row("Education", "briefcase", candidate.education.clone())}
        </div>
    }
}

#[component]
fn ProfessionalInfo(candidate: Candidate, vm: CandidateDetailsViewModel) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">"Professional details"</h3>
            {info_row("Experience", "clock", candidate.experience.clone())}
            {info_row("Current CTC", "bar-chart", candidate.current_ctc.clone())}
            {editable_field("Expected CTC", "bar-chart", candidate.expected_ctc.clone(), vm.expected_ctc, vm.is_editing)}
            {editable_field("Notice period", "calendar", candidate.notice_period.clone(), vm.notice_period, vm.is_editing)}
            {info_row("Client", "briefcase", candidate.client_name.clone())}
            {vm.client_contact.get_value().map(|contact| info_row("Client contact", "phone", contact))}
            {info_row("Recruiter", "users", candidate.assigned_recruiter_name.clone())}
            {vm.recruiter_email.get_value().map(|email| info_row("Recruiter email", "mail", email))}
            {info_row("Next interview", "calendar", format_date_opt(candidate.next_interview_date.as_ref()))}
            {candidate.join_date.map(|d| info_row("Joined on", "check", format_date(&d)))}
            {info_row("Last updated", "clock", format_datetime(&candidate.updated_at))}
        </div>
    }
}

#[component]
fn Skills(skills: Vec<String>) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">"Skills"</h3>
            <div class="chip-list">
                {skills.into_iter().map(|s| view! { <span class="chip">{s}</span> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn InterviewTimeline(levels: Vec<InterviewLevel>) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">"Interview process"</h3>
            <ol class="timeline">
                {levels.into_iter().map(|level| {
                    let step_class = if level.status.is_done() {
                        "timeline__step timeline__step--done"
                    } else {
                        "timeline__step"
                    };
                    let when = match (level.date.as_ref(), level.scheduled_time.as_deref()) {
                        (Some(d), Some(t)) => format!("{} {}", format_date(d), t),
                        (Some(d), None) => format_date(d),
                        _ => "Not scheduled".to_string(),
                    };
                    view! {
                        <li class=step_class>
                            <div class="timeline__head">
                                <span class="timeline__title">{format!("Level {}", level.level)}</span>
                                <StatusBadge status=level.status.label() />
                            </div>
                            <div class="timeline__meta">{when}</div>
                            {level.interviewer.map(|i| view! {
                                <div class="timeline__meta">{format!("Interviewer: {}", i)}</div>
                            })}
                            {level.feedback.map(|f| view! {
                                <div class="timeline__feedback">{f}</div>
                            })}
                        </li>
                    }
                }).collect_view()}
            </ol>
        </div>
    }
}

#[component]
fn Comments(comments: Vec<Comment>, vm: CandidateDetailsViewModel) -> impl IntoView {
    let is_empty = comments.is_empty();

    view! {
        <div class="card">
            <h3 class="card__title">{icon("message-square")}" Comments"</h3>
            {is_empty.then(|| view! { <div class="empty-state">"No comments yet."</div> })}
            <ul class="comment-list">
                {comments.into_iter().map(|c| view! {
                    <li class="comment">
                        <div class="comment__head">
                            <strong>{c.user_name}</strong>
                            <span class="comment__time">{format_datetime(&c.created_at)}</span>
                        </div>
                        <p class="comment__body">{c.content}</p>
                    </li>
                }).collect_view()}
            </ul>
            <div class="comment-box">
                <Textarea value=vm.comment_draft placeholder="Add a comment..." />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.can_post_comment())
                    on_click=move |_| vm.post_comment_command()
                >
                    "Post"
                </Button>
            </div>
        </div>
    }
}
