use chrono::Utc;
use contracts::dashboards::d400_dashboard_stats::status_distribution;
use contracts::domain::a004_activity::{recent, Activity};
use contracts::system::session::SessionContext;
use leptos::prelude::*;

use crate::shared::components::bar_chart::MonthlyChart;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_relative;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::store_context::use_record_store;
use crate::system::auth::context::use_session;

const RECENT_ACTIVITY_LIMIT: usize = 5;

fn greeting(session: &SessionContext) -> String {
    match session.current_identity() {
        Some(identity) => format!("Welcome back, {}", identity.name),
        None => "Welcome back".to_string(),
    }
}

/// Главная страница: KPI, динамика по месяцам, воронка и лента событий
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_record_store();
    let (session, _) = use_session();

    let stats = store.with_value(|s| s.dashboard_stats.clone());
    let (points, peak) = store.with_value(|s| (s.reports.monthly.clone(), s.reports.monthly_peak()));
    let distribution = store.with_value(|s| status_distribution(&s.candidates));
    let candidate_count: usize = distribution.iter().map(|d| d.count).sum();
    let activities: Vec<Activity> = store.with_value(|s| {
        recent(&s.activities, RECENT_ACTIVITY_LIMIT)
            .into_iter()
            .cloned()
            .collect()
    });

    view! {
        <PageFrame page_id="d400_dashboard_stats--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" subtitle=Signal::derive(move || Some(session.with(greeting))) />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total candidates"
                        icon_name="users"
                        value=stats.total_candidates.to_string()
                        trend=stats.candidates_trend
                    />
                    <StatCard
                        label="Open positions"
                        icon_name="briefcase"
                        value=stats.open_positions.to_string()
                        trend=stats.positions_trend
                    />
                    <StatCard
                        label="Pending interviews"
                        icon_name="calendar"
                        value=stats.pending_interviews.to_string()
                        trend=stats.interviews_trend
                    />
                    <StatCard
                        label="Placement rate"
                        icon_name="trending-up"
                        value=format!("{:.1}%", stats.placement_rate)
                        trend=stats.placement_trend
                    />
                </div>

                <div class="dashboard-grid">
                    <div class="card">
                        <h3 class="card__title">"Monthly pipeline"</h3>
                        <MonthlyChart points=points peak=peak />
                    </div>

                    <div class="card">
                        <h3 class="card__title">"Candidate status"</h3>
                        {distribution.into_iter().map(|entry| {
                            let percent = if candidate_count == 0 {
                                0
                            } else {
                                (entry.count * 100 / candidate_count) as u32
                            };
                            view! {
                                <ProgressBar
                                    percent=percent
                                    label=format!("{}: {}", entry.status, entry.count)
                                />
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="card">
                    <h3 class="card__title">"Recent activity"</h3>
                    <ul class="activity-feed">
                        {activities.into_iter().map(|a| {
                            let when = format_relative(&a.timestamp, &Utc::now());
                            view! {
                                <li class="activity-feed__item">
                                    <div class="activity-feed__icon">{icon(a.kind.icon())}</div>
                                    <div class="activity-feed__body">
                                        <div class="activity-feed__title">{a.title}</div>
                                        <div class="activity-feed__description">{a.description}</div>
                                        <div class="activity-feed__meta">
                                            {format!("{} \u{00b7} {}", a.user_name, when)}
                                        </div>
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::{AccountStatus, Identity, Role};

    #[test]
    fn test_greeting_uses_signed_in_name() {
        let mut session = SessionContext::new();
        assert_eq!(greeting(&session), "Welcome back");

        session.login(Identity {
            id: "2".into(),
            name: "Sarah Wilson".into(),
            email: "sarah@recruithub.com".into(),
            role: Role::Bdm,
            status: AccountStatus::Active,
        });
        assert_eq!(greeting(&session), "Welcome back, Sarah Wilson");

        session.logout();
        assert_eq!(greeting(&session), "Welcome back");
    }
}
