use crate::dashboards::d400_dashboard_stats::ui::DashboardPage;
use crate::dashboards::d401_reports::ui::ReportsPage;
use crate::domain::a001_candidate::ui::details::CandidateDetails;
use crate::domain::a001_candidate::ui::list::CandidateList;
use crate::domain::a002_client::ui::list::ClientList;
use crate::domain::a003_position::ui::list::PositionList;
use crate::layout::global_context::use_global_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::{AccessDenied, RequireAuth};
use crate::system::users::ui::list::TeamPage;
use contracts::system::navigation::{resolve_route, AppRoute, RouteDecision};
use leptos::prelude::*;

fn render_page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Candidates => view! { <CandidateList /> }.into_any(),
        AppRoute::CandidateDetail(id) => view! { <CandidateDetails id=id /> }.into_any(),
        AppRoute::Clients => view! { <ClientList /> }.into_any(),
        AppRoute::Positions => view! { <PositionList /> }.into_any(),
        AppRoute::Team => view! { <TeamPage /> }.into_any(),
        AppRoute::Reports => view! { <ReportsPage /> }.into_any(),
        // Login is rendered outside of the shell
        AppRoute::Login => ().into_any(),
    }
}

#[component]
fn MainLayout(#[prop(into)] decision: Signal<RouteDecision>) -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                let decision = decision;
                view! {
                    {move || match decision.get() {
                        RouteDecision::Render(route) => render_page(route),
                        RouteDecision::Forbidden(destination) => {
                            view! { <AccessDenied destination=destination /> }.into_any()
                        }
                        RouteDecision::Redirect(_) => ().into_any(),
                    }}
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_global_context();
    let (session, _) = use_session();

    ctx.init_router_integration();

    let decision = Memo::new(move |_| {
        let path = ctx.path.get();
        session.with(|s| resolve_route(&path, s))
    });

    Effect::new(move |_| {
        if let RouteDecision::Redirect(to) = decision.get() {
            ctx.redirect(to);
        }
    });

    view! {
        <RequireAuth>
            <MainLayout decision=decision />
        </RequireAuth>
    }
}
