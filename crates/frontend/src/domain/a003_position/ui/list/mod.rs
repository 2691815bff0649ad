use contracts::domain::a003_position::{Position, PositionStatus};
use contracts::shared::filter::{filter_records, StatusFilter, STATUS_ALL};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::store_context::use_record_store;

#[component]
pub fn PositionList() -> impl IntoView {
    let store = use_record_store();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(STATUS_ALL.to_string());
    let total = store.with_value(|s| s.positions.len());

    let items = Memo::new(move |_| {
        let query = search.get();
        let filter = StatusFilter::parse(&status.get());
        store.with_value(|s| {
            filter_records(&s.positions, &query, &filter)
                .into_iter()
                .cloned()
                .collect::<Vec<Position>>()
        })
    });

    let status_options: Vec<&'static str> =
        PositionStatus::all().iter().map(|s| s.label()).collect();

    view! {
        <PageFrame page_id="a003_position--list" category=PAGE_CAT_LIST>
            <PageHeader title="Positions" subtitle="Open requirements across all clients">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| log::info!("add position: not available in demo")
                >
                    {icon("briefcase")}
                    " New position"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    search=search
                    status=status
                    status_options=status_options
                    result_count=Signal::derive(move || items.with(|i| i.len()))
                    total_count=Signal::derive(move || total)
                    placeholder="Title or client..."
                />

                <div class="card-grid">
                    <For
                        each=move || items.get()
                        key=|p| p.id.clone()
                        children=move |position| {
                            let title = position.title.clone();
                            let client_name = position.client_name.clone();
                            let fill = format!("{} of {} filled", position.filled, position.openings);
                            view! {
                                <div class="card position-card">
                                    <div class="position-card__head">
                                        <div>
                                            <h3 class="card__title">{move || highlight_matches(&title, &search.get())}</h3>
                                            <div class="card__subtitle">{move || highlight_matches(&client_name, &search.get())}</div>
                                        </div>
                                        <StatusBadge status=position.status.label() />
                                    </div>
                                    <p class="position-card__description">{position.description.clone()}</p>
                                    <div class="chip-list">
                                        {position.required_skills.iter().map(|s| view! {
                                            <span class="chip">{s.clone()}</span>
                                        }).collect_view()}
                                    </div>
                                    <div class="info-row">
                                        {icon("clock")}
                                        <span>{position.experience.clone()}</span>
                                    </div>
                                    <div class="info-row">
                                        {icon("bar-chart")}
                                        <span>{position.budget.clone()}</span>
                                    </div>
                                    <ProgressBar percent=position.fill_percent() label=fill />
                                    <div class="position-card__remaining">
                                        {format!("{} remaining", position.remaining())}
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <Show when=move || items.with(|i| i.is_empty())>
                    <div class="empty-state">"No positions match the current filters."</div>
                </Show>
            </div>
        </PageFrame>
    }
}
