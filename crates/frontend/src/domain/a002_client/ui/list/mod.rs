use contracts::domain::a002_client::{Client, ClientStatus};
use contracts::shared::filter::{filter_records, StatusFilter, STATUS_ALL};
use leptos::prelude::*;

use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::store_context::use_record_store;

#[component]
pub fn ClientList() -> impl IntoView {
    let store = use_record_store();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(STATUS_ALL.to_string());
    let total = store.with_value(|s| s.clients.len());

    let items = Memo::new(move |_| {
        let query = search.get();
        let filter = StatusFilter::parse(&status.get());
        store.with_value(|s| {
            filter_records(&s.clients, &query, &filter)
                .into_iter()
                .cloned()
                .collect::<Vec<Client>>()
        })
    });

    let status_options: Vec<&'static str> = ClientStatus::all().iter().map(|s| s.label()).collect();

    view! {
        <PageFrame page_id="a002_client--list" category=PAGE_CAT_LIST>
            <PageHeader title="Clients" subtitle="Companies we recruit for" />

            <div class="page__content">
                <FilterPanel
                    search=search
                    status=status
                    status_options=status_options
                    result_count=Signal::derive(move || items.with(|i| i.len()))
                    total_count=Signal::derive(move || total)
                    placeholder="Name, industry or location..."
                />

                <div class="card-grid">
                    <For
                        each=move || items.get()
                        key=|c| c.id.clone()
                        children=move |client| {
                            let name = client.name.clone();
                            let industry = client.industry.clone();
                            let location = client.location.clone();
                            let listed = store.with_value(|s| s.positions_for_client(&client.id).len());
                            view! {
                                <div class="card client-card">
                                    <div class="client-card__head">
                                        <div class="client-card__logo">{icon("building")}</div>
                                        <div>
                                            <h3 class="card__title">{move || highlight_matches(&name, &search.get())}</h3>
                                            <div class="card__subtitle">{move || highlight_matches(&industry, &search.get())}</div>
                                        </div>
                                        <StatusBadge status=client.status.label() />
                                    </div>
                                    <div class="info-row">
                                        {icon("map-pin")}
                                        <span>{move || highlight_matches(&location, &search.get())}</span>
                                    </div>
                                    <div class="info-row">
                                        {icon("users")}
                                        <span>{client.contact_person.clone()}</span>
                                    </div>
                                    <div class="info-row">
                                        {icon("mail")}
                                        <span>{client.contact_email.clone()}</span>
                                    </div>
                                    <div class="info-row">
                                        {icon("phone")}
                                        <span>{client.contact_phone.clone()}</span>
                                    </div>
                                    <div class="client-card__stats">
                                        <div>
                                            <div class="client-card__stat-value">{client.open_positions}</div>
                                            <div class="client-card__stat-label">"Open positions"</div>
                                        </div>
                                        <div>
                                            <div class="client-card__stat-value">{client.active_contracts}</div>
                                            <div class="client-card__stat-label">"Active contracts"</div>
                                        </div>
                                        <div>
                                            <div class="client-card__stat-value">{listed}</div>
                                            <div class="client-card__stat-label">"Listed positions"</div>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <Show when=move || items.with(|i| i.is_empty())>
                    <div class="empty-state">"No clients match the current filters."</div>
                </Show>
            </div>
        </PageFrame>
    }
}
