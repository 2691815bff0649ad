mod state;

use contracts::domain::a001_candidate::{Candidate, CandidateStatus};
use contracts::shared::filter::{FilterState, STATUS_ALL};
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, highlight_matches, sort_list, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::store_context::use_record_store;
use state::create_state;

impl Sortable for Candidate {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "position" => cmp_text(&self.position, &other.position),
            "client" => cmp_text(&self.client_name, &other.client_name),
            "status" => self.status.label().cmp(other.status.label()),
            "recruiter" => cmp_text(&self.assigned_recruiter_name, &other.assigned_recruiter_name),
            "next_interview" => self.next_interview_date.cmp(&other.next_interview_date),
            "updated_at" => self.updated_at.cmp(&other.updated_at),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[component]
pub fn CandidateList() -> impl IntoView {
    let ctx = use_global_context();
    let store = use_record_store();
    let state = create_state();
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(STATUS_ALL.to_string());
    let total = store.with_value(|s| s.candidates.len());

    let refresh_view = move || {
        let filter = FilterState::new(search.get_untracked(), &status.get_untracked());
        let mut data: Vec<Candidate> = store.with_value(|s| {
            filter
                .apply(&s.candidates)
                .into_iter()
                .cloned()
                .collect()
        });
        state.update(|s| {
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.total_count = data.len();
            s.items = data;
        });
        // Selection only spans rows that are still visible
        let visible: HashSet<String> =
            state.with_untracked(|s| s.items.iter().map(|c| c.id.clone()).collect());
        selected.update(|sel| sel.retain(|id| visible.contains(id)));
    };

    Effect::new(move |_| {
        search.track();
        status.track();
        refresh_view();
    });

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
        });
        refresh_view();
    };

    let visible_ids =
        Signal::derive(move || state.with(|s| s.items.iter().map(|c| c.id.clone()).collect::<Vec<_>>()));
    let selected_signal = Signal::derive(move || selected.get());
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let on_sort = Callback::new(toggle_sort);

    let toggle_selection = move |id: String, checked: bool| {
        selected.update(|s| {
            if checked { s.insert(id); } else { s.remove(&id); }
        });
    };

    let toggle_all = move |check_all: bool| {
        if check_all {
            selected.set(visible_ids.get_untracked().into_iter().collect());
        } else {
            selected.set(HashSet::new());
        }
    };

    let status_options: Vec<&'static str> =
        CandidateStatus::all().iter().map(|s| s.label()).collect();

    view! {
        <PageFrame page_id="a001_candidate--list" category=PAGE_CAT_LIST>
            <PageHeader title="Candidates" subtitle="Track every candidate through the hiring pipeline">
                <Badge>{move || state.with(|s| s.total_count.to_string())}</Badge>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| log::info!("add candidate: not available in demo")
                >
                    {icon("user-plus")}
                    " Add candidate"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    search=search
                    status=status
                    status_options=status_options
                    result_count=Signal::derive(move || state.with(|s| s.total_count))
                    total_count=Signal::derive(move || total)
                    placeholder="Name, email, position or client..."
                />

                <Show when=move || selected.with(|s| !s.is_empty())>
                    <div class="bulk-bar">
                        <span class="bulk-bar__count">
                            {move || format!("{} selected", selected.with(|s| s.len()))}
                        </span>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| log::info!("bulk status change for {} candidates", selected.with_untracked(|s| s.len()))
                        >
                            "Change status"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| selected.set(HashSet::new())
                        >
                            "Clear selection"
                        </Button>
                    </div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    ids=visible_ids
                                    selected=selected_signal
                                    on_change=Callback::new(toggle_all)
                                />
                                <SortableHeaderCell label="Candidate" sort_field="name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Position" sort_field="position" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Client" sort_field="client" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Status" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Recruiter" sort_field="recruiter" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Next interview" sort_field="next_interview" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|c| c.id.clone()
                                children=move |candidate| {
                                    let detail_path = format!("/candidates/{}", candidate.id);
                                    let name = candidate.name.clone();
                                    let email = candidate.email.clone();
                                    let position = candidate.position.clone();
                                    let client_name = candidate.client_name.clone();
                                    view! {
                                        <TableRow
                                            class="table__row--clickable"
                                            on:click=move |_| ctx.navigate(&detail_path)
                                        >
                                            <TableCellCheckbox
                                                item_id=candidate.id.clone()
                                                selected=selected_signal
                                                on_change=Callback::new(move |(id, checked)| toggle_selection(id, checked))
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <div class="cell-stack">
                                                        <span style="font-weight: 500;">{move || highlight_matches(&name, &search.get())}</span>
                                                        <span class="cell-stack__muted">{move || highlight_matches(&email, &search.get())}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&position, &search.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&client_name, &search.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=candidate.status.label() />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {candidate.assigned_recruiter_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_date_opt(candidate.next_interview_date.as_ref())}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || state.with(|s| s.items.is_empty())>
                        <div class="empty-state">"No candidates match the current filters."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
