mod state;

use contracts::system::auth::{AccountStatus, Role};
use contracts::system::users::{count_by_role, members_with_role, User};
use contracts::shared::filter::{filter_records, StatusFilter, STATUS_ALL};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, get_sort_class, get_sort_indicator, highlight_matches, sort_list, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::store_context::use_record_store;
use state::create_state;

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "email" => cmp_text(&self.email, &other.email),
            "status" => self.status.label().cmp(other.status.label()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[component]
pub fn TeamPage() -> impl IntoView {
    let store = use_record_store();
    let state = create_state();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(STATUS_ALL.to_string());
    let total = store.with_value(|s| s.users.len());

    // Счётчики по ролям считаются по всей команде, не по фильтру
    let role_counts = store.with_value(|s| count_by_role(&s.users));

    let refresh_view = move || {
        let query = search.get_untracked();
        let filter = StatusFilter::parse(&status.get_untracked());
        let mut data: Vec<User> = store.with_value(|s| {
            filter_records(&s.users, &query, &filter)
                .into_iter()
                .cloned()
                .collect()
        });
        state.update(|s| {
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.total_count = data.len();
            s.items = data;
        });
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

    let sort_header = move |label: &'static str, field: &'static str| {
        view! {
            <TableHeaderCell>
                <div class="table__sortable-header" style="cursor: pointer;" on:click=move |_| toggle_sort(field)>
                    {label}
                    <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                        {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                    </span>
                </div>
            </TableHeaderCell>
        }
    };

    let status_options: Vec<&'static str> =
        AccountStatus::all().iter().map(|s| s.label()).collect();

    view! {
        <PageFrame page_id="sys_users--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Team" subtitle="Recruiters, managers and administrators">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| log::info!("invite member: not available in demo")
                >
                    {icon("user-plus")}
                    " Invite member"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    {role_counts.into_iter().map(|(role, count)| view! {
                        <StatCard
                            label=role.display_name()
                            icon_name="users"
                            value=count.to_string()
                            subtitle=role.code()
                        />
                    }).collect_view()}
                </div>

                <FilterPanel
                    search=search
                    status=status
                    status_options=status_options
                    result_count=Signal::derive(move || state.with(|s| s.total_count))
                    total_count=Signal::derive(move || total)
                    placeholder="Name, email or role..."
                />

                {Role::ALL.into_iter().map(move |role| {
                    let members = move || {
                        state.with(|s| {
                            members_with_role(&s.items, role)
                                .into_iter()
                                .cloned()
                                .collect::<Vec<User>>()
                        })
                    };
                    let has_members = move || state.with(|s| s.items.iter().any(|u| u.role == role));
                    view! {
                        <Show when=has_members>
                            <section class="team-group">
                                <h3 class="team-group__title">{role.display_name()}</h3>
                                <Table attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            {sort_header("Name", "name")}
                                            {sort_header("Email", "email")}
                                            {sort_header("Status", "status")}
                                            {sort_header("Member since", "created_at")}
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        <For
                                            each=members
                                            key=|u| u.id.clone()
                                            children=move |user| {
                                                let name = user.name.clone();
                                                let email = user.email.clone();
                                                let initials = user.to_identity().initials();
                                                view! {
                                                    <TableRow>
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                <span class="avatar avatar--small">{initials}</span>
                                                                " "
                                                                {move || highlight_matches(&name, &search.get())}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                {move || highlight_matches(&email, &search.get())}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <StatusBadge status=user.status.label() />
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                {format_datetime(&user.created_at)}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                            }
                                        />
                                    </TableBody>
                                </Table>
                            </section>
                        </Show>
                    }
                }).collect_view()}

                <Show when=move || state.with(|s| s.items.is_empty())>
                    <div class="empty-state">"No team members match the current filters."</div>
                </Show>
            </div>
        </PageFrame>
    }
}
