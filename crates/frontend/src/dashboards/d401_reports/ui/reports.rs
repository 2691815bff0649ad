use contracts::dashboards::d401_reports::RecruiterPerformance;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::bar_chart::MonthlyChart;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::store_context::use_record_store;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let store = use_record_store();
    let series = store.with_value(|s| s.reports.clone());
    let totals = series.totals();
    let peak = series.monthly_peak();
    let period = match (series.monthly.first(), series.monthly.last()) {
        (Some(first), Some(last)) => format!("{} \u{2013} {}", first.month, last.month),
        _ => "No data".to_string(),
    };

    view! {
        <PageFrame page_id="d401_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Reports" subtitle=period.clone()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| log::info!("export report: not available in demo")
                >
                    {icon("bar-chart")}
                    " Export"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Candidates sourced" icon_name="users" value=totals.candidates.to_string() subtitle=period.clone() />
                    <StatCard label="Interviews held" icon_name="calendar" value=totals.interviews.to_string() />
                    <StatCard label="Placements" icon_name="check" value=totals.placements.to_string() />
                    <StatCard
                        label="Success rate"
                        icon_name="trending-up"
                        value=format!("{}%", totals.success_rate_percent())
                        subtitle="Placements per candidate"
                    />
                </div>

                <div class="card">
                    <h3 class="card__title">"Monthly trend"</h3>
                    <MonthlyChart points=series.monthly.clone() peak=peak />
                </div>

                <div class="card">
                    <h3 class="card__title">"Recruiter performance"</h3>
                    <RecruiterTable rows=series.recruiter_performance.clone() />
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn RecruiterTable(rows: Vec<RecruiterPerformance>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <div class="empty-state">"No recruiter data for this period."</div> }.into_any();
    }

    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Recruiter"</TableHeaderCell>
                    <TableHeaderCell>"Candidates"</TableHeaderCell>
                    <TableHeaderCell>"Placements"</TableHeaderCell>
                    <TableHeaderCell>"Conversion"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows.into_iter().map(|r| {
                    let conversion = r.conversion_percent();
                    view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{r.name}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{r.candidates}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{r.placements}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <ProgressBar percent=conversion label=format!("{}%", conversion) />
                                </TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }
                }).collect_view()}
            </TableBody>
        </Table>
    }
    .into_any()
}
