use contracts::dashboards::d401_reports::MonthlyPoint;
use leptos::prelude::*;

/// Bar length relative to the series peak, in whole percent.
pub fn bar_percent(value: u32, peak: u32) -> u32 {
    if peak == 0 {
        0
    } else {
        (value.min(peak) * 100) / peak
    }
}

fn bar(value: u32, peak: u32, modifier: &'static str) -> impl IntoView {
    let class = format!("bar-chart__bar bar-chart__bar--{}", modifier);
    view! {
        <div class="bar-chart__track">
            <div class=class style=format!("width: {}%;", bar_percent(value, peak))></div>
            <span class="bar-chart__value">{value}</span>
        </div>
    }
}

/// Grouped horizontal bars per month: candidates, interviews, placements.
#[component]
pub fn MonthlyChart(points: Vec<MonthlyPoint>, peak: u32) -> impl IntoView {
    view! {
        <div class="bar-chart">
            <div class="bar-chart__legend">
                <span class="bar-chart__legend-item bar-chart__bar--candidates">"Candidates"</span>
                <span class="bar-chart__legend-item bar-chart__bar--interviews">"Interviews"</span>
                <span class="bar-chart__legend-item bar-chart__bar--placements">"Placements"</span>
            </div>
            {points.into_iter().map(|p| view! {
                <div class="bar-chart__group">
                    <div class="bar-chart__month">{p.month}</div>
                    <div class="bar-chart__bars">
                        {bar(p.candidates, peak, "candidates")}
                        {bar(p.interviews, peak, "interviews")}
                        {bar(p.placements, peak, "placements")}
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(31, 62), 50);
        assert_eq!(bar_percent(62, 62), 100);
        assert_eq!(bar_percent(80, 62), 100);
        assert_eq!(bar_percent(5, 0), 0);
    }
}
