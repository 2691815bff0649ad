use crate::shared::icons::icon;
use leptos::prelude::*;

/// Arrow and CSS modifier for a trend value; changes under half a percent
/// count as flat.
pub fn trend_arrow(pct: f64) -> (&'static str, &'static str) {
    if pct > 0.5 {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if pct < -0.5 {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    }
}

pub fn format_trend(pct: f64) -> String {
    let (arrow, _) = trend_arrow(pct);
    format!("{}{:.1}%", arrow, pct.abs())
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value
    #[prop(into)]
    value: String,
    /// Change % relative to previous period
    #[prop(optional)]
    trend: Option<f64>,
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let change_view = trend.map(|pct| {
        let (_, cls) = trend_arrow(pct);
        view! { <span class=cls>{format_trend(pct)}</span> }
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value}
                    {change_view}
                </div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_trend() {
        assert_eq!(format_trend(12.5), "\u{2191}12.5%");
        assert_eq!(format_trend(-3.4), "\u{2193}3.4%");
        assert_eq!(format_trend(0.2), "0.2%");
    }
}
