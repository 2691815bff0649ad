use leptos::prelude::*;

/// Horizontal bar filled to `percent` (clamped to 0..=100).
#[component]
pub fn ProgressBar(
    percent: u32,
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let width = percent.min(100);

    view! {
        <div class="progress">
            {label.map(|l| view! { <div class="progress__label">{l}</div> })}
            <div class="progress__track">
                <div class="progress__fill" style=format!("width: {}%;", width)></div>
            </div>
        </div>
    }
}
