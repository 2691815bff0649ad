use crate::shared::icons::icon;
use contracts::shared::filter::{FilterState, STATUS_ALL};
use leptos::prelude::*;
use thaw::*;

/// FilterPanel component - search box, status select and result counter
///
/// Both inputs are plain signals; the owning page reacts to them and
/// recomputes its visible rows.
#[component]
pub fn FilterPanel(
    /// Free-text query
    search: RwSignal<String>,
    /// Selected status label or `"all"`
    status: RwSignal<String>,
    /// Status labels offered in the select, in display order
    status_options: Vec<&'static str>,
    /// Rows left after filtering
    #[prop(into)]
    result_count: Signal<usize>,
    /// Rows before filtering
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let is_filtered = move || !FilterState::new(search.get(), &status.get()).is_empty();

    let reset = move |_| {
        let mut state = FilterState::new(search.get_untracked(), &status.get_untracked());
        state.reset();
        search.set(state.query);
        status.set(state.status.as_str().to_string());
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div class="filter-panel__search" style="flex: 1; max-width: 360px;">
                        {icon("search")}
                        <Input value=search placeholder=placeholder />
                    </div>
                    <div style="min-width: 180px;">
                        <Select value=status>
                            <option value=STATUS_ALL>"All statuses"</option>
                            {status_options.into_iter().map(|label| view! {
                                <option value=label>{label}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    <Show when=is_filtered>
                        <Button appearance=ButtonAppearance::Secondary on_click=reset>
                            {icon("x")}
                            " Reset"
                        </Button>
                    </Show>
                </Flex>
            </div>
            <div class="filter-panel__summary">
                {move || format!("Showing {} of {}", result_count.get(), total_count.get())}
            </div>
        </div>
    }
}
