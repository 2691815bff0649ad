//! Чекбокс выбора строки
//!
//! ```ignore
//! <TableCellCheckbox
//!     item_id=row.id.clone()
//!     selected=selected
//!     on_change=Callback::new(move |(id, checked)| toggle_select(id, checked))
//! />
//! ```

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Клик по чекбоксу не доходит до строки (stop_propagation), так что
/// выбор не открывает карточку.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    item_id: String,

    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let item_id_for_checked = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|s| s.contains(&item_id_for_checked))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id.clone(), checked));
                }
            />
        </TableCell>
    }
}
