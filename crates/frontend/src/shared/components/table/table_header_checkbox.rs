//! Чекбокс «выбрать все» в заголовке таблицы

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

fn checkbox_state(ids: &[String], selected: &HashSet<String>) -> CheckboxState {
    if ids.is_empty() {
        return CheckboxState::Unchecked;
    }
    let selected_count = ids.iter().filter(|id| selected.contains(*id)).count();
    if selected_count == 0 {
        CheckboxState::Unchecked
    } else if selected_count == ids.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Три состояния: unchecked, checked, indeterminate. Клик выбирает все
/// видимые строки либо снимает выбор.
#[component]
pub fn TableHeaderCheckbox(
    /// ID видимых строк
    #[prop(into)]
    ids: Signal<Vec<String>>,

    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// true = выбрать все, false = снять все
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || {
        ids.with(|ids| selected.with(|sel| checkbox_state(ids, sel)))
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только как DOM-свойство
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let is_indeterminate = matches!(state.get(), CheckboxState::Indeterminate);
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_state() {
        let ids = vec!["1".to_string(), "2".to_string()];
        let mut sel = HashSet::new();
        assert_eq!(checkbox_state(&ids, &sel), CheckboxState::Unchecked);
        sel.insert("1".to_string());
        assert_eq!(checkbox_state(&ids, &sel), CheckboxState::Indeterminate);
        sel.insert("2".to_string());
        assert_eq!(checkbox_state(&ids, &sel), CheckboxState::Checked);
        assert_eq!(checkbox_state(&[], &sel), CheckboxState::Unchecked);
    }
}
