use leptos::ev;
use leptos::prelude::*;
use web_sys::window;

/// Shared UI state: current location and sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub path: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(current_pathname()),
            left_open: RwSignal::new(true),
        }
    }

    /// Keeps `path` in sync with browser back/forward buttons.
    pub fn init_router_integration(&self) {
        let path = self.path;
        let _ = window_event_listener(ev::popstate, move |_| {
            path.set(current_pathname());
        });
    }

    /// Pushes a new history entry and switches the view.
    pub fn navigate(&self, to: &str) {
        if self.path.with_untracked(|p| p == to) {
            return;
        }
        log::debug!("navigate: {} -> {}", self.path.get_untracked(), to);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(to));
            }
        }
        self.path.set(to.to_string());
    }

    /// Same as [`navigate`](Self::navigate) but replaces the current entry,
    /// so redirects do not pile up in history.
    pub fn redirect(&self, to: &str) {
        if self.path.with_untracked(|p| p == to) {
            return;
        }
        log::debug!("redirect: {} -> {}", self.path.get_untracked(), to);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(to));
            }
        }
        self.path.set(to.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
