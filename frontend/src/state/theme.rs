use std::rc::Rc;

use leptos::*;

use crate::utils::storage::{KeyValueStore, MemoryStorage};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Theme> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Light/dark preference. Persisted separately from the session so logging
/// out keeps the user's choice.
#[derive(Clone)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
    storage: Rc<dyn KeyValueStore>,
}

impl ThemeState {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let initial = storage
            .get(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self {
            theme: create_rw_signal(initial),
            storage,
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        if let Err(err) = self.storage.set(THEME_KEY, theme.as_str()) {
            log::warn!("Failed to persist theme: {}", err);
        }
        self.apply_to_dom();
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    fn apply_to_dom(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            let theme = self.theme.get_untracked();
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = root.set_attribute("data-theme", theme.as_str());
            }
        }
    }
}

pub fn provide_theme(storage: Rc<dyn KeyValueStore>) -> ThemeState {
    let state = ThemeState::new(storage);
    provide_context(state.clone());
    state.apply_to_dom();
    state
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
        .unwrap_or_else(|| provide_theme(Rc::new(MemoryStorage::default())))
}
