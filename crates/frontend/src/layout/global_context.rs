use crate::routes::PageKey;
use crate::shared::query_params::{current_path, push_path, EntryParams};
use leptos::ev;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(page_for_path(&current_path())),
            left_open: RwSignal::new(true),
        }
    }

    /// Keeps `active` in sync with browser back/forward navigation.
    pub fn init_router_integration(&self) {
        let this = *self;
        let _ = window_event_listener(ev::popstate, move |_| {
            let key = page_for_path(&current_path());
            log::debug!("popstate -> {:?}", key);
            this.active.set(key);
        });
    }

    /// Opens a page, carrying `idUsuario`/`dbNome` over to the new URL.
    pub fn navigate(&self, key: PageKey) {
        if self.active.get_untracked() == key {
            return;
        }
        if let Err(e) = push_path(key.path(), &EntryParams::current()) {
            log::warn!("Failed to update URL for {}: {}", key.path(), e);
        }
        self.active.set(key);
    }

    pub fn is_active(&self, key: PageKey) -> bool {
        self.active.get() == key
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

/// Unknown paths fall back to the default page.
fn page_for_path(path: &str) -> PageKey {
    PageKey::from_path(path).unwrap_or_else(|| {
        log::warn!("Unknown path '{}', opening default page", path);
        PageKey::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_path_opens_default_page() {
        assert_eq!(page_for_path("/nao-existe"), PageKey::FinancialIndicators);
        assert_eq!(page_for_path("/estoque-graos"), PageKey::GrainStock);
    }
}
