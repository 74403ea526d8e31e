//! localStorage backend and the change fan-out.

use catalyst::error::StoreError;
use catalyst::store::KeyValueStore;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// The browser's localStorage behind the core key/value seam.
#[derive(Clone, Copy, Default)]
pub(super) struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|_| StoreError::Backend("localStorage: get_item() threw".to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::Backend("localStorage: set_item() threw".to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StoreError::Backend("localStorage: remove_item() threw".to_string()))
    }
}

/// Asks same-document listeners to re-read the campaign list. Cross-tab
/// readers are covered by the browser's own `storage` event.
pub(super) fn notify_campaigns_changed() {
    let Some(w) = web_sys::window() else {
        return;
    };
    if let Ok(ev) = web_sys::Event::new(super::CAMPAIGNS_EVENT) {
        let _ = w.dispatch_event(&ev);
    }
}

/// Wires the three re-read triggers: the in-page custom event, the cross-tab
/// `storage` event, and the tab becoming visible again. Listeners live for
/// the page lifetime.
pub(super) fn on_campaigns_changed(reload: Callback<()>) {
    let Some(w) = web_sys::window() else {
        return;
    };

    let cb = Closure::wrap(Box::new(move || reload.run(())) as Box<dyn FnMut()>);
    let _ = w.add_event_listener_with_callback(super::CAMPAIGNS_EVENT, cb.as_ref().unchecked_ref());
    let _ = w.add_event_listener_with_callback("storage", cb.as_ref().unchecked_ref());
    cb.forget();

    if let Some(doc) = w.document() {
        let vis = Closure::wrap(Box::new(move || {
            let hidden = web_sys::window()
                .and_then(|w| w.document())
                .map(|d| d.hidden())
                .unwrap_or(false);
            if !hidden {
                reload.run(());
            }
        }) as Box<dyn FnMut()>);
        let _ = doc.add_event_listener_with_callback("visibilitychange", vis.as_ref().unchecked_ref());
        vis.forget();
    }
}
