use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{error, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, MutationObserver, MutationObserverInit};

use api::theme::{DARK_MARKER, Theme, ThemeObserver, ThemeSource, toggle_marker};

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

// DocumentRoot
//
// the <html> element, which carries the dark marker as a class
#[derive(Clone)]
pub struct DocumentRoot {
    root: Option<Element>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());

        DocumentRoot { root }
    }
}

pub struct RootWatch {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut()>,
}

impl ThemeSource for DocumentRoot {
    type Watch = RootWatch;

    fn has_dark_marker(&self) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.class_list().contains(DARK_MARKER))
    }

    fn set_dark_marker(&self, present: bool) -> anyhow::Result<()> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| anyhow::Error::msg("no document root to mark"))?;

        root.class_list()
            .toggle_with_force(DARK_MARKER, present)
            .map_err(js_error)?;
        Ok(())
    }

    fn watch(&self, on_change: Box<dyn FnMut()>) -> anyhow::Result<RootWatch> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| anyhow::Error::msg("no document root to watch"))?;

        // the observer passes (records, observer), neither of which we need
        let callback = Closure::wrap(on_change);
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(js_error)?;

        let options = MutationObserverInit::new();
        options.set_attributes(true);
        observer.observe_with_options(root, &options).map_err(js_error)?;

        Ok(RootWatch {
            observer,
            _callback: callback,
        })
    }

    fn unwatch(&self, watch: RootWatch) {
        watch.observer.disconnect();
    }
}

// use_theme_provider
//
// called once, by the root component.  the observer lives in the hook, so it is
// detached when the root unmounts; sections read the signal with use_theme()
pub fn use_theme_provider() -> Signal<Theme> {
    let mut theme =
        use_context_provider(|| Signal::new(Theme::from_marker(DocumentRoot::new().has_dark_marker())));

    use_hook(move || {
        let observer = ThemeObserver::attach(DocumentRoot::new(), move |next| {
            if *theme.peek() != next {
                theme.set(next);
            }
        });

        match observer {
            Ok(observer) => Some(Rc::new(observer)),
            Err(err) => {
                warn!("theme changes will not be tracked: {err}");
                None
            }
        }
    });

    theme
}

pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

// the control outside of the sections that flips the marker; the observer then
// carries the change to everyone
pub fn toggle_theme() {
    if let Err(err) = toggle_marker(&DocumentRoot::new()) {
        error!("failed to toggle theme: {err}");
    }
}
