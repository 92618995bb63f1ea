use std::{cell::Cell, rc::Rc};

use serde::{Deserialize, Serialize};

// the class on the root element that switches the page into dark mode
pub const DARK_MARKER: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    // a missing marker is light mode
    pub fn from_marker(present: bool) -> Self {
        if present { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // class modifier appended to each section
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

// ThemeSource
//
// the ambient element that carries the marker.  in the browser this is the
// document root and watching is done with a MutationObserver; the trait keeps
// the observer logic testable without one
pub trait ThemeSource {
    type Watch;

    fn has_dark_marker(&self) -> bool;

    fn set_dark_marker(&self, present: bool) -> anyhow::Result<()>;

    // on_change must run after every change to the marker attribute
    fn watch(&self, on_change: Box<dyn FnMut()>) -> anyhow::Result<Self::Watch>;

    fn unwatch(&self, watch: Self::Watch);
}

// flip the marker on the source and return the theme it now encodes
pub fn toggle_marker<S: ThemeSource>(source: &S) -> anyhow::Result<Theme> {
    let next = Theme::from_marker(source.has_dark_marker()).toggled();
    source.set_dark_marker(next.is_dark())?;
    tracing::info!("theme toggled to {:?}", next);
    Ok(next)
}

// ThemeObserver
//
// one observer per page; it reports the initial theme immediately and then
// every distinct change.  the watch is released when the observer is dropped,
// and only then
pub struct ThemeObserver<S: ThemeSource> {
    source: S,
    watch: Option<S::Watch>,
    current: Rc<Cell<Theme>>,
}

impl<S> ThemeObserver<S>
where
    S: ThemeSource + Clone + 'static,
{
    pub fn attach(source: S, mut on_change: impl FnMut(Theme) + 'static) -> anyhow::Result<Self> {
        let current = Rc::new(Cell::new(Theme::from_marker(source.has_dark_marker())));
        on_change(current.get());

        let watched = source.clone();
        let last = current.clone();

        let watch = source.watch(Box::new(move || {
            let theme = Theme::from_marker(watched.has_dark_marker());
            if theme != last.get() {
                last.set(theme);
                on_change(theme);
            }
        }))?;

        tracing::debug!("theme observer attached, initial theme {:?}", current.get());

        Ok(ThemeObserver {
            source,
            watch: Some(watch),
            current,
        })
    }
}

impl<S: ThemeSource> ThemeObserver<S> {
    pub fn theme(&self) -> Theme {
        self.current.get()
    }
}

impl<S: ThemeSource> Drop for ThemeObserver<S> {
    fn drop(&mut self) {
        if let Some(watch) = self.watch.take() {
            self.source.unwatch(watch);
            tracing::debug!("theme observer detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    type Callback = Box<dyn FnMut()>;

    #[derive(Default)]
    struct RootState {
        dark: bool,
        next_id: u32,
        watchers: Vec<(u32, Callback)>,
        detached: Vec<u32>,
    }

    // stands in for the document root
    #[derive(Clone, Default)]
    struct FakeRoot {
        state: Rc<RefCell<RootState>>,
    }

    impl FakeRoot {
        fn with_marker(dark: bool) -> Self {
            let root = FakeRoot::default();
            root.state.borrow_mut().dark = dark;
            root
        }

        // mutate the class attribute the way an outside toggle would
        fn set_class(&self, dark: bool) {
            self.state.borrow_mut().dark = dark;

            // callbacks read the marker back, so they must run unborrowed
            let mut watchers = std::mem::take(&mut self.state.borrow_mut().watchers);
            for (_, callback) in watchers.iter_mut() {
                callback();
            }
            self.state.borrow_mut().watchers.extend(watchers);
        }

        fn detached(&self) -> Vec<u32> {
            self.state.borrow().detached.clone()
        }

        fn watcher_count(&self) -> usize {
            self.state.borrow().watchers.len()
        }
    }

    impl ThemeSource for FakeRoot {
        type Watch = u32;

        fn has_dark_marker(&self) -> bool {
            self.state.borrow().dark
        }

        fn set_dark_marker(&self, present: bool) -> anyhow::Result<()> {
            self.set_class(present);
            Ok(())
        }

        fn watch(&self, on_change: Box<dyn FnMut()>) -> anyhow::Result<u32> {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.watchers.push((id, on_change));
            Ok(id)
        }

        fn unwatch(&self, watch: u32) {
            let mut state = self.state.borrow_mut();
            state.watchers.retain(|(id, _)| *id != watch);
            state.detached.push(watch);
        }
    }

    fn recording() -> (Rc<RefCell<Vec<Theme>>>, impl FnMut(Theme) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |theme| sink.borrow_mut().push(theme))
    }

    #[test]
    fn initial_theme_follows_marker() {
        for dark in [false, true] {
            let root = FakeRoot::with_marker(dark);
            let (seen, sink) = recording();

            let observer = ThemeObserver::attach(root.clone(), sink).unwrap();

            assert_eq!(observer.theme(), Theme::from_marker(dark));
            assert_eq!(*seen.borrow(), vec![Theme::from_marker(dark)]);
        }
    }

    #[test]
    fn follows_every_marker_change() {
        let root = FakeRoot::with_marker(false);
        let (seen, sink) = recording();
        let observer = ThemeObserver::attach(root.clone(), sink).unwrap();

        root.set_class(true);
        assert_eq!(observer.theme(), Theme::Dark);

        root.set_class(false);
        assert_eq!(observer.theme(), Theme::Light);

        assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark, Theme::Light]);
    }

    #[test]
    fn unrelated_attribute_changes_are_not_reported() {
        let root = FakeRoot::with_marker(true);
        let (seen, sink) = recording();
        let _observer = ThemeObserver::attach(root.clone(), sink).unwrap();

        root.set_class(true);
        root.set_class(true);

        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn detaches_exactly_once_on_drop() {
        let root = FakeRoot::with_marker(false);
        let (seen, sink) = recording();

        let observer = ThemeObserver::attach(root.clone(), sink).unwrap();
        assert_eq!(root.watcher_count(), 1);
        assert!(root.detached().is_empty());

        drop(observer);
        assert_eq!(root.detached(), vec![0]);
        assert_eq!(root.watcher_count(), 0);

        // no callbacks reach a dropped observer
        root.set_class(true);
        assert_eq!(*seen.borrow(), vec![Theme::Light]);
        assert_eq!(root.detached(), vec![0]);
    }

    #[test]
    fn consumers_agree_after_toggle() {
        let root = FakeRoot::with_marker(false);
        let shared = Rc::new(Cell::new(Theme::Dark));
        let sink = shared.clone();
        let _observer = ThemeObserver::attach(root.clone(), move |t| sink.set(t)).unwrap();

        // every section reads the same cell
        let sections = vec![shared.clone(), shared.clone(), shared.clone()];
        assert!(sections.iter().all(|s| s.get() == Theme::Light));

        assert_eq!(toggle_marker(&root).unwrap(), Theme::Dark);
        assert!(root.has_dark_marker());
        assert!(sections.iter().all(|s| s.get() == Theme::Dark));

        assert_eq!(toggle_marker(&root).unwrap(), Theme::Light);
        assert!(sections.iter().all(|s| s.get() == Theme::Light));
    }
}
