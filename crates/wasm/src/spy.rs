//! The `TocSpy` handle exposed to JavaScript.
//!
//! Attaching resolves the current document, applies the initial scan, and
//! wires the two event sources into one shared [`SectionTracker`]:
//! `hashchange` on `window`, and an `IntersectionObserver` watching every
//! tracked content anchor. Both callbacks run on the main thread and borrow
//! the tracker only for the duration of one event.

use crate::dom::{DomAnchor, DomLink, DomPage};
use crate::error::{SpyError, describe};
use std::cell::RefCell;
use std::rc::Rc;
use tocspy_core::{
    FragmentId, IntersectionEntry, Resolved, SectionTracker, TrackerConfig, resolve,
    resolve_required,
};
use tocspy_types::ViewportBand;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

type SharedTracker = Rc<RefCell<SectionTracker<DomLink>>>;

/// Keeps the TOC entry of the section being read highlighted.
///
/// # Example
///
/// ```javascript
/// import init, { TocSpy } from '@tocspy/wasm';
///
/// await init();
///
/// const spy = new TocSpy().withConfig({ activeClass: 'current' });
/// if (spy.attach()) {
///   console.log('reading', spy.activeName);
/// }
/// ```
#[wasm_bindgen]
pub struct TocSpy {
    config: TrackerConfig,
    session: Option<Session>,
}

#[wasm_bindgen]
impl TocSpy {
    /// Create a spy with the default selectors (`.toc`, `.toc a`,
    /// `.content main a`, `.menu-bar`).
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: TrackerConfig::default(),
            session: None,
        }
    }

    /// Override configuration from a plain object.
    ///
    /// Keys are camelCase (`tocSelector`, `activeClass`, `lookAheadPx`, ...);
    /// missing keys keep their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(mut self, config: JsValue) -> Result<TocSpy, JsValue> {
        let config: TrackerConfig = serde_wasm_bindgen::from_value(config).map_err(SpyError::from)?;
        config.validate().map_err(SpyError::from)?;
        self.config = config;
        Ok(self)
    }

    /// Start tracking the current document.
    ///
    /// Returns `false`, without touching the page, when the document has no
    /// TOC. Attaching an already attached spy re-resolves the page.
    #[wasm_bindgen]
    pub fn attach(&mut self) -> Result<bool, JsValue> {
        self.session = None;
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| SpyError::dom("No document object available"))?;

        let page = DomPage::new(document, &self.config);
        let resolution = resolve(&page, &self.config).map_err(SpyError::from)?;
        let Some(resolved) = resolution.into_resolved() else {
            return Ok(false);
        };

        self.session = Some(Session::start(window, resolved)?);
        Ok(true)
    }

    /// Like `attach`, but throws a `MISSING_TOC` error when there is no TOC.
    #[wasm_bindgen(js_name = attachRequired)]
    pub fn attach_required(&mut self) -> Result<(), JsValue> {
        self.session = None;
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| SpyError::dom("No document object available"))?;

        let page = DomPage::new(document, &self.config);
        let resolved = resolve_required(&page, &self.config).map_err(SpyError::from)?;

        self.session = Some(Session::start(window, resolved)?);
        Ok(())
    }

    /// Stop observing and remove the `hashchange` listener.
    ///
    /// The marker stays where it is.
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        self.session = None;
    }

    #[wasm_bindgen(getter, js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.session.is_some()
    }

    /// The fragment of the active section, or `undefined`.
    #[wasm_bindgen(getter, js_name = activeName)]
    pub fn active_name(&self) -> Option<String> {
        let session = self.session.as_ref()?;
        let tracker = session.tracker.try_borrow().ok()?;
        tracker.active().map(|name| name.as_str().to_string())
    }

    /// The `rootMargin` the observer was created with, or `undefined`.
    #[wasm_bindgen(getter, js_name = rootMargin)]
    pub fn root_margin(&self) -> Option<String> {
        self.session.as_ref().map(|session| session.band.root_margin())
    }

    /// Number of content anchors being watched.
    #[wasm_bindgen(getter, js_name = watchedCount)]
    pub fn watched_count(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.watched)
    }

    /// Activate `name` (a `#fragment`) directly.
    ///
    /// Returns whether the active section changed. Does nothing when detached.
    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&self, name: &str) -> bool {
        match &self.session {
            Some(session) => match session.tracker.try_borrow_mut() {
                Ok(mut tracker) => tracker.set_active(FragmentId::new(name)),
                Err(_) => false,
            },
            None => false,
        }
    }
}

impl Default for TocSpy {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach a default-configured spy for the lifetime of the page.
///
/// This is the drop-in replacement for a page-level script: the spy is never
/// detached and lives until the page unloads. Returns whether a TOC was found.
#[wasm_bindgen(js_name = autoAttach)]
pub fn auto_attach() -> Result<bool, JsValue> {
    let mut spy = TocSpy::new();
    let attached = spy.attach()?;
    if attached {
        std::mem::forget(spy);
    }
    Ok(attached)
}

fn window() -> Result<Window, SpyError> {
    web_sys::window().ok_or_else(|| SpyError::dom("No window object available"))
}

/// Live event wiring for one attached spy.
///
/// Dropping it disconnects the observer and removes the listener before the
/// closures they point at are freed.
struct Session {
    window: Window,
    tracker: SharedTracker,
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    on_hash_change: Closure<dyn FnMut()>,
    band: ViewportBand,
    watched: usize,
}

impl Session {
    fn start(
        window: Window,
        resolved: Resolved<DomLink, DomAnchor>,
    ) -> Result<Self, SpyError> {
        let Resolved {
            tracker,
            anchors,
            band,
            ..
        } = resolved;
        let tracker: SharedTracker = Rc::new(RefCell::new(tracker));

        let on_hash_change = {
            let tracker = Rc::clone(&tracker);
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                let hash = match window.location().hash() {
                    Ok(hash) => hash,
                    Err(e) => {
                        log::warn!("Could not read location.hash: {}", describe(&e));
                        return;
                    }
                };
                match tracker.try_borrow_mut() {
                    Ok(mut tracker) => {
                        tracker.on_hash_change(&hash);
                    }
                    Err(_) => log::warn!("Tracker busy, dropped hashchange to '{}'", hash),
                }
            })
        };

        let on_intersect = {
            let tracker = Rc::clone(&tracker);
            Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    let batch: Vec<IntersectionEntry> = entries
                        .iter()
                        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                        .filter_map(|entry| to_entry(&entry))
                        .collect();
                    match tracker.try_borrow_mut() {
                        Ok(mut tracker) => {
                            tracker.on_intersections(batch);
                        }
                        Err(_) => log::warn!(
                            "Tracker busy, dropped {} intersection entr(ies)",
                            batch.len()
                        ),
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&band.root_margin());
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
                .map_err(|e| {
                    SpyError::dom(format!("IntersectionObserver rejected options: {}", describe(&e)))
                })?;
        for tracked in &anchors {
            observer.observe(tracked.anchor.element());
        }

        window
            .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
            .map_err(|e| {
                observer.disconnect();
                SpyError::dom(format!("Could not listen for hashchange: {}", describe(&e)))
            })?;

        log::debug!(
            "Watching {} anchor(s) with rootMargin '{}'",
            anchors.len(),
            band.root_margin()
        );

        Ok(Self {
            window,
            tracker,
            observer,
            _on_intersect: on_intersect,
            on_hash_change,
            band,
            watched: anchors.len(),
        })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.observer.disconnect();
        if let Err(e) = self.window.remove_event_listener_with_callback(
            "hashchange",
            self.on_hash_change.as_ref().unchecked_ref(),
        ) {
            log::warn!("Could not remove hashchange listener: {}", describe(&e));
        }
    }
}

fn to_entry(entry: &IntersectionObserverEntry) -> Option<IntersectionEntry> {
    let id = entry.target().parent_element()?.id();
    if id.is_empty() {
        log::trace!("Ignoring crossing of an anchor without a parent id");
        return None;
    }
    Some(IntersectionEntry {
        target: FragmentId::from_element_id(&id),
        is_intersecting: entry.is_intersecting(),
    })
}
