use std::fmt;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::content::Section;

/// One intersection entry, stripped of its host object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self { is_intersecting, ratio }
    }

    /// True when at least `threshold` of the target is inside the root.
    pub fn reaches(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Length {
    Px(i32),
    Percent(i32),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Grows (positive) or shrinks (negative) the root box before intersections
/// are computed. Renders in CSS shorthand order: top right bottom left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin {
        top: Length::Px(0),
        right: Length::Px(0),
        bottom: Length::Px(0),
        left: Length::Px(0),
    };

    pub fn bottom_bias(px: i32) -> Self {
        Self { bottom: Length::Px(-px), ..Self::ZERO }
    }

    pub fn vertical_inset(percent: i32) -> Self {
        Self {
            top: Length::Percent(-percent),
            bottom: Length::Percent(-percent),
            ..Self::ZERO
        }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchOptions {
    threshold: f64,
    root_margin: RootMargin,
}

impl WatchOptions {
    pub fn new(threshold: f64, root_margin: RootMargin) -> Self {
        let threshold = if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) };
        Self { threshold, root_margin }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> RootMargin {
        self.root_margin
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WatchError {
    /// The host rejected the observer (bad margin syntax, missing API).
    Observer(String),
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchError::Observer(msg) => write!(f, "intersection observer unavailable: {}", msg),
        }
    }
}

impl std::error::Error for WatchError {}

impl From<JsValue> for WatchError {
    fn from(value: JsValue) -> Self {
        WatchError::Observer(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// A live subscription to viewport intersection changes of one or more
/// elements. Dropping it disconnects the observer, after which the callback is
/// never invoked again.
pub struct ViewportWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

#[cfg(test)]
thread_local! {
    static LIVE_WATCHERS: std::cell::Cell<usize> = std::cell::Cell::new(0);
}

/// Number of watchers currently attached on this thread.
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) fn live_watchers() -> usize {
    LIVE_WATCHERS.with(|n| n.get())
}

impl ViewportWatcher {
    pub fn attach<F>(targets: &[Element], options: &WatchOptions, mut on_sample: F) -> Result<Self, WatchError>
    where
        F: FnMut(&Element, IntersectionSample) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sample = IntersectionSample::new(entry.is_intersecting(), entry.intersection_ratio());
                    on_sample(&entry.target(), sample);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold()));
        init.set_root_margin(&options.root_margin().to_string());

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in targets {
            observer.observe(target);
        }
        #[cfg(test)]
        LIVE_WATCHERS.with(|n| n.set(n.get() + 1));

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
        #[cfg(test)]
        LIVE_WATCHERS.with(|n| n.set(n.get() - 1));
    }
}

/// Tracks which page section sits in the middle band of the viewport.
/// Sections missing from the document are skipped.
#[hook]
pub fn use_active_section(sections: &'static [Section]) -> UseStateHandle<&'static str> {
    let active = use_state(|| sections.first().map(|s| s.id).unwrap_or_default());

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let targets: Vec<Element> = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|doc| sections.iter().filter_map(|s| doc.get_element_by_id(s.id)).collect())
                    .unwrap_or_default();

                let options = WatchOptions::new(
                    config::SECTION_THRESHOLD,
                    RootMargin::vertical_inset(config::SECTION_INSET_PERCENT),
                );

                let watcher = if targets.is_empty() {
                    None
                } else {
                    match ViewportWatcher::attach(&targets, &options, move |target, sample| {
                        if !sample.is_intersecting {
                            return;
                        }
                        let id = target.id();
                        if let Some(section) = sections.iter().find(|s| s.id == id) {
                            debug!("Active section: {}", section.id);
                            active.set(section.id);
                        }
                    }) {
                        Ok(watcher) => Some(watcher),
                        Err(err) => {
                            warn!("Section tracking disabled: {}", err);
                            None
                        }
                    }
                };

                move || drop(watcher)
            },
            (),
        );
    }

    active
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().and_then(|w| w.document()).unwrap()
    }

    fn detached_div() -> Element {
        document().create_element("div").unwrap()
    }

    fn mounted_div(style: &str) -> Element {
        let div = detached_div();
        div.set_attribute("style", style).unwrap();
        document().body().unwrap().append_child(&div).unwrap();
        div
    }

    #[wasm_bindgen_test]
    fn attaches_and_detaches_without_error() {
        let target = detached_div();
        let options = WatchOptions::new(0.1, RootMargin::bottom_bias(50));
        let watcher = ViewportWatcher::attach(&[target], &options, |_, _| {});
        assert!(watcher.is_ok());
        drop(watcher);
    }

    #[wasm_bindgen_test]
    fn observes_several_targets_with_percent_margin() {
        let targets = [detached_div(), detached_div(), detached_div()];
        let options = WatchOptions::new(0.3, RootMargin::vertical_inset(20));
        assert!(ViewportWatcher::attach(&targets, &options, |_, _| {}).is_ok());
    }

    #[wasm_bindgen_test]
    async fn no_samples_arrive_after_drop() {
        let target = mounted_div("position: fixed; top: 0; left: 0; width: 100px; height: 100px;");
        let seen = Rc::new(Cell::new(0usize));
        let options = WatchOptions::new(0.0, RootMargin::ZERO);
        let watcher = {
            let seen = seen.clone();
            ViewportWatcher::attach(&[target.clone()], &options, move |_, _| seen.set(seen.get() + 1)).unwrap()
        };

        // The host always delivers an initial entry once observation starts.
        TimeoutFuture::new(100).await;
        assert!(seen.get() >= 1);

        let live = live_watchers();
        drop(watcher);
        assert_eq!(live_watchers(), live - 1);
        let before = seen.get();
        target
            .set_attribute("style", "position: fixed; top: -1000px; left: 0; width: 100px; height: 100px;")
            .unwrap();
        TimeoutFuture::new(100).await;
        assert_eq!(seen.get(), before);
        target.remove();
    }

    #[function_component]
    fn ActiveSectionLabel() -> Html {
        let active = use_active_section(crate::content::SECTIONS);
        html! { <span id="active-section-label">{*active}</span> }
    }

    #[wasm_bindgen_test]
    async fn missing_sections_leave_the_first_one_active() {
        let root = mounted_div("");
        yew::Renderer::<ActiveSectionLabel>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;

        let label = document().get_element_by_id("active-section-label").unwrap();
        assert_eq!(label.text_content().as_deref(), Some("home"));
        root.remove();
    }
}
