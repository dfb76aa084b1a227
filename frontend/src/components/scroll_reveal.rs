use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::components::viewport::{IntersectionSample, RootMargin, ViewportWatcher, WatchOptions};
use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    Fade,
}

/// Presentation settings of one reveal wrapper. Delay and duration are in
/// milliseconds, distance in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub delay: u32,
    pub duration: u32,
    pub direction: Direction,
    pub distance: f64,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay: 0,
            duration: config::REVEAL_DURATION_MS,
            direction: Direction::Up,
            distance: config::REVEAL_DISTANCE_PX,
            threshold: config::REVEAL_THRESHOLD,
        }
    }
}

impl RevealConfig {
    pub fn transform(&self, visible: bool) -> String {
        if visible {
            return "none".to_string();
        }
        let d = self.distance;
        match self.direction {
            Direction::Up => format!("translateY({}px)", d),
            Direction::Down => format!("translateY({}px)", -d),
            Direction::Left => format!("translateX({}px)", d),
            Direction::Right => format!("translateX({}px)", -d),
            Direction::Fade => "none".to_string(),
        }
    }

    /// Only the fade variant uses opacity as its cue.
    pub fn opacity(&self, visible: bool) -> u8 {
        match self.direction {
            Direction::Fade if !visible => 0,
            _ => 1,
        }
    }

    pub fn transition(&self) -> String {
        format!("all {}ms {} {}ms", self.duration, config::REVEAL_EASING, self.delay)
    }

    pub fn style(&self, visible: bool) -> String {
        format!(
            "opacity: {}; transform: {}; transition: {}; will-change: transform, opacity;",
            self.opacity(visible),
            self.transform(visible),
            self.transition()
        )
    }
}

/// Per-element reveal latch. `has_animated` only ever moves from false to
/// true, and `visible` follows it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
    has_animated: bool,
}

impl RevealState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    pub fn observe(self, sample: IntersectionSample, threshold: f64) -> Self {
        if self.has_animated || !sample.reaches(threshold) {
            return self;
        }
        Self { visible: true, has_animated: true }
    }
}

pub enum RevealAction {
    Observed { sample: IntersectionSample, threshold: f64 },
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Observed { sample, threshold } => {
                let next = self.observe(sample, threshold);
                if next == *self {
                    self
                } else {
                    debug!("Revealed at ratio {:.2}", sample.ratio);
                    Rc::new(next)
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay: u32,
    #[prop_or(config::REVEAL_DURATION_MS)]
    pub duration: u32,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(config::REVEAL_DISTANCE_PX)]
    pub distance: f64,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
}

impl ScrollRevealProps {
    fn reveal_config(&self) -> RevealConfig {
        RevealConfig {
            delay: self.delay,
            duration: self.duration,
            direction: self.direction,
            distance: self.distance,
            threshold: self.threshold,
        }
    }
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reducer_eq(RevealState::default);
    let reveal = props.reveal_config();

    // Re-runs once the latch flips so the watcher is dropped right after the reveal.
    {
        let node = node.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(threshold, revealed)| {
                let watcher = match node.cast::<Element>() {
                    Some(element) if !*revealed => {
                        let options = WatchOptions::new(
                            *threshold,
                            RootMargin::bottom_bias(config::REVEAL_BOTTOM_BIAS_PX),
                        );
                        let threshold = options.threshold();
                        match ViewportWatcher::attach(&[element], &options, move |_, sample| {
                            dispatcher.dispatch(RevealAction::Observed { sample, threshold });
                        }) {
                            Ok(watcher) => Some(watcher),
                            Err(err) => {
                                warn!("Scroll reveal disabled: {}", err);
                                None
                            }
                        }
                    }
                    _ => None,
                };
                move || drop(watcher)
            },
            (props.threshold, state.has_animated()),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={reveal.style(state.is_visible())}>
            { for props.children.iter() }
        </div>
    }
}

/// Props of the fixed-direction shortcuts.
#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay: u32,
    #[prop_or(config::REVEAL_DURATION_MS)]
    pub duration: u32,
    #[prop_or(config::REVEAL_DISTANCE_PX)]
    pub distance: f64,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
}

fn reveal_towards(direction: Direction, props: &RevealProps) -> Html {
    html! {
        <ScrollReveal
            class={props.class.clone()}
            delay={props.delay}
            duration={props.duration}
            direction={direction}
            distance={props.distance}
            threshold={props.threshold}
        >
            { for props.children.iter() }
        </ScrollReveal>
    }
}

#[function_component(FadeIn)]
pub fn fade_in(props: &RevealProps) -> Html {
    reveal_towards(Direction::Fade, props)
}

#[function_component(SlideUp)]
pub fn slide_up(props: &RevealProps) -> Html {
    reveal_towards(Direction::Up, props)
}

#[function_component(SlideDown)]
pub fn slide_down(props: &RevealProps) -> Html {
    reveal_towards(Direction::Down, props)
}

#[function_component(SlideLeft)]
pub fn slide_left(props: &RevealProps) -> Html {
    reveal_towards(Direction::Left, props)
}

#[function_component(SlideRight)]
pub fn slide_right(props: &RevealProps) -> Html {
    reveal_towards(Direction::Right, props)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Fade,
    ];

    fn with(direction: Direction) -> RevealConfig {
        RevealConfig { direction, ..RevealConfig::default() }
    }

    fn hit(ratio: f64) -> IntersectionSample {
        IntersectionSample::new(true, ratio)
    }

    fn miss() -> IntersectionSample {
        IntersectionSample::new(false, 0.0)
    }

    #[test]
    fn defaults_match_documented_values() {
        let c = RevealConfig::default();
        assert_eq!(c.delay, 0);
        assert_eq!(c.duration, 800);
        assert_eq!(c.direction, Direction::Up);
        assert_eq!(c.distance, 50.0);
        assert_eq!(c.threshold, 0.1);
    }

    #[test]
    fn pre_reveal_offset_depends_on_direction() {
        assert_eq!(with(Direction::Up).transform(false), "translateY(50px)");
        assert_eq!(with(Direction::Down).transform(false), "translateY(-50px)");
        assert_eq!(with(Direction::Left).transform(false), "translateX(50px)");
        assert_eq!(with(Direction::Right).transform(false), "translateX(-50px)");
        assert_eq!(with(Direction::Fade).transform(false), "none");

        let far = RevealConfig { distance: 120.0, ..with(Direction::Right) };
        assert_eq!(far.transform(false), "translateX(-120px)");
    }

    #[test]
    fn transform_resets_once_visible() {
        for direction in ALL {
            assert_eq!(with(direction).transform(true), "none");
        }
    }

    #[test]
    fn only_fade_hides_before_reveal() {
        for direction in ALL {
            let c = with(direction);
            assert_eq!(c.opacity(true), 1);
            let expected = if direction == Direction::Fade { 0 } else { 1 };
            assert_eq!(c.opacity(false), expected, "{:?}", direction);
        }
    }

    #[test]
    fn transition_uses_duration_easing_and_delay() {
        let c = RevealConfig { delay: 300, duration: 600, ..RevealConfig::default() };
        assert_eq!(c.transition(), "all 600ms cubic-bezier(0.4, 0, 0.2, 1) 300ms");
        let style = c.style(false);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("transform: translateY(50px);"));
        assert!(style.contains("will-change: transform, opacity;"));
    }

    #[test]
    fn latch_ignores_samples_below_threshold() {
        let s = RevealState::default().observe(miss(), 0.1).observe(hit(0.05), 0.1);
        assert!(!s.has_animated());
        assert!(!s.is_visible());
    }

    #[test]
    fn tall_content_needs_a_lower_threshold() {
        // A target ten times the viewport height tops out at a 0.08 ratio.
        let tall = hit(0.08);
        assert!(!RevealState::default().observe(tall, 0.1).is_visible());
        assert!(RevealState::default().observe(tall, 0.05).is_visible());
        assert!(RevealState::default().observe(hit(0.001), 0.0).is_visible());
    }

    #[test]
    fn slide_up_scenario() {
        let c = RevealConfig::default();
        let mut s = RevealState::default();
        assert_eq!(c.transform(s.is_visible()), "translateY(50px)");
        assert_eq!(c.opacity(s.is_visible()), 1);

        s = s.observe(hit(0.12), c.threshold);
        assert_eq!(c.transform(s.is_visible()), "none");

        // Scrolling back out must not restore the offset.
        s = s.observe(miss(), c.threshold);
        assert_eq!(c.transform(s.is_visible()), "none");
    }

    #[test]
    fn fade_scenario() {
        let c = with(Direction::Fade);
        let mut s = RevealState::default();
        assert_eq!(c.opacity(s.is_visible()), 0);
        assert_eq!(c.transform(s.is_visible()), "none");

        s = s.observe(hit(1.0), c.threshold);
        for _ in 0..3 {
            s = s.observe(miss(), c.threshold);
            assert_eq!(c.opacity(s.is_visible()), 1);
        }
    }

    #[test]
    fn latch_never_reverts() {
        let samples = [miss(), hit(0.02), hit(0.5), miss(), hit(0.0), miss(), hit(1.0)];
        for threshold in [0.0, 0.1, 0.5, 1.0] {
            let mut s = RevealState::default();
            let mut flips = 0;
            for sample in samples {
                let next = s.observe(sample, threshold);
                if s.has_animated() {
                    assert!(next.has_animated());
                }
                if !s.has_animated() && next.has_animated() {
                    flips += 1;
                }
                assert_eq!(next.is_visible(), next.has_animated());
                s = next;
            }
            assert_eq!(flips, 1, "threshold {}", threshold);
        }
    }

    #[test]
    fn reducer_returns_same_state_after_reveal() {
        let first = Rc::new(RevealState::default());
        let revealed = first.clone().reduce(RevealAction::Observed { sample: hit(0.3), threshold: 0.1 });
        assert!(!Rc::ptr_eq(&first, &revealed));
        assert!(revealed.is_visible());

        let again = revealed.clone().reduce(RevealAction::Observed { sample: hit(0.9), threshold: 0.1 });
        assert!(Rc::ptr_eq(&revealed, &again));
        let away = again.clone().reduce(RevealAction::Observed { sample: miss(), threshold: 0.1 });
        assert!(Rc::ptr_eq(&again, &away));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::components::viewport::live_watchers;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use yew::AppHandle;

    wasm_bindgen_test_configure!(run_in_browser);

    const IN_VIEW: &str = "position: fixed; top: 0; left: 0; width: 200px;";
    const BELOW_FOLD: &str = "position: absolute; top: 5000px; left: 0; width: 200px;";
    const ABOVE_FOLD: &str = "position: fixed; top: -2000px; left: 0; width: 200px;";

    #[function_component]
    fn UpFixture() -> Html {
        html! { <ScrollReveal><span>{"up"}</span></ScrollReveal> }
    }

    #[function_component]
    fn FadeFixture() -> Html {
        html! { <FadeIn><span>{"fade"}</span></FadeIn> }
    }

    fn mount<C>(root_style: &str) -> (Element, AppHandle<C>)
    where
        C: BaseComponent<Properties = ()>,
    {
        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        let root = document.create_element("div").unwrap();
        root.set_attribute("style", root_style).unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let app = yew::Renderer::<C>::with_root(root.clone()).render();
        (root, app)
    }

    fn wrapper_style(root: &Element) -> String {
        root.first_element_child()
            .and_then(|wrapper| wrapper.get_attribute("style"))
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn off_screen_slide_up_keeps_offset_and_its_watcher() {
        let before = live_watchers();
        let (root, app) = mount::<UpFixture>(BELOW_FOLD);
        TimeoutFuture::new(100).await;

        let style = wrapper_style(&root);
        assert!(style.contains("transform: translateY(50px);"), "{}", style);
        assert!(style.contains("opacity: 1;"), "{}", style);
        assert_eq!(live_watchers(), before + 1);

        // Unmounting detaches the watcher.
        app.destroy();
        TimeoutFuture::new(20).await;
        assert_eq!(live_watchers(), before);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn off_screen_fade_starts_transparent() {
        let (root, app) = mount::<FadeFixture>(BELOW_FOLD);
        TimeoutFuture::new(100).await;

        let style = wrapper_style(&root);
        assert!(style.contains("opacity: 0;"), "{}", style);
        assert!(style.contains("transform: none;"), "{}", style);
        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn reveal_latches_and_releases_the_watcher() {
        let before = live_watchers();
        let (root, app) = mount::<UpFixture>(IN_VIEW);
        TimeoutFuture::new(200).await;

        assert!(wrapper_style(&root).contains("transform: none;"));
        assert_eq!(live_watchers(), before);

        // Leaving the viewport afterwards does not restore the offset.
        root.set_attribute("style", ABOVE_FOLD).unwrap();
        TimeoutFuture::new(100).await;
        assert!(wrapper_style(&root).contains("transform: none;"));

        app.destroy();
        root.remove();
    }
}
