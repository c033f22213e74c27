use log::warn;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Starting pose of an element before it scrolls into view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
    Fade,
    Zoom,
}

impl Motion {
    fn class(&self) -> &'static str {
        match self {
            Motion::FadeUp => "motion-fade-up",
            Motion::FadeLeft => "motion-fade-left",
            Motion::FadeRight => "motion-fade-right",
            Motion::Fade => "motion-fade",
            Motion::Zoom => "motion-zoom",
        }
    }
}

/// Whether an element spanning `top..top + height` (viewport coordinates)
/// shows at least `amount` of its height inside a viewport of `viewport_height`.
pub fn entered_viewport(top: f64, height: f64, viewport_height: f64, amount: f64) -> bool {
    if height <= 0.0 {
        return top >= 0.0 && top < viewport_height;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    // Sections taller than the window only need `amount` of the window.
    let required = amount.clamp(0.0, 1.0) * height.min(viewport_height);
    visible > 0.0 && visible >= required
}

fn check(element: &Element, amount: f64) -> bool {
    let Some(viewport_height) = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        warn!("Viewport height unavailable, element stays hidden");
        return false;
    };
    let rect = element.get_bounding_client_rect();
    entered_viewport(rect.top(), rect.height(), viewport_height, amount)
}

#[derive(Properties, PartialEq)]
pub struct InViewProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub motion: Motion,
    /// Share of the element that must be visible, 0.0..=1.0.
    #[prop_or(0.3)]
    pub amount: f64,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Reveals its children the first time they scroll into view.
#[function_component(InView)]
pub fn in_view(props: &InViewProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    let reveal = {
        let node = node.clone();
        let visible = visible.clone();
        let amount = props.amount;
        move || {
            if *visible {
                return;
            }
            if let Some(element) = node.cast::<Element>() {
                if check(&element, amount) {
                    visible.set(true);
                }
            }
        }
    };

    // Already on screen at mount (hero, short pages).
    {
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |_| {
                reveal();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: web_sys::Event| reveal());

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!(
                "in-view",
                props.motion.class(),
                (*visible).then_some("is-visible"),
                props.class.clone()
            )}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_the_fold() {
        assert!(!entered_viewport(900.0, 400.0, 800.0, 0.3));
        assert!(!entered_viewport(800.0, 400.0, 800.0, 0.0));
    }

    #[test]
    fn test_partially_visible() {
        // 100px of 400 showing: 25%.
        assert!(!entered_viewport(700.0, 400.0, 800.0, 0.3));
        assert!(entered_viewport(700.0, 400.0, 800.0, 0.25));
        // 200px of 400 showing.
        assert!(entered_viewport(600.0, 400.0, 800.0, 0.3));
    }

    #[test]
    fn test_scrolled_past() {
        assert!(!entered_viewport(-500.0, 400.0, 800.0, 0.3));
        assert!(entered_viewport(-100.0, 400.0, 800.0, 0.3));
    }

    #[test]
    fn test_taller_than_viewport() {
        assert!(entered_viewport(0.0, 2000.0, 500.0, 0.3));
        // 100px showing, 150px (30% of the window) needed.
        assert!(!entered_viewport(400.0, 2000.0, 500.0, 0.3));
        assert!(entered_viewport(300.0, 2000.0, 500.0, 0.3));
    }

    #[test]
    fn test_zero_height() {
        assert!(entered_viewport(10.0, 0.0, 800.0, 0.3));
        assert!(!entered_viewport(900.0, 0.0, 800.0, 0.3));
    }
}
