use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{Element, KeyboardEvent, MouseEvent, TouchEvent};
use yew::functional::Reducible;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::config;
use crate::slider::{Bounds, SliderGesture};

pub enum SliderAction {
    Press,
    Move(f64, Bounds),
    Release,
    Nudge(f64),
}

impl Reducible for SliderGesture {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            SliderAction::Press => next.press(),
            SliderAction::Move(x, bounds) => {
                next.move_to(x, bounds);
            }
            SliderAction::Release => next.release(),
            SliderAction::Nudge(delta) => next.nudge(delta),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn bounds_of(node: &NodeRef) -> Option<Bounds> {
    let Some(element) = node.cast::<Element>() else {
        warn!("Slider container is not mounted, ignoring move");
        return None;
    };
    let rect = element.get_bounding_client_rect();
    Some(Bounds {
        left: rect.left(),
        width: rect.width(),
    })
}

#[derive(Properties, PartialEq)]
pub struct BeforeAfterProps {
    pub before_src: AttrValue,
    pub after_src: AttrValue,
    #[prop_or(AttrValue::Static("Avant"))]
    pub before_label: AttrValue,
    #[prop_or(AttrValue::Static("Après"))]
    pub after_label: AttrValue,
}

/// Two stacked photos with a draggable split between them.
#[function_component(BeforeAfter)]
pub fn before_after(props: &BeforeAfterProps) -> Html {
    let container = use_node_ref();
    let gesture = use_reducer(SliderGesture::default);
    let intro = use_state(|| true);

    // The handle eases in on mount only; dragging must follow the pointer 1:1.
    {
        let intro = intro.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::SLIDER_INTRO_MS, move || intro.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    // Releases are tracked on the window so a drag ending outside still ends.
    let release = {
        let gesture = gesture.clone();
        move |_: web_sys::Event| gesture.dispatch(SliderAction::Release)
    };
    use_event_with_window("mouseup", release.clone());
    use_event_with_window("touchend", release.clone());
    use_event_with_window("touchcancel", release);

    let on_mouse_down = {
        let gesture = gesture.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Slider drag started (mouse)");
            gesture.dispatch(SliderAction::Press);
        })
    };

    let on_mouse_move = {
        let gesture = gesture.clone();
        let container = container.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(bounds) = bounds_of(&container) {
                gesture.dispatch(SliderAction::Move(f64::from(e.client_x()), bounds));
            }
        })
    };

    let on_touch_start = {
        let gesture = gesture.clone();
        Callback::from(move |_: TouchEvent| {
            debug!("Slider drag started (touch)");
            gesture.dispatch(SliderAction::Press);
        })
    };

    let on_touch_move = {
        let gesture = gesture.clone();
        let container = container.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.touches().get(0) else {
                warn!("touchmove without an active touch point");
                return;
            };
            if let Some(bounds) = bounds_of(&container) {
                gesture.dispatch(SliderAction::Move(f64::from(touch.client_x()), bounds));
            }
        })
    };

    let on_key_down = {
        let gesture = gesture.clone();
        Callback::from(move |e: KeyboardEvent| {
            let delta = match e.key().as_str() {
                "ArrowLeft" => -5.0,
                "ArrowRight" => 5.0,
                _ => return,
            };
            e.prevent_default();
            gesture.dispatch(SliderAction::Nudge(delta));
        })
    };

    let percentage = gesture.percentage();
    let clip = format!("clip-path: {};", gesture.clip_path());
    let handle = format!("left: {:.2}%;", percentage);

    html! {
        <div
            ref={container}
            class={classes!(
                "before-after",
                (*intro).then_some("intro"),
                gesture.is_active().then_some("dragging")
            )}
            role="slider"
            tabindex="0"
            aria-label="Comparaison avant / après"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{:.0}", percentage)}
            onmousedown={on_mouse_down}
            onmousemove={on_mouse_move}
            ontouchstart={on_touch_start}
            ontouchmove={on_touch_move}
            onkeydown={on_key_down}
        >
            <img class="ba-layer ba-after" src={props.after_src.clone()} alt={props.after_label.clone()} draggable="false" />
            <img class="ba-layer ba-before" style={clip} src={props.before_src.clone()} alt={props.before_label.clone()} draggable="false" />
            <span class="ba-tag ba-tag-before">{props.before_label.clone()}</span>
            <span class="ba-tag ba-tag-after">{props.after_label.clone()}</span>
            <div class="ba-divider" style={handle}>
                <div class="ba-handle">
                    <Icon kind={IconKind::MoveHorizontal} size={20} />
                </div>
            </div>
            <style>
                {r#"
                .before-after {
                    position: relative;
                    width: 100%;
                    height: 560px;
                    overflow: hidden;
                    border-radius: 2px;
                    cursor: ew-resize;
                    user-select: none;
                    touch-action: pan-y;
                    outline: none;
                }
                .before-after:focus-visible {
                    box-shadow: 0 0 0 3px var(--rose);
                }
                .ba-layer {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    pointer-events: none;
                }
                .before-after.intro .ba-before {
                    transition: clip-path 1s ease-out;
                    animation: baIntro 1.2s ease-out;
                }
                .before-after.intro .ba-divider {
                    animation: baHandleIntro 1.2s ease-out;
                }
                @keyframes baIntro {
                    from { clip-path: inset(0 100% 0 0); }
                }
                @keyframes baHandleIntro {
                    from { left: 0%; }
                }
                .ba-tag {
                    position: absolute;
                    top: 1.25rem;
                    padding: 0.375rem 0.875rem;
                    background: rgba(255, 255, 255, 0.85);
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-weight: 300;
                    pointer-events: none;
                }
                .ba-tag-before { left: 1.25rem; }
                .ba-tag-after { right: 1.25rem; }
                .ba-divider {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 2px;
                    margin-left: -1px;
                    background: #fff;
                    pointer-events: none;
                }
                .ba-handle {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 48px;
                    height: 48px;
                    transform: translate(-50%, -50%);
                    border-radius: 50%;
                    background: #fff;
                    color: #000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                    transition: transform 0.2s ease;
                }
                .before-after.dragging .ba-handle {
                    transform: translate(-50%, -50%) scale(1.1);
                    background: var(--rose);
                }
                @media (max-width: 768px) {
                    .before-after { height: 420px; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Bounds = Bounds { left: 0.0, width: 200.0 };

    fn apply(state: Rc<SliderGesture>, action: SliderAction) -> Rc<SliderGesture> {
        state.reduce(action)
    }

    #[test]
    fn test_reducer_ignores_stray_moves() {
        let start = Rc::new(SliderGesture::default());
        let next = apply(start.clone(), SliderAction::Move(20.0, BOX));
        assert!(Rc::ptr_eq(&start, &next));
    }

    #[test]
    fn test_reducer_drag_sequence() {
        let mut state = Rc::new(SliderGesture::default());
        state = apply(state, SliderAction::Press);
        state = apply(state, SliderAction::Move(20.0, BOX));
        assert_eq!(state.percentage(), 10.0);
        state = apply(state, SliderAction::Release);
        let released = state.clone();
        state = apply(state, SliderAction::Move(180.0, BOX));
        assert!(Rc::ptr_eq(&released, &state));
        assert_eq!(state.percentage(), 10.0);
    }

    #[test]
    fn test_reducer_repeated_release_keeps_state() {
        let released = apply(Rc::new(SliderGesture::new(70.0)), SliderAction::Release);
        let again = apply(released.clone(), SliderAction::Release);
        assert!(Rc::ptr_eq(&released, &again));
        assert!(!again.is_active());
    }

    #[test]
    fn test_reducer_keyboard() {
        let state = apply(Rc::new(SliderGesture::new(2.0)), SliderAction::Nudge(-5.0));
        assert_eq!(state.percentage(), 0.0);
    }
}
