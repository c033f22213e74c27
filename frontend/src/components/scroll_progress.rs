use log::warn;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::navigation;

fn read_progress() -> Option<f64> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    Some(navigation::scroll_progress(
        window.scroll_y().ok()?,
        f64::from(root.scroll_height()),
        viewport,
    ))
}

/// Thin bar along the top edge showing how far the page has been read.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let progress = use_state(|| 0.0_f64);

    let refresh = {
        let progress = progress.clone();
        move || match read_progress() {
            Some(value) => progress.set(value),
            None => warn!("Scroll position unavailable, progress bar not updated"),
        }
    };

    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |_| {
                refresh();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: web_sys::Event| refresh());

    html! {
        <div class="scroll-progress" style={format!("transform: scaleX({:.4});", *progress)}></div>
    }
}
