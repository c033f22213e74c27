use yew::prelude::*;

use crate::components::in_view::{InView, Motion};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    /// Small uppercase kicker above the title.
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    /// Italic tail of the title.
    #[prop_or_default]
    pub accent: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <InView class={classes!("section-heading", props.dark.then_some("dark"))} motion={Motion::FadeUp}>
            <span class="eyebrow">{props.eyebrow.clone()}</span>
            <h2 class="section-title">
                {props.title.clone()}
                {
                    match &props.accent {
                        Some(accent) => html! { <>{" "}<span class="accent">{accent.clone()}</span></> },
                        None => html! {},
                    }
                }
            </h2>
            {
                match &props.subtitle {
                    Some(subtitle) => html! { <p class="section-subtitle">{subtitle.clone()}</p> },
                    None => html! {},
                }
            }
        </InView>
    }
}
