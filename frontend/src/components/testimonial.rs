use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::Testimonial;

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;

    html! {
        <div class="testimonial-card">
            <div class="testimonial-stars" aria-label={format!("{} sur 5", t.stars())}>
                { for (0..t.stars()).map(|i| html! {
                    <Icon key={i.to_string()} kind={IconKind::Star} size={18} filled={true} />
                }) }
            </div>
            <p class="testimonial-text">{format!("\"{}\"", t.text)}</p>
            <div class="testimonial-author">
                <div class="testimonial-avatar">
                    <span>{t.initial()}</span>
                </div>
                <div>
                    <p class="testimonial-name">{t.author_name}</p>
                    <p class="testimonial-role">{t.role}</p>
                </div>
            </div>
        </div>
    }
}
