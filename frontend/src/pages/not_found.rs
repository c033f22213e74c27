use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <div class="container">
                <span class="eyebrow">{"Erreur 404"}</span>
                <div class="eyebrow-rule"></div>
                <h1 class="section-title">
                    {"Cette page "}<span class="accent">{"n'existe pas"}</span>
                </h1>
                <p class="section-subtitle">{"Le lien suivi est peut-être ancien ou mal saisi."}</p>
                <div class="not-found-links">
                    <Link<Route> to={Route::Studio} classes="btn-primary">
                        {"Retour au studio"}
                    </Link<Route>>
                    <Link<Route> to={Route::Academy} classes="btn-link">
                        <span>{"Découvrir l'Académie"}</span>
                        <Icon kind={IconKind::ArrowRight} size={18} />
                    </Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    text-align: center;
                    background: linear-gradient(135deg, var(--cream), #fff 60%, var(--blush));
                }
                .not-found .eyebrow-rule { margin-left: auto; margin-right: auto; }
                .not-found-links {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }
                .not-found-links a { text-decoration: none; }
                "#}
            </style>
        </section>
    }
}
