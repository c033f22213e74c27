use log::{debug, info};
use web_sys::{MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::in_view::{InView, Motion};
use crate::components::nav::SiteNav;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::section_heading::SectionHeading;
use crate::components::testimonial::TestimonialCard;
use crate::config;
use crate::content::{display_date, studio};
use crate::navigation::{self, STUDIO_NAV};
use crate::portfolio::{self, PortfolioFilter};
use crate::Route;

fn scroll_callback(section: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| navigation::scroll_to_section(section))
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="hero-glow"></div>
            <div class="container hero-grid">
                <InView motion={Motion::FadeLeft} amount={0.0} delay_ms={200}>
                    <div class="hero-badge">
                        <Icon kind={IconKind::Sparkles} size={16} />
                        <span>{"Maquilleuse Professionnelle"}</span>
                    </div>
                    <h1 class="hero-title">
                        {"Sublimez votre beauté avec"}
                        <em>{"élégance & expertise"}</em>
                    </h1>
                    <p class="hero-lead">
                        {"Maquilleuse professionnelle & formatrice spécialisée en mariage, éditorial et coaching beauté."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn-primary" onclick={scroll_callback("contact")}>
                            {"Réserver une prestation"}
                        </button>
                        <button class="btn-link" onclick={scroll_callback("portfolio")}>
                            <span>{"Découvrir mes réalisations"}</span>
                            <Icon kind={IconKind::ArrowRight} size={18} />
                        </button>
                    </div>
                </InView>
                <InView motion={Motion::FadeRight} amount={0.0} delay_ms={400}>
                    <div class="hero-photo">
                        <img src={config::asset_url(studio::HERO_PHOTO, 800)} alt="Zineb Moudden Maquilleuse" />
                    </div>
                </InView>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="section bg-white">
            <div class="container split">
                <InView motion={Motion::FadeLeft}>
                    <div class="split-photo">
                        <img src={config::asset_url(studio::ABOUT_PHOTO, 800)} alt="Zineb Moudden - À propos" loading="lazy" />
                    </div>
                </InView>
                <InView motion={Motion::FadeRight} class="split-copy">
                    <span class="eyebrow">{"À Propos"}</span>
                    <div class="eyebrow-rule"></div>
                    <h2 class="section-title">
                        {"L'art de révéler votre "}<span class="accent">{"beauté naturelle"}</span>
                    </h2>
                    { for studio::ABOUT_PARAGRAPHS.iter().map(|p| html! { <p>{*p}</p> }) }
                    <div class="stats">
                        { for studio::STATS.iter().map(|stat| html! {
                            <div>
                                <div class="stat-value">
                                    <Icon kind={stat.icon} size={24} />
                                    <span>{stat.value}</span>
                                </div>
                                <p class="stat-label">{stat.label}</p>
                            </div>
                        }) }
                    </div>
                    <button class="btn-rose" onclick={scroll_callback("services")}>
                        {"Découvrir mes prestations"}
                    </button>
                </InView>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="section bg-cream">
            <div class="container">
                <SectionHeading
                    eyebrow="Services"
                    title="Mes Prestations Premium"
                    subtitle={AttrValue::Static("Des services sur-mesure pour sublimer chaque moment de votre vie")}
                />
                <div class="card-grid services-grid">
                    { for studio::SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <InView key={service.title} amount={0.2} delay_ms={(i as u32) * 200}>
                            <div class="card">
                                <div class="card-icon"><Icon kind={service.icon} size={28} /></div>
                                <h3>{service.title}</h3>
                                <ul class="check-list">
                                    { for service.bullets.iter().map(|bullet| html! {
                                        <li><Icon kind={IconKind::Check} size={20} /><span>{*bullet}</span></li>
                                    }) }
                                </ul>
                                <button class="btn-link" onclick={scroll_callback("contact")}>
                                    <span>{service.cta_label}</span>
                                    <Icon kind={IconKind::ChevronRight} size={18} />
                                </button>
                            </div>
                        </InView>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Portfolio)]
fn portfolio_section() -> Html {
    let active = use_state(PortfolioFilter::default);
    let shown = portfolio::filtered(&studio::PORTFOLIO, *active);

    let select = |choice: PortfolioFilter| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            if *active != choice {
                debug!("Portfolio filter -> {}", choice.value());
            }
            active.set(choice);
        })
    };

    html! {
        <section id="portfolio" class="section bg-white">
            <div class="container">
                <SectionHeading eyebrow="Portfolio" title="Mes Réalisations" accent={AttrValue::Static("— la beauté en lumière")} />
                <InView class="portfolio-filters" amount={0.0}>
                    { for PortfolioFilter::choices().into_iter().map(|choice| html! {
                        <button
                            key={choice.value()}
                            class={classes!("filter-button", (*active == choice).then_some("active"))}
                            onclick={select(choice)}
                        >
                            {choice.label()}
                        </button>
                    }) }
                </InView>
                <div class="portfolio-grid">
                    { for shown.iter().enumerate().map(|(i, item)| html! {
                        // Keyed by filter too so cards replay their entrance on every change.
                        <div
                            key={format!("{}-{}", active.value(), item.id)}
                            class="portfolio-item"
                            style={format!("animation-delay: {}ms;", i * 100)}
                        >
                            <img
                                src={config::asset_url(item.photo_id, 800)}
                                alt={format!("Portfolio {}", item.category)}
                                loading="lazy"
                            />
                            <div class="portfolio-overlay"><span>{"Voir"}</span></div>
                        </div>
                    }) }
                </div>
                <InView class="centered" motion={Motion::Fade} amount={0.0}>
                    <button class="btn-underline">
                        <span>{"Voir le portfolio complet"}</span>
                        <Icon kind={IconKind::ArrowRight} size={16} />
                    </button>
                </InView>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id="avis" class="section bg-blush">
            <div class="container">
                <SectionHeading eyebrow="Témoignages" title="Les doux mots de mes clientes" accent={AttrValue::Static("✨")} />
                <div class="card-grid">
                    { for studio::TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <InView key={t.author_name} delay_ms={(i as u32) * 200}>
                            <TestimonialCard testimonial={t.clone()} />
                        </InView>
                    }) }
                </div>
                <InView class="centered" motion={Motion::Fade} amount={0.0}>
                    <button class="btn-primary" onclick={scroll_callback("contact")}>
                        {"Laisser un avis"}
                    </button>
                </InView>
            </div>
        </section>
    }
}

#[function_component(Blog)]
fn blog() -> Html {
    html! {
        <section id="blog" class="section bg-white">
            <div class="container">
                <SectionHeading
                    eyebrow="Blog"
                    title="Conseils & Actualités Beauté"
                    subtitle={AttrValue::Static("Découvrez mes astuces, tendances et conseils d'experte")}
                />
                <div class="card-grid">
                    { for studio::BLOG_POSTS.iter().enumerate().map(|(i, post)| html! {
                        <InView key={post.title} delay_ms={(i as u32) * 200}>
                            <article class="blog-card">
                                <div class="blog-photo">
                                    <img src={config::asset_url(post.photo_id, 600)} alt={post.title} loading="lazy" />
                                    <span class="blog-category">{post.category}</span>
                                </div>
                                <p class="blog-date">{display_date(post.published)}</p>
                                <h3>{post.title}</h3>
                                <p class="blog-excerpt">{post.excerpt}</p>
                                <button class="btn-link">
                                    <span>{"Lire l'article"}</span>
                                    <Icon kind={IconKind::ArrowRight} size={16} />
                                </button>
                            </article>
                        </InView>
                    }) }
                </div>
                <InView class="centered" motion={Motion::Fade} amount={0.0}>
                    <button class="btn-underline">
                        <span>{"Voir tous les articles"}</span>
                        <Icon kind={IconKind::ArrowRight} size={16} />
                    </button>
                </InView>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let on_submit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Booking form submitted; no submission endpoint is configured");
    });

    html! {
        <section id="contact" class="section bg-cream">
            <div class="container">
                <SectionHeading
                    eyebrow="Contact"
                    title="Réservez votre"
                    accent={AttrValue::Static("moment beauté")}
                    subtitle={AttrValue::Static("Parlons de votre projet et créons ensemble votre look de rêve")}
                />
                <div class="split contact-split">
                    <InView motion={Motion::FadeLeft} amount={0.2}>
                        <form class="form-card form-grid" onsubmit={on_submit}>
                            <div class="field">
                                <label>{"Nom & Prénom"}</label>
                                <input type="text" placeholder="Votre nom complet" />
                            </div>
                            <div class="form-row">
                                <div class="field">
                                    <label>{"Email"}</label>
                                    <input type="email" placeholder="votre@email.com" />
                                </div>
                                <div class="field">
                                    <label>{"Téléphone (WhatsApp)"}</label>
                                    <input type="tel" placeholder={config::CONTACT_PHONE} />
                                </div>
                            </div>
                            <div class="form-row">
                                <div class="field">
                                    <label>{"Type de prestation"}</label>
                                    <select>
                                        <option value="">{"Sélectionnez une prestation..."}</option>
                                        { for studio::SERVICE_OPTIONS.iter().map(|option| html! {
                                            <option>{*option}</option>
                                        }) }
                                    </select>
                                </div>
                                <div class="field">
                                    <label>{"Date souhaitée (si applicable)"}</label>
                                    <input type="date" />
                                </div>
                            </div>
                            <div class="field">
                                <label>{"Votre message"}</label>
                                <textarea
                                    rows="4"
                                    placeholder="Parlez-moi de votre projet, vos attentes, vos inspirations..."
                                />
                            </div>
                            <button type="submit" class="btn-primary btn-block">{"Envoyer ma demande"}</button>
                        </form>
                    </InView>

                    <InView motion={Motion::FadeRight} amount={0.2} class="contact-info">
                        <h3 class="contact-title">{"Informations de contact"}</h3>
                        <p class="contact-intro">
                            {"N'hésitez pas à me contacter pour toute question ou pour réserver votre prestation. Je serai ravie d'échanger avec vous sur votre projet beauté."}
                        </p>
                        <div class="detail-list">
                            { for studio::CONTACT_DETAILS.iter().map(|detail| html! {
                                <div class="detail">
                                    <div class="detail-icon"><Icon kind={detail.icon} size={20} /></div>
                                    <div>
                                        <p class="detail-label">{detail.label}</p>
                                        { for detail.lines.iter().map(|line| html! { <p class="detail-line">{*line}</p> }) }
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="follow">
                            <p class="detail-label">{"Suivez-moi"}</p>
                            <div class="socials">
                                <a class="social" href="#" aria-label="Instagram"><Icon kind={IconKind::Instagram} size={20} /></a>
                                <a class="social" href={config::mailto("Demande d'information")} aria-label="Email"><Icon kind={IconKind::Mail} size={20} /></a>
                            </div>
                        </div>
                        <a class="btn-rose call-cta" href={config::mailto("Réserver un appel")}>{"Réserver un appel"}</a>
                    </InView>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">{"Zineb "}<span>{"Moudden"}</span></h3>
                        <p class="footer-about">
                            {"Maquilleuse professionnelle & formatrice. Sublimer votre beauté naturelle avec élégance et expertise depuis 2014."}
                        </p>
                        <div class="socials">
                            <a class="social" href="#" aria-label="Instagram"><Icon kind={IconKind::Instagram} size={22} /></a>
                            <a class="social" href={config::mailto("Bonjour Zineb")} aria-label="Email"><Icon kind={IconKind::Mail} size={22} /></a>
                        </div>
                    </div>
                    <div>
                        <h4>{"Navigation"}</h4>
                        <ul class="footer-list">
                            { for STUDIO_NAV.iter().filter(|item| item.section != "avis").map(|item| html! {
                                <li key={item.section} onclick={scroll_callback(item.section)}>{item.label}</li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Services"}</h4>
                        <ul class="footer-list">
                            { for studio::FOOTER_SERVICES.iter().map(|service| html! {
                                <li onclick={scroll_callback("services")}>{*service}</li>
                            }) }
                            <li>
                                <Link<Route> to={Route::Academy} classes="footer-route">
                                    {"L'Académie"}
                                </Link<Route>>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2024 Zineb Moudden. Tous droits réservés."}</p>
                    <div>
                        <a href="#">{"Mentions Légales"}</a>
                        <a href="#">{"Confidentialité"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

/// Portfolio and booking page of the makeup artist.
#[function_component(Studio)]
pub fn studio() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                navigation::scroll_to_top();
                || ()
            },
            (),
        );
    }

    html! {
        <div class="studio-page">
            <ScrollProgress />
            <SiteNav
                brand="Zineb"
                brand_accent="Moudden"
                items={&STUDIO_NAV[..]}
                cta_label="Réserver"
                cta_section="contact"
            />
            <Hero />
            <About />
            <Services />
            <Portfolio />
            <Testimonials />
            <Blog />
            <Contact />
            <Footer />
            <style>
                {r#"
                .centered { text-align: center; margin-top: 4rem; }
                .services-grid { grid-template-columns: repeat(auto-fit, minmax(24rem, 1fr)); }
                .portfolio-filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 4rem;
                }
                .filter-button {
                    padding: 0.5rem 1.5rem;
                    font: inherit;
                    font-size: 0.875rem;
                    font-weight: 300;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    border: none;
                    border-radius: 2px;
                    cursor: pointer;
                    background: var(--cream);
                    color: #000;
                    transition: all 0.3s ease;
                }
                .filter-button:hover { background: var(--rose); }
                .filter-button.active { background: #000; color: #fff; }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .portfolio-item {
                    position: relative;
                    height: 400px;
                    overflow: hidden;
                    border-radius: 2px;
                    cursor: pointer;
                    animation: cardIn 0.5s ease-out both;
                    transition: transform 0.3s ease;
                }
                .portfolio-item:hover { transform: translateY(-10px); }
                @keyframes cardIn {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                .portfolio-item img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .portfolio-item:hover img { transform: scale(1.1); }
                .portfolio-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                    opacity: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: opacity 0.5s ease;
                    color: #fff;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-weight: 300;
                }
                .portfolio-item:hover .portfolio-overlay { opacity: 1; }
                .blog-card { cursor: pointer; }
                .blog-photo {
                    position: relative;
                    height: 16rem;
                    overflow: hidden;
                    border-radius: 2px;
                    margin-bottom: 1.5rem;
                }
                .blog-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .blog-card:hover .blog-photo img { transform: scale(1.1); }
                .blog-category {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    background: #fff;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-weight: 300;
                }
                .blog-date {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #6b7280;
                    font-weight: 300;
                }
                .blog-card h3 {
                    font-family: 'Cormorant Garamond', serif;
                    font-size: 1.5rem;
                    font-weight: 300;
                    margin: 0.75rem 0;
                    transition: color 0.3s ease;
                }
                .blog-card:hover h3 { color: var(--rose); }
                .blog-excerpt { color: var(--muted); font-weight: 300; line-height: 1.7; }
                .contact-split { align-items: start; }
                .form-card {
                    background: #fff;
                    padding: 2.5rem;
                    border-radius: 2px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.08);
                }
                .contact-title {
                    font-family: 'Cormorant Garamond', serif;
                    font-size: 1.875rem;
                    font-weight: 300;
                    margin: 0 0 1.5rem;
                }
                .contact-intro { color: var(--muted); font-weight: 300; line-height: 1.7; margin-bottom: 2rem; }
                .follow { margin-top: 2.5rem; }
                .call-cta { display: inline-block; margin-top: 2.5rem; }
                @media (max-width: 1024px) {
                    .portfolio-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 640px) {
                    .portfolio-grid { grid-template-columns: 1fr; }
                    .services-grid { grid-template-columns: 1fr; }
                    .form-card { padding: 1.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
