use log::info;
use web_sys::{MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::before_after::BeforeAfter;
use crate::components::icon::{Icon, IconKind};
use crate::components::in_view::{InView, Motion};
use crate::components::nav::SiteNav;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::section_heading::SectionHeading;
use crate::components::testimonial::TestimonialCard;
use crate::config;
use crate::content::{academy, display_date};
use crate::navigation::{self, ACADEMY_NAV};
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
                        <Icon kind={IconKind::GraduationCap} size={16} />
                        <span>{"Académie de Maquillage"}</span>
                    </div>
                    <h1 class="hero-title">
                        {"Apprenez l'art du maquillage"}
                        <em>{"avec une professionnelle"}</em>
                    </h1>
                    <p class="hero-lead">
                        {"Formations en petits groupes pour se maquiller au quotidien ou devenir maquilleuse professionnelle, à Casablanca."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn-primary" onclick={scroll_callback("inscription")}>
                            {"Je m'inscris"}
                        </button>
                        <button class="btn-link" onclick={scroll_callback("formations")}>
                            <span>{"Voir les formations"}</span>
                            <Icon kind={IconKind::ArrowRight} size={18} />
                        </button>
                    </div>
                </InView>
                <InView motion={Motion::FadeRight} amount={0.0} delay_ms={400}>
                    <div class="hero-photo">
                        <img src={config::asset_url(academy::HERO_PHOTO, 800)} alt="Atelier de l'Académie Zineb Moudden" />
                    </div>
                </InView>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="academie" class="section bg-white">
            <div class="container split">
                <InView motion={Motion::FadeLeft}>
                    <div class="split-photo">
                        <img src={config::asset_url(academy::ABOUT_PHOTO, 800)} alt="Élèves de l'Académie" loading="lazy" />
                    </div>
                </InView>
                <InView motion={Motion::FadeRight} class="split-copy">
                    <span class="eyebrow">{"L'Académie"}</span>
                    <div class="eyebrow-rule"></div>
                    <h2 class="section-title">
                        {"Un savoir-faire "}<span class="accent">{"transmis avec passion"}</span>
                    </h2>
                    { for academy::ABOUT_PARAGRAPHS.iter().map(|p| html! { <p>{*p}</p> }) }
                    <div class="stats">
                        { for academy::STATS.iter().map(|stat| html! {
                            <div>
                                <div class="stat-value">
                                    <Icon kind={stat.icon} size={24} />
                                    <span>{stat.value}</span>
                                </div>
                                <p class="stat-label">{stat.label}</p>
                            </div>
                        }) }
                    </div>
                </InView>
            </div>
        </section>
    }
}

#[function_component(Courses)]
fn courses() -> Html {
    html! {
        <section id="formations" class="section bg-cream">
            <div class="container">
                <SectionHeading
                    eyebrow="Formations"
                    title="Choisissez votre"
                    accent={AttrValue::Static("parcours")}
                    subtitle={AttrValue::Static("Du premier pinceau à la certification professionnelle")}
                />
                <div class="card-grid">
                    { for academy::COURSES.iter().enumerate().map(|(i, course)| html! {
                        <InView key={course.title} amount={0.2} delay_ms={(i as u32) * 200}>
                            <div class="card course-card">
                                <div class="card-icon"><Icon kind={course.icon} size={28} /></div>
                                <h3>{course.title}</h3>
                                <div class="course-meta">
                                    <span><Icon kind={IconKind::Clock} size={16} />{course.duration}</span>
                                    <span><Icon kind={IconKind::Award} size={16} />{course.level}</span>
                                </div>
                                <ul class="check-list">
                                    { for course.bullets.iter().map(|bullet| html! {
                                        <li><Icon kind={IconKind::Check} size={20} /><span>{*bullet}</span></li>
                                    }) }
                                </ul>
                                <p class="course-perk">{course.price_label}</p>
                                <p class="course-session">
                                    <Icon kind={IconKind::Calendar} size={16} />
                                    {format!("Prochaine session : {}", display_date(course.next_session))}
                                </p>
                                <button class="btn-link" onclick={scroll_callback("inscription")}>
                                    <span>{"Réserver ma place"}</span>
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

#[function_component(Results)]
fn results() -> Html {
    html! {
        <section id="resultats" class="section bg-white">
            <div class="container">
                <SectionHeading
                    eyebrow="Résultats"
                    title="Avant"
                    accent={AttrValue::Static("& après")}
                    subtitle={AttrValue::Static("Faites glisser le curseur pour découvrir une mise en beauté réalisée en formation")}
                />
                <InView motion={Motion::Zoom} amount={0.2} class="results-frame">
                    <BeforeAfter
                        before_src={config::asset_url(academy::BEFORE_PHOTO, 1200)}
                        after_src={config::asset_url(academy::AFTER_PHOTO, 1200)}
                    />
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
                <SectionHeading eyebrow="Témoignages" title="Elles ont suivi" accent={AttrValue::Static("nos formations")} />
                <div class="card-grid">
                    { for academy::TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <InView key={t.author_name} delay_ms={(i as u32) * 200}>
                            <TestimonialCard testimonial={t.clone()} />
                        </InView>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Enrollment)]
fn enrollment() -> Html {
    let on_submit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Enrollment form submitted; no submission endpoint is configured");
    });

    html! {
        <section id="inscription" class="section bg-cream">
            <div class="container">
                <SectionHeading
                    eyebrow="Inscription"
                    title="Réservez votre"
                    accent={AttrValue::Static("place")}
                    subtitle={AttrValue::Static("Les groupes sont limités à six élèves. Nous revenons vers vous sous 48h pour confirmer la session.")}
                />
                <div class="split enroll-split">
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
                                    <label>{"Votre niveau"}</label>
                                    <select>
                                        <option value="">{"Sélectionnez votre niveau..."}</option>
                                        { for academy::EXPERIENCE_OPTIONS.iter().map(|level| html! {
                                            <option>{*level}</option>
                                        }) }
                                    </select>
                                </div>
                                <div class="field">
                                    <label>{"Formation souhaitée"}</label>
                                    <select>
                                        <option value="">{"Sélectionnez une formation..."}</option>
                                        { for academy::COURSES.iter().map(|course| html! {
                                            <option>{course.title}</option>
                                        }) }
                                    </select>
                                </div>
                            </div>
                            <div class="field">
                                <label>{"Date de début souhaitée"}</label>
                                <input type="date" />
                            </div>
                            <div class="field">
                                <label>{"Vos objectifs"}</label>
                                <textarea
                                    rows="4"
                                    placeholder="Parlez-nous de votre expérience et de ce que vous souhaitez apprendre..."
                                />
                            </div>
                            <button type="submit" class="btn-primary btn-block">{"Envoyer mon inscription"}</button>
                        </form>
                    </InView>

                    <InView motion={Motion::FadeRight} amount={0.2} class="enroll-info">
                        <h3 class="contact-title">{"Comment ça se passe ?"}</h3>
                        <ol class="steps">
                            <li><strong>{"Inscription"}</strong>{" : envoyez le formulaire avec la formation choisie."}</li>
                            <li><strong>{"Confirmation"}</strong>{" : nous validons la date et votre niveau par téléphone."}</li>
                            <li><strong>{"Formation"}</strong>{" : tout le matériel professionnel est fourni au studio."}</li>
                        </ol>
                        <div class="detail-list">
                            <div class="detail">
                                <div class="detail-icon"><Icon kind={IconKind::MapPin} size={20} /></div>
                                <div>
                                    <p class="detail-label">{"Lieu"}</p>
                                    <p class="detail-line">{"Studio Zineb Moudden, Casablanca"}</p>
                                </div>
                            </div>
                            <div class="detail">
                                <div class="detail-icon"><Icon kind={IconKind::Mail} size={20} /></div>
                                <div>
                                    <p class="detail-label">{"Email"}</p>
                                    <p class="detail-line">{config::CONTACT_EMAIL}</p>
                                </div>
                            </div>
                        </div>
                        <a class="btn-rose call-cta" href={config::mailto("Question sur les formations")}>{"Nous écrire"}</a>
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
                        <h3 class="footer-brand">{"Zineb Moudden "}<span>{"Académie"}</span></h3>
                        <p class="footer-about">
                            {"Formations au maquillage pour particulières et futures professionnelles. Une pédagogie exigeante, en petits groupes, au cœur de Casablanca."}
                        </p>
                        <div class="socials">
                            <a class="social" href="#" aria-label="Instagram"><Icon kind={IconKind::Instagram} size={22} /></a>
                            <a class="social" href={config::mailto("Académie")} aria-label="Email"><Icon kind={IconKind::Mail} size={22} /></a>
                        </div>
                    </div>
                    <div>
                        <h4>{"Navigation"}</h4>
                        <ul class="footer-list">
                            { for ACADEMY_NAV.iter().map(|item| html! {
                                <li key={item.section} onclick={scroll_callback(item.section)}>{item.label}</li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Formations"}</h4>
                        <ul class="footer-list">
                            { for academy::FOOTER_COURSES.iter().map(|course| html! {
                                <li onclick={scroll_callback("formations")}>{*course}</li>
                            }) }
                            <li>
                                <Link<Route> to={Route::Studio} classes="footer-route">
                                    {"Le studio"}
                                </Link<Route>>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2024 Zineb Moudden Académie. Tous droits réservés."}</p>
                    <div>
                        <a href="#">{"Mentions Légales"}</a>
                        <a href="#">{"Confidentialité"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

/// Enrollment page of the makeup academy.
#[function_component(Academy)]
pub fn academy_page() -> Html {
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
        <div class="academy-page">
            <ScrollProgress />
            <SiteNav
                brand="Zineb"
                brand_accent="Académie"
                items={&ACADEMY_NAV[..]}
                cta_label="S'inscrire"
                cta_section="inscription"
            />
            <Hero />
            <About />
            <Courses />
            <Results />
            <Testimonials />
            <Enrollment />
            <Footer />
            <style>
                {r#"
                .course-meta {
                    display: flex;
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #6b7280;
                    font-weight: 300;
                }
                .course-meta span { display: inline-flex; align-items: center; gap: 0.375rem; }
                .course-meta .icon { color: var(--rose); }
                .course-perk {
                    font-family: 'Cormorant Garamond', serif;
                    font-style: italic;
                    font-size: 1.125rem;
                    margin: 0 0 0.5rem;
                }
                .course-session {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: var(--muted);
                    font-weight: 300;
                    margin: 0 0 1.5rem;
                }
                .results-frame {
                    max-width: 56rem;
                    margin: 0 auto;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                }
                .enroll-split { align-items: start; }
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
                .steps {
                    padding-left: 1.25rem;
                    margin: 0 0 2.5rem;
                    color: var(--muted);
                    font-weight: 300;
                    line-height: 1.7;
                }
                .steps li { margin-bottom: 0.75rem; }
                .steps strong { color: #000; font-weight: 500; }
                .call-cta { display: inline-block; margin-top: 2.5rem; }
                @media (max-width: 640px) {
                    .form-card { padding: 1.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
