use std::rc::Rc;

use chrono::Datelike;
use log::{debug, info, warn};
use yew::prelude::*;

use crate::components::avatar::AvatarState;
use crate::components::carousel::{use_carousel, ImageCarousel, TransformationGallery};
use crate::components::faq::FaqAccordion;
use crate::components::nav::Nav;
use crate::components::profile_modal::{ModalClick, ModalState, ProfileModal};
use crate::config::CarouselConfig;
use crate::content::{ContactKind, SiteContent};

const PROGRESS: [&str; 3] = [
    "⏳ Month 1: Habit setup, gentle calorie deficit",
    "📊 Month 2: Body fat ↓, energy ↑",
    "🏃 Month 3: Visible inch loss, better digestion",
];

const ABOUT_POINTS: [&str; 4] = [
    "Customized diet & habit plans",
    "Weekly check‑ins & progress reports",
    "Simple home workouts & stretches",
    "WhatsApp support and reminders",
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingProps) -> Html {
    let content = &props.content;
    let modal = use_state(ModalState::default);
    // Shared by the header and the dialog so a broken image stays broken
    // across the dialog's remounts.
    let avatar = use_state(AvatarState::default);

    // Hero carousel and results card read the same index.
    let current_image = use_carousel(content.gallery.len(), CarouselConfig::default());

    let open_profile = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            let mut next = *modal;
            next.open();
            info!("Profile dialog opened");
            modal.set(next);
        })
    };

    let on_modal_click = {
        let modal = modal.clone();
        Callback::from(move |target: ModalClick| {
            let mut next = *modal;
            next.click(target);
            if !next.is_open() {
                debug!("Profile dialog dismissed via {:?}", target);
            }
            modal.set(next);
        })
    };

    let on_avatar_error = {
        let avatar = avatar.clone();
        let src = content.brand.avatar.clone();
        Callback::from(move |_: ()| {
            let mut next = *avatar;
            if next.image_failed() {
                warn!("Avatar image {} failed to load, showing initials", src);
                avatar.set(next);
            }
        })
    };

    html! {
        <div class="landing-page">
            <Nav
                content={content.clone()}
                avatar={*avatar}
                on_avatar_click={open_profile}
                on_avatar_error={on_avatar_error.clone()}
            />

            <section class="hero">
                <div class="hero-text">
                    <h1>
                        {"Look Great. Feel Healthy. "}
                        <span class="accent">{"Lose Weight"}</span>
                        {" sustainably."}
                    </h1>
                    <p class="hero-subtitle">
                        {"Personalized coaching with scientific body composition assessment: Weight, Body Fat, BMI, BMR, Visceral Fat, Skeletal Muscle and more."}
                    </p>
                    <div class="hero-cta-group">
                        <a class="button" href={content.whatsapp(&content.messages.hero_chat)}>{"Chat on WhatsApp"}</a>
                        <a class="button button-outline" href="#about">{"Join on Zoom (Info)"}</a>
                        <a class="button button-ghost" href="#results">{"See Results"}</a>
                    </div>
                    <p class="hero-note">{"★ 3‑day free trial • 100% money‑back guarantee"}</p>
                </div>
                <ImageCarousel images={content.gallery.clone()} current={current_image} />
            </section>

            { about(content) }
            { metrics(content) }
            { services(content) }

            <section id="results" class="band">
                <div class="section-inner">
                    <h2>{"Before / After"}</h2>
                    <p class="section-lead">{"Realistic, healthy progress—tracked monthly."}</p>
                    <div class="grid grid-2">
                        <TransformationGallery images={content.gallery.clone()} current={current_image} />
                        <div class="card">
                            <h3 class="card-title">{"Monthly Progress"}</h3>
                            <ul class="plain-list">
                                { for PROGRESS.iter().map(|line| html! { <li>{*line}</li> }) }
                            </ul>
                        </div>
                    </div>
                </div>
            </section>

            { pricing(content) }

            <section class="band">
                <div class="section-inner">
                    <h2>{"FAQ"}</h2>
                    <FaqAccordion entries={content.faq.clone()} />
                </div>
            </section>

            { contact(content) }
            { footer(content) }

            {
                if modal.is_open() {
                    html! {
                        <ProfileModal
                            content={content.clone()}
                            avatar={*avatar}
                            on_avatar_error={on_avatar_error}
                            on_click={on_modal_click}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <style>{STYLES}</style>
        </div>
    }
}

fn about(content: &SiteContent) -> Html {
    html! {
        <section id="about" class="section-inner">
            <div class="grid grid-3">
                <div class="card span-2">
                    <h3 class="card-title">{"About Coach"}</h3>
                    <p>
                        {"Namaste! I’m "}<strong>{&content.brand.name}</strong>
                        {", your Wellness Coach. "}{&content.brand.bio}
                    </p>
                    <ul class="check-list">
                        { for ABOUT_POINTS.iter().map(|point| html! { <li>{"✔ "}{*point}</li> }) }
                    </ul>
                </div>
                <div class="card">
                    <h3 class="card-title">{"Join on ZOOM"}</h3>
                    <p>{"Weekly orientation class for new members. Get your questions answered and learn how the program works."}</p>
                    <ul class="bullet-list">
                        { for content.orientation.iter().map(|line| html! { <li>{line}</li> }) }
                    </ul>
                    <a class="button full" href={content.whatsapp(&content.messages.zoom_link)}>{"Get Zoom Link"}</a>
                </div>
            </div>
        </section>
    }
}

fn metrics(content: &SiteContent) -> Html {
    html! {
        <section id="metrics" class="band">
            <div class="section-inner">
                <h2>{"Know your numbers"}</h2>
                <p class="section-lead">{"We track these body composition metrics to personalize your plan."}</p>
                <div class="grid grid-4">
                    { for content.metrics.iter().map(|metric| html! {
                        <div key={metric.label.clone()} class="card metric">
                            <span class={classes!("icon", metric.icon.class_name())}></span>
                            <span class="metric-label">{&metric.label}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn services(content: &SiteContent) -> Html {
    html! {
        <section id="services" class="section-inner">
            <h2>{"Services"}</h2>
            <p class="section-lead">{"Choose a goal — we’ll tailor the path."}</p>
            <div class="grid grid-3">
                { for content.services.iter().map(|service| html! {
                    <div key={service.title.clone()} class="card">
                        <h3 class="card-title">{&service.title}</h3>
                        <p>{&service.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn pricing(content: &SiteContent) -> Html {
    html! {
        <section id="pricing" class="section-inner">
            <h2>{"Plans & Trial"}</h2>
            <p class="section-lead">{"Start with a 3‑day free trial. Upgrade anytime."}</p>
            <div class="grid grid-3">
                { for content.pricing.iter().map(|tier| html! {
                    <div key={tier.name.clone()} class={classes!("card", "pricing-card", tier.highlighted.then(|| "highlighted"))}>
                        <h3 class="card-title">{format!("{} ({})", tier.name, tier.billing_period)}</h3>
                        <p>{&tier.summary}</p>
                        <ul class="plain-list">
                            { for tier.features.iter().map(|feature| html! { <li>{"• "}{feature}</li> }) }
                        </ul>
                        <a class="button full" href={content.whatsapp(&tier.cta_message)}>{&tier.cta_label}</a>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn contact(content: &SiteContent) -> Html {
    let call = content
        .channel(ContactKind::Call)
        .map(|channel| html! {
            <a class="button button-outline" href={channel.href("")}>{format!("☎ Call {}", channel.destination)}</a>
        })
        .unwrap_or_else(|_| html! {});
    let email = content
        .channel(ContactKind::Email)
        .map(|channel| html! {
            <a class="button button-secondary" href={channel.href("")}>{"✉ Email"}</a>
        })
        .unwrap_or_else(|_| html! {});

    html! {
        <section id="contact" class="section-inner">
            <h2>{"Contact"}</h2>
            <p class="section-lead">{"Reach out on WhatsApp or call directly."}</p>
            <div class="grid grid-2">
                <div class="card">
                    <h3 class="card-title">{"Talk to me"}</h3>
                    <div class="contact-actions">
                        {call}
                        <a class="button" href={content.whatsapp_default()}>{"💬 WhatsApp"}</a>
                        {email}
                    </div>
                </div>
                <div class="card">
                    <h3 class="card-title">{"Office hours"}</h3>
                    <ul class="plain-list">
                        { for content.office_hours.iter().map(|line| html! { <li>{line}</li> }) }
                    </ul>
                    <p class="location">{format!("Location: {}", content.location)}</p>
                </div>
            </div>
        </section>
    }
}

fn footer(content: &SiteContent) -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="footer">
            <p>{format!("© {} {} — Wellness Coach", year, content.brand.name)}</p>
            <div class="footer-links">
                <a href="#about">{"About"}</a>
                <a href="#services">{"Services"}</a>
                <a href="#contact">{"Contact"}</a>
            </div>
        </footer>
    }
}

const STYLES: &str = r#"
.landing-page {
    min-height: 100vh;
    background: linear-gradient(to bottom, #ffffff, #f8fafc);
    color: #1e293b;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}

.top-nav {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.85);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid #e2e8f0;
    transition: box-shadow 0.2s ease;
}

.top-nav.scrolled {
    box-shadow: 0 4px 16px rgba(15, 23, 42, 0.08);
}

.nav-content {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0.75rem 1rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.brand-avatar {
    border: none;
    background: none;
    padding: 0;
    cursor: pointer;
}

.brand-name {
    font-weight: 600;
    margin: 0;
}

.brand-tagline {
    font-size: 0.75rem;
    color: #64748b;
    margin: 0;
}

.avatar {
    width: 2.25rem;
    height: 2.25rem;
    border-radius: 1rem;
    object-fit: cover;
}

.avatar-initials {
    display: grid;
    place-items: center;
    background: rgba(22, 163, 74, 0.9);
    color: #fff;
    font-weight: 700;
}

.avatar-large {
    width: 6rem;
    height: 6rem;
    border-radius: 50%;
    font-size: 2rem;
    margin: 0 auto 1rem;
}

.nav-desktop {
    display: flex;
    align-items: center;
    gap: 1.5rem;
    font-size: 0.875rem;
}

.nav-link, .nav-desktop a, .footer-links a {
    color: inherit;
    text-decoration: none;
}

.nav-link:hover {
    color: #15803d;
}

.burger-menu {
    display: none;
    background: none;
    border: none;
    font-size: 1.5rem;
    cursor: pointer;
}

.nav-drawer {
    border-top: 1px solid #e2e8f0;
    background: #fff;
    padding: 0.75rem 1rem;
}

.drawer-link {
    display: block;
    padding: 0.25rem 0;
    color: inherit;
    text-decoration: none;
}

.button {
    display: inline-block;
    padding: 0.6rem 1.2rem;
    border-radius: 1rem;
    background: #16a34a;
    color: #fff;
    text-decoration: none;
    text-align: center;
}

.button-outline {
    background: transparent;
    color: #166534;
    border: 1px solid #16a34a;
}

.button-ghost {
    background: transparent;
    color: #166534;
}

.button-secondary {
    background: #e2e8f0;
    color: #1e293b;
}

.button.full, .drawer-cta {
    display: block;
    width: 100%;
    margin-top: 0.5rem;
    box-sizing: border-box;
}

.hero {
    max-width: 72rem;
    margin: 0 auto;
    padding: 2.5rem 1rem 3.5rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
}

.hero h1 {
    font-size: 3rem;
    font-weight: 800;
    line-height: 1.1;
}

.accent {
    color: #15803d;
}

.hero-subtitle, .section-lead {
    color: #475569;
}

.hero-cta-group, .contact-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
    margin-top: 1.5rem;
}

.hero-note {
    margin-top: 1.5rem;
    font-size: 0.875rem;
    color: #475569;
}

.carousel {
    position: relative;
    aspect-ratio: 4 / 3;
    border-radius: 1rem;
    overflow: hidden;
    border: 1px solid #e2e8f0;
    background: linear-gradient(135deg, #dcfce7, #ecfdf5);
}

.carousel-image {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0;
    transition: opacity 0.6s ease-in-out;
}

.carousel-image.active {
    opacity: 1;
}

.carousel-dots {
    position: absolute;
    bottom: 0.5rem;
    left: 0;
    right: 0;
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 0.25rem;
}

.carousel-dot {
    width: 0.4rem;
    height: 0.4rem;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.5);
}

.carousel-dot.active {
    background: #fff;
}

.section-inner {
    max-width: 72rem;
    margin: 0 auto;
    padding: 3rem 1rem;
}

.band {
    background: #fff;
    border-top: 1px solid #e2e8f0;
    border-bottom: 1px solid #e2e8f0;
}

.grid {
    display: grid;
    gap: 1rem;
    margin-top: 1.5rem;
}

.grid-2 { grid-template-columns: repeat(2, 1fr); }
.grid-3 { grid-template-columns: repeat(3, 1fr); }
.grid-4 { grid-template-columns: repeat(4, 1fr); }
.span-2 { grid-column: span 2; }

.card {
    background: #fff;
    border: 1px solid #e2e8f0;
    border-radius: 1rem;
    padding: 1.25rem;
    color: #475569;
}

.card-title {
    color: #1e293b;
    margin-top: 0;
}

.metric {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.metric-label {
    font-weight: 500;
    color: #1e293b;
}

.icon {
    width: 2.25rem;
    height: 2.25rem;
    border-radius: 0.75rem;
    background: #d1fae5;
}

.pricing-card.highlighted {
    border: 2px solid #10b981;
}

.plain-list, .check-list {
    list-style: none;
    padding: 0;
}

.transformation-image {
    width: 100%;
    aspect-ratio: 16 / 9;
    object-fit: cover;
    border-radius: 0.75rem;
}

.transformation-counter {
    font-size: 0.75rem;
    text-align: right;
}

.faq-item {
    border-bottom: 1px solid #e2e8f0;
}

.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    padding: 1rem 0;
    background: none;
    border: none;
    font-size: 1rem;
    text-align: left;
    cursor: pointer;
}

.faq-answer {
    padding-bottom: 1rem;
    color: #475569;
}

.modal-overlay {
    position: fixed;
    inset: 0;
    background: rgba(15, 23, 42, 0.6);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 100;
}

.modal-content {
    position: relative;
    background: #fff;
    border-radius: 1rem;
    padding: 2rem;
    max-width: 28rem;
    text-align: center;
}

.modal-close {
    position: absolute;
    top: 0.5rem;
    right: 0.75rem;
    background: none;
    border: none;
    font-size: 1.5rem;
    cursor: pointer;
}

.modal-actions {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.footer {
    border-top: 1px solid #e2e8f0;
    max-width: 72rem;
    margin: 0 auto;
    padding: 2rem 1rem;
    display: flex;
    justify-content: space-between;
    font-size: 0.875rem;
    color: #64748b;
}

.footer-links {
    display: flex;
    gap: 1rem;
}

@media (max-width: 768px) {
    .nav-desktop {
        display: none;
    }

    .burger-menu {
        display: block;
    }

    .hero, .grid-2, .grid-3 {
        grid-template-columns: 1fr;
    }

    .grid-4 {
        grid-template-columns: repeat(2, 1fr);
    }

    .span-2 {
        grid-column: auto;
    }

    .footer {
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
    }
}
"#;
