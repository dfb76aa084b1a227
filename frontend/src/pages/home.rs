use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::scroll_reveal::{FadeIn, SlideLeft, SlideRight, SlideUp};
use crate::components::viewport::use_active_section;
use crate::config;
use crate::content::{self, stagger_delay, SECTIONS};
use crate::nav::{scroll_to_section, Nav};

fn render_hero() -> Html {
    let book = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
    let learn_more = Callback::from(|_: MouseEvent| scroll_to_section("about"));

    html! {
        <section id="home" class="hero-section">
            <div class="hero-background"></div>
            <FadeIn delay={300}>
                <div class="hero-content">
                    <SlideUp delay={500}>
                        <h1>{"Train with Coach "}<span class="accent">{config::COACH_NAME}</span></h1>
                    </SlideUp>
                    <SlideUp delay={700}>
                        <p class="hero-subtitle">
                            {"Elevate Your Game with Professional Tennis Coaching. Personalized training programs for players of all levels."}
                        </p>
                    </SlideUp>
                    <SlideUp delay={900}>
                        <div class="hero-buttons">
                            <button class="primary-button" onclick={book}>{"Book a Session"}</button>
                            <button class="outline-button" onclick={learn_more}>{"Learn More"}</button>
                        </div>
                    </SlideUp>
                </div>
            </FadeIn>
        </section>
    }
}

fn render_about() -> Html {
    html! {
        <section id="about" class="section muted">
            <div class="container two-columns">
                <SlideUp delay={200}>
                    <div>
                        <h2 class="section-title left">{"About Coach Reynaldo"}</h2>
                        <p class="body-text">
                            {"Coach Reynaldo Martinez is a passionate tennis coach helping players of all levels improve their game. With over 40 years of professional coaching experience, he brings dedication, expertise, and personalized training methods to help you reach your tennis goals."}
                        </p>
                        <p class="body-text">
                            {"Whether you're a beginner looking to learn the fundamentals or an advanced player aiming for competitive excellence, Coach Reynaldo provides the guidance and support you need to elevate your performance."}
                        </p>
                        <div class="highlight-grid">
                            { for content::HIGHLIGHTS.iter().map(|(icon, title, subtitle)| html! {
                                <div class="card highlight" key={*title}>
                                    <div class="icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*subtitle}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </SlideUp>
                <SlideUp delay={400}>
                    <div class="portrait-wrapper">
                        <img src="/reyImg.jpg" alt="Coach Reynaldo Martinez" class="portrait" />
                        <div class="experience-badge">
                            <div class="badge-value">{"40+"}</div>
                            <div class="badge-label">{"Years Experience"}</div>
                        </div>
                    </div>
                </SlideUp>
            </div>
        </section>
    }
}

fn render_achievements() -> Html {
    html! {
        <section id="achievements" class="section">
            <div class="container">
                <FadeIn>
                    <h2 class="section-title">{"Achievements & Milestones"}</h2>
                </FadeIn>
                <div class="three-columns">
                    { for content::ACHIEVEMENTS.iter().enumerate().map(|(i, a)| html! {
                        <SlideUp key={a.title} delay={stagger_delay(200, 200, i)}>
                            <div class="card achievement">
                                <div class="icon large">{a.icon}</div>
                                <h3>{a.title}</h3>
                                <span class="card-subtitle">{a.period}</span>
                                <p>{a.description}</p>
                            </div>
                        </SlideUp>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_students() -> Html {
    html! {
        <section id="students" class="section muted">
            <div class="container">
                <FadeIn>
                    <h2 class="section-title">{"My Students in Action"}</h2>
                    <p class="section-lead">
                        {"See the progress and dedication of my trainee students. These photos showcase their journey and improvement through our training sessions."}
                    </p>
                </FadeIn>
                <div class="gallery">
                    { for content::STUDENT_PHOTOS.iter().enumerate().map(|(i, photo)| html! {
                        <SlideUp key={photo.title} delay={stagger_delay(200, 100, i)}>
                            <div class="card photo-tile">
                                <img src={photo.src} alt={photo.alt} loading="lazy" />
                                <div class="photo-shade"></div>
                                <div class="photo-caption">
                                    <h4>{photo.title}</h4>
                                    <p>{photo.caption}</p>
                                </div>
                            </div>
                        </SlideUp>
                    }) }
                </div>
                <SlideUp delay={800}>
                    <div class="stats-row">
                        { for content::STATS.iter().map(|(value, label)| html! {
                            <div class="stat" key={*label}>
                                <div class="stat-value">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </SlideUp>
            </div>
        </section>
    }
}

fn render_training() -> Html {
    html! {
        <section id="training" class="section muted">
            <div class="container">
                <FadeIn>
                    <h2 class="section-title">{"Training & Location"}</h2>
                </FadeIn>
                <div class="two-columns top">
                    <SlideLeft delay={200}>
                        <div>
                            <div class="card">
                                <h3 class="card-title">{"📍 Training Location"}</h3>
                                <p class="body-text">
                                    {format!("Currently offering sessions at {}, featuring professional-grade courts and excellent facilities for optimal training conditions.", config::VENUE)}
                                </p>
                                <div class="detail-row">{"📅 "}{config::HOURS}</div>
                                <div class="detail-row">{"📍 "}{config::VENUE}</div>
                            </div>
                            <div class="card spaced">
                                <h3 class="card-title">{"Training Programs"}</h3>
                                <div class="badges">
                                    { for content::PROGRAMS.iter().map(|p| html! {
                                        <span class="badge" key={*p}>{*p}</span>
                                    }) }
                                </div>
                            </div>
                        </div>
                    </SlideLeft>
                    <SlideRight delay={400}>
                        <div class="card full-height">
                            <h3 class="card-title">{"Location Map"}</h3>
                            <div class="map-frame">
                                <iframe
                                    src={config::MAP_EMBED_URL}
                                    width="100%"
                                    height="100%"
                                    style="border: 0;"
                                    allowfullscreen=true
                                    loading="lazy"
                                    referrerpolicy="no-referrer-when-downgrade"
                                ></iframe>
                            </div>
                        </div>
                    </SlideRight>
                </div>
            </div>
        </section>
    }
}

fn render_contact() -> Html {
    html! {
        <section id="contact" class="section">
            <div class="container">
                <FadeIn>
                    <h2 class="section-title">{"Get In Touch"}</h2>
                </FadeIn>
                <div class="two-columns narrow">
                    <SlideUp delay={200}>
                        <div>
                            <h3 class="card-title">{"Ready to Start Training?"}</h3>
                            <p class="body-text">
                                {"Contact me today to schedule your first session or to learn more about my training programs. I'm here to help you achieve your tennis goals!"}
                            </p>
                            <div class="detail-row">{"📞 "}{config::PHONE}</div>
                            <div class="detail-row">{"✉ "}{config::EMAIL}</div>
                            <div class="detail-row">{"📍 "}{config::CITY}</div>
                        </div>
                    </SlideUp>
                    <SlideUp delay={400}>
                        <ContactForm />
                    </SlideUp>
                </div>
            </div>
        </section>
    }
}

fn render_footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-brand">{format!("Coach {}", config::COACH_NAME)}</div>
            <p>{"Professional Tennis Coaching • Elevate Your Game"}</p>
            <div class="social-links">
                { for content::SOCIAL_LINKS.iter().map(|name| html! {
                    <a href="#" key={*name}>{*name}</a>
                }) }
            </div>
            <p class="copyright">{format!("© {} Coach {}. All rights reserved.", year, config::COACH_NAME)}</p>
        </footer>
    }
}

#[function_component]
pub fn Home() -> Html {
    let active = use_active_section(SECTIONS);

    html! {
        <div class="page">
            <Nav sections={SECTIONS} active={*active} />
            { render_hero() }
            { render_about() }
            { render_achievements() }
            { render_students() }
            { render_training() }
            { render_contact() }
            { render_footer() }
            <style>
                {r#"
                :root {
                    --primary: #15803d;
                    --primary-dark: #166534;
                    --foreground: #1f2937;
                    --muted: #6b7280;
                    --muted-bg: rgba(243, 244, 246, 0.6);
                    --card: #ffffff;
                    --border: #e5e7eb;
                }
                body {
                    margin: 0;
                    font-family: 'Open Sans', sans-serif;
                    color: var(--foreground);
                    background: #ffffff;
                }
                h1, h2, h3, h4, .nav-logo, .footer-brand, .stat-value, .badge-value {
                    font-family: 'Montserrat', sans-serif;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid var(--border);
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-weight: 900;
                    font-size: 1.25rem;
                    color: var(--primary);
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                    color: var(--foreground);
                    transition: color 0.3s ease;
                }
                .nav-link:hover, .nav-link.active {
                    color: var(--primary);
                }
                .nav-link.active {
                    font-weight: 600;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 20px;
                    height: 2px;
                    background: var(--foreground);
                    transition: all 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) { transform: translateY(6px) rotate(45deg); }
                .burger-menu.open span:nth-child(2) { opacity: 0; }
                .burger-menu.open span:nth-child(3) { transform: translateY(-6px) rotate(-45deg); }
                .mobile-menu {
                    display: none;
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }
                .nav-link.mobile {
                    display: block;
                    width: 100%;
                    text-align: left;
                    padding: 0.5rem 1rem;
                }
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, rgba(21, 128, 61, 0.1), rgba(234, 179, 8, 0.05));
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-image: url('/tennisbg.jpg');
                    background-size: cover;
                    background-position: center;
                    opacity: 0.2;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .hero-content h1 {
                    font-weight: 900;
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    margin-bottom: 1.5rem;
                }
                .accent {
                    color: var(--primary);
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: var(--muted);
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                }
                .hero-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .primary-button, .outline-button {
                    padding: 0.75rem 2rem;
                    border-radius: 6px;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .primary-button {
                    background: var(--primary);
                    color: #ffffff;
                    border: none;
                }
                .primary-button:hover {
                    background: var(--primary-dark);
                }
                .outline-button {
                    background: transparent;
                    color: var(--primary);
                    border: 1px solid var(--primary);
                }
                .outline-button:hover {
                    background: var(--primary);
                    color: #ffffff;
                }
                .full-width {
                    width: 100%;
                }
                .section {
                    padding: 5rem 0;
                }
                .section.muted {
                    background: var(--muted-bg);
                }
                .section-title {
                    font-weight: 900;
                    font-size: clamp(1.9rem, 4vw, 2.25rem);
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .section-title.left {
                    text-align: left;
                    margin-bottom: 1.5rem;
                }
                .section-lead {
                    text-align: center;
                    color: var(--muted);
                    max-width: 42rem;
                    margin: -2rem auto 3rem;
                }
                .body-text {
                    color: var(--muted);
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .two-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .two-columns.top {
                    align-items: stretch;
                }
                .two-columns.narrow {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .three-columns {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .card {
                    background: var(--card);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 1.5rem;
                    transition: box-shadow 0.3s ease;
                }
                .card:hover {
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                }
                .card.spaced {
                    margin-top: 1.5rem;
                }
                .card.full-height {
                    height: 100%;
                    box-sizing: border-box;
                }
                .card-title {
                    font-weight: 700;
                    font-size: 1.25rem;
                    margin: 0 0 1rem;
                }
                .card-subtitle {
                    color: var(--muted);
                    font-size: 0.9rem;
                }
                .icon {
                    font-size: 2rem;
                    margin-bottom: 0.5rem;
                }
                .icon.large {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .highlight-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }
                .highlight, .achievement {
                    text-align: center;
                }
                .highlight h3 {
                    font-size: 0.875rem;
                    margin: 0;
                }
                .highlight p {
                    font-size: 0.75rem;
                    color: var(--muted);
                }
                .portrait-wrapper {
                    position: relative;
                    display: flex;
                    justify-content: center;
                }
                .portrait {
                    width: 100%;
                    max-width: 28rem;
                    border-radius: 12px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .experience-badge {
                    position: absolute;
                    bottom: -1rem;
                    right: -1rem;
                    background: var(--primary);
                    color: #ffffff;
                    padding: 1rem;
                    border-radius: 12px;
                    text-align: center;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.2);
                }
                .badge-value {
                    font-weight: 900;
                    font-size: 1.5rem;
                }
                .badge-label {
                    font-size: 0.875rem;
                }
                .gallery {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .photo-tile {
                    position: relative;
                    overflow: hidden;
                    padding: 0;
                }
                .photo-tile img {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                    display: block;
                    transition: transform 0.3s ease;
                }
                .photo-tile:hover img {
                    transform: scale(1.05);
                }
                .photo-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.5), transparent);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .photo-caption {
                    position: absolute;
                    bottom: 1rem;
                    left: 1rem;
                    color: #ffffff;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .photo-caption h4 {
                    font-size: 0.875rem;
                    margin: 0;
                }
                .photo-caption p {
                    font-size: 0.75rem;
                    margin: 0;
                }
                .photo-tile:hover .photo-shade, .photo-tile:hover .photo-caption {
                    opacity: 1;
                }
                .stats-row {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    text-align: center;
                }
                .stat-value {
                    font-weight: 900;
                    font-size: 1.9rem;
                    color: var(--primary);
                    margin-bottom: 0.5rem;
                }
                .stat-label {
                    font-size: 0.875rem;
                    color: var(--muted);
                }
                .detail-row {
                    font-size: 0.9rem;
                    margin-bottom: 0.75rem;
                }
                .badges {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .badge {
                    background: #f3f4f6;
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                .map-frame {
                    height: 16rem;
                    border-radius: 12px;
                    overflow: hidden;
                    background: #f3f4f6;
                }
                .contact-card {
                    background: var(--card);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 1.5rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-form input, .contact-form textarea {
                    padding: 0.6rem 0.75rem;
                    border: 1px solid var(--border);
                    border-radius: 6px;
                    font: inherit;
                }
                .contact-form input:focus, .contact-form textarea:focus {
                    outline: 2px solid var(--primary);
                    border-color: transparent;
                }
                .mail-alt {
                    font-size: 0.85rem;
                    color: var(--muted);
                    margin-top: 1rem;
                }
                .mail-alt a {
                    color: var(--primary);
                }
                .site-footer {
                    background: var(--card);
                    border-top: 1px solid var(--border);
                    padding: 3rem 1rem;
                    text-align: center;
                }
                .footer-brand {
                    font-weight: 900;
                    font-size: 1.25rem;
                    color: var(--primary);
                    margin-bottom: 1rem;
                }
                .site-footer p {
                    color: var(--muted);
                }
                .social-links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin: 1.5rem 0;
                }
                .social-links a {
                    color: var(--muted);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .social-links a:hover {
                    color: var(--primary);
                }
                .copyright {
                    font-size: 0.875rem;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                    .mobile-menu {
                        display: block;
                    }
                    .mobile-menu.open {
                        max-height: 24rem;
                        opacity: 1;
                        padding-bottom: 1rem;
                    }
                    .two-columns, .three-columns, .highlight-grid {
                        grid-template-columns: 1fr;
                    }
                    .gallery {
                        grid-template-columns: 1fr;
                    }
                    .stats-row {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (min-width: 769px) and (max-width: 1024px) {
                    .gallery {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
