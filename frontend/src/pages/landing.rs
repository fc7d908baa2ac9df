use crate::components::hero_words::{RotatingWords, TypewriterWords};
use crate::components::resource_directory::ResourceDirectory;
use crate::config::{HeroAnimation, LandingConfig};
use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_else(LandingConfig::from_build_env)]
    pub config: LandingConfig,
}

/// "Students, Dreamers, and Makers"
fn join_words(words: &[&str]) -> String {
    match words {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = &props.config;

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let words = match config.hero {
        HeroAnimation::Rotate => html! { <RotatingWords words={config.words} /> },
        HeroAnimation::Typewriter => html! { <TypewriterWords words={config.words} /> },
        HeroAnimation::None | HeroAnimation::VideoBackground => html! {
            <span class="hero-words">{join_words(config.words)}</span>
        },
    };

    let background = match config.hero {
        HeroAnimation::VideoBackground => html! {
            <video
                class="hero-video"
                src={config.video_src}
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            ></video>
        },
        _ => html! { <div class="hero-background"></div> },
    };

    let embedded = if config.embed_directory {
        html! {
            <section class="embedded-directory">
                <ResourceDirectory />
            </section>
        }
    } else {
        html! {}
    };

    html! {
        <div class="landing-page">
            <style>{HERO_CSS}</style>
            <header class="hero">
                {background}
                <div class="hero-content">
                    <h1 class="hero-title">{"Free Tools for Students"}</h1>
                    <p class="hero-subtitle">
                        {"Curated free tools for "}
                        {words}
                        {". In a world of noise, cut the noise and build with clarity."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Resources} classes="forward-link">
                            <button class="hero-cta glass-pill">{"Get Started"}</button>
                        </Link<Route>>
                    </div>
                </div>
            </header>
            {embedded}
        </div>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        justify-content: center;
        align-items: flex-start;
        padding-top: 190px;
        color: #fff;
        overflow: hidden;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background: url('/assets/bg.png') center / cover no-repeat;
    }
    .hero-video {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        padding: 0 1rem;
        text-align: center;
    }
    .hero-title {
        font-family: 'The Seasons', serif;
        font-size: 3.75rem;
        line-height: 1.15;
        margin-bottom: 1.5rem;
    }
    .hero-subtitle {
        max-width: 36rem;
        margin: 0 auto 2rem;
        font-size: 1.25rem;
        line-height: 1.6;
    }
    .hero-words,
    .rotating-words,
    .typewriter {
        font-family: 'The Seasons', serif;
    }
    .rotating-words {
        position: relative;
        display: inline-block;
        min-width: 6.5em;
        height: 1.6em;
        vertical-align: bottom;
    }
    .rotating-word {
        position: absolute;
        left: 0;
        opacity: 0;
        transform: translateY(0.5em);
        transition: opacity 0.5s, transform 0.5s;
    }
    .rotating-word.active {
        opacity: 1;
        transform: translateY(0);
    }
    .typewriter-cursor {
        animation: blink 1s step-end infinite;
    }
    .typewriter-cursor.deleting {
        animation: none;
    }
    @keyframes blink {
        50% { opacity: 0; }
    }
    .hero-cta {
        padding: 0.5rem 2rem;
        font-size: 1.125rem;
        color: #fff;
        cursor: pointer;
        transition: transform 0.3s;
    }
    .hero-cta:hover {
        transform: scale(1.05) translateY(-2px);
    }
    .embedded-directory {
        padding: 5rem 0;
        background: #fff;
    }
    @media (max-width: 768px) {
        .hero-title {
            font-size: 3rem;
        }
        .hero-subtitle {
            font-size: 1.125rem;
        }
    }
"#;
