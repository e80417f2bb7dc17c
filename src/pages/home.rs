use log::info;
use yew::prelude::*;

use crate::components::{
    carousel::StatsCarousel, font_switcher::FontSwitcher, gradient_display::GradientDisplay,
    typewriter::TypewriterText,
};
use crate::config::{self, ARCHIVE_URL, EVENT_YEAR, STATS, TYPEWRITER_LINES};
use crate::fonts::{text_style, FontPreset, FontRole};

#[function_component(Home)]
pub fn home() -> Html {
    let preset = use_state(FontPreset::default);

    let on_preset_change = {
        let preset = preset.clone();
        Callback::from(move |next: FontPreset| {
            info!("Font preset switched to {}", next.value());
            preset.set(next);
        })
    };

    let lines: Vec<String> = TYPEWRITER_LINES.iter().map(|s| s.to_string()).collect();
    let stats: Vec<String> = STATS.iter().map(|s| s.to_string()).collect();

    html! {
        <div class="page">
            <style>
                {r#"
                    body {
                        margin: 0;
                    }
                    .page {
                        box-sizing: border-box;
                        height: 100vh;
                        background: #fff0d9;
                        padding: 4rem 4rem 12rem 4rem;
                        position: relative;
                        overflow: hidden;
                    }
                    .logo-layer {
                        position: absolute;
                        left: 0;
                        right: 0;
                        top: 0;
                        bottom: 12rem;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 10;
                        pointer-events: none;
                    }
                    .logo-animated {
                        width: 48vw;
                        height: auto;
                        animation: logoColorShift 12s ease-in-out infinite, fadeUp 1.2s cubic-bezier(0.22, 1, 0.36, 1) 0.2s both;
                    }
                    @keyframes logoColorShift {
                        0%   { filter: drop-shadow(0 0 20px rgba(213, 157, 107, 0.3)) drop-shadow(0 4px 12px rgba(0, 0, 0, 0.1)) hue-rotate(0deg); }
                        25%  { filter: drop-shadow(0 0 20px rgba(219, 195, 122, 0.3)) drop-shadow(0 4px 12px rgba(0, 0, 0, 0.1)) hue-rotate(15deg); }
                        50%  { filter: drop-shadow(0 0 20px rgba(133, 189, 179, 0.3)) drop-shadow(0 4px 12px rgba(0, 0, 0, 0.1)) hue-rotate(30deg); }
                        75%  { filter: drop-shadow(0 0 20px rgba(189, 199, 137, 0.3)) drop-shadow(0 4px 12px rgba(0, 0, 0, 0.1)) hue-rotate(15deg); }
                        100% { filter: drop-shadow(0 0 20px rgba(213, 157, 107, 0.3)) drop-shadow(0 4px 12px rgba(0, 0, 0, 0.1)) hue-rotate(0deg); }
                    }
                    @keyframes fadeUp {
                        0% { opacity: 0; transform: translateY(40px) scale(0.98); }
                        100% { opacity: 1; transform: translateY(0) scale(1); }
                    }
                    .bottom-left, .bottom-right {
                        position: absolute;
                        bottom: 0;
                        height: 12rem;
                        display: flex;
                        align-items: center;
                    }
                    .bottom-left {
                        left: 4rem;
                        animation: fadeUpLeft 1.1s cubic-bezier(0.22, 1, 0.36, 1) 0.5s both;
                    }
                    .bottom-right {
                        right: 4rem;
                        animation: fadeUpRight 1.1s cubic-bezier(0.22, 1, 0.36, 1) 0.8s both;
                    }
                    @keyframes fadeUpLeft {
                        0% { opacity: 0; transform: translateY(40px) translateX(-40px) scale(0.98); }
                        100% { opacity: 1; transform: translateY(0) translateX(0) scale(1); }
                    }
                    @keyframes fadeUpRight {
                        0% { opacity: 0; transform: translateY(40px) translateX(40px) scale(0.98); }
                        100% { opacity: 1; transform: translateY(0) translateX(0) scale(1); }
                    }
                    .typewriter {
                        font-size: 3rem;
                        color: #075985;
                    }
                    .typewriter-sub {
                        font-size: 1.875rem;
                        margin-top: 0.5rem;
                    }
                    .type-cursor {
                        display: inline-block;
                        width: 1ch;
                        animation: blink 1s steps(1) infinite;
                    }
                    @keyframes blink {
                        0%, 50% { opacity: 1; }
                        51%, 100% { opacity: 0; }
                    }
                    .archive-link {
                        font-size: 2.25rem;
                        background: #bae6fd;
                        color: #075985;
                        padding: 1.5rem 4rem;
                        border-radius: 9999px;
                        text-decoration: none;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: all 150ms ease-in-out;
                    }
                    .archive-link:hover {
                        background: #7dd3fc;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .footer {
                        position: absolute;
                        bottom: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        font-size: 0.75rem;
                        letter-spacing: 0.05em;
                        color: #bea883;
                        white-space: nowrap;
                    }
                    @media (max-width: 768px) {
                        .page {
                            padding: 1.5rem 1.5rem 16rem 1.5rem;
                        }
                        .logo-animated {
                            width: 70vw;
                        }
                        .bottom-left, .bottom-right {
                            left: 0;
                            right: 0;
                            height: auto;
                            justify-content: center;
                            text-align: center;
                        }
                        .bottom-left {
                            bottom: 8rem;
                        }
                        .bottom-right {
                            bottom: 3rem;
                        }
                        .typewriter {
                            font-size: 2.25rem;
                        }
                        .typewriter-sub {
                            font-size: 1.5rem;
                        }
                        .archive-link {
                            font-size: 1.5rem;
                            padding: 1rem 2.5rem;
                        }
                    }
                "#}
            </style>
            if config::show_font_switcher() {
                <FontSwitcher current={*preset} on_change={on_preset_change} />
            }
            <GradientDisplay year={EVENT_YEAR} />
            <StatsCarousel stats={stats} preset={*preset} />
            <div class="logo-layer">
                <img src="/assets/logo.png" alt="Logo" class="logo-animated" />
            </div>
            <div class="bottom-left">
                <TypewriterText lines={lines} class={classes!("typewriter")} preset={*preset} />
            </div>
            <div class="bottom-right">
                <a
                    href={ARCHIVE_URL}
                    class="archive-link"
                    style={text_style(*preset, FontRole::ButtonMain)}
                    aria-label="Visit 2024 Hack the Ridge Archive"
                >
                    {"Visit 2024 "}
                    <span style={text_style(*preset, FontRole::Button)}>{"Archive"}</span>
                    {" \u{2192}"}
                </a>
            </div>
            <div class="footer" style={text_style(*preset, FontRole::Copyright)}>
                {"\u{a9} 2025 Hack the Ridge. Designed & Built by Jerry and Peter"}
            </div>
        </div>
    }
}
