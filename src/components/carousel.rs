use yew::prelude::*;

use crate::fonts::{text_style, FontPreset, FontRole};

/// The first entry repeated at the end, so the scroll can jump back to the
/// top without a visible cut.
pub fn carousel_items(stats: &[&str]) -> Vec<String> {
    stats
        .iter()
        .chain(stats.first())
        .map(|s| s.to_string())
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct StatsCarouselProps {
    pub stats: Vec<String>,
    #[prop_or_default]
    pub preset: FontPreset,
    /// Distance from the bottom of the page, in px.
    #[prop_or(5)]
    pub bottom_offset: i32,
}

#[function_component(StatsCarousel)]
pub fn stats_carousel(props: &StatsCarouselProps) -> Html {
    let stats: Vec<&str> = props.stats.iter().map(String::as_str).collect();
    let style = text_style(props.preset, FontRole::Carousel);

    html! {
        <div class="carousel carousel-fade-in" style={format!("bottom: {}px;", props.bottom_offset)}>
            <style>
                {r#"
                    .carousel {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                        height: 12rem;
                        width: 100%;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        pointer-events: none;
                        user-select: none;
                        z-index: 10;
                    }
                    .carousel-window {
                        height: 4.5rem;
                        overflow: hidden;
                        min-width: 500px;
                        max-width: 95vw;
                        width: max-content;
                    }
                    .carousel-anim {
                        display: flex;
                        flex-direction: column;
                        text-align: center;
                        font-size: 3rem;
                        color: #0369a1;
                        line-height: 4.5rem;
                        white-space: nowrap;
                        animation: scrollUpPremium 12s cubic-bezier(0.25, 0.46, 0.45, 0.94) infinite;
                    }
                    .carousel-anim > div {
                        transition: opacity 0.6s ease-in-out;
                    }
                    .carousel-fade-in {
                        animation: carouselFadeIn 1.5s cubic-bezier(0.22, 1, 0.36, 1) 1.2s both;
                    }
                    @keyframes carouselFadeIn {
                        0% { opacity: 0; transform: translateX(-50%) translateY(30px) scale(0.95); }
                        100% { opacity: 1; transform: translateX(-50%) translateY(0) scale(1); }
                    }
                    @keyframes scrollUpPremium {
                        0% { transform: translateY(0); opacity: 1; }
                        22% { transform: translateY(0); opacity: 1; }
                        25% { transform: translateY(-4.5rem); opacity: 0.95; }
                        27% { opacity: 1; }
                        47% { transform: translateY(-4.5rem); opacity: 1; }
                        50% { transform: translateY(-9rem); opacity: 0.95; }
                        52% { opacity: 1; }
                        72% { transform: translateY(-9rem); opacity: 1; }
                        75% { transform: translateY(-13.5rem); opacity: 0.95; }
                        77% { opacity: 1; }
                        97% { transform: translateY(-13.5rem); opacity: 1; }
                        100% { transform: translateY(0); opacity: 1; }
                    }
                    @media (max-width: 640px) {
                        .carousel-window {
                            min-width: 0;
                        }
                        .carousel-anim {
                            font-size: 1.875rem;
                        }
                    }
                "#}
            </style>
            <div class="carousel-window">
                <div class="carousel-anim" style={style.clone()}>
                    { for carousel_items(&stats).into_iter().map(|item| html! {
                        <div style={style.clone()}>{item}</div>
                    }) }
                </div>
            </div>
        </div>
    }
}
