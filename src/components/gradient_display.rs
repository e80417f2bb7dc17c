use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::background::blobs::{sample_blobs, BlobDescriptor};
use crate::background::registry::DocumentRegistry;
use crate::background::styles::{mount_blob_styles, mount_gradient_styles};
use crate::config::{
    BACKGROUND_ANIMATION_CLASS, BACKGROUND_PALETTE, BLOB_COLORS, EVENT_TITLE, EVENT_YEAR, NUM_BLOBS,
};

#[derive(Properties, PartialEq)]
pub struct GradientDisplayProps {
    #[prop_or(AttrValue::Static(EVENT_TITLE))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static(EVENT_YEAR))]
    pub year: AttrValue,
}

#[function_component(GradientDisplay)]
pub fn gradient_display(props: &GradientDisplayProps) -> Html {
    let aria_label = format!(
        "Animated abstract background with blurred, moving colour blobs on a shifting gradient, overlaid with the text '{} {}'",
        props.title, props.year
    );

    // sampled once per mount, never on re-render
    let blobs = use_memo(|_| sample_blobs(NUM_BLOBS, &mut rand::thread_rng()), ());

    use_effect_with_deps(
        move |blobs: &Rc<Vec<BlobDescriptor>>| {
            let registry = DocumentRegistry::current();
            let guard = mount_blob_styles(&registry, blobs, BLOB_COLORS, &mut rand::thread_rng());
            info!("Blob animations ready for {} blobs", blobs.len());
            move || drop(guard)
        },
        blobs.clone(),
    );

    use_effect_with_deps(
        move |_| {
            let guard = mount_gradient_styles(&DocumentRegistry::current(), BACKGROUND_PALETTE);
            move || drop(guard)
        },
        (),
    );

    html! {
        <div class={classes!("gradient-display", BACKGROUND_ANIMATION_CLASS)} role="img" aria-label={aria_label}>
            <style>
                {r#"
                    .gradient-display {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        border-radius: 80px;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .gradient-title-layer {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 0.25rem;
                        padding-top: 6%;
                        pointer-events: none;
                    }
                    .gradient-title {
                        color: #fff;
                        text-transform: uppercase;
                        font-family: 'Sacco', 'Righteous', sans-serif;
                        font-size: clamp(8rem, 48vw, 27rem);
                        line-height: 1;
                        letter-spacing: 0.05em;
                        margin: 0;
                        z-index: 1;
                    }
                    .gradient-year {
                        position: absolute;
                        color: #fff;
                        font-weight: 700;
                        font-family: 'Inter', sans-serif;
                        bottom: clamp(1rem, 4vh, 2rem);
                        right: clamp(2rem, 6vw, 4rem);
                        font-size: clamp(6rem, 12vw, 7rem);
                        text-shadow: 0 0 10px rgba(0, 0, 0, 0.2);
                        pointer-events: none;
                        z-index: 1;
                    }
                    @media (max-width: 768px) {
                        .gradient-display {
                            border-radius: 40px;
                        }
                        .gradient-title {
                            font-size: clamp(4rem, 18vw, 8rem);
                        }
                        .gradient-year {
                            font-size: clamp(2.5rem, 10vw, 4rem);
                        }
                    }
                "#}
            </style>
            { for blobs.iter().map(|blob| html! {
                <div key={blob.id.clone()} class={blob.id.clone()}></div>
            }) }
            <div class="gradient-title-layer">
                <h1 class="gradient-title">{props.title.clone()}</h1>
            </div>
            <div class="gradient-year">{props.year.clone()}</div>
        </div>
    }
}
