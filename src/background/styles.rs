use log::{debug, warn};
use rand::Rng;

use super::blobs::{blob_stylesheet, BlobDescriptor};
use super::color::Rgb;
use super::gradient::{gradient_stylesheet, GradientCycle};
use super::registry::{StyleGuard, StyleRegistry};
use crate::config::{BACKGROUND_ANIMATION_STYLE_ID, BLOB_ANIMATION_STYLE_ID};

/// Synthesises and installs the blob animations. The sheet lives until the
/// returned guard is dropped.
pub fn mount_blob_styles<R: StyleRegistry, G: Rng>(
    registry: &R,
    blobs: &[BlobDescriptor],
    palette: &[Rgb],
    rng: &mut G,
) -> StyleGuard<R> {
    let (sets, css) = blob_stylesheet(blobs, palette, rng);
    debug!("Synthesised {} blob keyframe sets", sets.len());
    StyleGuard::acquire(registry, BLOB_ANIMATION_STYLE_ID, &css)
}

/// Synthesises and installs the gradient cycle, or nothing for an empty
/// palette.
pub fn mount_gradient_styles<R: StyleRegistry>(
    registry: &R,
    palette: &[Rgb],
) -> Option<StyleGuard<R>> {
    match GradientCycle::from_palette(palette) {
        Some(cycle) => {
            debug!(
                "Gradient cycle: {} frames over {}s",
                cycle.frame_count(),
                cycle.duration_s()
            );
            let css = gradient_stylesheet(&cycle);
            Some(StyleGuard::acquire(registry, BACKGROUND_ANIMATION_STYLE_ID, &css))
        }
        None => {
            warn!("Background palette is empty, gradient disabled");
            None
        }
    }
}
