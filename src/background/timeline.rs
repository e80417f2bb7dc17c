//! Pure sampling of the background animations at a point in time.
//!
//! The browser interpolates the generated keyframes on its own; these
//! functions reproduce that interpolation so the motion can be reasoned
//! about and tested without a rendering engine.

use super::blobs::{BlobDescriptor, BlobKeyframeSet, KeyframeStop};
use super::color::Rgb;
use super::gradient::{GradientCycle, GradientFrame};

/// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`.
pub fn ease_in_out(x: f64) -> f64 {
    const X1: f64 = 0.42;
    const X2: f64 = 0.58;
    let x = x.clamp(0.0, 1.0);

    let bezier = |t: f64, p1: f64, p2: f64| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };

    // x(t) is monotonic on [0, 1]
    let (mut lo, mut hi) = (0.0, 1.0);
    let mut t = x;
    for _ in 0..40 {
        let guess = bezier(t, X1, X2);
        if (guess - x).abs() < 1e-7 {
            break;
        }
        if guess < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier(t, 0.0, 1.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Fraction of a looping timeline reached after `elapsed` seconds.
fn loop_progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    elapsed.rem_euclid(duration) / duration
}

/// Index of the segment containing `percent` and the eased position inside it.
fn locate(percents: &[f64], percent: f64) -> (usize, f64) {
    let last = percents.len().saturating_sub(2);
    let segment = percents
        .windows(2)
        .position(|w| percent <= w[1])
        .unwrap_or(last);
    let (from, to) = (percents[segment], percents[segment + 1]);
    let local = if to > from { (percent - from) / (to - from) } else { 0.0 };
    (segment, ease_in_out(local))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobFrame {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub color: Rgb,
    pub opacity: f64,
}

impl From<&KeyframeStop> for BlobFrame {
    fn from(stop: &KeyframeStop) -> Self {
        Self {
            translate_x: stop.translate_x,
            translate_y: stop.translate_y,
            scale: stop.scale,
            color: stop.color,
            opacity: stop.opacity,
        }
    }
}

impl BlobKeyframeSet {
    /// State of the blob `elapsed` seconds after mount, or `None` while the
    /// start delay runs. The animation has no fill mode, so during the delay
    /// the element shows its base style: no transform and no background.
    pub fn frame_at(&self, blob: &BlobDescriptor, elapsed: f64) -> Option<BlobFrame> {
        if elapsed < blob.delay_s {
            return None;
        }
        if self.stops.len() < 2 {
            return self.stops.first().map(BlobFrame::from);
        }

        let percent = loop_progress(elapsed - blob.delay_s, blob.duration_s) * 100.0;
        let percents: Vec<f64> = self.stops.iter().map(|s| s.percent).collect();
        let (segment, t) = locate(&percents, percent);
        let (a, b) = (&self.stops[segment], &self.stops[segment + 1]);

        Some(BlobFrame {
            translate_x: lerp(a.translate_x, b.translate_x, t),
            translate_y: lerp(a.translate_y, b.translate_y, t),
            scale: lerp(a.scale, b.scale, t),
            color: a.color.mix(b.color, t),
            opacity: lerp(a.opacity, b.opacity, t),
        })
    }
}

impl GradientCycle {
    /// Both gradient colours `elapsed` seconds into the cycle.
    pub fn colors_at(&self, elapsed: f64) -> GradientFrame {
        let frames = self.frames();
        if frames.len() < 2 {
            return self.initial();
        }

        let percent = loop_progress(elapsed, self.duration_s() as f64) * 100.0;
        let percents: Vec<f64> = (0..frames.len()).map(|i| self.frame_percent(i)).collect();
        let (segment, t) = locate(&percents, percent);
        let (a, b) = (frames[segment], frames[segment + 1]);

        GradientFrame {
            primary: a.primary.mix(b.primary, t),
            secondary: a.secondary.mix(b.secondary, t),
        }
    }
}
