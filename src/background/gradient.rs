use std::fmt::Write;

use super::color::Rgb;
use crate::config::{BACKGROUND_ANIMATION_CLASS, BACKGROUND_KEYFRAMES_NAME};

const MIN_DURATION_S: u32 = 15;
const SECONDS_PER_FRAME: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientFrame {
    pub primary: Rgb,
    pub secondary: Rgb,
}

/// Closed loop of colour pairs walked by the background gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientCycle {
    frames: Vec<GradientFrame>,
}

impl GradientCycle {
    /// Builds the cycle for `palette`, or `None` when the palette is empty.
    pub fn from_palette(palette: &[Rgb]) -> Option<Self> {
        let n = palette.len();
        if n == 0 {
            return None;
        }
        let total = if n >= 2 { n + 1 } else { 3 };

        let mut frames: Vec<GradientFrame> = (0..total)
            .map(|i| {
                let primary = palette[i % n];
                let opposite = palette[(i + n / 2) % n];
                let secondary = if primary == opposite {
                    palette[(i + 1) % n]
                } else {
                    opposite
                };
                GradientFrame { primary, secondary }
            })
            .collect();

        // last frame mirrors the first so the loop has no seam
        frames[total - 1] = frames[0];

        Some(Self { frames })
    }

    pub fn frames(&self) -> &[GradientFrame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Timeline position of frame `index`, in percent.
    pub fn frame_percent(&self, index: usize) -> f64 {
        index as f64 / (self.frames.len() - 1) as f64 * 100.0
    }

    pub fn duration_s(&self) -> u32 {
        MIN_DURATION_S.max(self.frames.len() as u32 * SECONDS_PER_FRAME)
    }

    pub fn initial(&self) -> GradientFrame {
        self.frames[0]
    }
}

/// Renders the custom property registrations, the gradient class and its
/// keyframes as one stylesheet.
pub fn gradient_stylesheet(cycle: &GradientCycle) -> String {
    let init = cycle.initial();
    let mut css = format!(
        r#"@property --gradient-color-1 {{
  syntax: '<color>';
  inherits: false;
  initial-value: {c1};
}}
@property --gradient-color-2 {{
  syntax: '<color>';
  inherits: false;
  initial-value: {c2};
}}
.{class} {{
  --gradient-color-1: {c1};
  --gradient-color-2: {c2};
  background-image: linear-gradient(135deg, var(--gradient-color-1), var(--gradient-color-2));
  animation: {name} {duration}s ease-in-out infinite;
}}
"#,
        c1 = init.primary,
        c2 = init.secondary,
        class = BACKGROUND_ANIMATION_CLASS,
        name = BACKGROUND_KEYFRAMES_NAME,
        duration = cycle.duration_s(),
    );

    let _ = writeln!(css, "@keyframes {} {{", BACKGROUND_KEYFRAMES_NAME);
    for (i, frame) in cycle.frames().iter().enumerate() {
        let _ = writeln!(
            css,
            "  {}% {{ --gradient-color-1: {}; --gradient-color-2: {}; }}",
            cycle.frame_percent(i),
            frame.primary,
            frame.secondary,
        );
    }
    css.push_str("}\n");
    css
}
