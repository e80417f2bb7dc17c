use std::fmt::Write;
use std::ops::Range;

use rand::Rng;

use super::color::Rgb;

const SIZE_VIEWPORT_PCT: Range<f64> = 25.0..45.0;
const MIN_SIZE_PX: Range<f64> = 150.0..250.0;
const INITIAL_OFFSET_PCT: Range<f64> = -10.0..50.0;
const DURATION_S: Range<f64> = 16.0..30.0;
const DELAY_S: Range<f64> = 0.0..4.0;

const TRANSLATE_PX: Range<f64> = -160.0..160.0;
const SCALE: Range<f64> = 0.5..1.7;
const OPACITY: Range<f64> = 0.55..0.9;

/// Eight evenly spaced segments make for a more erratic path.
pub const STOP_PERCENTS: [f64; 9] = [0.0, 12.5, 25.0, 37.5, 50.0, 62.5, 75.0, 87.5, 100.0];

/// Sampled size, position and timing of one decorative blob.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobDescriptor {
    pub id: String,
    pub size_vw: f64,
    pub size_vh: f64,
    pub min_size_px: f64,
    pub top_pct: f64,
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl BlobDescriptor {
    pub fn sample<R: Rng>(index: usize, rng: &mut R) -> Self {
        Self {
            id: format!("blob-{}", index),
            size_vw: rng.gen_range(SIZE_VIEWPORT_PCT),
            size_vh: rng.gen_range(SIZE_VIEWPORT_PCT),
            min_size_px: rng.gen_range(MIN_SIZE_PX),
            top_pct: rng.gen_range(INITIAL_OFFSET_PCT),
            left_pct: rng.gen_range(INITIAL_OFFSET_PCT),
            duration_s: rng.gen_range(DURATION_S),
            delay_s: rng.gen_range(DELAY_S),
        }
    }

    /// Name of the keyframe animation bound to this blob.
    pub fn keyframes_name(index: usize) -> String {
        format!("moveBlob{}", index)
    }
}

pub fn sample_blobs<R: Rng>(count: usize, rng: &mut R) -> Vec<BlobDescriptor> {
    (0..count).map(|i| BlobDescriptor::sample(i, rng)).collect()
}

/// Palette index used by `blob_index` at the stop located at `percent`.
///
/// The colour advances every 20% of the timeline, offset by the blob's
/// index. `palette_len` must be non-zero.
pub fn blob_color_index(blob_index: usize, percent: f64, palette_len: usize) -> usize {
    (blob_index + (percent / 20.0).floor() as usize) % palette_len
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeStop {
    pub percent: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub color: Rgb,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlobKeyframeSet {
    pub blob_index: usize,
    pub stops: Vec<KeyframeStop>,
}

impl BlobKeyframeSet {
    pub fn sample<R: Rng>(blob_index: usize, palette: &[Rgb], rng: &mut R) -> Self {
        let stops = STOP_PERCENTS
            .iter()
            .map(|&percent| KeyframeStop {
                percent,
                translate_x: rng.gen_range(TRANSLATE_PX),
                translate_y: rng.gen_range(TRANSLATE_PX),
                scale: rng.gen_range(SCALE),
                color: palette[blob_color_index(blob_index, percent, palette.len())],
                opacity: rng.gen_range(OPACITY),
            })
            .collect();
        Self { blob_index, stops }
    }

    fn write_css(&self, css: &mut String) {
        let _ = writeln!(css, "@keyframes {} {{", BlobDescriptor::keyframes_name(self.blob_index));
        for stop in &self.stops {
            let _ = writeln!(
                css,
                "  {}% {{ transform: translate({:.2}px, {:.2}px) scale({:.3}); background-color: {}; opacity: {:.3}; }}",
                stop.percent, stop.translate_x, stop.translate_y, stop.scale, stop.color, stop.opacity,
            );
        }
        css.push_str("}\n");
    }
}

fn write_blob_rule(css: &mut String, index: usize, blob: &BlobDescriptor) {
    let _ = write!(
        css,
        r#".{id} {{
  position: absolute;
  top: {top:.2}%;
  left: {left:.2}%;
  width: clamp({min:.1}px, {vw:.2}vw, 600px);
  height: clamp({min:.1}px, {vh:.2}vh, 600px);
  max-width: 80vw;
  max-height: 80vh;
  border-radius: 50%;
  filter: blur(80px);
  animation: {name} {duration:.2}s {delay:.2}s infinite ease-in-out;
  will-change: transform, opacity, background-color;
}}
"#,
        id = blob.id,
        top = blob.top_pct,
        left = blob.left_pct,
        min = blob.min_size_px,
        vw = blob.size_vw,
        vh = blob.size_vh,
        name = BlobDescriptor::keyframes_name(index),
        duration = blob.duration_s,
        delay = blob.delay_s,
    );
}

/// Samples fresh keyframes for every blob and renders the whole blob
/// stylesheet. Returns the keyframe sets alongside the CSS so callers can
/// drive the same motion outside the browser.
pub fn blob_stylesheet<R: Rng>(
    blobs: &[BlobDescriptor],
    palette: &[Rgb],
    rng: &mut R,
) -> (Vec<BlobKeyframeSet>, String) {
    if palette.is_empty() {
        return (Vec::new(), String::new());
    }
    let mut css = String::new();
    let mut sets = Vec::with_capacity(blobs.len());
    for (i, blob) in blobs.iter().enumerate() {
        let set = BlobKeyframeSet::sample(i, palette, rng);
        set.write_css(&mut css);
        write_blob_rule(&mut css, i, blob);
        sets.push(set);
    }
    (sets, css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BLOB_COLORS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_range(value: f64, range: Range<f64>) -> bool {
        value >= range.start && value < range.end
    }

    #[test]
    fn sampler_produces_requested_count_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 5, 32] {
            let blobs = sample_blobs(count, &mut rng);
            assert_eq!(blobs.len(), count);
            for (i, blob) in blobs.iter().enumerate() {
                assert_eq!(blob.id, format!("blob-{}", i));
                assert!(in_range(blob.size_vw, SIZE_VIEWPORT_PCT));
                assert!(in_range(blob.size_vh, SIZE_VIEWPORT_PCT));
                assert!(in_range(blob.min_size_px, MIN_SIZE_PX));
                assert!(in_range(blob.top_pct, INITIAL_OFFSET_PCT));
                assert!(in_range(blob.left_pct, INITIAL_OFFSET_PCT));
                assert!(in_range(blob.duration_s, DURATION_S));
                assert!(in_range(blob.delay_s, DELAY_S));
            }
        }
    }

    #[test]
    fn resampling_gives_different_values() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = sample_blobs(5, &mut rng);
        let second = sample_blobs(5, &mut rng);
        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
    }

    #[test]
    fn color_index_matches_reference_table() {
        let expected: [[usize; 9]; 5] = [
            [0, 0, 1, 1, 2, 3, 3, 4, 5],
            [1, 1, 2, 2, 3, 4, 4, 5, 0],
            [2, 2, 3, 3, 4, 5, 5, 0, 1],
            [3, 3, 4, 4, 5, 0, 0, 1, 2],
            [4, 4, 5, 5, 0, 1, 1, 2, 3],
        ];
        for (blob, row) in expected.iter().enumerate() {
            let actual: Vec<usize> = STOP_PERCENTS
                .iter()
                .map(|&pct| blob_color_index(blob, pct, 6))
                .collect();
            assert_eq!(actual, row.to_vec(), "blob {}", blob);
        }
    }

    #[test]
    fn keyframe_set_has_nine_stops_with_sampled_values_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let set = BlobKeyframeSet::sample(2, BLOB_COLORS, &mut rng);
        assert_eq!(set.stops.len(), 9);
        for stop in &set.stops {
            assert!(in_range(stop.translate_x, TRANSLATE_PX));
            assert!(in_range(stop.translate_y, TRANSLATE_PX));
            assert!(in_range(stop.scale, SCALE));
            assert!(in_range(stop.opacity, OPACITY));
            assert_eq!(
                stop.color,
                BLOB_COLORS[blob_color_index(2, stop.percent, BLOB_COLORS.len())]
            );
        }
        assert_eq!(set.stops[0].percent, 0.0);
        assert_eq!(set.stops[8].percent, 100.0);
    }

    #[test]
    fn stylesheet_binds_each_blob_to_its_animation() {
        let mut rng = StdRng::seed_from_u64(11);
        let blobs = sample_blobs(3, &mut rng);
        let (sets, css) = blob_stylesheet(&blobs, BLOB_COLORS, &mut rng);

        assert_eq!(sets.len(), 3);
        assert_eq!(css.matches("@keyframes moveBlob").count(), 3);
        for i in 0..3 {
            assert!(css.contains(&format!("@keyframes moveBlob{} {{", i)));
            assert!(css.contains(&format!(".blob-{} {{", i)));
            assert!(css.contains(&format!("animation: moveBlob{} ", i)));
        }
        assert!(css.contains("  12.5% {"));
        assert!(css.contains("  100% {"));
        assert!(css.contains("filter: blur(80px);"));
        assert!(css.contains("background-color: #D59D6B;"));
    }

    #[test]
    fn stylesheet_is_empty_without_palette() {
        let mut rng = StdRng::seed_from_u64(0);
        let blobs = sample_blobs(2, &mut rng);
        let (sets, css) = blob_stylesheet(&blobs, &[], &mut rng);
        assert!(sets.is_empty());
        assert!(css.is_empty());
    }
}
