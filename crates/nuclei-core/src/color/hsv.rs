use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::frame::ColorFrame;

/// Convert one RGB pixel to `[hue, saturation, value]`, all in [0.0, 1.0].
///
/// Inputs are clamped to [0.0, 1.0]. Value is the largest channel and
/// saturation is `(max - min) / max`. Achromatic pixels (max == min) get
/// hue 0 and saturation 0. When several channels share the maximum, blue
/// wins over green, which wins over red.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> [f32; 3] {
    let r = r.clamp(0.0, 1.0);
    let g = g.clamp(0.0, 1.0);
    let b = b.clamp(0.0, 1.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta <= 0.0 {
        return [0.0, 0.0, max];
    }

    let sector = if b == max {
        4.0 + (r - g) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        (g - b) / delta
    };
    let hue = (sector / 6.0).rem_euclid(1.0);

    [hue, delta / max, max]
}

/// Saturation component of one RGB pixel.
pub fn rgb_to_saturation(r: f32, g: f32, b: f32) -> f32 {
    rgb_to_hsv(r, g, b)[1]
}

/// Color image in hue-saturation-value representation.
#[derive(Clone, Debug)]
pub struct HsvFrame {
    pub hue: Array2<f32>,
    pub saturation: Array2<f32>,
    pub value: Array2<f32>,
}

impl HsvFrame {
    /// Convert every pixel with [`rgb_to_hsv`]. Row-parallel for frames with
    /// at least `PARALLEL_PIXEL_THRESHOLD` pixels.
    pub fn from_color(color: &ColorFrame) -> Self {
        let (h, w) = color.dim();
        let mut hue = Array2::<f32>::zeros((h, w));
        let mut saturation = Array2::<f32>::zeros((h, w));
        let mut value = Array2::<f32>::zeros((h, w));

        if h * w >= PARALLEL_PIXEL_THRESHOLD {
            let rows: Vec<Vec<[f32; 3]>> = (0..h)
                .into_par_iter()
                .map(|row| (0..w).map(|col| hsv_at(color, row, col)).collect())
                .collect();

            for (row, pixels) in rows.into_iter().enumerate() {
                for (col, [hh, ss, vv]) in pixels.into_iter().enumerate() {
                    hue[[row, col]] = hh;
                    saturation[[row, col]] = ss;
                    value[[row, col]] = vv;
                }
            }
        } else {
            for row in 0..h {
                for col in 0..w {
                    let [hh, ss, vv] = hsv_at(color, row, col);
                    hue[[row, col]] = hh;
                    saturation[[row, col]] = ss;
                    value[[row, col]] = vv;
                }
            }
        }

        Self {
            hue,
            saturation,
            value,
        }
    }
}

fn hsv_at(color: &ColorFrame, row: usize, col: usize) -> [f32; 3] {
    rgb_to_hsv(
        color.red[[row, col]],
        color.green[[row, col]],
        color.blue[[row, col]],
    )
}

/// Extract the saturation channel of a color frame.
///
/// Uses row-level Rayon parallelism for frames with at least
/// `PARALLEL_PIXEL_THRESHOLD` pixels.
pub fn saturation_channel(color: &ColorFrame) -> Array2<f32> {
    let (h, w) = color.dim();
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        saturation_channel_parallel(color, h, w)
    } else {
        Array2::from_shape_fn((h, w), |(row, col)| {
            rgb_to_saturation(
                color.red[[row, col]],
                color.green[[row, col]],
                color.blue[[row, col]],
            )
        })
    }
}

fn saturation_channel_parallel(color: &ColorFrame, h: usize, w: usize) -> Array2<f32> {
    let rows: Vec<Vec<f32>> = (0..h)
        .into_par_iter()
        .map(|row| {
            (0..w)
                .map(|col| {
                    rgb_to_saturation(
                        color.red[[row, col]],
                        color.green[[row, col]],
                        color.blue[[row, col]],
                    )
                })
                .collect()
        })
        .collect();

    let mut result = Array2::<f32>::zeros((h, w));
    for (row, values) in rows.into_iter().enumerate() {
        for (col, v) in values.into_iter().enumerate() {
            result[[row, col]] = v;
        }
    }
    result
}
