use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

use super::structuring::StructuringElement;

/// Morphological opening (erosion followed by dilation) with the same element.
///
/// Removes foreground structures the element cannot fit inside while
/// leaving larger regions intact. Idempotent.
pub fn opening(mask: &Array2<bool>, se: &StructuringElement) -> Array2<bool> {
    let eroded = erode(mask, se);
    dilate(&eroded, se)
}

/// Binary erosion: a pixel stays true only if every pixel under the element is true.
///
/// Pixels outside the image count as foreground, so regions touching the
/// border are not eaten away from that side.
pub fn erode(mask: &Array2<bool>, se: &StructuringElement) -> Array2<bool> {
    let prefix = row_prefix_counts(mask);
    map_rows(mask, |row, col, h, w| {
        if !mask[[row, col]] {
            return false;
        }
        se.rows().all(|(dr, half)| {
            let Some(r) = offset_row(row, dr, h) else {
                return true;
            };
            let (lo, hi) = span_bounds(col, half, w);
            count_in_span(&prefix, r, lo, hi) == hi - lo
        })
    })
}

/// Binary dilation: a pixel becomes true if any pixel under the element is true.
///
/// Pixels outside the image count as background.
pub fn dilate(mask: &Array2<bool>, se: &StructuringElement) -> Array2<bool> {
    let prefix = row_prefix_counts(mask);
    map_rows(mask, |row, col, h, w| {
        se.rows().any(|(dr, half)| {
            let Some(r) = offset_row(row, dr, h) else {
                return false;
            };
            let (lo, hi) = span_bounds(col, half, w);
            count_in_span(&prefix, r, lo, hi) > 0
        })
    })
}

/// Evaluate `f(row, col, h, w)` for every pixel, row-parallel for large masks.
fn map_rows<F>(mask: &Array2<bool>, f: F) -> Array2<bool>
where
    F: Fn(usize, usize, usize, usize) -> bool + Sync,
{
    let (h, w) = mask.dim();
    if h * w < PARALLEL_PIXEL_THRESHOLD {
        return Array2::from_shape_fn((h, w), |(row, col)| f(row, col, h, w));
    }

    let rows: Vec<Vec<bool>> = (0..h)
        .into_par_iter()
        .map(|row| (0..w).map(|col| f(row, col, h, w)).collect())
        .collect();

    let mut result = Array2::from_elem((h, w), false);
    for (row, values) in rows.into_iter().enumerate() {
        for (col, v) in values.into_iter().enumerate() {
            result[[row, col]] = v;
        }
    }
    result
}

/// Per-row running count of foreground pixels.
///
/// `prefix[[r, c]]` is the number of true pixels in row `r`, columns `0..c`.
fn row_prefix_counts(mask: &Array2<bool>) -> Array2<usize> {
    let (h, w) = mask.dim();
    let mut prefix = Array2::<usize>::zeros((h, w + 1));
    for row in 0..h {
        for col in 0..w {
            prefix[[row, col + 1]] = prefix[[row, col]] + usize::from(mask[[row, col]]);
        }
    }
    prefix
}

fn offset_row(row: usize, dr: isize, h: usize) -> Option<usize> {
    row.checked_add_signed(dr).filter(|&r| r < h)
}

/// Half-open column range `[lo, hi)` of a span clipped to the image.
fn span_bounds(col: usize, half: usize, w: usize) -> (usize, usize) {
    (col.saturating_sub(half), (col + half + 1).min(w))
}

fn count_in_span(prefix: &Array2<usize>, row: usize, lo: usize, hi: usize) -> usize {
    prefix[[row, hi]] - prefix[[row, lo]]
}
