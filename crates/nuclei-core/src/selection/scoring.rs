use ndarray::Array2;

use crate::consts::{CANDIDATE_COUNT, CANDIDATE_LABELS};
use crate::error::{NucleusError, Result, ScoreRegion};

/// Mean saturation of one candidate label region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionScore {
    pub label: u8,
    /// Mean of the strictly positive saturation values in the region.
    pub mean: f64,
    /// Number of pixels that contributed to the mean.
    pub pixel_count: usize,
}

/// Running sum of strictly positive samples.
#[derive(Clone, Copy, Debug, Default)]
struct NonzeroAccumulator {
    sum: f64,
    count: usize,
}

impl NonzeroAccumulator {
    fn push(&mut self, value: f32) {
        // Zero saturation marks "not part of the region", not a measured value.
        if value > 0.0 {
            self.sum += value as f64;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Mean of the strictly positive values, or `None` if there are none.
pub fn nonzero_mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f32>,
{
    let mut acc = NonzeroAccumulator::default();
    values.into_iter().for_each(|v| acc.push(v));
    acc.mean()
}

/// Mean nonzero saturation under the reference nucleus mask.
///
/// Both grids must have the same shape.
pub fn reference_score(nucleus_mask: &Array2<bool>, saturation: &Array2<f32>) -> Result<f64> {
    let values = nucleus_mask
        .iter()
        .zip(saturation.iter())
        .filter(|(fg, _)| **fg)
        .map(|(_, &s)| s);
    nonzero_mean(values).ok_or(NucleusError::UndefinedScore {
        region: ScoreRegion::Reference,
    })
}

/// Mean nonzero saturation of every candidate label region, in
/// `CANDIDATE_LABELS` order.
///
/// Fails on the first pixel (row-major) whose label is not a candidate, then
/// on the first candidate whose region has no nonzero saturation.
pub fn label_scores(
    label_map: &Array2<u8>,
    saturation: &Array2<f32>,
) -> Result<[RegionScore; CANDIDATE_COUNT]> {
    accumulate_by_label(label_map, saturation)?.into_scores()
}

/// Per-label sums gathered in one pass over the label map.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LabelSums([NonzeroAccumulator; CANDIDATE_COUNT]);

impl LabelSums {
    /// Resolve every sum to a mean, failing on the first empty region.
    pub(crate) fn into_scores(self) -> Result<[RegionScore; CANDIDATE_COUNT]> {
        let mut scores = [RegionScore {
            label: 0,
            mean: 0.0,
            pixel_count: 0,
        }; CANDIDATE_COUNT];

        for ((score, acc), &label) in scores.iter_mut().zip(&self.0).zip(&CANDIDATE_LABELS) {
            let mean = acc.mean().ok_or(NucleusError::UndefinedScore {
                region: ScoreRegion::Label(label),
            })?;
            *score = RegionScore {
                label,
                mean,
                pixel_count: acc.count,
            };
        }

        Ok(scores)
    }
}

/// Sum saturation per candidate label. This is the only place labels are
/// checked: the first non-candidate pixel in row-major order is an error.
///
/// Both grids must have the same shape.
pub(crate) fn accumulate_by_label(
    label_map: &Array2<u8>,
    saturation: &Array2<f32>,
) -> Result<LabelSums> {
    let mut accumulators = [NonzeroAccumulator::default(); CANDIDATE_COUNT];
    for (((row, col), &label), &s) in label_map.indexed_iter().zip(saturation.iter()) {
        let idx = candidate_index(label).ok_or(NucleusError::InvalidLabelValue {
            value: label,
            row,
            col,
        })?;
        accumulators[idx].push(s);
    }
    Ok(LabelSums(accumulators))
}

fn candidate_index(label: u8) -> Option<usize> {
    CANDIDATE_LABELS.iter().position(|&l| l == label)
}

/// Index of the score closest to `reference`, plus every absolute difference.
///
/// Scans in order and only replaces the best on a strictly smaller
/// difference, so ties resolve to the earliest candidate.
pub fn closest_score<const N: usize>(
    reference: f64,
    scores: &[RegionScore; N],
) -> (usize, [f64; N]) {
    let diffs: [f64; N] = std::array::from_fn(|i| (reference - scores[i].mean).abs());

    let mut best = 0;
    for (i, &d) in diffs.iter().enumerate().skip(1) {
        if d < diffs[best] {
            best = i;
        }
    }
    (best, diffs)
}
