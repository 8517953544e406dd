use ndarray::Array2;
use tracing::{debug, info};

use crate::color::saturation_channel;
use crate::consts::CANDIDATE_COUNT;
use crate::error::{NucleusError, Result};
use crate::frame::ColorFrame;
use crate::morphology::{fill_holes, opening, StructuringElement};

use super::config::SelectorConfig;
use super::scoring::{accumulate_by_label, closest_score, reference_score, RegionScore};

/// Outcome of scoring the candidate labels against the reference mask.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSelection {
    /// Label whose mean saturation is closest to the reference.
    pub best_label: u8,
    /// Mean nonzero saturation under the nucleus mask.
    pub reference_score: f64,
    /// Per-label scores in candidate order.
    pub scores: [RegionScore; CANDIDATE_COUNT],
    /// `|reference_score - scores[i].mean|` in candidate order.
    pub diffs: [f64; CANDIDATE_COUNT],
}

/// Pick the cluster label that best matches the nucleus mask and return its
/// cleaned-up region, using the default disk radius.
pub fn select_nucleus_mask(
    nucleus_mask: &Array2<bool>,
    label_map: &Array2<u8>,
    color_image: &ColorFrame,
) -> Result<Array2<bool>> {
    select_nucleus_mask_with(
        nucleus_mask,
        label_map,
        color_image,
        &SelectorConfig::default(),
    )
}

/// Same as [`select_nucleus_mask`] with explicit configuration.
///
/// Pipeline: validate config -> saturation channel -> score labels ->
/// select closest -> opening -> hole filling.
pub fn select_nucleus_mask_with(
    nucleus_mask: &Array2<bool>,
    label_map: &Array2<u8>,
    color_image: &ColorFrame,
    config: &SelectorConfig,
) -> Result<Array2<bool>> {
    config.validate()?;
    check_dim("color image", nucleus_mask.dim(), color_image.dim())?;

    let saturation = saturation_channel(color_image);
    select_and_clean(nucleus_mask, label_map, &saturation, config)
}

/// Run selection and cleanup on a precomputed saturation channel.
pub fn select_nucleus_mask_from_saturation(
    nucleus_mask: &Array2<bool>,
    label_map: &Array2<u8>,
    saturation: &Array2<f32>,
    config: &SelectorConfig,
) -> Result<Array2<bool>> {
    config.validate()?;
    select_and_clean(nucleus_mask, label_map, saturation, config)
}

fn select_and_clean(
    nucleus_mask: &Array2<bool>,
    label_map: &Array2<u8>,
    saturation: &Array2<f32>,
    config: &SelectorConfig,
) -> Result<Array2<bool>> {
    let selection = select_nucleus_label(nucleus_mask, label_map, saturation)?;

    let region = label_map.mapv(|label| label == selection.best_label);
    let cleaned = clean_region(&region, config);

    info!(
        label = selection.best_label,
        area = cleaned.iter().filter(|&&v| v).count(),
        "Nucleus mask selected"
    );
    Ok(cleaned)
}

/// Score every candidate label and pick the one closest to the reference.
///
/// Only strictly positive saturation values enter any mean. Fails if the
/// grids differ in shape, a label is not a candidate, or any region has no
/// nonzero saturation, in that order.
pub fn select_nucleus_label(
    nucleus_mask: &Array2<bool>,
    label_map: &Array2<u8>,
    saturation: &Array2<f32>,
) -> Result<LabelSelection> {
    check_dim("label map", nucleus_mask.dim(), label_map.dim())?;
    check_dim("saturation channel", nucleus_mask.dim(), saturation.dim())?;

    let sums = accumulate_by_label(label_map, saturation)?;
    let reference_score = reference_score(nucleus_mask, saturation)?;
    let scores = sums.into_scores()?;
    let (best, diffs) = closest_score(reference_score, &scores);

    debug!(
        reference = reference_score,
        scores = ?scores.map(|s| s.mean),
        diffs = ?diffs,
        "Label scores computed"
    );

    Ok(LabelSelection {
        best_label: scores[best].label,
        reference_score,
        scores,
        diffs,
    })
}

/// Opening with a disk of `config.disk_radius`, then hole filling.
///
/// The radius is capped at `height + width`: any larger disk already
/// covers the whole image from every pixel, so the result is unchanged.
pub fn clean_region(region: &Array2<bool>, config: &SelectorConfig) -> Array2<bool> {
    let (h, w) = region.dim();
    let se = StructuringElement::disk(config.disk_radius.min(h + w));
    let opened = opening(region, &se);
    fill_holes(&opened)
}

fn check_dim(what: &'static str, expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NucleusError::DimensionMismatch {
            what,
            expected,
            actual,
        })
    }
}
