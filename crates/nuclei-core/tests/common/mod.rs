#![allow(dead_code)]

use ndarray::Array2;

use nuclei_core::frame::ColorFrame;

/// Label map split into three vertical bands of equal width, labelled 1, 2, 3
/// from left to right.
pub fn banded_labels(h: usize, band_width: usize) -> Array2<u8> {
    Array2::from_shape_fn((h, band_width * 3), |(_, col)| (col / band_width) as u8 + 1)
}

/// Color frame whose saturation equals `saturation[[row, col]]` at every pixel.
///
/// Uses pure reds: r = 1, g = b = 1 - s, so value is 1 and saturation is s.
pub fn color_with_saturation(saturation: &Array2<f32>) -> ColorFrame {
    let red = Array2::from_elem(saturation.dim(), 1.0f32);
    let other = saturation.mapv(|s| 1.0 - s);
    ColorFrame::new(red, other.clone(), other).expect("planes share a shape")
}

/// Saturation grid that takes `per_label[label - 1]` on each label region.
pub fn saturation_by_label(labels: &Array2<u8>, per_label: [f32; 3]) -> Array2<f32> {
    labels.mapv(|l| per_label[(l - 1) as usize])
}

/// Boolean mask of one label region.
pub fn region(labels: &Array2<u8>, label: u8) -> Array2<bool> {
    labels.mapv(|l| l == label)
}

pub fn foreground_count(mask: &Array2<bool>) -> usize {
    mask.iter().filter(|&&v| v).count()
}
