use ndarray::Array2;

use super::components::{connected_components, touches_border};

/// Fill enclosed holes in a binary mask.
///
/// Background regions (4-connected) that do not reach the image border are
/// set to foreground; border-connected background stays background.
/// The result is a superset of the input, and filling twice equals filling once.
pub fn fill_holes(mask: &Array2<bool>) -> Array2<bool> {
    let (h, w) = mask.dim();
    let background = mask.mapv(|v| !v);
    let labeled = connected_components(&background);

    // is_hole[label]; index 0 is the foreground of the input.
    let mut is_hole = vec![false; labeled.components.len() + 1];
    for c in &labeled.components {
        is_hole[c.label as usize] = !touches_border(c.bbox, h, w);
    }

    let mut filled = mask.clone();
    for (fg, &label) in filled.iter_mut().zip(labeled.labels.iter()) {
        if is_hole[label as usize] {
            *fg = true;
        }
    }
    filled
}
