mod common;

use ndarray::Array2;

use nuclei_core::morphology::{
    connected_components, dilate, erode, fill_holes, opening, StructuringElement,
};

use common::foreground_count;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Deterministic blobby mask: thresholded sum of a few sinusoids.
fn wavy_mask(h: usize, w: usize) -> Array2<bool> {
    Array2::from_shape_fn((h, w), |(r, c)| {
        let (r, c) = (r as f32, c as f32);
        (r * 0.21).sin() + (c * 0.17).cos() + ((r + c) * 0.05).sin() > 0.4
    })
}

/// Sparse speckle pattern from a linear congruential generator.
fn speckle_mask(h: usize, w: usize, seed: u32) -> Array2<bool> {
    let mut state = seed;
    Array2::from_shape_fn((h, w), |_| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        state >> 28 < 5
    })
}

fn naive_erode(mask: &Array2<bool>, se: &StructuringElement) -> Array2<bool> {
    let (h, w) = mask.dim();
    let r = se.radius() as isize;
    Array2::from_shape_fn((h, w), |(row, col)| {
        for dr in -r..=r {
            for dc in -r..=r {
                if !se.contains(dr, dc) {
                    continue;
                }
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nr >= h as isize || nc >= w as isize {
                    continue;
                }
                if !mask[[nr as usize, nc as usize]] {
                    return false;
                }
            }
        }
        true
    })
}

fn naive_dilate(mask: &Array2<bool>, se: &StructuringElement) -> Array2<bool> {
    let (h, w) = mask.dim();
    let r = se.radius() as isize;
    Array2::from_shape_fn((h, w), |(row, col)| {
        for dr in -r..=r {
            for dc in -r..=r {
                if !se.contains(dr, dc) {
                    continue;
                }
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nr >= h as isize || nc >= w as isize {
                    continue;
                }
                if mask[[nr as usize, nc as usize]] {
                    return true;
                }
            }
        }
        false
    })
}

fn is_subset(a: &Array2<bool>, b: &Array2<bool>) -> bool {
    a.iter().zip(b.iter()).all(|(&x, &y)| !x || y)
}

// ---------------------------------------------------------------------------
// erode / dilate
// ---------------------------------------------------------------------------

#[test]
fn test_erode_matches_naive_small() {
    let mask = wavy_mask(40, 50);
    for radius in [1, 2, 4] {
        let se = StructuringElement::disk(radius);
        assert_eq!(erode(&mask, &se), naive_erode(&mask, &se), "radius {radius}");
    }
}

#[test]
fn test_dilate_matches_naive_small() {
    let mask = speckle_mask(40, 50, 7);
    for radius in [1, 2, 4] {
        let se = StructuringElement::disk(radius);
        assert_eq!(dilate(&mask, &se), naive_dilate(&mask, &se), "radius {radius}");
    }
}

#[test]
fn test_parallel_path_matches_naive() {
    // 300 x 300 crosses the row-parallel threshold.
    let mask = wavy_mask(300, 300);
    let se = StructuringElement::disk(3);
    assert_eq!(erode(&mask, &se), naive_erode(&mask, &se));
    assert_eq!(dilate(&mask, &se), naive_dilate(&mask, &se));
}

// ---------------------------------------------------------------------------
// opening
// ---------------------------------------------------------------------------

#[test]
fn test_opening_is_anti_extensive() {
    let mask = wavy_mask(60, 60);
    let opened = opening(&mask, &StructuringElement::disk(3));
    assert!(is_subset(&opened, &mask));
}

#[test]
fn test_opening_is_idempotent() {
    for (mask, radius) in [
        (wavy_mask(60, 80), 3),
        (speckle_mask(50, 50, 11), 1),
        (wavy_mask(90, 90), 20),
    ] {
        let se = StructuringElement::disk(radius);
        let once = opening(&mask, &se);
        let twice = opening(&once, &se);
        assert_eq!(once, twice, "radius {radius}");
    }
}

#[test]
fn test_opening_removes_speckle() {
    let mask = speckle_mask(64, 64, 3);
    // Count-check the input so the test notices a degenerate generator.
    assert!(foreground_count(&mask) > 0);
    let opened = opening(&mask, &StructuringElement::disk(5));
    assert!(foreground_count(&opened) < foreground_count(&mask));
}

#[test]
fn test_opening_keeps_disk_of_same_radius() {
    let se = StructuringElement::disk(20);
    let mask = Array2::from_shape_fn((60, 60), |(r, c)| {
        se.contains(r as isize - 30, c as isize - 30)
    });
    assert_eq!(opening(&mask, &se), mask);
}

// ---------------------------------------------------------------------------
// fill_holes
// ---------------------------------------------------------------------------

#[test]
fn test_fill_holes_is_idempotent_and_extensive() {
    for mask in [wavy_mask(70, 70), speckle_mask(40, 40, 5)] {
        let once = fill_holes(&mask);
        assert!(is_subset(&mask, &once));
        assert_eq!(fill_holes(&once), once);
    }
}

#[test]
fn test_fill_holes_only_adds_enclosed_pixels() {
    let mask = wavy_mask(70, 70);
    let filled = fill_holes(&mask);
    let background = mask.mapv(|v| !v);
    let labeled = connected_components(&background);
    let (h, w) = mask.dim();

    for ((row, col), &v) in filled.indexed_iter() {
        if v && !mask[[row, col]] {
            let label = labeled.labels[[row, col]];
            let stats = labeled
                .components
                .iter()
                .find(|c| c.label == label)
                .expect("background pixel has a component");
            let (min_row, max_row, min_col, max_col) = stats.bbox;
            assert!(min_row > 0 && min_col > 0 && max_row + 1 < h && max_col + 1 < w);
        }
    }
}

#[test]
fn test_fill_holes_on_empty_and_full() {
    let empty = Array2::from_elem((5, 5), false);
    let full = Array2::from_elem((5, 5), true);
    assert_eq!(fill_holes(&empty), empty);
    assert_eq!(fill_holes(&full), full);
}

#[test]
fn test_fill_holes_border_notch_stays_open() {
    // Square frame with a gap on the top edge: the interior reaches the border.
    let mut mask = Array2::from_shape_fn((9, 9), |(r, c)| {
        let outer = (2..=6).contains(&r) && (2..=6).contains(&c);
        let inner = (3..=5).contains(&r) && (3..=5).contains(&c);
        outer && !inner
    });
    for row in 0..3 {
        mask[[row, 4]] = false;
    }
    assert_eq!(fill_holes(&mask), mask);
}
