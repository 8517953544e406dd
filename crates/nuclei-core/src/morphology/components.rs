use ndarray::Array2;

/// Bounding box of one connected component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentStats {
    /// Component label, as stored in [`LabeledComponents::labels`].
    pub label: u32,
    /// Bounding box: (min_row, max_row, min_col, max_col).
    pub bbox: (usize, usize, usize, usize),
}

/// Result of connected component labelling.
#[derive(Clone, Debug)]
pub struct LabeledComponents {
    /// Per-pixel component label; 0 for pixels outside the mask.
    pub labels: Array2<u32>,
    /// `components[i]` describes label `i + 1`. Labels are numbered by the
    /// first pixel of each component in row-major order.
    pub components: Vec<ComponentStats>,
}

/// Label the 4-connected components of a binary mask.
///
/// Two passes: provisional labels merged with union-find, then every pixel
/// is rewritten to a compact label `1..=components.len()`.
pub fn connected_components(mask: &Array2<bool>) -> LabeledComponents {
    let (h, w) = mask.dim();
    let mut labels = Array2::<u32>::zeros((h, w));
    if h == 0 || w == 0 {
        return LabeledComponents {
            labels,
            components: Vec::new(),
        };
    }

    // Index 0 is the background sentinel.
    let mut parent: Vec<u32> = vec![0];

    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let up = if row > 0 { labels[[row - 1, col]] } else { 0 };
            let left = if col > 0 { labels[[row, col - 1]] } else { 0 };

            labels[[row, col]] = match (up, left) {
                (0, 0) => {
                    let fresh = parent.len() as u32;
                    parent.push(fresh);
                    fresh
                }
                (l, 0) | (0, l) => l,
                (up, left) => {
                    union(&mut parent, up, left);
                    up.min(left)
                }
            };
        }
    }

    // Map each root to its compact label on first sight.
    let mut compact = vec![0u32; parent.len()];
    let mut components: Vec<ComponentStats> = Vec::new();

    for ((row, col), lbl) in labels.indexed_iter_mut() {
        if *lbl == 0 {
            continue;
        }
        let root = find(&parent, *lbl) as usize;
        if compact[root] == 0 {
            components.push(ComponentStats {
                label: components.len() as u32 + 1,
                bbox: (row, row, col, col),
            });
            compact[root] = components.len() as u32;
        }
        *lbl = compact[root];

        let bbox = &mut components[*lbl as usize - 1].bbox;
        bbox.0 = bbox.0.min(row);
        bbox.1 = bbox.1.max(row);
        bbox.2 = bbox.2.min(col);
        bbox.3 = bbox.3.max(col);
    }

    LabeledComponents { labels, components }
}

/// Returns true if the component's bounding box touches any edge of the image.
pub fn touches_border(bbox: (usize, usize, usize, usize), height: usize, width: usize) -> bool {
    let (min_row, max_row, min_col, max_col) = bbox;
    min_row == 0 || max_row + 1 >= height || min_col == 0 || max_col + 1 >= width
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
