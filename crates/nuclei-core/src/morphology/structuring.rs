/// A flat, centered structuring element described as one horizontal run
/// per row offset.
///
/// Row `i` of `spans` covers row offset `i - radius` and the column offsets
/// `-spans[i]..=spans[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuringElement {
    radius: usize,
    spans: Vec<usize>,
}

// Never empty: every element contains at least its center pixel.
#[allow(clippy::len_without_is_empty)]
impl StructuringElement {
    /// Disk of the given radius: every offset with `dr^2 + dc^2 <= radius^2`.
    ///
    /// Radius 0 is the single center pixel.
    pub fn disk(radius: usize) -> Self {
        let r2 = radius * radius;
        let spans = (0..=2 * radius)
            .map(|i| {
                let dr = i.abs_diff(radius);
                let mut half = 0;
                while (half + 1) * (half + 1) + dr * dr <= r2 {
                    half += 1;
                }
                half
            })
            .collect();
        Self { radius, spans }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Iterate `(row_offset, half_width)` pairs, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (isize, usize)> + '_ {
        let radius = self.radius as isize;
        self.spans
            .iter()
            .enumerate()
            .map(move |(i, &half)| (i as isize - radius, half))
    }

    /// Whether the offset `(dr, dc)` belongs to the element.
    pub fn contains(&self, dr: isize, dc: isize) -> bool {
        let i = dr + self.radius as isize;
        if i < 0 || i as usize >= self.spans.len() {
            return false;
        }
        dc.unsigned_abs() <= self.spans[i as usize]
    }

    /// Number of pixels covered by the element.
    pub fn len(&self) -> usize {
        self.spans.iter().map(|&half| 2 * half + 1).sum()
    }
}
