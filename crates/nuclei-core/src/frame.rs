use ndarray::{Array2, Array3};
use num_traits::{Bounded, ToPrimitive};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{NucleusError, Result};

/// A sample type that can be normalized into [0.0, 1.0].
///
/// Integer samples are divided by the type's maximum value; float samples
/// are assumed to already be normalized and are clamped.
pub trait Sample: Copy {
    fn to_unit(self) -> f32;
}

fn integer_to_unit<T: Bounded + ToPrimitive>(v: T) -> f32 {
    let max = T::max_value().to_f32().unwrap_or(1.0);
    v.to_f32().unwrap_or(0.0) / max
}

impl Sample for u8 {
    fn to_unit(self) -> f32 {
        integer_to_unit(self)
    }
}

impl Sample for u16 {
    fn to_unit(self) -> f32 {
        integer_to_unit(self)
    }
}

impl Sample for f32 {
    fn to_unit(self) -> f32 {
        self.clamp(0.0, 1.0)
    }
}

impl Sample for f64 {
    fn to_unit(self) -> f32 {
        (self as f32).clamp(0.0, 1.0)
    }
}

/// Color image stored as separate channel planes.
/// Pixel values are f32 in [0.0, 1.0], shape = (height, width).
#[derive(Clone, Debug)]
pub struct ColorFrame {
    pub red: Array2<f32>,
    pub green: Array2<f32>,
    pub blue: Array2<f32>,
}

impl ColorFrame {
    /// Build a frame from three planes, which must share one shape.
    pub fn new(red: Array2<f32>, green: Array2<f32>, blue: Array2<f32>) -> Result<Self> {
        let expected = red.dim();
        for (what, plane) in [("green channel", &green), ("blue channel", &blue)] {
            if plane.dim() != expected {
                return Err(NucleusError::DimensionMismatch {
                    what,
                    expected,
                    actual: plane.dim(),
                });
            }
        }
        Ok(Self { red, green, blue })
    }

    /// Build a frame from an (height, width, 3) array of RGB samples.
    pub fn from_array3<T: Sample>(data: &Array3<T>) -> Result<Self> {
        let (h, w, c) = data.dim();
        if c != COLOR_CHANNEL_COUNT {
            return Err(NucleusError::DimensionMismatch {
                what: "color channel count",
                expected: (COLOR_CHANNEL_COUNT, 1),
                actual: (c, 1),
            });
        }

        let plane = |channel: usize| {
            Array2::from_shape_fn((h, w), |(row, col)| data[[row, col, channel]].to_unit())
        };

        Ok(Self {
            red: plane(0),
            green: plane(1),
            blue: plane(2),
        })
    }

    /// Split an interleaved RGB Array2 (shape: height x width*3) into planes.
    ///
    /// Values are packed as [R, G, B, R, G, B, ...] across columns.
    pub fn from_interleaved(data: &Array2<f32>) -> Result<Self> {
        let (h, w3) = data.dim();
        if w3 % COLOR_CHANNEL_COUNT != 0 {
            return Err(NucleusError::DimensionMismatch {
                what: "interleaved RGB row length",
                expected: (h, w3 - w3 % COLOR_CHANNEL_COUNT),
                actual: (h, w3),
            });
        }
        let w = w3 / COLOR_CHANNEL_COUNT;

        let mut red = Array2::<f32>::zeros((h, w));
        let mut green = Array2::<f32>::zeros((h, w));
        let mut blue = Array2::<f32>::zeros((h, w));

        for row in 0..h {
            for col in 0..w {
                red[[row, col]] = data[[row, col * 3]].to_unit();
                green[[row, col]] = data[[row, col * 3 + 1]].to_unit();
                blue[[row, col]] = data[[row, col * 3 + 2]].to_unit();
            }
        }

        Ok(Self { red, green, blue })
    }

    /// (height, width) of the frame.
    pub fn dim(&self) -> (usize, usize) {
        self.red.dim()
    }

    pub fn width(&self) -> usize {
        self.red.ncols()
    }

    pub fn height(&self) -> usize {
        self.red.nrows()
    }
}
