use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage};
use ndarray::Array2;

use crate::consts::MASK_FOREGROUND_LUMA;
use crate::frame::{ColorFrame, Sample};

fn color_frame_from_buffer<T>(img: &ImageBuffer<Rgb<T>, Vec<T>>) -> ColorFrame
where
    T: Sample,
    Rgb<T>: Pixel<Subpixel = T>,
{
    let (w, h) = img.dimensions();
    let (h, w) = (h as usize, w as usize);

    let mut red = Array2::<f32>::zeros((h, w));
    let mut green = Array2::<f32>::zeros((h, w));
    let mut blue = Array2::<f32>::zeros((h, w));

    for (col, row, pixel) in img.enumerate_pixels() {
        let (row, col) = (row as usize, col as usize);
        red[[row, col]] = pixel.0[0].to_unit();
        green[[row, col]] = pixel.0[1].to_unit();
        blue[[row, col]] = pixel.0[2].to_unit();
    }

    ColorFrame { red, green, blue }
}

/// Convert an 8-bit RGB image into a normalized color frame.
pub fn color_frame_from_rgb8(img: &RgbImage) -> ColorFrame {
    color_frame_from_buffer(img)
}

/// Convert a 16-bit RGB image into a normalized color frame.
pub fn color_frame_from_rgb16(img: &ImageBuffer<Rgb<u16>, Vec<u16>>) -> ColorFrame {
    color_frame_from_buffer(img)
}

/// Read a binary mask from a grayscale image: any nonzero pixel is foreground.
pub fn mask_from_luma(img: &GrayImage) -> Array2<bool> {
    let (w, h) = img.dimensions();
    Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        img.get_pixel(col as u32, row as u32).0[0] > 0
    })
}

/// Render a binary mask as an 8-bit grayscale image (foreground = 255).
pub fn mask_to_luma(mask: &Array2<bool>) -> GrayImage {
    let (h, w) = mask.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for ((row, col), &fg) in mask.indexed_iter() {
        if fg {
            img.put_pixel(col as u32, row as u32, Luma([MASK_FOREGROUND_LUMA]));
        }
    }
    img
}

/// Read a cluster label map stored as raw 8-bit gray levels.
///
/// Values are copied unchanged; validation against the candidate labels
/// happens in the selector.
pub fn label_map_from_luma(img: &GrayImage) -> Array2<u8> {
    let (w, h) = img.dimensions();
    Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        img.get_pixel(col as u32, row as u32).0[0]
    })
}
