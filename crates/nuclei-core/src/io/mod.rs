pub mod image_convert;

pub use image_convert::{
    color_frame_from_rgb16, color_frame_from_rgb8, label_map_from_luma, mask_from_luma,
    mask_to_luma,
};
