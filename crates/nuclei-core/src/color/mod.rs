pub mod hsv;

pub use hsv::{rgb_to_hsv, rgb_to_saturation, saturation_channel, HsvFrame};
