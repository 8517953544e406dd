pub mod binary;
pub mod components;
pub mod fill;
pub mod structuring;

pub use binary::{dilate, erode, opening};
pub use components::{connected_components, touches_border, ComponentStats, LabeledComponents};
pub use fill::fill_holes;
pub use structuring::StructuringElement;
