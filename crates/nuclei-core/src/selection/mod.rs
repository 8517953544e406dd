pub mod config;
pub mod scoring;
pub mod selector;

pub use config::SelectorConfig;
pub use scoring::RegionScore;
pub use selector::{
    clean_region, select_nucleus_label, select_nucleus_mask, select_nucleus_mask_from_saturation,
    select_nucleus_mask_with, LabelSelection,
};
