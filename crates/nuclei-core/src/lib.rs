pub mod color;
pub mod consts;
pub mod error;
pub mod frame;
pub mod io;
pub mod morphology;
pub mod selection;

pub use error::{NucleusError, Result, ScoreRegion};
pub use frame::ColorFrame;
pub use selection::{
    select_nucleus_label, select_nucleus_mask, select_nucleus_mask_with, LabelSelection,
    SelectorConfig,
};
