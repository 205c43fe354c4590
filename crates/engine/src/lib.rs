//! `tintgrid-engine`: prompt-driven highlighting for tabular data.
//!
//! Pure engine crate: receives a grid by reference, returns a freshly built
//! style grid of the same shape. No I/O, no shared state.

pub mod cell;
pub mod conditional;
pub mod error;
pub mod highlight;
pub mod palette;
pub mod preset;
pub mod prompt;
pub mod style;

pub use cell::{CellValue, Grid};
pub use conditional::{conditional_format, Condition};
pub use error::EngineError;
pub use highlight::highlight;
pub use palette::ColorPair;
pub use preset::{apply_preset, clear_formatting, PresetAction};
pub use prompt::parse_prompt;
pub use style::{StyleGrid, StyleRecord};
