//! fg-results: flame result tables and output folders.

pub mod dirs;
pub mod frame;

pub use dirs::{DirStatus, check_make_dir};
pub use frame::{Column, DEFAULT_DIM, Frame, df_paraview_to_fg, paraview_column_map};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Column '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Duplicate column: {name}")]
    DuplicateColumn { name: String },
}
