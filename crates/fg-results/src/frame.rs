//! Column tables and ParaView → FG column naming.
//!
//! A [`Frame`] is a list of named `f64` columns of equal length. It is the
//! exchange format for line-plot data exported from ParaView and for the
//! flame-generation (FG) tools that read it back.

use crate::{ResultsError, ResultsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default `dim` used in the renamed density label.
pub const DEFAULT_DIM: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Named columns sharing one row count. Column names are unique.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Frame {
    columns: Vec<Column>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame, checking row counts and name uniqueness.
    pub fn from_columns(columns: Vec<Column>) -> ResultsResult<Self> {
        columns
            .into_iter()
            .try_fold(Self::new(), |frame, c| frame.with_column(c.name, c.values))
    }

    /// Append a column.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> ResultsResult<Self> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(ResultsError::DuplicateColumn { name });
        }
        if let Some(first) = self.columns.first()
            && first.values.len() != values.len()
        {
            return Err(ResultsError::LengthMismatch {
                column: name,
                expected: first.values.len(),
                found: values.len(),
            });
        }
        self.columns.push(Column { name, values });
        Ok(self)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Rename `from` to `to` in place. Returns `false` if `from` is absent.
    pub fn rename_column(&mut self, from: &str, to: &str) -> ResultsResult<bool> {
        if from == to {
            return Ok(self.has_column(from));
        }
        if self.has_column(to) && self.has_column(from) {
            return Err(ResultsError::DuplicateColumn {
                name: to.to_string(),
            });
        }
        match self.columns.iter_mut().find(|c| c.name == from) {
            Some(c) => {
                c.name = to.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn load_json(path: &Path) -> ResultsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_json(&self, path: &Path) -> ResultsResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl TryFrom<Vec<Column>> for Frame {
    type Error = ResultsError;

    fn try_from(columns: Vec<Column>) -> ResultsResult<Self> {
        Self::from_columns(columns)
    }
}

impl From<Frame> for Vec<Column> {
    fn from(frame: Frame) -> Self {
        frame.columns
    }
}

/// ParaView export name → FG name, in the order they are applied.
pub fn paraview_column_map(dim: u32) -> [(&'static str, String); 6] {
    [
        ("VELOC:0", "u(m/s)".to_string()),
        ("Points:0", "x(m)".to_string()),
        ("DENSI", format!("rho(kg/{dim})")),
        ("TEMPE", "T(K)".to_string()),
        ("ZMEAN", "Z".to_string()),
        ("CMEAN", "C".to_string()),
    ]
}

/// Rename ParaView export columns to their FG names.
///
/// Columns that are not in the map, or already renamed, are left alone; the
/// column order and the data are unchanged. When the FG name is already taken
/// (a frame holding both `TEMPE` and `T(K)`), the source keeps its label.
pub fn df_paraview_to_fg(mut frame: Frame, dim: u32) -> Frame {
    for (from, to) in paraview_column_map(dim) {
        if !frame.has_column(from) {
            continue;
        }
        if frame.has_column(&to) {
            tracing::warn!(from, to = %to, "target column already present, keeping source label");
            continue;
        }
        if let Ok(true) = frame.rename_column(from, &to) {
            tracing::debug!(from, to = %to, "renamed column");
        }
    }
    frame
}
