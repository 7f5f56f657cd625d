//! Tick CSV Loader Module
//! Reads the headerless `pid,proc_ticks,global_ticks` trace into a Table using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

pub const PID_COL: &str = "pid";
pub const PROC_TICKS_COL: &str = "proc_ticks";
pub const GLOBAL_TICKS_COL: &str = "global_ticks";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),
    /// `record` is the 1-based data record; blank lines are not counted.
    #[error("Record {record}: {reason}")]
    Malformed { record: usize, reason: String },
}

/// In-memory tick table, one entry per CSV row, stored column-wise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pids: Vec<f64>,
    proc_ticks: Vec<f64>,
    global_ticks: Vec<f64>,
}

impl Table {
    /// Build a table from `(pid, proc_ticks, global_ticks)` rows.
    pub fn from_rows(rows: &[(f64, f64, f64)]) -> Self {
        let mut table = Self::default();
        for &(pid, proc, global) in rows {
            table.pids.push(pid);
            table.proc_ticks.push(proc);
            table.global_ticks.push(global);
        }
        table
    }

    pub fn len(&self) -> usize {
        self.pids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }

    pub fn pids(&self) -> &[f64] {
        &self.pids
    }

    pub fn proc_ticks(&self) -> &[f64] {
        &self.proc_ticks
    }

    pub fn global_ticks(&self) -> &[f64] {
        &self.global_ticks
    }

    fn from_dataframe(df: &DataFrame) -> Result<Self, LoadError> {
        Ok(Self {
            pids: Self::column_values(df, PID_COL)?,
            proc_ticks: Self::column_values(df, PROC_TICKS_COL)?,
            global_ticks: Self::column_values(df, GLOBAL_TICKS_COL)?,
        })
    }

    /// Parse a raw text column as floats. Surrounding whitespace is allowed;
    /// missing, non-numeric and non-finite fields are rejected.
    fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, LoadError> {
        let ca = df.column(name)?.str()?;

        ca.iter()
            .enumerate()
            .map(|(i, field)| {
                let malformed = |reason: String| LoadError::Malformed {
                    record: i + 1,
                    reason,
                };
                let field = field
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .ok_or_else(|| malformed(format!("missing {} field", name)))?;
                let value: f64 = field
                    .parse()
                    .map_err(|_| malformed(format!("{} is not numeric ({:?})", name, field)))?;
                if !value.is_finite() {
                    return Err(malformed(format!("{} is not finite ({})", name, value)));
                }
                Ok(value)
            })
            .collect()
    }
}

/// Loads tick traces from disk.
pub struct TickLoader;

impl TickLoader {
    /// Load the whole CSV file into memory.
    ///
    /// Any unreadable file or malformed row fails the entire load. A
    /// zero-length file yields an empty table.
    pub fn load_csv(path: &Path) -> Result<Table, LoadError> {
        let metadata = std::fs::metadata(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.len() == 0 {
            tracing::warn!(path = %path.display(), "tick file is empty");
            return Ok(Table::default());
        }

        let schema = Schema::from_iter([
            Field::new(PID_COL.into(), DataType::String),
            Field::new(PROC_TICKS_COL.into(), DataType::String),
            Field::new(GLOBAL_TICKS_COL.into(), DataType::String),
        ]);

        let df = LazyCsvReader::new(path)
            .with_has_header(false)
            .with_schema(Some(Arc::new(schema)))
            .finish()?
            .collect()?;

        let table = Table::from_dataframe(&df)?;
        tracing::info!(path = %path.display(), rows = table.len(), "loaded tick table");
        Ok(table)
    }
}
