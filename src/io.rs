//! CSV interchange for datasets and evaluation results.
//!
//! Uploaded files must carry columns named exactly `x` and `y`
//! (case-sensitive); any other columns are ignored. Exports write the
//! evaluated dataset as `x,y,y_pred,residual`, one row per point.

use std::io::{BufRead, Write};

use crate::Vector;
use crate::dataset::{Dataset, EvaluatedDataset};
use crate::error::{Error, Result};

/// Reads a delimited `x`/`y` table into a [`Dataset`].
///
/// The first line is the header. Columns are matched by exact name; extra
/// columns are ignored and blank lines are skipped.
///
/// # Errors
/// - [`Error::MissingColumns`] if `x` or `y` is absent from the header.
/// - [`Error::MalformedRow`] if a data row is shorter than the header needs.
/// - [`Error::ParseValue`] if an `x` or `y` cell is not numeric.
/// - [`Error::EmptyDataset`] if the file has no data rows.
pub fn read_csv<R: BufRead>(reader: R) -> Result<Dataset> {
    let mut lines = reader.lines().enumerate();

    let Some((_, header)) = lines.next() else {
        return Err(Error::EmptyDataset);
    };
    let header = header?;
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();

    let x_col = columns.iter().position(|c| *c == "x");
    let y_col = columns.iter().position(|c| *c == "y");
    let (Some(x_col), Some(y_col)) = (x_col, y_col) else {
        let missing = [("x", x_col), ("y", y_col)]
            .into_iter()
            .filter(|(_, found)| found.is_none())
            .map(|(name, _)| name.to_string())
            .collect();
        return Err(Error::MissingColumns(missing));
    };

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (row, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        let needed = x_col.max(y_col) + 1;
        if fields.len() < needed {
            return Err(Error::MalformedRow {
                row,
                expected: needed,
                found: fields.len(),
            });
        }

        xs.push(parse_field(fields[x_col], row, "x")?);
        ys.push(parse_field(fields[y_col], row, "y")?);
    }

    Dataset::new(Vector::from(xs), Vector::from(ys))
}

fn parse_field(raw: &str, row: usize, column: &'static str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|source| Error::ParseValue { row, column, source })
}

/// Writes an [`EvaluatedDataset`] as CSV with columns `x,y,y_pred,residual`.
///
/// Rows are written in dataset order. Values use `Display` formatting, which
/// round-trips `f64` exactly through [`read_csv`].
pub fn write_csv<W: Write>(evaluated: &EvaluatedDataset, mut writer: W) -> Result<()> {
    writeln!(writer, "x,y,y_pred,residual")?;
    for i in 0..evaluated.n_samples() {
        writeln!(
            writer,
            "{},{},{},{}",
            evaluated.x[i], evaluated.y[i], evaluated.y_pred[i], evaluated.residual[i]
        )?;
    }
    Ok(())
}
