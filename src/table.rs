// src/table.rs
//! Turning a captioned wiki table into entity rows, and folding those rows into records.

use crate::data::RecordSet;
use crate::error::ParseError;

/// A captioned table as read off the page: header cells plus all data cells in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableExtract {
    pub title: String,
    pub headers: Vec<String>,
    pub cells: Vec<String>,
}

/// Headers plus reshaped rows of one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableShape {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Chunk `cells` into rows of `headers.len()`. A short trailing chunk is kept as-is.
pub fn reshape(headers: &[String], cells: &[String]) -> Result<Vec<Vec<String>>, ParseError> {
    if headers.is_empty() {
        return Err(ParseError::EmptyHeaders);
    }
    Ok(cells.chunks(headers.len()).map(<[String]>::to_vec).collect())
}

impl TableExtract {
    pub fn shape(&self) -> Result<TableShape, ParseError> {
        let rows = reshape(&self.headers, &self.cells)?;
        Ok(TableShape { headers: self.headers.clone(), rows })
    }
}

/// Fold one table into `set` under category `title`.
///
/// Cell 0 of each row names the entity; cells 1.. pair with headers 1.. by position.
/// Rows shorter than the header stop pairing at their own length and come back
/// as `RaggedRow` warnings. Rows with an empty name cell are dropped as `UnnamedRow`.
pub fn merge_table(set: &mut RecordSet, title: &str, shape: &TableShape) -> Vec<ParseError> {
    let mut warnings = Vec::new();
    let width = shape.headers.len();

    for (idx, row) in shape.rows.iter().enumerate() {
        let Some(entity) = row.first().filter(|e| !e.is_empty()) else {
            warnings.push(ParseError::UnnamedRow { table: s!(title), row: idx });
            continue;
        };
        set.touch(entity, "");

        for (header, cell) in shape.headers.iter().zip(row.iter()).skip(1) {
            set.merge(entity, "", title, header, cell);
        }

        if row.len() < width {
            warnings.push(ParseError::RaggedRow {
                table: s!(title),
                entity: entity.clone(),
                expected: width,
                actual: row.len(),
            });
        }
    }
    warnings
}
