//! Console presentation of benchmark results

use std::fmt;

use crate::{
    models::{ResultRow, ResultSet},
    utils::{format_bytes, format_seconds},
};

const NO_DATA: &str = "-";
const HEADERS: [&str; 5] = ["Algorithm", "Size", "Avg Time", "Avg Mem", "Errors"];

/// Render a result set as a fixed-width table, one row per (algorithm, size)
pub fn render_table(results: &ResultSet) -> String {
    ResultTable(results).to_string()
}

/// [`fmt::Display`] adapter behind [`render_table`]
pub struct ResultTable<'a>(pub &'a ResultSet);

impl fmt::Display for ResultTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 5]> = self
            .0
            .iter()
            .flat_map(|(algorithm, result)| result.rows().map(move |row| cells(algorithm, &row)))
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let total = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

        write_row(f, &HEADERS.map(String::from), &widths)?;
        writeln!(f, "{}", "-".repeat(total))?;
        for row in &rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn cells(algorithm: &str, row: &ResultRow<'_>) -> [String; 5] {
    [
        algorithm.to_string(),
        row.size.to_string(),
        row.time_s.map_or_else(|| NO_DATA.to_string(), format_seconds),
        row.mem_bytes.map_or_else(|| NO_DATA.to_string(), format_bytes),
        row.error_count().to_string(),
    ]
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String; 5], widths: &[usize; 5]) -> fmt::Result {
    // Algorithm name left aligned, numbers right aligned
    write!(f, "{:<width$}", cells[0], width = widths[0])?;
    for (cell, width) in cells.iter().zip(widths).skip(1) {
        // `{:>}` pads by char count, which keeps `µs` aligned
        write!(f, "  {:>width$}", cell, width = *width)?;
    }
    writeln!(f)
}
