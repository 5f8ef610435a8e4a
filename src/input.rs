//! Reader for the textual floor plan format: a header line holding the row and column
//! counts, followed by one line of characters per row.
//!
//! ```text
//! 4 5
//! S.#.G
//! #....
//! .#..#
//! ..#..
//! ```
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{anyhow, bail, Context, Result};
use log::debug;

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let mut next_count = |name: &str| -> Result<usize> {
        let text = fields
            .next()
            .ok_or_else(|| anyhow!("Missing {} count in header({}).", name, line))?;
        text.parse::<usize>()
            .with_context(|| format!("Invalid {} count({}) in header.", name, text))
    };
    let row_n = next_count("row")?;
    let col_n = next_count("column")?;
    Ok((row_n, col_n))
}

/// Reads a floor plan from `reader`. Blank lines before the header are skipped, each row is
/// trimmed of surrounding whitespace and lines after the last row are ignored.
pub fn read_rows<R: BufRead>(reader: R) -> Result<Vec<Vec<char>>> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(ind, line)| line.with_context(|| format!("Failed to read line {}.", ind + 1)));

    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => bail!("Expect a header line with row and column counts."),
        }
    };
    let (row_n, col_n) = parse_header(&header)?;
    debug!("Reading floor plan with {} rows and {} columns", row_n, col_n);

    let mut rows = Vec::with_capacity(row_n);
    for r in 0..row_n {
        let line = lines
            .next()
            .ok_or_else(|| anyhow!("Expect {} rows, but input ended after {}.", row_n, r))??;
        let row = line.trim().chars().collect::<Vec<char>>();
        if row.len() != col_n {
            bail!(
                "Row {} has {} cells, but the header promises {}.",
                r + 1,
                row.len(),
                col_n
            );
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Reads a floor plan from the file at `path`.
pub fn read_rows_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<char>>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    read_rows(BufReader::new(file))
        .with_context(|| format!("Failed to read floor plan from {}.", path.as_ref().display()))
}
