//! Reading delimiter-separated rows from an input stream.

use std::io::BufRead;

/// Options for reading rows from input.
pub struct ReadOptions {
    /// The column separator.
    pub sep: String,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { sep: "\t".into() }
    }
}

/// Read one row per input line, splitting fields on the separator. Blank
/// lines become empty rows; rows may be ragged and are normalized later
/// by the model constructor.
pub fn read_rows<R: BufRead>(
    reader: R,
    opts: &ReadOptions,
) -> crate::Result<Vec<Vec<String>>> {
    let mut rows: Vec<Vec<String>> = vec![];
    for line in reader.lines() {
        let line: String = line?;
        let row = if line.is_empty() {
            vec![]
        } else {
            line.split(&opts.sep).map(ToOwned::to_owned).collect()
        };
        rows.push(row);
    }
    if rows.iter().all(|row| row.is_empty()) {
        return Err(crate::Error::EmptyInput);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GridModel, TableModel};
    use std::io::{BufReader, Cursor};

    #[test]
    fn test_read_rows() {
        let input = "foo\tbar\nfoo2\tbar2\tbaz\nfoo3\n\n".as_bytes();
        let reader = BufReader::new(Cursor::new(input));
        let rows = read_rows(reader, &ReadOptions::default()).unwrap();
        assert_eq!(rows.len(), 4);
        let model = GridModel::from_rows(rows);
        assert_eq!(model.row_count(), 4);
        assert_eq!(model.column_count(), 3);
        assert_eq!(model.value(1, 2), "baz");
        assert_eq!(model.value(2, 1), "");
    }

    #[test]
    fn test_read_rows_custom_separator() {
        let input = "a,b\nc,d\n".as_bytes();
        let reader = BufReader::new(Cursor::new(input));
        let opts = ReadOptions { sep: ",".into() };
        let rows = read_rows(reader, &opts).unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_read_empty_input() {
        for input in ["", "\n\n\n"] {
            let reader = BufReader::new(Cursor::new(input.as_bytes()));
            let rows = read_rows(reader, &ReadOptions::default());
            assert!(matches!(rows, Err(crate::Error::EmptyInput)));
        }
    }
}
