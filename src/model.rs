//! Read-only rectangular views of table cells.

/// A read-only rectangular grid of opaque cell values.
///
/// Implementations must return stable values across repeated calls for
/// identical coordinates. A model with zero rows or zero columns is legal
/// and renders to the empty string.
pub trait TableModel {
    /// The opaque cell value type.
    type Value;

    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Get the value at `(row, column)`. Both coordinates must be in
    /// range.
    fn value(&self, row: usize, column: usize) -> &Self::Value;
}

/// Indicate that a vec can not be interpreted as a `GridModel`, since its
/// len is not `rows * columns`.
#[derive(Debug)]
pub struct NotGridError;

/// A row-major grid of cells.
#[derive(Debug)]
pub struct GridModel<T> {
    cells: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T> GridModel<T> {
    /// Construct a `GridModel` from a row-major Vec.
    pub fn new(
        cells: Vec<T>,
        rows: usize,
        columns: usize,
    ) -> Result<Self, NotGridError> {
        if cells.len() == rows * columns {
            Ok(Self {
                cells,
                rows,
                columns,
            })
        } else {
            Err(NotGridError)
        }
    }

    /// Construct a `GridModel` from a stream of rows. Rows shorter than
    /// the longest one are padded with default values.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<T>>,
        T: Default,
    {
        let mut buf: Vec<Vec<T>> = rows.into_iter().collect();
        let columns = buf.iter().map(Vec::len).max().unwrap_or(0);
        let rows = buf.len();
        let mut cells = Vec::with_capacity(rows * columns);
        for row in buf.iter_mut() {
            let missing = columns - row.len();
            cells.append(row);
            cells.extend((0..missing).map(|_| T::default()));
        }
        Self {
            cells,
            rows,
            columns,
        }
    }

    /// Get all cells. Used in tests only.
    #[cfg(test)]
    pub(crate) fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl<T> TableModel for GridModel<T> {
    type Value = T;

    #[inline]
    fn row_count(&self) -> usize {
        self.rows
    }

    #[inline]
    fn column_count(&self) -> usize {
        self.columns
    }

    #[inline]
    fn value(&self, row: usize, column: usize) -> &T {
        &self.cells[row * self.columns + column]
    }
}

/// A declared header row at index 0 over a grid of record rows.
#[derive(Debug)]
pub struct HeaderModel<T> {
    header: Vec<T>,
    records: GridModel<T>,
}

impl<T: Default> HeaderModel<T> {
    /// Construct from a header and record rows. Records are padded or
    /// truncated to the header width.
    pub fn new<I>(header: Vec<T>, records: I) -> Self
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let columns = header.len();
        let mut cells = vec![];
        let mut rows: usize = 0;
        for mut record in records {
            record.resize_with(columns, T::default);
            cells.append(&mut record);
            rows += 1;
        }
        // Why unwrap: every record was just resized to `columns`.
        let records = GridModel::new(cells, rows, columns).unwrap();
        Self { header, records }
    }
}

impl<T> TableModel for HeaderModel<T> {
    type Value = T;

    #[inline]
    fn row_count(&self) -> usize {
        1 + self.records.row_count()
    }

    #[inline]
    fn column_count(&self) -> usize {
        self.header.len()
    }

    fn value(&self, row: usize, column: usize) -> &T {
        if row == 0 {
            &self.header[column]
        } else {
            self.records.value(row - 1, column)
        }
    }
}
