pub mod align;
pub mod border;
pub mod column_solver;
pub mod format;
pub mod io;
pub mod matcher;
pub mod model;
pub mod size;
pub mod table;
pub mod ui;
pub mod width;
pub mod wrap;

#[derive(Debug)]
pub enum Error {
    /// If a border rectangle does not fit within the model dimensions.
    Dimension {
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
        rows: usize,
        columns: usize,
    },
    /// If a formatter, size constraints, wrapper or aligner breaks its
    /// output contract at the cell `(row, column)`.
    Contract {
        row: usize,
        column: usize,
        detail: String,
    },
    /// If the input table is empty.
    EmptyInput,
    /// If IO error occurs while reading the input table.
    Io(std::io::Error),
    /// If a border style name is unknown.
    UnknownStyle(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Dimension {
                top,
                left,
                bottom,
                right,
                rows,
                columns,
            } => {
                write!(
                    f,
                    "Border rectangle ({}, {})..({}, {}) does not fit a \
                     {}x{} table.",
                    top, left, bottom, right, rows, columns
                )
            }
            Error::Contract {
                row,
                column,
                detail,
            } => {
                write!(
                    f,
                    "Output contract broken at row={} column={}: {}.",
                    row + 1,
                    column + 1,
                    detail
                )
            }
            Error::EmptyInput => write!(f, "The input table is empty."),
            Error::Io(err) => write!(f, "IO error occurs: {}.", err),
            Error::UnknownStyle(name) => {
                write!(f, "Invalid border style `{}`", name)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
