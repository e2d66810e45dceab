//! Command line definition and post-processing.

use crate::border::{BorderMatch, BorderStyle};
use crate::io::ReadOptions;
use clap::Parser;
use std::process::ExitCode;

/// Render delimiter-separated rows as a width-constrained table with
/// multi-line cells and composed borders.
#[derive(Parser, Debug)]
pub struct Cli {
    /// The table total width, default to terminal width.
    #[arg(short = 'T', long = "table-width", name = "TABLE_WIDTH")]
    user_total_width: Option<usize>,
    /// The border style, default to "thin".
    #[arg(short = 'B', long = "border", name = "STYLE")]
    border: Option<String>,
    /// Specify to draw only the outer frame.
    #[arg(short = 'O', long, default_value_t = false)]
    outline_only: bool,
    /// Specify to centre the first row as a header.
    #[arg(short = 'H', long, default_value_t = false)]
    header: bool,
    /// The field delimiter in the input data, default to <TAB>.
    #[arg(short = 'd', long = "delimiter", name = "DELIMITER")]
    field_delimiter: Option<String>,
    /// The input stream, default to stdin.
    filename: Option<String>,
}

/// Post-processed [`Cli`] arguments.
pub struct PostCli {
    pub total_width: Option<usize>,
    pub style: BorderStyle,
    pub matches: BorderMatch,
    pub header: bool,
    pub read_opts: ReadOptions,
    pub filename: Option<String>,
}

impl Cli {
    pub fn parse_and_validate() -> Result<PostCli, ExitCode> {
        let cli = Self::parse();
        let name = cli.border.unwrap_or_else(|| "thin".into());
        let style = BorderStyle::from_name(&name).ok_or_else(|| {
            eprintln!("E: {}", crate::Error::UnknownStyle(name.clone()));
            ExitCode::from(1)
        })?;
        let matches = if cli.outline_only {
            BorderMatch::OUTLINE
        } else {
            BorderMatch::ALL
        };
        let mut read_opts = ReadOptions::default();
        if let Some(field_delimiter) = cli.field_delimiter {
            read_opts.sep = field_delimiter;
        }
        Ok(PostCli {
            total_width: cli.user_total_width,
            style,
            matches,
            header: cli.header,
            read_opts,
            filename: cli.filename,
        })
    }
}
