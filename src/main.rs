use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;
use trestle::align::{CellAlignment, HorizontalAlign, VerticalAlign};
use trestle::io::read_rows;
use trestle::matcher;
use trestle::model::{GridModel, HeaderModel, TableModel};
use trestle::table::Table;
use trestle::ui::{Cli, PostCli};

macro_rules! eprintln_and_exit {
    ( $err:ident, $code:literal ) => {{
        eprintln!("E: {}", $err);
        ExitCode::from($code)
    }};
}

fn render<M>(model: M, cli: &PostCli) -> ExitCode
where
    M: TableModel<Value = String> + 'static,
{
    let rows = model.row_count();
    let columns = model.column_count();
    let mut table = Table::new(model);
    if cli.header {
        table.align(
            matcher::row(0),
            CellAlignment::new(HorizontalAlign::Center, VerticalAlign::Top),
        );
    }
    if let Err(err) =
        table.with_border(0, 0, rows, columns, cli.matches, cli.style)
    {
        return eprintln_and_exit!(err, 1);
    }
    let width = cli.total_width.unwrap_or_else(textwrap::termwidth);
    match table.render(width) {
        Err(err) => eprintln_and_exit!(err, 1),
        Ok(rendered) => {
            print!("{}", rendered);
            ExitCode::SUCCESS
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::parse_and_validate() {
        Err(exit_code) => return exit_code,
        Ok(cli) => cli,
    };
    let reader: Box<dyn BufRead> = match &cli.filename {
        None => Box::new(BufReader::new(io::stdin())),
        Some(filename) => {
            let file: trestle::Result<File> =
                File::open(filename).map_err(Into::into);
            match file {
                Err(err) => return eprintln_and_exit!(err, 1),
                Ok(file) => Box::new(BufReader::new(file)),
            }
        }
    };
    let mut rows = match read_rows(reader, &cli.read_opts) {
        Err(err) => return eprintln_and_exit!(err, 1),
        Ok(rows) => rows,
    };
    if cli.header {
        let header = rows.remove(0);
        render(HeaderModel::new(header, rows), &cli)
    } else {
        render(GridModel::from_rows(rows), &cli)
    }
}
