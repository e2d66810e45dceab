//! The table builder and renderer.

use crate::align::{
    AlignmentStrategy, CellAlignment, HorizontalAlign, VerticalAlign,
};
use crate::border::{BorderGrid, BorderMatch, BorderSpec, BorderStyle};
use crate::column_solver::compute_column_widths;
use crate::format::{DisplayFormatter, Formatter};
use crate::matcher::{self, CellMatcher};
use crate::model::TableModel;
use crate::size::{AutoSize, Extent, SizeConstraints};
use crate::width::{CharWidth, Measure};
use crate::wrap::{DelimiterTextWrapper, TextWrapper};
use std::fmt::Display;

type Matcher<M> = Box<dyn CellMatcher<M> + Send + Sync>;
type FormatRule<M> =
    (Matcher<M>, Box<dyn Formatter<<M as TableModel>::Value> + Send + Sync>);
type SizeRule<M> = (Matcher<M>, Box<dyn SizeConstraints + Send + Sync>);
type WrapRule<M> = (Matcher<M>, Box<dyn TextWrapper + Send + Sync>);
type AlignRule<M> = (Matcher<M>, Box<dyn AlignmentStrategy + Send + Sync>);

/// A renderable table: a model plus the rule pipelines and border
/// specifications registered against it.
///
/// Rules are ordered by insertion and the last matching rule wins; a
/// default rule matching every cell sits at position 0 of each pipeline.
/// Registration mutates the table; [`Table::render`] is pure.
pub struct Table<M: TableModel> {
    model: M,
    measure: Measure,
    format_rules: Vec<FormatRule<M>>,
    size_rules: Vec<SizeRule<M>>,
    wrap_rules: Vec<WrapRule<M>>,
    align_rules: Vec<AlignRule<M>>,
    borders: Vec<BorderSpec>,
}

impl<M: TableModel + 'static> Table<M>
where
    M::Value: Display,
{
    /// Build a table over `model` with the default rules installed:
    /// `Display` formatting, auto sizing, delimiter wrapping, and
    /// top-left alignment.
    pub fn new(model: M) -> Self {
        let mut table = Table {
            model,
            measure: Measure::default(),
            format_rules: vec![],
            size_rules: vec![],
            wrap_rules: vec![],
            align_rules: vec![],
            borders: vec![],
        };
        table.format(matcher::table(), DisplayFormatter);
        table.size(matcher::table(), AutoSize);
        table.wrap(matcher::table(), DelimiterTextWrapper);
        table.align(
            matcher::table(),
            CellAlignment::new(HorizontalAlign::Left, VerticalAlign::Top),
        );
        table
    }
}

impl<M: TableModel> Table<M> {
    /// Register a formatting rule.
    pub fn format(
        &mut self,
        matcher: impl CellMatcher<M> + Send + Sync + 'static,
        formatter: impl Formatter<M::Value> + Send + Sync + 'static,
    ) -> &mut Self {
        self.format_rules
            .push((Box::new(matcher), Box::new(formatter)));
        self
    }

    /// Register a sizing rule.
    pub fn size(
        &mut self,
        matcher: impl CellMatcher<M> + Send + Sync + 'static,
        constraints: impl SizeConstraints + Send + Sync + 'static,
    ) -> &mut Self {
        self.size_rules
            .push((Box::new(matcher), Box::new(constraints)));
        self
    }

    /// Register a wrapping rule.
    pub fn wrap(
        &mut self,
        matcher: impl CellMatcher<M> + Send + Sync + 'static,
        wrapper: impl TextWrapper + Send + Sync + 'static,
    ) -> &mut Self {
        self.wrap_rules.push((Box::new(matcher), Box::new(wrapper)));
        self
    }

    /// Register an alignment rule.
    pub fn align(
        &mut self,
        matcher: impl CellMatcher<M> + Send + Sync + 'static,
        aligner: impl AlignmentStrategy + Send + Sync + 'static,
    ) -> &mut Self {
        self.align_rules.push((Box::new(matcher), Box::new(aligner)));
        self
    }

    /// Register a border over the lane rectangle `(top, left)` to
    /// `(bottom, right)`. Fails fast on a rectangle that does not fit
    /// the model.
    pub fn with_border(
        &mut self,
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
        matches: BorderMatch,
        style: BorderStyle,
    ) -> crate::Result<&mut Self> {
        let spec = BorderSpec::new(
            top,
            left,
            bottom,
            right,
            matches,
            style,
            self.model.row_count(),
            self.model.column_count(),
        )?;
        self.borders.push(spec);
        Ok(self)
    }

    /// Replace the character-width measure.
    pub fn char_width(&mut self, char_width: CharWidth) -> &mut Self {
        self.measure = Measure::new(char_width);
        self
    }

    fn format_rule(
        &self,
        row: usize,
        column: usize,
    ) -> &(dyn Formatter<M::Value> + Send + Sync) {
        last_match(&self.format_rules, row, column, &self.model)
    }

    fn size_rule(&self, row: usize, column: usize) -> &(dyn SizeConstraints + Send + Sync) {
        last_match(&self.size_rules, row, column, &self.model)
    }

    fn wrap_rule(&self, row: usize, column: usize) -> &(dyn TextWrapper + Send + Sync) {
        last_match(&self.wrap_rules, row, column, &self.model)
    }

    fn align_rule(
        &self,
        row: usize,
        column: usize,
    ) -> &(dyn AlignmentStrategy + Send + Sync) {
        last_match(&self.align_rules, row, column, &self.model)
    }

    /// Render the table within `total_width` terminal cells.
    ///
    /// If `total_width` cannot even hold the minimum column widths plus
    /// the border lanes, the output falls back to the minimum widths and
    /// overflows the target rather than failing.
    pub fn render(&self, total_width: usize) -> crate::Result<String> {
        let rows = self.model.row_count();
        let columns = self.model.column_count();
        if rows == 0 || columns == 0 {
            return Ok(String::new());
        }
        let grid = BorderGrid::compose(&self.borders, rows, columns);
        let lanes = (0..=columns).filter(|c| grid.v_filler(*c)).count();
        let available = total_width.saturating_sub(lanes);

        // Pre-format every cell and aggregate the column extents.
        let mut pre_wrap: Vec<Vec<String>> =
            Vec::with_capacity(rows * columns);
        let mut min_widths = vec![0usize; columns];
        let mut max_widths = vec![0usize; columns];
        for r in 0..rows {
            for c in 0..columns {
                let lines =
                    self.format_rule(r, c).format(self.model.value(r, c));
                ensure_formatted(r, c, &lines)?;
                let extent = self.size_rule(r, c).extent(
                    &lines,
                    available,
                    columns,
                    self.measure,
                );
                ensure_extent(r, c, extent)?;
                min_widths[c] = std::cmp::max(min_widths[c], extent.min);
                max_widths[c] = std::cmp::max(max_widths[c], extent.max);
                pre_wrap.push(lines);
            }
        }
        let widths =
            compute_column_widths(&min_widths, &max_widths, available);

        // Wrap to the resolved widths and record the row heights.
        let mut wrapped: Vec<Vec<String>> =
            Vec::with_capacity(rows * columns);
        let mut heights = vec![0usize; rows];
        for r in 0..rows {
            for c in 0..columns {
                let lines = self.wrap_rule(r, c).wrap(
                    &pre_wrap[r * columns + c],
                    widths[c],
                    self.measure,
                );
                ensure_wrapped(r, c, &lines, widths[c], self.measure)?;
                heights[r] = std::cmp::max(heights[r], lines.len());
                wrapped.push(lines);
            }
        }

        // Align into the final cell rectangles.
        let mut cells: Vec<Vec<String>> = Vec::with_capacity(rows * columns);
        for r in 0..rows {
            for c in 0..columns {
                let lines = std::mem::take(&mut wrapped[r * columns + c]);
                let lines = self.align_rule(r, c).align(
                    lines,
                    widths[c],
                    heights[r],
                    self.measure,
                );
                ensure_aligned(
                    r,
                    c,
                    &lines,
                    widths[c],
                    heights[r],
                    self.measure,
                )?;
                cells.push(lines);
            }
        }

        // Weave the content sub-rows and the border bands together.
        let mut out = String::new();
        for r in 0..rows {
            emit_horizontal_band(&mut out, &grid, r, &widths);
            for sub in 0..heights[r] {
                for c in 0..columns {
                    emit_vertical(&mut out, &grid, r, c);
                    out.push_str(&cells[r * columns + c][sub]);
                }
                emit_vertical(&mut out, &grid, r, columns);
                out.push('\n');
            }
        }
        emit_horizontal_band(&mut out, &grid, rows, &widths);
        Ok(out)
    }
}

/// The last registered strategy whose matcher matches the cell.
fn last_match<'a, M: TableModel, S: ?Sized>(
    rules: &'a [(Matcher<M>, Box<S>)],
    row: usize,
    column: usize,
    model: &M,
) -> &'a S {
    rules
        .iter()
        .rev()
        .find(|(matcher, _)| matcher.matches(row, column, model))
        .map(|(_, strategy)| strategy.as_ref())
        // Why unwrap: the default rule at position 0 matches every cell.
        .unwrap()
}

fn contract_error(
    row: usize,
    column: usize,
    detail: String,
) -> crate::Error {
    crate::Error::Contract {
        row,
        column,
        detail,
    }
}

fn ensure_formatted(
    row: usize,
    column: usize,
    lines: &[String],
) -> crate::Result<()> {
    if lines.iter().any(|l| l.contains('\n')) {
        return Err(contract_error(
            row,
            column,
            "formatter emitted a line containing a newline".into(),
        ));
    }
    Ok(())
}

fn ensure_extent(
    row: usize,
    column: usize,
    extent: Extent,
) -> crate::Result<()> {
    if extent.min > extent.max {
        return Err(contract_error(
            row,
            column,
            format!(
                "size constraints produced min {} above max {}",
                extent.min, extent.max
            ),
        ));
    }
    Ok(())
}

fn ensure_wrapped(
    row: usize,
    column: usize,
    lines: &[String],
    width: usize,
    measure: Measure,
) -> crate::Result<()> {
    for line in lines {
        if line.contains('\n') || measure.line(line) != width {
            return Err(contract_error(
                row,
                column,
                format!(
                    "wrapper emitted line {:?}, not exactly {} cells",
                    line, width
                ),
            ));
        }
    }
    Ok(())
}

fn ensure_aligned(
    row: usize,
    column: usize,
    lines: &[String],
    width: usize,
    height: usize,
    measure: Measure,
) -> crate::Result<()> {
    if lines.len() != height {
        return Err(contract_error(
            row,
            column,
            format!(
                "aligner emitted {} lines instead of {}",
                lines.len(),
                height
            ),
        ));
    }
    for line in lines {
        if line.contains('\n') || measure.line(line) != width {
            return Err(contract_error(
                row,
                column,
                format!(
                    "aligner emitted line {:?}, not exactly {} cells",
                    line, width
                ),
            ));
        }
    }
    Ok(())
}

fn emit_vertical(out: &mut String, grid: &BorderGrid, row: usize, lane: usize) {
    if let Some(glyph) = grid.vertical_char(row, lane) {
        out.push(glyph);
    } else if grid.v_filler(lane) {
        out.push(' ');
    }
}

fn emit_corner(
    out: &mut String,
    grid: &BorderGrid,
    lane: usize,
    column_lane: usize,
) {
    // A crossing occupies output width only where the vertical lane
    // exists; glyphs in nonexistent lanes (horizontal pass-throughs)
    // would break the rectangular shape.
    if !grid.v_filler(column_lane) {
        return;
    }
    match grid.corner_char(lane, column_lane) {
        Some(glyph) => out.push(glyph),
        None => out.push(' '),
    }
}

fn emit_horizontal_band(
    out: &mut String,
    grid: &BorderGrid,
    lane: usize,
    widths: &[usize],
) {
    if !grid.h_filler(lane) {
        return;
    }
    for (c, width) in widths.iter().enumerate() {
        emit_corner(out, grid, lane, c);
        match grid.horizontal_char(lane, c) {
            Some(glyph) => out.extend(std::iter::repeat(glyph).take(*width)),
            None => out.extend(std::iter::repeat(' ').take(*width)),
        }
    }
    emit_corner(out, grid, lane, widths.len());
    out.push('\n');
}
