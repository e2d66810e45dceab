//! Placing wrapped lines within the final cell rectangle.

use crate::width::Measure;

/// Horizontally and vertically place wrapped lines in a cell rectangle.
pub trait AlignmentStrategy {
    /// Must return exactly `height` lines, each exactly `width` cells
    /// wide.
    fn align(
        &self,
        lines: Vec<String>,
        width: usize,
        height: usize,
        measure: Measure,
    ) -> Vec<String>;
}

/// Any suitable closure is an alignment strategy.
impl<F> AlignmentStrategy for F
where
    F: Fn(Vec<String>, usize, usize, Measure) -> Vec<String>,
{
    fn align(
        &self,
        lines: Vec<String>,
        width: usize,
        height: usize,
        measure: Measure,
    ) -> Vec<String> {
        self(lines, width, height, measure)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Right,
    Center,
}

impl HorizontalAlign {
    /// Redistribute the trailing padding of an exactly-`width` line. The
    /// spare cell of an odd centring goes to the right.
    fn place(self, line: &str, width: usize, measure: Measure) -> String {
        let content = line.trim_end_matches(' ');
        let slack = width.saturating_sub(measure.line(content));
        let (before, after) = match self {
            Self::Left => (0, slack),
            Self::Right => (slack, 0),
            Self::Center => (slack / 2, slack - slack / 2),
        };
        let mut placed =
            String::with_capacity(content.len() + before + after);
        placed.push_str(&" ".repeat(before));
        placed.push_str(content);
        placed.push_str(&" ".repeat(after));
        placed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Pad the line list with blank lines to `height` rows. The spare row of
/// an odd middle placement goes below.
fn place_vertically(
    vertical: VerticalAlign,
    lines: Vec<String>,
    width: usize,
    height: usize,
) -> Vec<String> {
    let missing = height.saturating_sub(lines.len());
    let (above, below) = match vertical {
        VerticalAlign::Top => (0, missing),
        VerticalAlign::Middle => (missing / 2, missing - missing / 2),
        VerticalAlign::Bottom => (missing, 0),
    };
    let blank = " ".repeat(width);
    let mut out = Vec::with_capacity(height);
    out.extend((0..above).map(|_| blank.clone()));
    out.extend(lines);
    out.extend((0..below).map(|_| blank.clone()));
    out
}

/// A horizontal aligner on its own keeps the content at the top.
impl AlignmentStrategy for HorizontalAlign {
    fn align(
        &self,
        lines: Vec<String>,
        width: usize,
        height: usize,
        measure: Measure,
    ) -> Vec<String> {
        CellAlignment::new(*self, VerticalAlign::Top)
            .align(lines, width, height, measure)
    }
}

/// A vertical aligner on its own leaves horizontal positions untouched.
impl AlignmentStrategy for VerticalAlign {
    fn align(
        &self,
        lines: Vec<String>,
        width: usize,
        height: usize,
        _measure: Measure,
    ) -> Vec<String> {
        place_vertically(*self, lines, width, height)
    }
}

/// A horizontal and a vertical aligner combined.
#[derive(Debug, Clone, Copy)]
pub struct CellAlignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl CellAlignment {
    pub const fn new(
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl AlignmentStrategy for CellAlignment {
    fn align(
        &self,
        lines: Vec<String>,
        width: usize,
        height: usize,
        measure: Measure,
    ) -> Vec<String> {
        let placed = lines
            .iter()
            .map(|l| self.horizontal.place(l, width, measure))
            .collect();
        place_vertically(self.vertical, placed, width, height)
    }
}
