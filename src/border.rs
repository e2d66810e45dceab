//! Border styles, specifications and the composed border lattice.
//!
//! Borders live in the lanes between (and outside) the cell grid:
//! vertical lanes `0..=columns`, horizontal lanes `0..=rows`. Each
//! registered [`BorderSpec`] stamps strokes onto the lattice in
//! registration order, later strokes overwriting earlier ones; corner
//! glyphs are then inferred from the four strokes meeting at each lane
//! crossing.

use bitflags::bitflags;

bitflags! {
    /// Which edges within a border rectangle a specification applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BorderMatch: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        /// Horizontal edges strictly inside the rectangle.
        const INNER_HORIZONTAL = 1 << 4;
        /// Vertical edges strictly inside the rectangle.
        const INNER_VERTICAL = 1 << 5;
        /// The four outer edges.
        const OUTLINE = Self::TOP.bits()
            | Self::BOTTOM.bits()
            | Self::LEFT.bits()
            | Self::RIGHT.bits();
        /// All interior edges.
        const INNER = Self::INNER_HORIZONTAL.bits()
            | Self::INNER_VERTICAL.bits();
        /// Every edge.
        const ALL = Self::OUTLINE.bits() | Self::INNER.bits();
    }
}

/// The kind of stroke drawn along one border edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Stroke {
    /// No stroke at all.
    #[default]
    None,
    /// A space stroke: occupies the lane without drawing.
    Air,
    /// ASCII `-`/`|` strokes.
    Ascii,
    /// Thin box-drawing strokes.
    Thin,
    /// Double box-drawing strokes.
    Double,
}

impl Stroke {
    #[inline]
    fn exists(self) -> bool {
        self != Stroke::None
    }

    fn horizontal_glyph(self) -> Option<char> {
        match self {
            Stroke::None => None,
            Stroke::Air => Some(' '),
            Stroke::Ascii => Some('-'),
            Stroke::Thin => Some('─'),
            Stroke::Double => Some('═'),
        }
    }

    fn vertical_glyph(self) -> Option<char> {
        match self {
            Stroke::None => None,
            Stroke::Air => Some(' '),
            Stroke::Ascii => Some('|'),
            Stroke::Thin => Some('│'),
            Stroke::Double => Some('║'),
        }
    }
}

/// A border style from the closed glyph set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    /// Contributes no glyphs and never overwrites.
    None,
    /// Space strokes, acting as a gutter.
    Air,
    /// ASCII `-`, `|` and `+` glyphs.
    OldSchool,
    /// Thin strokes all round.
    Thin,
    /// Thin horizontals over double verticals.
    ThinDouble,
    /// Double strokes all round.
    Double,
    /// Double horizontals over thin verticals.
    FancyLight,
}

impl BorderStyle {
    fn horizontal(self) -> Stroke {
        match self {
            BorderStyle::None => Stroke::None,
            BorderStyle::Air => Stroke::Air,
            BorderStyle::OldSchool => Stroke::Ascii,
            BorderStyle::Thin | BorderStyle::ThinDouble => Stroke::Thin,
            BorderStyle::Double | BorderStyle::FancyLight => Stroke::Double,
        }
    }

    fn vertical(self) -> Stroke {
        match self {
            BorderStyle::None => Stroke::None,
            BorderStyle::Air => Stroke::Air,
            BorderStyle::OldSchool => Stroke::Ascii,
            BorderStyle::Thin | BorderStyle::FancyLight => Stroke::Thin,
            BorderStyle::Double | BorderStyle::ThinDouble => Stroke::Double,
        }
    }

    /// Look up a style by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(BorderStyle::None),
            "air" => Some(BorderStyle::Air),
            "old-school" => Some(BorderStyle::OldSchool),
            "thin" => Some(BorderStyle::Thin),
            "thin-double" => Some(BorderStyle::ThinDouble),
            "double" => Some(BorderStyle::Double),
            "fancy-light" => Some(BorderStyle::FancyLight),
            _ => None,
        }
    }
}

/// A validated border specification over lane coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSpec {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
    matches: BorderMatch,
    style: BorderStyle,
}

impl BorderSpec {
    /// Validate the rectangle against the model dimensions.
    pub fn new(
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
        matches: BorderMatch,
        style: BorderStyle,
        rows: usize,
        columns: usize,
    ) -> crate::Result<Self> {
        if top >= rows
            || bottom <= top
            || bottom > rows
            || left >= columns
            || right <= left
            || right > columns
        {
            return Err(crate::Error::Dimension {
                top,
                left,
                bottom,
                right,
                rows,
                columns,
            });
        }
        Ok(Self {
            top,
            left,
            bottom,
            right,
            matches,
            style,
        })
    }

    /// The stroke this spec contributes to the horizontal edge at lane
    /// `r`, column `c`.
    fn horizontal_at(&self, r: usize, c: usize) -> Stroke {
        if c < self.left || c >= self.right || r < self.top || r > self.bottom
        {
            return Stroke::None;
        }
        let on = (r == self.top && self.matches.contains(BorderMatch::TOP))
            || (r == self.bottom
                && self.matches.contains(BorderMatch::BOTTOM))
            || (r > self.top
                && r < self.bottom
                && self.matches.contains(BorderMatch::INNER_HORIZONTAL));
        if on {
            self.style.horizontal()
        } else {
            Stroke::None
        }
    }

    /// The stroke this spec contributes to the vertical edge at row `r`,
    /// lane `c`.
    fn vertical_at(&self, r: usize, c: usize) -> Stroke {
        if r < self.top || r >= self.bottom || c < self.left || c > self.right
        {
            return Stroke::None;
        }
        let on = (c == self.left && self.matches.contains(BorderMatch::LEFT))
            || (c == self.right
                && self.matches.contains(BorderMatch::RIGHT))
            || (c > self.left
                && c < self.right
                && self.matches.contains(BorderMatch::INNER_VERTICAL));
        if on {
            self.style.vertical()
        } else {
            Stroke::None
        }
    }
}

/// Resolve a corner from its four neighbouring strokes. Total over every
/// stroke 4-tuple.
///
/// An `Ascii` arm forces the `+`/`-`/`|` family. `Air` arms keep the
/// lane open but do not shape the corner; an all-air crossing is a
/// space. When the two arms of an axis disagree between thin and double,
/// double wins the glyph choice.
fn corner_glyph(
    above: Stroke,
    below: Stroke,
    left: Stroke,
    right: Stroke,
) -> Option<char> {
    let arms = [above, below, left, right];
    if arms.iter().all(|s| !s.exists()) {
        return None;
    }
    if arms.contains(&Stroke::Ascii) {
        let vertical = above.exists() || below.exists();
        let horizontal = left.exists() || right.exists();
        return Some(match (vertical, horizontal) {
            (true, true) => '+',
            (true, false) => '|',
            (false, _) => '-',
        });
    }
    let solid = |s: Stroke| matches!(s, Stroke::Thin | Stroke::Double);
    let up = solid(above);
    let down = solid(below);
    let lt = solid(left);
    let rt = solid(right);
    let v_double = above == Stroke::Double || below == Stroke::Double;
    let h_double = left == Stroke::Double || right == Stroke::Double;
    let pick = |plain, h_d, v_d, both| match (h_double, v_double) {
        (false, false) => plain,
        (true, false) => h_d,
        (false, true) => v_d,
        (true, true) => both,
    };
    Some(match (up, down, lt, rt) {
        (true, true, true, true) => pick('┼', '╪', '╫', '╬'),
        (true, true, false, true) => pick('├', '╞', '╟', '╠'),
        (true, true, true, false) => pick('┤', '╡', '╢', '╣'),
        (false, true, true, true) => pick('┬', '╤', '╥', '╦'),
        (true, false, true, true) => pick('┴', '╧', '╨', '╩'),
        (false, true, false, true) => pick('┌', '╒', '╓', '╔'),
        (false, true, true, false) => pick('┐', '╕', '╖', '╗'),
        (true, false, false, true) => pick('└', '╘', '╙', '╚'),
        (true, false, true, false) => pick('┘', '╛', '╜', '╝'),
        // Pass-throughs and stub ends keep their stroke glyph.
        (true, true, false, false)
        | (true, false, false, false)
        | (false, true, false, false) => {
            if v_double {
                '║'
            } else {
                '│'
            }
        }
        (false, false, true, true)
        | (false, false, true, false)
        | (false, false, false, true) => {
            if h_double {
                '═'
            } else {
                '─'
            }
        }
        // Only air arms remain: hold the crossing open.
        (false, false, false, false) => ' ',
    })
}

/// The composed border lattice for a `rows × columns` table.
#[derive(Debug)]
pub(crate) struct BorderGrid {
    rows: usize,
    columns: usize,
    /// `rows × (columns + 1)` strokes, row-major.
    verticals: Vec<Stroke>,
    /// `(rows + 1) × columns` strokes, lane-major.
    horizontals: Vec<Stroke>,
    /// `(rows + 1) × (columns + 1)` corner glyphs, lane-major.
    corners: Vec<Option<char>>,
    v_fillers: Vec<bool>,
    h_fillers: Vec<bool>,
}

impl BorderGrid {
    /// Compose the registered specifications into one lattice.
    pub(crate) fn compose(
        specs: &[BorderSpec],
        rows: usize,
        columns: usize,
    ) -> Self {
        let mut grid = Self {
            rows,
            columns,
            verticals: vec![Stroke::None; rows * (columns + 1)],
            horizontals: vec![Stroke::None; (rows + 1) * columns],
            corners: vec![None; (rows + 1) * (columns + 1)],
            v_fillers: vec![false; columns + 1],
            h_fillers: vec![false; rows + 1],
        };
        for spec in specs {
            for r in 0..rows {
                for c in 0..=columns {
                    let stroke = spec.vertical_at(r, c);
                    if stroke.exists() {
                        grid.verticals[r * (columns + 1) + c] = stroke;
                    }
                }
            }
            for r in 0..=rows {
                for c in 0..columns {
                    let stroke = spec.horizontal_at(r, c);
                    if stroke.exists() {
                        grid.horizontals[r * columns + c] = stroke;
                    }
                }
            }
        }
        for c in 0..=columns {
            grid.v_fillers[c] =
                (0..rows).any(|r| grid.vertical(r, c).exists());
        }
        for r in 0..=rows {
            grid.h_fillers[r] =
                (0..columns).any(|c| grid.horizontal(r, c).exists());
        }
        grid.resolve_corners();
        grid
    }

    #[inline]
    fn vertical(&self, row: usize, lane: usize) -> Stroke {
        self.verticals[row * (self.columns + 1) + lane]
    }

    #[inline]
    fn horizontal(&self, lane: usize, column: usize) -> Stroke {
        self.horizontals[lane * self.columns + column]
    }

    fn resolve_corners(&mut self) {
        for r in 0..=self.rows {
            for c in 0..=self.columns {
                let above = if r > 0 {
                    self.vertical(r - 1, c)
                } else {
                    Stroke::None
                };
                let below = if r < self.rows {
                    self.vertical(r, c)
                } else {
                    Stroke::None
                };
                let left = if c > 0 {
                    self.horizontal(r, c - 1)
                } else {
                    Stroke::None
                };
                let right = if c < self.columns {
                    self.horizontal(r, c)
                } else {
                    Stroke::None
                };
                self.corners[r * (self.columns + 1) + c] =
                    corner_glyph(above, below, left, right);
            }
        }
    }

    /// The glyph of the vertical edge at row `row`, lane `lane`, if any.
    pub(crate) fn vertical_char(
        &self,
        row: usize,
        lane: usize,
    ) -> Option<char> {
        self.vertical(row, lane).vertical_glyph()
    }

    /// The glyph of the horizontal edge at lane `lane`, column `column`,
    /// if any.
    pub(crate) fn horizontal_char(
        &self,
        lane: usize,
        column: usize,
    ) -> Option<char> {
        self.horizontal(lane, column).horizontal_glyph()
    }

    /// The corner glyph at the crossing of two lanes, if any.
    pub(crate) fn corner_char(
        &self,
        row_lane: usize,
        column_lane: usize,
    ) -> Option<char> {
        self.corners[row_lane * (self.columns + 1) + column_lane]
    }

    /// Whether any glyph exists in the vertical lane.
    #[inline]
    pub(crate) fn v_filler(&self, lane: usize) -> bool {
        self.v_fillers[lane]
    }

    /// Whether any glyph exists in the horizontal lane.
    #[inline]
    pub(crate) fn h_filler(&self, lane: usize) -> bool {
        self.h_fillers[lane]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(
        rect: (usize, usize, usize, usize),
        matches: BorderMatch,
        style: BorderStyle,
        rows: usize,
        columns: usize,
    ) -> BorderSpec {
        BorderSpec::new(
            rect.0, rect.1, rect.2, rect.3, matches, style, rows, columns,
        )
        .unwrap()
    }

    #[test]
    fn test_spec_validation() {
        assert!(BorderSpec::new(
            0,
            0,
            2,
            2,
            BorderMatch::ALL,
            BorderStyle::Thin,
            2,
            2
        )
        .is_ok());
        for (top, left, bottom, right) in [
            (2, 0, 3, 2), // top out of range
            (0, 0, 0, 2), // bottom not below top
            (0, 0, 3, 2), // bottom out of range
            (0, 2, 2, 3), // left out of range
            (0, 1, 2, 1), // right not beyond left
            (0, 0, 2, 3), // right out of range
        ] {
            assert!(matches!(
                BorderSpec::new(
                    top,
                    left,
                    bottom,
                    right,
                    BorderMatch::ALL,
                    BorderStyle::Thin,
                    2,
                    2
                ),
                Err(crate::Error::Dimension { .. })
            ));
        }
    }

    #[test]
    fn test_corner_glyphs_thin() {
        use Stroke::{None as N, Thin as T};
        assert_eq!(corner_glyph(N, T, N, T), Some('┌'));
        assert_eq!(corner_glyph(N, T, T, N), Some('┐'));
        assert_eq!(corner_glyph(T, N, N, T), Some('└'));
        assert_eq!(corner_glyph(T, N, T, N), Some('┘'));
        assert_eq!(corner_glyph(T, T, N, T), Some('├'));
        assert_eq!(corner_glyph(T, T, T, T), Some('┼'));
        assert_eq!(corner_glyph(N, N, N, N), None);
    }

    #[test]
    fn test_corner_glyphs_mixed() {
        use Stroke::{Air, Ascii, Double as D, None as N, Thin as T};
        assert_eq!(corner_glyph(N, D, N, D), Some('╔'));
        assert_eq!(corner_glyph(N, T, N, D), Some('╒'));
        assert_eq!(corner_glyph(N, D, N, T), Some('╓'));
        assert_eq!(corner_glyph(N, D, D, D), Some('╦'));
        assert_eq!(corner_glyph(N, T, D, D), Some('╤'));
        // Disagreeing thin/double arms on one axis resolve to double.
        assert_eq!(corner_glyph(T, D, T, T), Some('╫'));
        assert_eq!(corner_glyph(Ascii, N, T, N), Some('+'));
        assert_eq!(corner_glyph(N, N, Ascii, Ascii), Some('-'));
        assert_eq!(corner_glyph(Air, Air, Air, Air), Some(' '));
        assert_eq!(corner_glyph(Air, N, T, T), Some('─'));
    }

    #[test]
    fn test_outline_composition() {
        let specs = [spec(
            (0, 0, 2, 2),
            BorderMatch::OUTLINE,
            BorderStyle::Thin,
            2,
            2,
        )];
        let grid = BorderGrid::compose(&specs, 2, 2);
        assert!(grid.v_filler(0) && !grid.v_filler(1) && grid.v_filler(2));
        assert!(grid.h_filler(0) && !grid.h_filler(1) && grid.h_filler(2));
        assert_eq!(grid.corner_char(0, 0), Some('┌'));
        assert_eq!(grid.corner_char(0, 2), Some('┐'));
        assert_eq!(grid.corner_char(2, 0), Some('└'));
        assert_eq!(grid.corner_char(2, 2), Some('┘'));
        // The top stroke passes through the unfilled inner lane.
        assert_eq!(grid.corner_char(0, 1), Some('─'));
        assert_eq!(grid.corner_char(1, 1), None);
        assert_eq!(grid.vertical_char(0, 0), Some('│'));
        assert_eq!(grid.vertical_char(1, 1), None);
        assert_eq!(grid.horizontal_char(0, 0), Some('─'));
        assert_eq!(grid.horizontal_char(1, 0), None);
    }

    #[test]
    fn test_full_grid_intersections() {
        let specs = [spec(
            (0, 0, 2, 2),
            BorderMatch::ALL,
            BorderStyle::Thin,
            2,
            2,
        )];
        let grid = BorderGrid::compose(&specs, 2, 2);
        assert_eq!(grid.corner_char(0, 1), Some('┬'));
        assert_eq!(grid.corner_char(1, 0), Some('├'));
        assert_eq!(grid.corner_char(1, 1), Some('┼'));
        assert_eq!(grid.corner_char(1, 2), Some('┤'));
        assert_eq!(grid.corner_char(2, 1), Some('┴'));
    }

    #[test]
    fn test_later_spec_overwrites() {
        let rect = (0, 0, 2, 2);
        let specs = [
            spec(rect, BorderMatch::ALL, BorderStyle::Thin, 2, 2),
            spec(rect, BorderMatch::OUTLINE, BorderStyle::Double, 2, 2),
        ];
        let grid = BorderGrid::compose(&specs, 2, 2);
        // Double outline, thin inner rules; corners recomputed from the
        // effective strokes.
        assert_eq!(grid.corner_char(0, 0), Some('╔'));
        assert_eq!(grid.corner_char(0, 1), Some('╤'));
        assert_eq!(grid.corner_char(1, 0), Some('╟'));
        assert_eq!(grid.corner_char(1, 1), Some('┼'));
        assert_eq!(grid.vertical_char(0, 0), Some('║'));
        assert_eq!(grid.vertical_char(0, 1), Some('│'));
    }

    #[test]
    fn test_none_style_does_not_overwrite() {
        let rect = (0, 0, 2, 2);
        let specs = [
            spec(rect, BorderMatch::ALL, BorderStyle::Thin, 2, 2),
            spec(rect, BorderMatch::ALL, BorderStyle::None, 2, 2),
        ];
        let grid = BorderGrid::compose(&specs, 2, 2);
        assert_eq!(grid.corner_char(0, 0), Some('┌'));
        assert_eq!(grid.vertical_char(0, 1), Some('│'));
    }

    #[test]
    fn test_composition_idempotent() {
        let one = [spec(
            (0, 0, 2, 3),
            BorderMatch::ALL,
            BorderStyle::ThinDouble,
            2,
            3,
        )];
        let twice = [one[0], one[0]];
        let a = BorderGrid::compose(&one, 2, 3);
        let b = BorderGrid::compose(&twice, 2, 3);
        for r in 0..=2 {
            for c in 0..=3 {
                assert_eq!(a.corner_char(r, c), b.corner_char(r, c));
            }
        }
        assert_eq!(a.corner_char(0, 0), Some('╓'));
    }

    #[test]
    fn test_style_names() {
        assert_eq!(
            BorderStyle::from_name("fancy-light"),
            Some(BorderStyle::FancyLight)
        );
        assert_eq!(BorderStyle::from_name("grid"), None);
    }
}
