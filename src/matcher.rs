//! Cell selection predicates for pipeline rules.

use crate::model::TableModel;
use std::ops::Range;

/// Predicate deciding which cells a pipeline rule applies to.
pub trait CellMatcher<M: TableModel> {
    fn matches(&self, row: usize, column: usize, model: &M) -> bool;
}

/// Any suitable closure is a matcher.
impl<M, F> CellMatcher<M> for F
where
    M: TableModel,
    F: Fn(usize, usize, &M) -> bool,
{
    fn matches(&self, row: usize, column: usize, model: &M) -> bool {
        self(row, column, model)
    }
}

/// Match every cell.
pub fn table<M: TableModel>() -> impl CellMatcher<M> {
    |_row: usize, _column: usize, _model: &M| true
}

/// Match every cell of one row.
pub fn row<M: TableModel>(row: usize) -> impl CellMatcher<M> {
    move |r: usize, _c: usize, _model: &M| r == row
}

/// Match every cell of one column.
pub fn column<M: TableModel>(column: usize) -> impl CellMatcher<M> {
    move |_r: usize, c: usize, _model: &M| c == column
}

/// Match a single cell.
pub fn cell<M: TableModel>(row: usize, column: usize) -> impl CellMatcher<M> {
    move |r: usize, c: usize, _model: &M| r == row && c == column
}

/// Match every cell within a row range.
pub fn rows<M: TableModel>(rows: Range<usize>) -> impl CellMatcher<M> {
    move |r: usize, _c: usize, _model: &M| rows.contains(&r)
}

/// Match every cell within a column range.
pub fn columns<M: TableModel>(columns: Range<usize>) -> impl CellMatcher<M> {
    move |_r: usize, c: usize, _model: &M| columns.contains(&c)
}

/// Match cells whose value satisfies a predicate.
pub fn on_value<M, P>(predicate: P) -> impl CellMatcher<M>
where
    M: TableModel,
    P: Fn(&M::Value) -> bool,
{
    move |r: usize, c: usize, model: &M| predicate(model.value(r, c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GridModel;

    fn model() -> GridModel<&'static str> {
        GridModel::new(vec!["a", "b", "c", "d", "e", "f"], 3, 2).unwrap()
    }

    #[test]
    fn test_structural_matchers() {
        let m = model();
        assert!(table().matches(2, 1, &m));
        assert!(row(1).matches(1, 0, &m));
        assert!(!row(1).matches(2, 0, &m));
        assert!(column(0).matches(2, 0, &m));
        assert!(!column(0).matches(2, 1, &m));
        assert!(cell(1, 1).matches(1, 1, &m));
        assert!(!cell(1, 1).matches(1, 0, &m));
        assert!(rows(1..3).matches(2, 0, &m));
        assert!(!rows(1..3).matches(0, 0, &m));
        assert!(columns(0..1).matches(1, 0, &m));
        assert!(!columns(0..1).matches(1, 1, &m));
    }

    #[test]
    fn test_value_matcher() {
        let m = model();
        let vowels = on_value(|v: &&str| matches!(*v, "a" | "e"));
        assert!(vowels.matches(0, 0, &m));
        assert!(vowels.matches(2, 0, &m));
        assert!(!vowels.matches(0, 1, &m));
    }
}
