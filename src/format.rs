//! Converting cell values into pre-wrap lines.

use std::fmt::Display;

/// Convert a cell value into its ordered pre-wrap lines.
pub trait Formatter<V> {
    /// Returned lines must not contain `'\n'`.
    fn format(&self, value: &V) -> Vec<String>;
}

/// Any suitable closure is a formatter.
impl<V, F> Formatter<V> for F
where
    F: Fn(&V) -> Vec<String>,
{
    fn format(&self, value: &V) -> Vec<String> {
        self(value)
    }
}

/// The default formatter: `Display` the value and split on newlines. An
/// empty rendition yields no lines at all.
#[derive(Debug, Clone, Copy)]
pub struct DisplayFormatter;

impl<V: Display> Formatter<V> for DisplayFormatter {
    fn format(&self, value: &V) -> Vec<String> {
        let text = value.to_string();
        if text.is_empty() {
            vec![]
        } else {
            text.split('\n').map(ToOwned::to_owned).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formatter() {
        let f = DisplayFormatter;
        assert_eq!(Formatter::<i32>::format(&f, &12345), vec!["12345"]);
        assert_eq!(f.format(&"one two".to_string()), vec!["one two"]);
        assert_eq!(
            f.format(&"a\n\nb".to_string()),
            vec!["a", "", "b"]
        );
        assert_eq!(f.format(&String::new()), Vec::<String>::new());
    }

    #[test]
    fn test_closure_formatter() {
        let upper = |v: &String| vec![v.to_uppercase()];
        assert_eq!(upper.format(&"abc".to_string()), vec!["ABC"]);
    }
}
