//! Splitting pre-wrap lines into exactly-width cell lines.

use crate::width::Measure;

/// Split pre-wrap lines into lines of exactly `width` cells.
pub trait TextWrapper {
    /// Every returned line must have visible width exactly `width` and
    /// contain no newline.
    fn wrap(
        &self,
        lines: &[String],
        width: usize,
        measure: Measure,
    ) -> Vec<String>;
}

/// Any suitable closure is a wrapper.
impl<F> TextWrapper for F
where
    F: Fn(&[String], usize, Measure) -> Vec<String>,
{
    fn wrap(
        &self,
        lines: &[String],
        width: usize,
        measure: Measure,
    ) -> Vec<String> {
        self(lines, width, measure)
    }
}

/// Wrapping options shared by the built-in wrappers: greedy packing on
/// ASCII spaces, over-long words hard-broken at the column boundary.
fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .word_splitter(textwrap::WordSplitter::NoHyphenation)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
        .break_words(true)
}

/// The default wrapper. Each pre-wrap line is its own paragraph, so
/// embedded-newline segmentation survives wrapping; trailing space runs
/// are consumed at line breaks and every emitted line is right-padded to
/// the column width.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterTextWrapper;

impl TextWrapper for DelimiterTextWrapper {
    fn wrap(
        &self,
        lines: &[String],
        width: usize,
        measure: Measure,
    ) -> Vec<String> {
        if width == 0 {
            return lines.iter().map(|_| String::new()).collect();
        }
        let opts = wrap_options(width);
        let mut out = vec![];
        for line in lines {
            for wrapped in textwrap::wrap(line, &opts) {
                let mut wrapped = wrapped.into_owned();
                measure.pad(&mut wrapped, width);
                out.push(wrapped);
            }
        }
        out
    }
}

/// Wrapper for mapping-like cells. Each pre-wrap line is one `key=value`
/// entry; keys are right-justified so the `=` signs line up, and entries
/// overflowing the column continue on lines indented one cell past the
/// `=`. Lines without a `=` fall back to plain delimiter wrapping.
#[derive(Debug, Clone, Copy)]
pub struct KeyValueTextWrapper;

impl TextWrapper for KeyValueTextWrapper {
    fn wrap(
        &self,
        lines: &[String],
        width: usize,
        measure: Measure,
    ) -> Vec<String> {
        if width == 0 {
            return lines.iter().map(|_| String::new()).collect();
        }
        let key_width = lines
            .iter()
            .filter_map(|l| l.split_once('=').map(|(k, _)| measure.line(k)))
            .max()
            .unwrap_or(0)
            .min(width.saturating_sub(1));
        let indent = " ".repeat((key_width + 1).min(width - 1));
        let opts = wrap_options(width).subsequent_indent(&indent);
        let mut out = vec![];
        for line in lines {
            let entry = match line.split_once('=') {
                Some((key, value)) => {
                    let mut entry = " "
                        .repeat(key_width.saturating_sub(measure.line(key)));
                    entry.push_str(key);
                    entry.push('=');
                    entry.push_str(value);
                    entry
                }
                None => line.clone(),
            };
            for wrapped in textwrap::wrap(&entry, &opts) {
                let mut wrapped = wrapped.into_owned();
                measure.pad(&mut wrapped, width);
                out.push(wrapped);
            }
        }
        out
    }
}
