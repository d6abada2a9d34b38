//! Parse-back oracle used to check conversions and to build the corpus.

/// String-to-double parser that tolerates trailing characters.
///
/// Returns the parsed value and the number of bytes consumed. Text that does
/// not start with a number yields `(0.0, 0)` rather than an error; callers
/// compare the consumed count against the text length to detect junk.
pub trait ParseBack {
    fn parse_back(&self, text: &str) -> (f64, usize);
}

/// Correctly rounded parser backed by `lexical-core`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexicalParser;

impl ParseBack for LexicalParser {
    fn parse_back(&self, text: &str) -> (f64, usize) {
        match lexical_core::parse_partial::<f64>(text.as_bytes()) {
            Ok((value, consumed)) => (value, consumed),
            Err(_) => (0.0, 0),
        }
    }
}
