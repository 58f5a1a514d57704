//! Parse façade over the external grammar front-end
//!
//! The tokenizer and grammar live outside this crate behind the [`Parser`]
//! trait. The façade converts the front-end's failure into a plain value:
//! callers always get a usable selector (`none` on failure) plus the
//! rejection message, and the error never propagates further.

use crate::ast::{none, Selector};
use crate::context::Context;
use crate::error::ParseError;

/// External grammar front-end seam
///
/// Implementations turn selection text into a selector tree, consulting
/// the keyword table and the named-selector registry while building it.
pub trait Parser {
    /// Parse `input` into a selector tree.
    fn parse(&self, input: &str, ctx: &Context) -> Result<Selector, ParseError>;
}

/// Outcome of running selection text through the grammar front-end
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The parsed tree, or the `none` selector when parsing failed
    pub selector: Selector,
    /// The front-end's message when it rejected the input
    pub error: Option<String>,
}

impl Parsed {
    /// Check if parsing succeeded.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a result, keeping only the message on failure.
    pub fn into_result(self) -> Result<Selector, String> {
        match self.error {
            Some(message) => Err(message),
            Option::None => Ok(self.selector),
        }
    }
}

/// Parse selection text, recovering front-end failures into a value.
pub fn parse<P: Parser + ?Sized>(parser: &P, input: &str, ctx: &Context) -> Parsed {
    match parser.parse(input, ctx) {
        Ok(selector) => Parsed {
            selector,
            error: Option::None,
        },
        Err(err) => Parsed {
            selector: none(),
            error: Some(err.message),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::serial;
    use crate::pattern::Range;

    /// Grammar stub: one known-good input, everything else rejected.
    struct StubParser;

    impl Parser for StubParser {
        fn parse(&self, input: &str, _ctx: &Context) -> Result<Selector, ParseError> {
            if input == "correctSelString" {
                Ok(serial(Range::new(1, 10)))
            } else {
                Err(ParseError::new("errorMessage"))
            }
        }
    }

    #[test]
    fn test_parse_success() {
        let ctx = Context::new();
        let parsed = parse(&StubParser, "correctSelString", &ctx);
        assert_eq!(parsed.selector, serial(Range::new(1, 10)));
        assert_eq!(parsed.error, Option::None);
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_parse_failure_recovers_to_none() {
        let ctx = Context::new();
        let parsed = parse(&StubParser, "incorrectSelString", &ctx);
        assert_eq!(parsed.selector, none());
        assert_eq!(parsed.error.as_deref(), Some("errorMessage"));
        assert!(!parsed.is_ok());
    }

    #[test]
    fn test_into_result() {
        let ctx = Context::new();
        assert_eq!(
            parse(&StubParser, "correctSelString", &ctx).into_result(),
            Ok(serial(Range::new(1, 10)))
        );
        assert_eq!(
            parse(&StubParser, "garbage", &ctx).into_result(),
            Err("errorMessage".to_string())
        );
    }
}
