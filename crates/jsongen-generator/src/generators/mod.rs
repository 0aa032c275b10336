//! Individual value generators.
//!
//! Every generator has the same shape: it receives the registry's RNG and the
//! raw argument strings of its invocation, interprets the arguments itself,
//! and returns one [`GeneratedValue`] or an [`ArgumentError`].

pub mod geo;
pub mod list;
pub mod numeric;
pub mod person;

use jsongen_core::GeneratedValue;

/// Result of a single generator call.
pub type GenerateResult = Result<GeneratedValue, ArgumentError>;

/// Wrong number or kind of arguments for a generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("{generator} expects {expected} argument(s), got {found}")]
    Count {
        generator: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("{generator}: '{value}' is not an integer")]
    NotInteger {
        generator: &'static str,
        value: String,
    },

    #[error("{generator}: '{value}' is not a finite number")]
    NotNumber {
        generator: &'static str,
        value: String,
    },

    #[error("{generator}: min {min} is greater than max {max}")]
    InvertedRange {
        generator: &'static str,
        min: String,
        max: String,
    },

    #[error("{generator}: range [{min}, {max}) is too wide to sample")]
    RangeTooWide {
        generator: &'static str,
        min: String,
        max: String,
    },
}

/// Reject any argument for generators that take none.
pub(crate) fn expect_no_args(generator: &'static str, args: &[String]) -> Result<(), ArgumentError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ArgumentError::Count {
            generator,
            expected: "no",
            found: args.len(),
        })
    }
}

/// Parse an integer bound, ignoring surrounding whitespace.
pub(crate) fn parse_int_arg(generator: &'static str, arg: &str) -> Result<i64, ArgumentError> {
    arg.trim().parse().map_err(|_| ArgumentError::NotInteger {
        generator,
        value: arg.to_string(),
    })
}

/// Parse a finite float bound, ignoring surrounding whitespace.
pub(crate) fn parse_float_arg(generator: &'static str, arg: &str) -> Result<f64, ArgumentError> {
    arg.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ArgumentError::NotNumber {
            generator,
            value: arg.to_string(),
        })
}
