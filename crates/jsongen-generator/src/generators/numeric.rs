//! Numeric value generators.

use super::{parse_float_arg, parse_int_arg, ArgumentError, GenerateResult};
use jsongen_core::GeneratedValue;
use rand::Rng;

/// Range used by `getInt()` when no bounds are given.
pub const DEFAULT_INT_MIN: i64 = 0;
pub const DEFAULT_INT_MAX: i64 = 1000;

/// `getInt()` or `getInt(min,max)`.
pub fn generate_int<R: Rng + ?Sized>(rng: &mut R, args: &[String]) -> GenerateResult {
    const NAME: &str = "getInt";

    let (min, max) = match args {
        [] => (DEFAULT_INT_MIN, DEFAULT_INT_MAX),
        [min, max] => (parse_int_arg(NAME, min)?, parse_int_arg(NAME, max)?),
        _ => {
            return Err(ArgumentError::Count {
                generator: NAME,
                expected: "0 or 2",
                found: args.len(),
            })
        }
    };

    if min > max {
        return Err(ArgumentError::InvertedRange {
            generator: NAME,
            min: min.to_string(),
            max: max.to_string(),
        });
    }

    Ok(generate_int_range(rng, min, max))
}

/// `getDouble(min,max)`.
pub fn generate_double<R: Rng + ?Sized>(rng: &mut R, args: &[String]) -> GenerateResult {
    const NAME: &str = "getDouble";

    let [min, max] = args else {
        return Err(ArgumentError::Count {
            generator: NAME,
            expected: "2",
            found: args.len(),
        });
    };
    let min = parse_float_arg(NAME, min)?;
    let max = parse_float_arg(NAME, max)?;

    if min > max {
        return Err(ArgumentError::InvertedRange {
            generator: NAME,
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    if !(max - min).is_finite() {
        return Err(ArgumentError::RangeTooWide {
            generator: NAME,
            min: min.to_string(),
            max: max.to_string(),
        });
    }

    Ok(generate_float_range(rng, min, max))
}

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> GeneratedValue {
    GeneratedValue::Int(rng.gen_range(min..=max))
}

/// Generate a random float in `[min, max)`. An empty range yields `min`.
pub fn generate_float_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> GeneratedValue {
    if min >= max {
        return GeneratedValue::Double(min);
    }
    GeneratedValue::Double(rng.gen_range(min..max))
}
