//! Coordinate generators.

use super::{expect_no_args, GenerateResult};
use jsongen_core::GeneratedValue;
use rand::Rng;

/// `getLatitude()`: uniform in `[-90, 90]` degrees.
pub fn generate_latitude<R: Rng + ?Sized>(rng: &mut R, args: &[String]) -> GenerateResult {
    expect_no_args("getLatitude", args)?;
    Ok(GeneratedValue::Double(rng.gen_range(-90.0..=90.0)))
}

/// `getLongitude()`: uniform in `[-180, 180)` degrees.
pub fn generate_longitude<R: Rng + ?Sized>(rng: &mut R, args: &[String]) -> GenerateResult {
    expect_no_args("getLongitude", args)?;
    Ok(GeneratedValue::Double(rng.gen_range(-180.0..180.0)))
}
