//! Generator registry: the static name -> handler dispatch table.

use crate::generators::{geo, list, numeric, person, ArgumentError, GenerateResult};
use crate::invocation::InvocationSpec;
use jsongen_core::GeneratedValue;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Signature shared by every registered generator.
pub type Handler = fn(&mut StdRng, &[String]) -> GenerateResult;

/// Built-in generators, in the order they are listed to users.
const BUILTIN_GENERATORS: &[(&str, Handler)] = &[
    ("getInt", numeric::generate_int),
    ("getDouble", numeric::generate_double),
    ("getEmail", person::generate_email),
    ("getName", person::generate_name),
    ("getLatitude", geo::generate_latitude),
    ("getLongitude", geo::generate_longitude),
    ("getFromList", list::generate_from_list),
];

/// Failure to produce a value from a parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    #[error(transparent)]
    Syntax(#[from] crate::invocation::InvocationSyntaxError),

    #[error("unknown generator '{0}'")]
    UnknownGenerator(String),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

/// Closed table of named generators plus the random source they draw from.
pub struct GeneratorRegistry {
    handlers: HashMap<&'static str, Handler>,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
}

impl GeneratorRegistry {
    /// Create a registry whose RNG is seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a registry drawing from the given RNG.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            handlers: BUILTIN_GENERATORS.iter().copied().collect(),
            rng,
        }
    }

    /// Whether a generator with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered generator names.
    pub fn names(&self) -> Vec<&'static str> {
        BUILTIN_GENERATORS.iter().map(|(name, _)| *name).collect()
    }

    /// Run the named generator with raw arguments.
    pub fn generate(&mut self, name: &str, args: &[String]) -> Result<GeneratedValue, InvocationError> {
        let handler = *self
            .handlers
            .get(name)
            .ok_or_else(|| InvocationError::UnknownGenerator(name.to_string()))?;
        Ok(handler(&mut self.rng, args)?)
    }

    /// Run a parsed invocation.
    pub fn invoke(&mut self, spec: &InvocationSpec) -> Result<GeneratedValue, InvocationError> {
        self.generate(&spec.generator_name, &spec.raw_args)
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.names())
            .finish_non_exhaustive()
    }
}
