//! Pick-from-list generator.

use super::{ArgumentError, GenerateResult};
use jsongen_core::GeneratedValue;
use rand::Rng;

/// `getFromList(a,b,...)`: one of the arguments, verbatim.
pub fn generate_from_list<R: Rng + ?Sized>(rng: &mut R, args: &[String]) -> GenerateResult {
    if args.is_empty() {
        return Err(ArgumentError::Count {
            generator: "getFromList",
            expected: "at least 1",
            found: 0,
        });
    }
    let idx = rng.gen_range(0..args.len());
    Ok(GeneratedValue::Text(args[idx].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_picks_every_item_eventually() {
        let mut rng = StdRng::seed_from_u64(42);
        let items: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let value = generate_from_list(&mut rng, &items).unwrap();
            let value = value.as_str().unwrap().to_string();
            assert!(items.contains(&value));
            seen.insert(value);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_items_kept_verbatim() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![" padded ".to_string()];

        assert_eq!(
            generate_from_list(&mut rng, &items),
            Ok(GeneratedValue::Text(" padded ".to_string()))
        );
    }

    #[test]
    fn test_empty_list_rejected() {
        let mut rng = StdRng::seed_from_u64(42);

        assert!(matches!(
            generate_from_list(&mut rng, &[]),
            Err(ArgumentError::Count { found: 0, .. })
        ));
    }
}
