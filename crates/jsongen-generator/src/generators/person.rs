//! Personal data generators backed by the `fake` crate.

use super::{expect_no_args, GenerateResult};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use jsongen_core::GeneratedValue;
use rand::Rng;

/// `getEmail()`: a random address on a reserved example domain.
pub fn generate_email<R: Rng + ?Sized>(rng: &mut R, args: &[String]) -> GenerateResult {
    expect_no_args("getEmail", args)?;
    Ok(GeneratedValue::Text(SafeEmail().fake_with_rng::<String, _>(rng)))
}

/// `getName()`: a random full personal name.
pub fn generate_name<R: Rng + ?Sized>(rng: &mut R, args: &[String]) -> GenerateResult {
    expect_no_args("getName", args)?;
    Ok(GeneratedValue::Text(Name().fake_with_rng::<String, _>(rng)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::ArgumentError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let email = generate_email(&mut rng, &[]).unwrap();
            let email = email.as_str().unwrap();
            let (local, domain) = email.split_once('@').expect("email has '@'");
            assert!(!local.is_empty());
            assert!(domain.contains('.'));
            assert!(!email.contains(char::is_whitespace));
        }
    }

    #[test]
    fn test_name_not_empty() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let name = generate_name(&mut rng, &[]).unwrap();
            assert!(!name.as_str().unwrap().trim().is_empty());
        }
    }

    #[test]
    fn test_seeded_names_repeat() {
        let mut rng1 = StdRng::seed_from_u64(9);
        let mut rng2 = StdRng::seed_from_u64(9);

        assert_eq!(
            generate_name(&mut rng1, &[]).unwrap(),
            generate_name(&mut rng2, &[]).unwrap()
        );
    }

    #[test]
    fn test_person_generators_reject_arguments() {
        let mut rng = StdRng::seed_from_u64(42);
        let args = vec!["x".to_string()];

        assert!(matches!(
            generate_email(&mut rng, &args),
            Err(ArgumentError::Count { .. })
        ));
        assert!(matches!(
            generate_name(&mut rng, &args),
            Err(ArgumentError::Count { .. })
        ));
    }
}
