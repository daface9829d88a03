//! Human-readable booking transaction codes.
//!
//! A code is the fixed `SHUJIA` prefix followed by four digits, giving a
//! 9000-value space. Candidates are random; uniqueness is owned by the
//! storage layer (unique index on `booking_trx_id`) and the bounded
//! generate-and-insert retry loop in [`super::bookings`].

use rand::Rng;

pub const CODE_PREFIX: &str = "SHUJIA";
pub const CODE_MIN: u16 = 1000;
pub const CODE_MAX: u16 = 9999;

/// Produce a random candidate code.
pub fn random_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", CODE_PREFIX, rng.gen_range(CODE_MIN..=CODE_MAX))
}

/// Whether `code` has the `SHUJIA` + 4-digit shape.
pub fn is_well_formed(code: &str) -> bool {
    code.strip_prefix(CODE_PREFIX)
        .filter(|digits| digits.len() == 4)
        .and_then(|digits| digits.parse::<u16>().ok())
        .is_some_and(|n| (CODE_MIN..=CODE_MAX).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_are_well_formed() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let code = random_code(&mut rng);
            assert!(is_well_formed(&code), "malformed code: {}", code);
        }
    }

    #[test]
    fn well_formed_accepts_the_full_range() {
        assert!(is_well_formed("SHUJIA1000"));
        assert!(is_well_formed("SHUJIA9999"));
    }

    #[test]
    fn well_formed_rejects_bad_shapes() {
        assert!(!is_well_formed("SHUJIA999"));
        assert!(!is_well_formed("SHUJIA10000"));
        assert!(!is_well_formed("SHUJIA0999"));
        assert!(!is_well_formed("shujia1234"));
        assert!(!is_well_formed("SHUJIAabcd"));
        assert!(!is_well_formed("1234"));
        assert!(!is_well_formed(""));
    }
}
