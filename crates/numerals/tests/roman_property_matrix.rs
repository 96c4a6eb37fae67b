//! Round-trip and rejection laws over random input.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roman_numerals::{from_roman, parse_roman, to_roman, Reader, RomanError};

fn flip_case(s: &str, rng: &mut StdRng) -> String {
    s.chars()
        .map(|c| {
            if rng.gen_bool(0.5) {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

#[test]
fn seeded_mixed_case_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x0005_eed0_0000_3999);
    for _ in 0..2000 {
        let n = rng.gen_range(1..=3999);
        let numeral = flip_case(&to_roman(n).unwrap(), &mut rng);
        assert_eq!(parse_roman(&numeral), Ok(n), "{numeral}");
    }
}

#[test]
fn seeded_digit_run_in_noise() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let n = rng.gen_range(1..=3999);
        let numeral = to_roman(n).unwrap();
        let text = format!("{numeral}#{}", rng.gen_range(0..1000));
        let mut reader = Reader::new(text.as_bytes());
        assert_eq!(from_roman(&mut reader), Ok(n));
        assert_eq!(reader.x, numeral.len());
        assert_eq!(reader.peek(), Some(b'#'));
    }
}

proptest! {
    #[test]
    fn round_trip_law(n in 1i32..=3999) {
        let numeral = to_roman(n).unwrap();
        prop_assert_eq!(parse_roman(&numeral), Ok(n));
    }

    #[test]
    fn out_of_range_law(n in prop_oneof![i32::MIN..=0i32, 4000i32..=i32::MAX]) {
        prop_assert_eq!(to_roman(n), Err(RomanError::OutOfRange(n)));
    }

    #[test]
    fn decoder_accepts_only_what_encoder_produces(s in "[IVXLCDMivxlcdm]{1,15}") {
        match parse_roman(&s) {
            Ok(n) => prop_assert!(to_roman(n).unwrap().eq_ignore_ascii_case(&s)),
            Err(err) => prop_assert_eq!(err, RomanError::InvalidNumeral),
        }
    }

    #[test]
    fn cursor_always_skips_the_whole_digit_run(s in "[IVXLCDMivxlcdm]{0,20}", tail in "[^IVXLCDMivxlcdm]{0,4}") {
        let text = format!("{s}{tail}");
        let mut reader = Reader::new(text.as_bytes());
        let _ = from_roman(&mut reader);
        prop_assert_eq!(reader.x, s.len());
    }
}
