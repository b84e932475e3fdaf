use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dice::RandRoller;
use crate::error::Error;
use crate::generator::{
    apply_complexity, build_passphrase, generate_passphrases, generate_with, GenerationRequest,
    DEFAULT_COMPLEX_CHARS, DEFAULT_MIN_CHARS, MIN_CHARS_FLOOR,
};
use crate::test_helpers::{complete_wordlist, stub_wordlist, QueuedRoller};

#[test]
fn known_rolls_produce_a_known_passphrase() {
    let list = stub_wordlist(&[("11111", "able"), ("22222", "baker")]);
    let mut roller = QueuedRoller::new(&["11111", "22222"]);

    // after "able" the accumulated length is 5, and 5 - 1 < 5, so a second
    // word is rolled; after "baker" 11 - 1 >= 5 ends the loop
    let passphrase = build_passphrase(5, &list, &mut roller).unwrap();

    assert_eq!(passphrase, "able baker");
}

#[test]
fn at_least_one_word_even_for_a_zero_minimum() {
    let list = stub_wordlist(&[("11111", "able")]);
    let mut roller = QueuedRoller::new(&["11111"]);

    assert_eq!(build_passphrase(0, &list, &mut roller).unwrap(), "able");
}

#[test]
fn missing_word_fails_the_passphrase() {
    let list = stub_wordlist(&[("11111", "able")]);
    let mut roller = QueuedRoller::new(&["11111", "22222"]);

    match build_passphrase(30, &list, &mut roller) {
        Err(Error::MissingWord(code)) => assert_eq!(code, "22222"),
        Err(other) => panic!("expected MissingWord, got {other}"),
        Ok(p) => panic!("expected an error, got {p:?}"),
    }
}

#[test]
fn built_passphrases_reach_the_minimum() {
    let list = complete_wordlist();
    let mut roller = RandRoller::new();

    for min_chars in [MIN_CHARS_FLOOR, DEFAULT_MIN_CHARS] {
        for _ in 0..1000 {
            let passphrase = build_passphrase(min_chars, &list, &mut roller).unwrap();
            assert!(passphrase.len() >= min_chars);
            assert!(!passphrase.starts_with(' '));
            assert!(!passphrase.ends_with(' '));
        }
    }
}

#[test]
fn bad_requests_are_rejected_before_any_roll() {
    assert!(matches!(
        GenerationRequest::new(11, 1, false, DEFAULT_COMPLEX_CHARS),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(matches!(
        GenerationRequest::new(MIN_CHARS_FLOOR, 0, false, DEFAULT_COMPLEX_CHARS),
        Err(Error::InvalidConfiguration(_))
    ));
    // an empty replacement set only matters in complex mode
    assert!(matches!(
        GenerationRequest::new(MIN_CHARS_FLOOR, 1, true, ""),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(GenerationRequest::new(MIN_CHARS_FLOOR, 1, false, "").is_ok());
}

#[test]
fn batch_has_exactly_the_requested_quantity() {
    let list = complete_wordlist();

    for quantity in [1, 2, 7] {
        let request =
            GenerationRequest::new(MIN_CHARS_FLOOR, quantity, false, DEFAULT_COMPLEX_CHARS)
                .unwrap();
        let batch = generate_passphrases(&request, &list).unwrap();

        assert_eq!(batch.len(), quantity);
        for passphrase in &batch {
            assert!(passphrase.len() >= MIN_CHARS_FLOOR);
        }
    }
}

#[test]
fn batch_aborts_on_the_first_error() {
    // the only word is exactly the floor, so every passphrase is one word;
    // the second one rolls into the hole
    let list = stub_wordlist(&[("11111", "ablebakercha")]);
    let mut roller = QueuedRoller::new(&["11111", "22222"]);
    let request = GenerationRequest::new(12, 2, false, DEFAULT_COMPLEX_CHARS).unwrap();

    let result = generate_with(&request, &list, &mut roller, &mut rand::thread_rng());

    assert!(matches!(result, Err(Error::MissingWord(_))));
}

#[test]
fn complex_output_has_no_spaces_and_at_least_one_digit() {
    let complex_chars: Vec<char> = DEFAULT_COMPLEX_CHARS.chars().collect();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..1000 {
        let out = apply_complexity("able baker charlie", &complex_chars, &mut rng).unwrap();

        assert!(!out.contains(' '));
        assert!(out.chars().any(|c| c.is_ascii_digit()));
        // every step replaces characters one for one
        assert_eq!(out.chars().count(), "able baker charlie".chars().count());
    }
}

#[test]
fn complex_mode_title_cases_every_word() {
    // a single replacement character makes the delimiter draws deterministic
    let complex_chars = vec!['!'];
    let mut rng = StdRng::seed_from_u64(1);

    let out = apply_complexity("able bAKer", &complex_chars, &mut rng).unwrap();

    let expected = "Able!Baker";
    let diffs: Vec<(char, char)> = out
        .chars()
        .zip(expected.chars())
        .filter(|(got, want)| got != want)
        .collect();
    // the only deviation allowed is the injected digit
    assert!(diffs.len() <= 1, "{out:?} diverges from {expected:?}");
    if let Some((injected, _)) = diffs.first() {
        assert!(injected.is_ascii_digit());
    }
}

#[test]
fn digit_injection_never_hits_the_first_character() {
    let complex_chars = vec!['!'];
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..500 {
        let out = apply_complexity("zine zone", &complex_chars, &mut rng).unwrap();
        assert!(out.starts_with('Z'));
    }
}

#[test]
fn empty_complexity_set_is_an_error() {
    let mut rng = StdRng::seed_from_u64(0);

    assert!(apply_complexity("able baker", &[], &mut rng).is_err());
}

#[test]
fn complex_batches_keep_all_guarantees() {
    let list = complete_wordlist();
    let request = GenerationRequest::new(19, 25, true, DEFAULT_COMPLEX_CHARS).unwrap();

    let batch = generate_passphrases(&request, &list).unwrap();

    assert_eq!(batch.len(), 25);
    for passphrase in batch {
        assert!(passphrase.len() >= 19);
        assert!(!passphrase.contains(' '));
        assert!(passphrase.chars().any(|c| c.is_ascii_digit()));
    }
}
