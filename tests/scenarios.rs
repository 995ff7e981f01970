use passgen::pass::output;
use passgen::{CharacterClass, GenerateError, GenerationRequest, OsSource, SeededSource, generate};

fn classes_in(pass: &str) -> Vec<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| pass.chars().any(|c| class.contains(c)))
        .collect()
}

#[test]
fn lowercase_only_ten() {
    let request = GenerationRequest::none(10).with(CharacterClass::Lowercase, true);
    let pass = generate(&request, &mut OsSource::new()).unwrap();
    assert_eq!(pass.len(), 10);
    assert!(pass.chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn four_chars_one_of_each_class() {
    for seed in 0..50 {
        let pass = generate(&GenerationRequest::all(4), &mut SeededSource::new(seed)).unwrap();
        assert_eq!(pass.len(), 4);
        for class in CharacterClass::ALL {
            let n = pass.chars().filter(|c| class.contains(*c)).count();
            assert_eq!(n, 1, "{pass:?} has {n} {}", class.name());
        }
    }
}

#[test]
fn two_chars_from_all_classes() {
    for seed in 0..50 {
        let pass = generate(&GenerationRequest::all(2), &mut SeededSource::new(seed)).unwrap();
        assert_eq!(pass.len(), 2);
        assert!(pass.chars().all(|c| CharacterClass::of(c).is_some()));
        // Priority order seeds one lowercase and one uppercase.
        assert_eq!(
            classes_in(&pass),
            vec![CharacterClass::Lowercase, CharacterClass::Uppercase]
        );
    }
}

#[test]
fn zero_length_is_invalid_for_any_flags() {
    for request in [
        GenerationRequest::all(0),
        GenerationRequest::none(0),
        GenerationRequest::none(0).with(CharacterClass::Digit, true),
    ] {
        let err = generate(&request, &mut OsSource::new()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidLength));
        assert!(err.is_invalid_request());
    }
}

#[test]
fn no_class_selected_message() {
    let err = generate(&GenerationRequest::none(10), &mut OsSource::new()).unwrap_err();
    assert!(matches!(err, GenerateError::NoClassSelected));
    assert_eq!(
        err.to_string(),
        "At least one character type must be selected."
    );
}

#[test]
fn all_classes_twelve_covers_every_class() {
    let pass = generate(&GenerationRequest::all(12), &mut OsSource::new()).unwrap();
    assert_eq!(pass.len(), 12);
    assert_eq!(classes_in(&pass), CharacterClass::ALL.to_vec());
}

#[test]
fn seeded_runs_are_bit_for_bit_equal() {
    let request = GenerationRequest::all(64).with(CharacterClass::Symbol, false);
    let a = output::to_string(&request, 4, &mut SeededSource::new(2024)).unwrap();
    let b = output::to_string(&request, 4, &mut SeededSource::new(2024)).unwrap();
    assert_eq!(*a, *b);
    assert_eq!(a.lines().count(), 4);
}

#[test]
fn unseeded_runs_differ() {
    let request = GenerationRequest::all(32);
    let a = generate(&request, &mut OsSource::new()).unwrap();
    let b = generate(&request, &mut OsSource::new()).unwrap();
    // 32 * log2(88) bits; a collision means the source is broken.
    assert_ne!(a, b);
}

#[test]
fn long_lengths_have_no_core_limit() {
    let pass = generate(&GenerationRequest::all(4096), &mut SeededSource::new(9)).unwrap();
    assert_eq!(pass.len(), 4096);
}
