use std::io::Cursor;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::{
    GameError, LARGE_POOL, Prompter, SetupChoice, SourceNumbers, TARGET_MAX, TARGET_MIN, Target,
    draw_numbers, draw_target, pool_multiplicity, validate_large_count,
};

fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_pool_multiplicity() {
    assert_eq!(pool_multiplicity(25), 1);
    assert_eq!(pool_multiplicity(100), 1);
    assert_eq!(pool_multiplicity(1), 2);
    assert_eq!(pool_multiplicity(10), 2);
    assert_eq!(pool_multiplicity(0), 0);
    assert_eq!(pool_multiplicity(11), 0);
    assert_eq!(pool_multiplicity(99), 0);
}

#[test]
fn test_source_numbers_accepts_legal_sets() {
    assert!(SourceNumbers::new([25, 8, 10, 7, 1, 5]).is_ok());
    assert!(SourceNumbers::new([1, 1, 2, 2, 3, 3]).is_ok());
    assert!(SourceNumbers::new([100, 75, 50, 25, 10, 10]).is_ok());
}

#[test]
fn test_source_numbers_rejects_unknown_tile() {
    let result = SourceNumbers::new([25, 8, 10, 7, 1, 11]);
    assert!(matches!(result, Err(GameError::NotInPool(11))));
}

#[test]
fn test_source_numbers_rejects_overused_tile() {
    let result = SourceNumbers::new([25, 25, 10, 7, 1, 5]);
    assert!(matches!(
        result,
        Err(GameError::PoolExhausted {
            value: 25,
            count: 2,
            available: 1
        })
    ));

    let result = SourceNumbers::new([3, 3, 3, 7, 1, 5]);
    assert!(matches!(
        result,
        Err(GameError::PoolExhausted {
            value: 3,
            count: 3,
            ..
        })
    ));
}

#[test]
fn test_source_numbers_from_slice_length() {
    assert!(matches!(
        SourceNumbers::from_slice(&[1, 2, 3]),
        Err(GameError::WrongNumberCount(3))
    ));
    assert!(SourceNumbers::from_slice(&[1, 2, 3, 4, 5, 6]).is_ok());
}

#[test]
fn test_target_bounds() {
    assert!(Target::new(100).is_err());
    assert!(Target::new(1000).is_err());
    assert!(Target::new(-1).is_err());
    assert_eq!(Target::new(101).map(Target::value).ok(), Some(101));
    assert_eq!(Target::new(999).map(Target::value).ok(), Some(999));
}

#[test]
fn test_validate_large_count() {
    assert_eq!(validate_large_count(0).ok(), Some(0));
    assert_eq!(validate_large_count(4).ok(), Some(4));
    assert!(matches!(
        validate_large_count(5),
        Err(GameError::InvalidLargeCount(5))
    ));
    assert!(validate_large_count(-2).is_err());
}

#[test]
fn test_draw_numbers_respects_pools() {
    let mut rng = StdRng::seed_from_u64(7);
    for large in 0..=4 {
        for _ in 0..50 {
            let drawn = draw_numbers(large, &mut rng);
            assert!(drawn.is_ok());
            if let Ok(numbers) = drawn {
                let large_drawn = numbers
                    .values()
                    .iter()
                    .filter(|&&n| LARGE_POOL.contains(&n))
                    .count();
                assert_eq!(large_drawn, large);
            }
        }
    }
}

#[test]
fn test_draw_numbers_rejects_too_many_large() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(matches!(
        draw_numbers(5, &mut rng),
        Err(GameError::InvalidLargeCount(5))
    ));
}

#[test]
fn test_draw_numbers_is_reproducible_with_seed() {
    let first = draw_numbers(2, &mut StdRng::seed_from_u64(42)).ok();
    let second = draw_numbers(2, &mut StdRng::seed_from_u64(42)).ok();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_draw_target_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
        let target = draw_target(&mut rng).value();
        assert!((TARGET_MIN..=TARGET_MAX).contains(&target));
    }
}

#[test]
fn test_prompt_random_setup() {
    let mut prompts = prompter("2\n");
    assert_eq!(
        prompts.choose_setup().ok(),
        Some(SetupChoice::Random { large: 2 })
    );
}

#[test]
fn test_prompt_retries_invalid_large_count() {
    let mut prompts = prompter("7\nlots\n3\n");
    assert_eq!(
        prompts.choose_setup().ok(),
        Some(SetupChoice::Random { large: 3 })
    );
}

#[test]
fn test_prompt_manual_escape() {
    let mut prompts = prompter("-1\n");
    assert_eq!(prompts.choose_setup().ok(), Some(SetupChoice::Manual));
}

#[test]
fn test_prompt_manual_numbers_and_target() {
    let mut prompts = prompter("25\n8\n10\n7\n1\n5\n573\n");
    let numbers = prompts.read_numbers();
    assert!(numbers.is_ok());
    if let Ok(numbers) = numbers {
        assert_eq!(numbers.values(), &[25, 8, 10, 7, 1, 5]);
    }
    assert_eq!(prompts.read_target().map(Target::value).ok(), Some(573));
}

#[test]
fn test_prompt_restarts_illegal_number_set() {
    // first set uses 100 twice, second set is legal
    let mut prompts = prompter("100\n100\n1\n2\n3\n4\nx\n100\n50\n1\n2\n3\n4\n");
    let numbers = prompts.read_numbers();
    assert!(numbers.is_ok());
    if let Ok(numbers) = numbers {
        assert_eq!(numbers.values(), &[100, 50, 1, 2, 3, 4]);
    }
}

#[test]
fn test_prompt_target_retries_out_of_range() {
    let mut prompts = prompter("50\n1200\n250\n");
    assert_eq!(prompts.read_target().map(Target::value).ok(), Some(250));
}

#[test]
fn test_prompt_closed_input() {
    let mut prompts = prompter("9\n");
    let setup = prompts.choose_setup();
    assert!(matches!(setup, Err(GameError::InputClosed)));

    let mut prompts = prompter("");
    assert!(matches!(prompts.read_target(), Err(GameError::InputClosed)));
}
