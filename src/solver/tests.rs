use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::engine::{
    Evaluator, Hit, Operator, SearchMode, SkeletonCatalogue, Token, pair_splits, rank,
};
use crate::game::{MAX_LARGE, SourceNumbers, Target, draw_numbers, draw_target};
use crate::solver::core::first_solution;
use crate::solver::{
    CountdownSolver, Progress, SearchObserver, SearchOutcome, SearchReport, SolverConfig,
    SolverError, WorkerSlot,
};

fn game(numbers: [u64; 6], target: i64) -> Option<(SourceNumbers, Target)> {
    let numbers = SourceNumbers::new(numbers).ok()?;
    Some((numbers, Target::new(target).ok()?))
}

fn run(numbers: [u64; 6], target: i64, config: SolverConfig) -> Option<SearchReport> {
    let (numbers, target) = game(numbers, target)?;
    let solver = CountdownSolver::new(config).ok()?;
    Some(solver.solve(&numbers, target))
}

fn tuned(numbers: [u64; 6], target: i64) -> Option<SearchReport> {
    run(numbers, target, SolverConfig::default())
}

/// The solution evaluates to the target and uses each tile at most as often
/// as it was dealt.
fn assert_sound(report: &SearchReport, numbers: [u64; 6], target: u64) {
    let solution = report.solution();
    assert!(solution.is_some());
    if let Some(solution) = solution {
        assert_eq!(solution.target(), target);
        assert_eq!(solution.expression().evaluate().ok(), Some(target));

        let mut remaining = numbers.to_vec();
        for leaf in solution.expression().leaves() {
            let position = remaining.iter().position(|&n| n == leaf);
            assert!(position.is_some(), "tile {} overused", leaf);
            if let Some(position) = position {
                remaining.swap_remove(position);
            }
        }
    }
}

#[test]
fn test_easy_exact_hit() {
    let numbers = [25, 8, 10, 7, 1, 5];
    let report = tuned(numbers, 573);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_sound(&report, numbers, 573);
        assert!(report.combinations_tried > 0);
    }
}

#[test]
fn test_multiplication_heavy() {
    let numbers = [1, 2, 3, 4, 5, 6];
    let report = tuned(numbers, 720);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_sound(&report, numbers, 720);
    }
}

#[test]
fn test_division_target() {
    let numbers = [100, 50, 25, 7, 3, 2];
    let report = tuned(numbers, 175);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_sound(&report, numbers, 175);
        assert_eq!(
            report.solution().map(ToString::to_string),
            Some("175 = ((((100 / 50) + 25) - 2) * 7)".to_string())
        );
    }
}

#[test]
fn test_subtraction_target() {
    let numbers = [75, 50, 8, 4, 3, 2];
    let report = tuned(numbers, 101);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_sound(&report, numbers, 101);
        assert_eq!(
            report.solution().map(ToString::to_string),
            Some("101 = ((75 + 50) - (8 * 3))".to_string())
        );
    }
}

#[test]
fn test_impossible_target_exhausts() {
    let report = tuned([1, 1, 2, 2, 3, 3], 999);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert!(!report.is_found());
        // 66 arrangements x 15 pair-splits x 24192 skeletons
        assert_eq!(report.combinations_tried, 23_950_080);
    }
}

#[test]
fn test_thorough_finds_what_caps_exclude() {
    // no capped operator bag reaches 576 from these tiles
    let numbers = [2, 2, 3, 3, 4, 4];

    let report = tuned(numbers, 576);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
    }

    let config = SolverConfig {
        mode: SearchMode::Thorough,
        ..SolverConfig::default()
    };
    let report = run(numbers, 576, config);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_sound(&report, numbers, 576);
    }
}

#[test]
fn test_deterministic_across_runs_and_workers() {
    let numbers = [25, 8, 10, 7, 1, 5];
    let mut rendered = Vec::new();

    for workers in [1, 3, 5, 5] {
        let config = SolverConfig {
            workers,
            ..SolverConfig::default()
        };
        let report = run(numbers, 573, config);
        assert!(report.is_some());
        if let Some(report) = report {
            rendered.push(report.solution().map(ToString::to_string));
        }
    }

    assert_eq!(rendered.len(), 4);
    assert!(rendered.iter().all(|r| r.is_some() && *r == rendered[0]));
}

#[test]
fn test_time_limit_respected() {
    let config = SolverConfig {
        time_limit: Duration::from_millis(20),
        mode: SearchMode::Thorough,
        ..SolverConfig::default()
    };
    let report = run([1, 1, 2, 2, 3, 3], 999, config);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_eq!(report.outcome, SearchOutcome::TimedOut);
        assert!(report.elapsed < Duration::from_secs(2));
        assert!(report.combinations_tried < 23_950_080);
    }
}

#[test]
fn test_invalid_config() {
    let config = SolverConfig {
        workers: 0,
        ..SolverConfig::default()
    };
    assert!(matches!(
        CountdownSolver::new(config),
        Err(SolverError::InvalidConfig(_))
    ));

    let config = SolverConfig {
        time_limit: Duration::ZERO,
        ..SolverConfig::default()
    };
    assert!(matches!(
        CountdownSolver::new(config),
        Err(SolverError::InvalidConfig(_))
    ));
}

#[test]
fn test_ranking_follows_mode() {
    let solver = CountdownSolver::new(SolverConfig::default());
    assert!(solver.is_ok());
    if let Ok(solver) = solver {
        assert_eq!(solver.ranking().len(), 22);
        assert_eq!(solver.config().workers, 5);
    }
}

struct Recorder {
    batches: Vec<Progress>,
}

impl SearchObserver for Recorder {
    fn on_batch(&mut self, progress: &Progress) {
        self.batches.push(*progress);
    }
}

#[test]
fn test_observer_sees_every_batch() {
    let Some((numbers, target)) = game([1, 1, 2, 2, 3, 3], 999) else {
        panic!("legal game rejected");
    };
    let solver = CountdownSolver::new(SolverConfig::default());
    assert!(solver.is_ok());
    if let Ok(solver) = solver {
        let mut recorder = Recorder {
            batches: Vec::new(),
        };
        let report = solver.solve_with_observer(&numbers, target, &mut recorder);

        // 15 splits in batches of 5 for each of the 66 arrangements
        assert_eq!(recorder.batches.len(), 66 * 3);
        let batches = &recorder.batches;
        let tried: Vec<u64> = batches.iter().map(|p| p.combinations_tried).collect();
        assert!(tried.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(
            recorder.batches.last().map(|p| p.combinations_tried),
            Some(report.combinations_tried)
        );
        assert_eq!(recorder.batches.last().map(|p| p.multiset_index), Some(21));
    }
}

/// Exhaustive reference: can any sequence of legal steps over `values`
/// produce `target`?
fn reachable(values: &[u64], target: u64) -> bool {
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            let (big, small) = (values[i].max(values[j]), values[i].min(values[j]));

            let mut results = vec![big + small, big * small, big - small];
            if small != 0 && big % small == 0 {
                results.push(big / small);
            }

            for result in results {
                if result == target {
                    return true;
                }
                let mut rest: Vec<u64> = values
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, &v)| v)
                    .collect();
                rest.push(result);
                if reachable(&rest, target) {
                    return true;
                }
            }
        }
    }
    false
}

#[test]
fn test_reachability_reference() {
    assert!(reachable(&[25, 8, 10, 7, 1, 5], 573));
    assert!(reachable(&[75, 50, 8, 4, 3, 2], 101));
    assert!(!reachable(&[1, 1, 2, 2, 3, 3], 999));
}

#[test]
fn test_thorough_finds_every_reachable_target() {
    let config = SolverConfig {
        mode: SearchMode::Thorough,
        ..SolverConfig::default()
    };
    let solver = CountdownSolver::new(config);
    assert!(solver.is_ok());
    let Ok(solver) = solver else { return };

    let mut rng = StdRng::seed_from_u64(2024);
    let mut reachable_games = 0;

    for _ in 0..24 {
        let large = rng.random_range(0..=MAX_LARGE);
        let numbers = draw_numbers(large, &mut rng);
        let target = draw_target(&mut rng);
        assert!(numbers.is_ok());
        let Ok(numbers) = numbers else { continue };

        if !reachable(numbers.values(), target.value()) {
            continue;
        }
        reachable_games += 1;

        let report = solver.solve(&numbers, target);
        assert_sound(&report, *numbers.values(), target.value());
    }

    assert!(reachable_games > 0);
}

#[test]
fn test_descending_leading_pair_needs_mirrored_splits() {
    // 678 = ((100 - (50 / 25)) * 7) - (1 + 7): 100 must be pushed before 50
    let tiles = [50, 25, 100, 1, 7, 7];
    assert!(reachable(&tiles, 678));

    let evaluator = Evaluator::new(678, SearchMode::Thorough.pruning_rules());
    let skeletons = SkeletonCatalogue::global();
    let arrangements: Vec<_> = rank(SearchMode::Thorough)
        .iter()
        .flat_map(|bag| bag.arrangements())
        .collect();
    let canonical_hit = pair_splits(&tiles).par_iter().any(|split| {
        arrangements.iter().any(|arrangement| {
            skeletons.iter().any(|skeleton| {
                let tokens = skeleton.bind(split.numbers(), arrangement.operators());
                evaluator.hit_position(&tokens).is_some()
            })
        })
    });
    assert!(!canonical_hit);

    let report = tuned(tiles, 678);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
    }

    let config = SolverConfig {
        mode: SearchMode::Thorough,
        ..SolverConfig::default()
    };
    let report = run(tiles, 678, config);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_sound(&report, tiles, 678);
    }
}

#[test]
fn test_unreadable_hit_does_not_hide_later_hits() {
    let mut broken = [Token::Number(1); 11];
    broken[0] = Token::Op(Operator::Add);

    let mut tokens = [Token::Number(1); 11];
    tokens[0] = Token::Number(100);
    tokens[1] = Token::Number(75);
    tokens[2] = Token::Op(Operator::Add);

    let slots = vec![
        WorkerSlot {
            tried: 3,
            hit: None,
        },
        WorkerSlot {
            tried: 1,
            hit: Some(Hit::new(broken, 0)),
        },
        WorkerSlot {
            tried: 3,
            hit: Some(Hit::new(tokens, 2)),
        },
    ];

    let solution = first_solution(175, slots);
    assert_eq!(
        solution.map(|s| s.to_string()),
        Some("175 = (100 + 75)".to_string())
    );
    assert!(first_solution(175, Vec::new()).is_none());
}
