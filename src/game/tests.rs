use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::constants::{LARGE_CARDS, SMALL_CARDS};
use crate::game::{Draw, DrawConfig, DrawError, TrialStats, draw, run_trials};
use crate::solver::{ExpressionSolver, SolverConfig};

fn is_sub_multiset(hand: &[u64], pool: &[u64]) -> bool {
    let mut available = pool.to_vec();
    hand.iter().all(|card| match available.iter().position(|c| c == card) {
        Some(pos) => {
            available.swap_remove(pos);
            true
        }
        None => false,
    })
}

#[test]
fn test_default_draw_shape() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = DrawConfig::default();
    let pool: Vec<u64> = LARGE_CARDS.iter().chain(SMALL_CARDS.iter()).copied().collect();

    for _ in 0..50 {
        let result = draw(&config, &mut rng);
        assert!(result.is_ok());
        if let Ok(game) = result {
            assert_eq!(game.cards.len(), 6);
            assert!((100..=999).contains(&game.target));
            assert!(is_sub_multiset(&game.cards, &pool), "{:?}", game.cards);
        }
    }
}

#[test]
fn test_draw_with_large_cards() {
    let mut rng = StdRng::seed_from_u64(11);
    let result = DrawConfig::with_large(2).and_then(|config| draw(&config, &mut rng));
    assert!(result.is_ok());
    if let Ok(game) = result {
        let large = game.cards.iter().filter(|c| LARGE_CARDS.contains(*c)).count();
        assert_eq!(large, 2);
        assert_eq!(game.cards.len(), 6);
    }

    assert_eq!(
        DrawConfig::with_large(5),
        Err(DrawError::TooManyLarge {
            requested: 5,
            available: 4
        })
    );
}

#[test]
fn test_duplicate_faces_are_drawn_by_position() {
    let mut rng = StdRng::seed_from_u64(3);
    let config = DrawConfig::from_pool(vec![5, 5, 5], 3);
    assert_eq!(
        draw(&config, &mut rng).map(|game| game.cards),
        Ok(vec![5, 5, 5])
    );
}

#[test]
fn test_draw_is_reproducible() {
    let config = DrawConfig::default();
    let first = draw(&config, &mut StdRng::seed_from_u64(42));
    let second = draw(&config, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
}

#[test]
fn test_invalid_draw_configs() {
    let mut rng = StdRng::seed_from_u64(1);
    let too_small = DrawConfig::from_pool(vec![1, 2], 3);
    assert_eq!(
        draw(&too_small, &mut rng),
        Err(DrawError::PoolTooSmall { pool: 2, hand: 3 })
    );

    let empty_range = DrawConfig::default().with_target_range(10, 5);
    assert_eq!(
        draw(&empty_range, &mut rng),
        Err(DrawError::EmptyTargetRange { min: 10, max: 5 })
    );
}

#[test]
fn test_draw_display() {
    let game = Draw {
        target: 383,
        cards: vec![1, 3, 7, 7, 9, 25],
    };
    assert_eq!(game.to_string(), "Target 383 from 1 3 7 7 9 25");
}

#[test]
fn test_trial_stats_record() {
    let mut stats = TrialStats::default();
    assert_eq!(stats.success_rate(), 0.0);
    for distance in [0, 0, 3, 8, 40] {
        stats.record(distance);
    }
    assert_eq!(stats.trials, 5);
    assert_eq!(stats.exact, 2);
    assert_eq!(stats.within_five, 3);
    assert_eq!(stats.within_ten, 4);
    assert!((stats.success_rate() - 0.4).abs() < 1e-9);
    assert!((stats.mean_distance() - 10.2).abs() < 1e-9);
}

#[test]
fn test_run_trials_small_hands() {
    // The whole pool is dealt, so every target is a single card
    let config = DrawConfig::from_pool(vec![1, 2, 3, 4, 5, 6], 6).with_target_range(1, 6);
    let solver = ExpressionSolver::default();
    let mut rng = StdRng::seed_from_u64(5);

    let result = run_trials(&solver, &config, 20, &mut rng);
    assert!(result.is_ok());
    if let Ok(stats) = result {
        assert_eq!(stats.trials, 20);
        assert_eq!(stats.exact, 20);
        assert_eq!(stats.success_rate(), 1.0);
    }
}

#[test]
fn test_run_trials_is_reproducible() {
    let config = DrawConfig::from_pool(vec![1, 2, 3, 4, 25, 50, 75, 100], 4);
    let solver = ExpressionSolver::new(SolverConfig {
        parallel: false,
        ..SolverConfig::default()
    });

    let first = run_trials(&solver, &config, 10, &mut StdRng::seed_from_u64(9));
    let second = run_trials(&solver, &config, 10, &mut StdRng::seed_from_u64(9));
    assert!(first.is_ok());
    assert_eq!(first, second);
}
