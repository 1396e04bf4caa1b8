use crate::iterator::{Combinations, binomial};

#[test]
fn test_combinations_lexicographic_order() {
    let subsets: Vec<_> = Combinations::new(4, 2).collect();
    assert_eq!(
        subsets,
        vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
        ]
    );
}

#[test]
fn test_combinations_counts_match_binomial() {
    for n in 0..=7 {
        for k in 0..=n {
            let count = Combinations::new(n, k).count() as u64;
            assert_eq!(count, binomial(n, k), "C({}, {})", n, k);
        }
    }
}

#[test]
fn test_combinations_edge_cases() {
    let empty_set: Vec<_> = Combinations::new(3, 0).collect();
    assert_eq!(empty_set, vec![Vec::<usize>::new()]);

    let full: Vec<_> = Combinations::new(3, 3).collect();
    assert_eq!(full, vec![vec![0, 1, 2]]);

    assert_eq!(Combinations::new(2, 3).next(), None);
}

#[test]
fn test_combinations_stay_exhausted() {
    let mut it = Combinations::new(2, 1);
    assert_eq!(it.next(), Some(vec![0]));
    assert_eq!(it.next(), Some(vec![1]));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn test_binomial_values() {
    assert_eq!(binomial(6, 3), 20);
    assert_eq!(binomial(24, 6), 134_596);
    assert_eq!(binomial(5, 7), 0);
    assert_eq!(binomial(0, 0), 1);
}
