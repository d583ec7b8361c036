use helper::{
    is_permutation, is_stable, random_inputs, strategies, tagged, Tagged, SAMPLE, SAMPLE_SORTED,
};
use sort_strategy::{
    is_sorted,
    strategy::{bubble, merge, quick},
    Algorithm, SortStrategy,
};


#[test]
fn every_strategy_sorts_the_sample() {
    for strategy in strategies() {
        assert_eq!(strategy.sort(&SAMPLE), SAMPLE_SORTED, "{}", strategy.name());
    }
}

#[test]
fn output_is_a_sorted_permutation() {
    for input in random_inputs(200, 64, 42) {
        for strategy in strategies() {
            let output = strategy.sort(&input);
            assert!(is_sorted(&output), "{}: {:?}", strategy.name(), input);
            assert!(is_permutation(&input, &output), "{}: {:?}", strategy.name(), input);
        }
    }
}

#[test]
fn sorting_twice_changes_nothing() {
    for input in random_inputs(50, 40, 7) {
        for strategy in strategies() {
            let once = strategy.sort(&input);
            assert_eq!(strategy.sort(&once), once, "{}", strategy.name());
        }
    }
}

#[test]
fn strategies_agree_with_each_other_and_std() {
    for input in random_inputs(100, 100, 1234) {
        let mut expected = input.clone();
        expected.sort();
        for strategy in strategies() {
            assert_eq!(strategy.sort(&input), expected, "{}", strategy.name());
        }
    }
}

#[test]
fn empty_and_singleton_inputs() {
    for strategy in strategies() {
        assert_eq!(strategy.sort(&[]), Vec::<i64>::new());
        assert_eq!(strategy.sort(&[42]), vec![42]);
    }
}

#[test]
fn already_sorted_input_is_unchanged() {
    for strategy in strategies() {
        assert_eq!(strategy.sort(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn negative_numbers() {
    for strategy in strategies() {
        assert_eq!(
            strategy.sort(&[-5, -1, -3, 0, 2, -2]),
            vec![-5, -3, -2, -1, 0, 2],
            "{}",
            strategy.name()
        );
    }
}

#[test]
fn input_is_not_mutated() {
    let input = SAMPLE.to_vec();
    for strategy in strategies() {
        let _ = strategy.sort(&input);
        assert_eq!(input, SAMPLE);
    }
}

#[test]
fn merge_sort_keeps_equal_elements_in_order() {
    let input = tagged(&[3, 1, 2, 1, 3, 2, 1, 0, 3]);
    let sorted = Algorithm::Merge.strategy::<Tagged>().sort(&input);
    assert!(is_stable(&sorted), "{:?}", sorted);
    let tags = sorted.iter().map(|t| t.tag).collect::<Vec<_>>();
    assert_eq!(tags, vec![7, 1, 3, 6, 2, 5, 0, 4, 8]);
}

#[test]
fn bubble_and_quick_are_stable_too() {
    let input = tagged(&[5, 5, 4, 5, 4, 1, 1, 5]);
    for algorithm in [Algorithm::Bubble, Algorithm::Quick] {
        let sorted = algorithm.strategy::<Tagged>().sort(&input);
        assert!(is_stable(&sorted), "{}: {:?}", algorithm, sorted);
    }
}

#[test]
fn comparator_functions_sort_by_key() {
    let words = ["pear", "fig", "banana", "kiwi", "apple"];
    let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    let expected = vec!["fig", "pear", "kiwi", "apple", "banana"];
    assert_eq!(bubble::sort_by(&words[..], by_len), expected);
    assert_eq!(quick::sort_by(&words[..], by_len), expected);
    assert_eq!(merge::sort_by(&words[..], by_len), expected);
}

#[test]
fn works_with_non_integer_elements() {
    let words = vec!["delta".to_owned(), "alpha".to_owned(), "charlie".to_owned()];
    let strategy: Box<dyn SortStrategy<String>> = Algorithm::Quick.strategy();
    assert_eq!(strategy.sort(&words), vec!["alpha", "charlie", "delta"]);
}
