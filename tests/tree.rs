use std::collections::BTreeSet;

use avl_set::Tree;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ─── Deterministic randomness ────────────────────────────────────────────────

/// Linear congruential generator with a fixed seed so every run sees the same keys.
struct Lcg(u64);

impl Lcg {
    fn new() -> Self {
        Lcg(5489)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0
    }

    /// Uniform in `[-1_000_000, 1_000_000]`.
    fn key(&mut self) -> i32 {
        ((self.next_u64() >> 33) % 2_000_001) as i32 - 1_000_000
    }

    /// `true` with probability `likelihood`.
    fn chance(&mut self, likelihood: f64) -> bool {
        ((self.next_u64() >> 11) as f64 / (1u64 << 53) as f64) < likelihood
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next_u64() >> 33) as usize % (i + 1);
            items.swap(i, j);
        }
    }
}

fn double_insert_message(value: i32) -> String {
    format!("inserting an already contained value must return false; invalid insert for value {value}")
}

fn double_remove_message(value: i32) -> String {
    format!("removing a value that is not contained must return false; invalid remove for value {value}")
}

// ─── Basic behaviour ─────────────────────────────────────────────────────────

#[test]
fn empty() {
    let tree: Tree<i32> = Tree::new();

    assert!(tree.empty());
    assert_eq!(tree.size(), 0);
    assert!(!tree.contains(&1));
    assert_eq!(tree.values(), Vec::<i32>::new());
}

#[test]
fn insert() {
    let mut tree = Tree::new();

    assert!(tree.insert(1));

    assert!(tree.contains(&1));
    assert!(!tree.contains(&0));
    assert!(!tree.contains(&2));

    assert!(!tree.empty());
    assert_eq!(tree.size(), 1);
}

#[test]
fn multiple_insert() {
    let mut tree = Tree::new();
    let value = 1;

    assert!(tree.insert(value));

    for _ in 0..5 {
        assert!(!tree.insert(value), "{}", double_insert_message(value));
        assert!(tree.contains(&value));
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.values(), vec![1]);
    }
}

#[test]
fn insert_and_check_order() {
    let values: Vec<i32> = (1..=10).collect();
    let mut shuffled = values.clone();
    Lcg::new().shuffle(&mut shuffled);

    let mut tree = Tree::new();

    for &value in &shuffled {
        assert!(tree.insert(value));
    }
    for &value in &shuffled {
        assert!(!tree.insert(value), "{}", double_insert_message(value));
    }
    for value in &shuffled {
        assert!(tree.contains(value));
    }

    assert_eq!(tree.size(), values.len());
    assert_eq!(tree.values(), values);
}

#[test]
fn remove() {
    let mut tree = Tree::new();

    assert!(tree.insert(1));
    assert!(tree.remove(&1));

    assert!(!tree.contains(&1));
    assert!(tree.empty());
    assert_eq!(tree.size(), 0);
}

#[test]
fn remove_from_empty_tree() {
    let mut tree: Tree<i32> = Tree::new();

    assert!(!tree.remove(&1));
    assert!(tree.empty());
    assert_eq!(tree.size(), 0);
}

#[test]
fn multiple_remove() {
    let mut tree = Tree::new();
    let value = 1;

    assert!(tree.insert(value));
    assert!(tree.remove(&value));

    for _ in 0..5 {
        assert!(!tree.remove(&value), "{}", double_remove_message(value));
        assert!(!tree.contains(&value));
        assert!(tree.empty());
        assert_eq!(tree.size(), 0);
    }
}

#[test]
fn remove_and_check_order() {
    let mut rng = Lcg::new();
    let mut values: Vec<i32> = (1..=10).collect();
    rng.shuffle(&mut values);

    let mut tree = Tree::new();
    for &value in &values {
        assert!(tree.insert(value));
    }

    rng.shuffle(&mut values);
    let middle = values.len() / 2;

    for value in &values[middle..] {
        assert!(tree.remove(value));
    }
    for &value in &values[middle..] {
        assert!(!tree.remove(&value), "{}", double_remove_message(value));
    }
    for (i, value) in values.iter().enumerate() {
        assert_eq!(tree.contains(value), i < middle, "membership of {value}");
    }

    values.truncate(middle);
    values.sort_unstable();

    assert_eq!(tree.size(), values.len());
    assert_eq!(tree.values(), values);
}

#[test]
fn any_permutation_round_trips() {
    let mut rng = Lcg::new();
    for n in [1usize, 2, 3, 7, 64, 257] {
        let mut keys: Vec<i32> = (1..=n as i32).collect();
        rng.shuffle(&mut keys);

        let tree: Tree<i32> = keys.iter().copied().collect();
        assert_eq!(tree.values(), (1..=n as i32).collect::<Vec<_>>());
    }
}

// ─── Large inputs, cross-checked against BTreeSet ────────────────────────────

const SIZES: [usize; 3] = [1_000, 10_000, 200_000];

fn insert_and_remove_random(number_of_values: usize, insert_likelihood: f64) {
    let mut rng = Lcg::new();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    for _ in 0..number_of_values {
        let value = rng.key();
        if rng.chance(insert_likelihood) {
            assert_eq!(tree.insert(value), set.insert(value), "insert({value})");
        } else {
            assert_eq!(tree.remove(&value), set.remove(&value), "remove({value})");
        }
        assert_eq!(tree.size(), set.len());
    }

    for value in &set {
        assert!(tree.contains(value), "lost {value}");
    }

    for _ in 0..number_of_values {
        let value = rng.key();
        assert_eq!(tree.contains(&value), set.contains(&value), "contains({value})");
    }

    assert_eq!(tree.values(), set.into_iter().collect::<Vec<_>>());
}

#[test]
fn insert_ascending_order() {
    let mut rng = Lcg::new();
    for number_of_values in SIZES {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        for i in 0..number_of_values as i32 {
            assert_eq!(tree.insert(i), set.insert(i));
            assert_eq!(tree.size(), set.len());
        }

        for value in &set {
            assert!(tree.contains(value));
        }

        for _ in 0..number_of_values {
            let value = rng.key();
            assert_eq!(tree.contains(&value), set.contains(&value));
        }

        assert_eq!(tree.values(), set.into_iter().collect::<Vec<_>>());
    }
}

#[test]
fn insert_random() {
    for number_of_values in SIZES {
        insert_and_remove_random(number_of_values, 1.0);
    }
}

#[test]
fn insert_and_remove_random_balanced() {
    for number_of_values in SIZES {
        insert_and_remove_random(number_of_values, 0.5);
    }
}

#[test]
fn insert_and_remove_random_unbalanced() {
    for number_of_values in SIZES {
        insert_and_remove_random(number_of_values, 0.9);
    }
}

#[test]
fn height_stays_logarithmic() {
    let mut rng = Lcg::new();
    let mut tree = Tree::new();
    for _ in 0..200_000 {
        tree.insert(rng.key());
    }
    // AVL height bound: h < 1.4405 * log2(n + 2) - 0.3277.
    let bound = 1.4405 * ((tree.size() + 2) as f64).log2() - 0.3277;
    assert!((tree.height() as f64) < bound, "height {} for {} keys", tree.height(), tree.size());

    let ascending: Tree<i32> = (0..(1 << 16) - 1).collect();
    assert_eq!(ascending.height(), 16);
}

// ─── Randomized model checks ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    PopFirst,
    PopLast,
}

fn value_strategy() -> impl Strategy<Value = i64> {
    -2_000i64..2_000i64
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::Remove),
        2 => value_strategy().prop_map(SetOp::Contains),
        1 => Just(SetOp::PopFirst),
        1 => Just(SetOp::PopLast),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Replays a random sequence of operations on both `Tree` and `BTreeSet`
    /// and asserts identical results at every step.
    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), 0..5_000)) {
        let mut tree: Tree<i64> = Tree::new();
        let mut set: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                SetOp::Insert(v) => prop_assert_eq!(tree.insert(*v), set.insert(*v), "insert({})", v),
                SetOp::Remove(v) => prop_assert_eq!(tree.remove(v), set.remove(v), "remove({})", v),
                SetOp::Contains(v) => prop_assert_eq!(tree.contains(v), set.contains(v), "contains({})", v),
                SetOp::PopFirst => prop_assert_eq!(tree.pop_first(), set.pop_first(), "pop_first()"),
                SetOp::PopLast => prop_assert_eq!(tree.pop_last(), set.pop_last(), "pop_last()"),
            }
            prop_assert_eq!(tree.size(), set.len(), "size mismatch after {:?}", op);
            prop_assert_eq!(tree.empty(), set.is_empty(), "empty mismatch after {:?}", op);
        }

        prop_assert_eq!(tree.values(), set.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(tree.first(), set.first());
        prop_assert_eq!(tree.last(), set.last());
    }

    /// A repeated insert or a missing remove changes nothing observable.
    #[test]
    fn rejected_operations_are_no_ops(
        keys in proptest::collection::vec(value_strategy(), 1..500),
        probe in value_strategy(),
    ) {
        let mut tree: Tree<i64> = keys.iter().copied().collect();
        let before = tree.values();

        let present = before[0];
        prop_assert!(!tree.insert(present));
        prop_assert_eq!(&tree.values(), &before);

        if !tree.contains(&probe) {
            prop_assert!(!tree.remove(&probe));
            prop_assert_eq!(&tree.values(), &before);
        }
        prop_assert_eq!(tree.size(), before.len());
    }

    /// `values()` is strictly ascending after any build-up and tear-down.
    #[test]
    fn values_strictly_ascending(
        inserts in proptest::collection::vec(value_strategy(), 0..2_000),
        removes in proptest::collection::vec(value_strategy(), 0..2_000),
    ) {
        let mut tree: Tree<i64> = inserts.into_iter().collect();
        for v in &removes {
            tree.remove(v);
        }

        let values = tree.values();
        prop_assert_eq!(values.len(), tree.size());
        prop_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

// ─── Trait implementations ───────────────────────────────────────────────────

#[test]
fn clone_default_debug_and_eq() {
    let default_tree: Tree<i32> = Default::default();
    assert!(default_tree.empty());
    assert_eq!(format!("{default_tree:?}"), "{}");

    let tree = Tree::from([3, 1, 2, 3]);
    assert_eq!(format!("{tree:?}"), "{1, 2, 3}");

    let mut copy = tree.clone();
    assert_eq!(copy, tree);
    copy.insert(4);
    assert_ne!(copy, tree);
    assert_eq!(tree.values(), vec![1, 2, 3]);
}

#[test]
fn non_copy_keys() {
    let mut tree = Tree::new();
    for word in ["pear", "apple", "fig", "apple"] {
        tree.insert(word.to_string());
    }

    assert_eq!(tree.size(), 3);
    assert!(tree.contains("fig"));
    assert_eq!(tree.take("pear"), Some("pear".to_string()));
    assert_eq!(tree.values(), vec!["apple".to_string(), "fig".to_string()]);

    tree.clear();
    assert!(tree.empty());
    assert_eq!(tree.first(), None);
}
