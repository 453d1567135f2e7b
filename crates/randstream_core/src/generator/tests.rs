//! Unit tests for the generator handle and its distributions.

use super::*;
use crate::combinators::Either;
use crate::source::StreamPosition;
use approx::assert_abs_diff_eq;
use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

const SEED: [i32; SEED_SIZE] = [5, 10, 15, 20, 25, 30, 35, 40];

fn generator() -> RandomGenerator {
    RandomGenerator::new(SEED)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn mean<I: Iterator<Item = f64>>(values: I) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), x| (s + x, n + 1));
    sum / n as f64
}

// ============================================================================
// Handle lifecycle
// ============================================================================

#[test]
fn test_same_seed_same_sequence() {
    let a: Vec<i64> = generator().longs().take(50).collect();
    let b: Vec<i64> = generator().longs().take(50).collect();
    assert_eq!(a, b);
}

#[test]
fn test_shallow_copy_shares_stream() {
    let original = generator();
    let copy = original.copy();

    copy.next_i32();
    assert_eq!(original.position(), StreamPosition(1));

    // Alternating between the handles walks one stream.
    let interleaved = vec![original.next_i32(), copy.next_i32(), original.next_i32()];
    let fresh = generator();
    fresh.next_i32();
    let expected: Vec<i32> = fresh.integers().take(3).collect();
    assert_eq!(interleaved, expected);
}

#[test]
fn test_deep_copy_is_independent() {
    let original = generator();
    original.next_i64();
    let deep = original.deep_copy();
    assert_eq!(deep, original);

    let from_deep: Vec<i32> = deep.integers().take(10).collect();
    assert_eq!(original.position(), StreamPosition(2));
    let from_original: Vec<i32> = original.integers().take(10).collect();
    assert_eq!(from_deep, from_original);
}

#[test]
fn test_sequences_share_the_handle_stream() {
    let g = generator();
    let mut xs = g.integers();
    let mut ys = g.copy().integers();
    let pulled = vec![xs.next().unwrap(), ys.next().unwrap(), xs.next().unwrap()];
    let expected: Vec<i32> = generator().integers().take(3).collect();
    assert_eq!(pulled, expected);
}

#[test]
fn test_reset_reproduces_fresh_sequence() {
    let g = generator().with_scale(6);
    let first: Vec<i32> = g.natural_integers_geometric().unwrap().take(20).collect();

    let copy = g.copy();
    copy.reset();
    assert_eq!(g.position(), StreamPosition(0));
    let again: Vec<i32> = g.natural_integers_geometric().unwrap().take(20).collect();
    assert_eq!(first, again);
    assert_eq!(g.scale(), 6);
}

#[test]
fn test_scale_overrides_share_stream() {
    let g = generator();
    let wide = g.with_scale(100).with_tertiary_scale(9);
    assert_eq!(wide.scale(), 100);
    assert_eq!(wide.secondary_scale(), DEFAULT_SECONDARY_SCALE);
    assert_eq!(wide.tertiary_scale(), 9);
    assert_eq!(g.scale(), DEFAULT_SCALE);

    wide.next_bool();
    assert_eq!(g.position(), StreamPosition(1));
}

#[test]
fn test_structural_equality_and_hash() {
    assert_eq!(generator(), generator());
    assert_eq!(hash_of(&generator()), hash_of(&generator()));

    let advanced = generator();
    advanced.next_i32();
    assert_ne!(advanced, generator());
    assert_ne!(generator().with_secondary_scale(3), generator());
    assert_ne!(RandomGenerator::new([0; SEED_SIZE]), generator());

    let mut set = HashSet::new();
    set.insert(generator());
    assert!(set.contains(&generator()));
    assert!(!set.contains(&advanced));
}

#[test]
fn test_snapshot_json_round_trip() {
    let g = generator().with_scale(12).with_secondary_scale(3);
    g.longs().take(7).for_each(drop);

    let json = serde_json::to_string(&g.snapshot()).unwrap();
    let snapshot: GeneratorSnapshot = serde_json::from_str(&json).unwrap();
    let restored = RandomGenerator::from_snapshot(&snapshot);

    assert_eq!(restored, g);
    assert_eq!(restored.scale(), 12);
    let expected: Vec<i32> = g.integers().take(5).collect();
    let replayed: Vec<i32> = restored.integers().take(5).collect();
    assert_eq!(expected, replayed);
}

#[test]
fn test_seed_slice_and_config_construction() {
    let err = RandomGenerator::from_seed_slice(&[1, 2]).unwrap_err();
    assert_eq!(err, GeneratorError::InvalidSeed { expected: 8, got: 2 });

    let config = GeneratorConfig::builder()
        .seed(SEED.to_vec())
        .scale(7)
        .tertiary_scale(4)
        .build()
        .unwrap();
    let g = RandomGenerator::from_config(&config).unwrap();
    assert_eq!(g.seed(), SEED);
    assert_eq!(g.scale(), 7);
    assert_eq!(g.secondary_scale(), DEFAULT_SECONDARY_SCALE);
    assert_eq!(g.tertiary_scale(), 4);
    assert_eq!(g, generator().with_scale(7).with_tertiary_scale(4));
}

#[test]
fn test_from_config_rejects_bad_seed() {
    let config = GeneratorConfig {
        seed: Some(vec![1; 9]),
        ..GeneratorConfig::default()
    };
    assert!(RandomGenerator::from_config(&config).is_err());
}

// ============================================================================
// Preconditions
// ============================================================================

#[test]
fn test_preconditions_fail_before_any_draw() {
    let g = generator();

    assert!(matches!(
        g.with_scale(1).positive_integers_geometric(),
        Err(GeneratorError::InvalidScale(_))
    ));
    assert!(g.with_scale(0).natural_integers_geometric().is_err());
    assert!(g.range_up_geometric(DEFAULT_SCALE).is_err());
    assert!(g.range_down_geometric(-DEFAULT_SCALE).is_err());
    assert!(g.natural_integers_geometric_ratio(0, 1).is_err());
    assert!(g.natural_integers_geometric_ratio(1, -1).is_err());
    assert!(g.range(5, 4).is_err());
    assert!(g.char_range('z', 'a').is_err());
    assert!(g.big_range(BigInt::from(3), BigInt::from(2)).is_err());
    assert!(g.big_range_up(BigInt::from(1u64 << 40)).is_err());
    assert!(g.big_range_down(-BigInt::from(1u64 << 40)).is_err());
    assert!(g.float_range(f32::NAN, 1.0).is_err());
    assert!(g.float_range(0.0f64, -0.0).is_err());
    assert!(g.float_range_up(f64::NAN).is_err());
    assert!(g.float_range_uniform(0.0, f64::INFINITY).is_err());
    assert!(g.float_range_uniform(f32::NEG_INFINITY, 0.0).is_err());
    assert!(g.float_range_uniform(2.0f64, 1.0).is_err());
    assert!(g.float_range_down_uniform(f64::NAN).is_err());
    assert!(g.uniform_sample(Vec::<i32>::new()).is_err());
    assert!(g.strings_from("").is_err());
    assert!(g.with_scale(0).lists(g.integers()).is_err());
    assert!(g.with_scale(3).lists_at_least(3, g.integers()).is_err());
    assert!(g.with_secondary_scale(0).distinct_lists(g.integers()).is_err());
    assert!(g.with_secondary_scale(0).subsets(g.integers()).is_err());
    assert!(g.with_secondary_scale(0).prefix_permutations(0..).is_err());
    assert!(g.with_tertiary_scale(1).with_element(0, g.integers()).is_err());
    assert!(g.with_tertiary_scale(1).optionals(g.integers()).is_err());
    assert!(g.choose_among(Vec::<std::ops::RangeFrom<i32>>::new()).is_err());
    assert!(g.with_tertiary_scale(1).choose(0.., 0..).is_err());
    assert!(g.with_tertiary_scale(-3).eithers(0.., 0..).is_err());

    assert_eq!(g.position(), StreamPosition(0));
}

// ============================================================================
// Integers and characters
// ============================================================================

#[test]
fn test_range_stays_in_bounds() {
    let g = generator();
    assert!(g.range(-3i8, 3).unwrap().take(1000).all(|x| (-3..=3).contains(&x)));
    assert!(g
        .range(i64::MIN + 5, i64::MIN + 9)
        .unwrap()
        .take(1000)
        .all(|x| (i64::MIN + 5..=i64::MIN + 9).contains(&x)));
    assert!(g
        .range(-1_000_000_000_000i64, 1_000_000_000_000)
        .unwrap()
        .take(1000)
        .all(|x| x.abs() <= 1_000_000_000_000));
}

#[test]
fn test_range_of_one_value_draws_nothing() {
    let g = generator();
    assert!(g.range(7i16, 7).unwrap().take(100).all(|x| x == 7));
    assert_eq!(g.position(), StreamPosition(0));
}

#[test]
fn test_full_width_ranges() {
    let g = generator();
    let seen: HashSet<i8> = g.all::<i8>().take(20_000).collect();
    assert_eq!(seen.len(), 256);

    // The whole i64 domain goes through the bignum sampler.
    let longs: Vec<i64> = g.all::<i64>().take(200).collect();
    assert!(longs.iter().any(|&x| x < 0));
    assert!(longs.iter().any(|&x| x > 0));
}

#[test]
fn test_signed_convenience_ranges() {
    let g = generator();
    assert!(g.naturals::<i32>().take(500).all(|x| x >= 0));
    assert!(g.positives::<i16>().take(500).all(|x| x > 0));
    assert!(g.negatives::<i64>().take(500).all(|x| x < 0));
    assert!(g.nonzeros::<i8>().take(2000).all(|x| x != 0));
    assert!(g.range_up(120i8).take(500).all(|x| x >= 120));
    assert!(g.range_down(-120i8).take(500).all(|x| x <= -120));
}

#[test]
fn test_char_ranges_skip_surrogates() {
    let g = generator();
    let seen: HashSet<char> = g
        .char_range('\u{d7ff}', '\u{e000}')
        .unwrap()
        .take(200)
        .collect();
    assert_eq!(seen, HashSet::from(['\u{d7ff}', '\u{e000}']));

    assert!(g.ascii_chars().take(1000).all(|c| c.is_ascii()));
    assert!(g.char_range_down('c').take(500).all(|c| c <= 'c'));
    assert!(g.char_range_up('\u{10fff0}').take(500).all(|c| c >= '\u{10fff0}'));
    assert!(g.chars().take(1000).any(|c| u32::from(c) > 0xffff));
}

// ============================================================================
// Geometric integers and bignums
// ============================================================================

#[test]
fn test_geometric_signs() {
    let g = generator().with_scale(5);
    assert!(g.natural_integers_geometric().unwrap().take(1000).all(|x| x >= 0));
    assert!(g.positive_integers_geometric().unwrap().take(1000).all(|x| x > 0));
    assert!(g.negative_integers_geometric().unwrap().take(1000).all(|x| x < 0));
    assert!(g.nonzero_integers_geometric().unwrap().take(1000).all(|x| x != 0));

    let mixed: Vec<i32> = g.integers_geometric().unwrap().take(1000).collect();
    assert!(mixed.iter().any(|&x| x < 0));
    assert!(mixed.iter().any(|&x| x > 0));
    assert!(mixed.contains(&0));
}

#[test]
fn test_range_up_geometric_mean_is_scale() {
    let values: Vec<i32> = generator()
        .range_up_geometric(10)
        .unwrap()
        .take(20_000)
        .collect();
    assert!(values.iter().all(|&x| x >= 10));
    assert_abs_diff_eq!(
        mean(values.iter().map(|&x| f64::from(x))),
        f64::from(DEFAULT_SCALE),
        epsilon = 1.0
    );
}

#[test]
fn test_range_down_geometric_mirrors() {
    let values: Vec<i32> = generator()
        .with_scale(20)
        .range_down_geometric(-5)
        .unwrap()
        .take(20_000)
        .collect();
    assert!(values.iter().all(|&x| x <= -5));
    assert_abs_diff_eq!(mean(values.iter().map(|&x| f64::from(x))), -20.0, epsilon = 1.0);
}

#[test]
fn test_range_up_geometric_near_i32_max() {
    let g = generator().with_scale(i32::MAX);
    assert!(g
        .range_up_geometric(i32::MAX - 3)
        .unwrap()
        .take(50)
        .all(|x| x >= i32::MAX - 3));
}

#[test]
fn test_geometric_ratio_mean() {
    let values: Vec<i32> = generator()
        .natural_integers_geometric_ratio(1, 4)
        .unwrap()
        .take(20_000)
        .collect();
    assert!(values.iter().all(|&x| x >= 0));
    assert_abs_diff_eq!(mean(values.iter().map(|&x| f64::from(x))), 0.25, epsilon = 0.03);
}

#[test]
fn test_big_integer_signs() {
    let g = generator().with_scale(40);
    assert!(g.positive_big_integers().unwrap().take(300).all(|x| x > BigInt::zero()));
    assert!(g.negative_big_integers().unwrap().take(300).all(|x| x < BigInt::zero()));
    assert!(g.natural_big_integers().unwrap().take(300).all(|x| x >= BigInt::zero()));
    assert!(g.nonzero_big_integers().unwrap().take(300).all(|x| !x.is_zero()));

    let mixed: Vec<BigInt> = g.big_integers().unwrap().take(300).collect();
    assert!(mixed.iter().any(|x| x.bits() > 64));
    assert!(mixed.iter().any(|x| *x < BigInt::zero()));
}

#[test]
fn test_big_range_bounds() {
    let g = generator();
    let low = BigInt::from(-3) << 100u32;
    let high = BigInt::from(5) << 90u32;
    assert!(g
        .big_range(low.clone(), high.clone())
        .unwrap()
        .take(500)
        .all(|x| x >= low && x <= high));

    let one = BigInt::from(12345);
    assert!(g
        .big_range(one.clone(), one.clone())
        .unwrap()
        .take(10)
        .all(|x| x == one));
}

#[test]
fn test_big_range_up_and_down() {
    let g = generator();
    for a in [-5i64, 0, 1, 1000, 1 << 20] {
        let a = BigInt::from(a);
        let values: Vec<BigInt> = g.big_range_up(a.clone()).unwrap().take(300).collect();
        assert!(values.iter().all(|x| *x >= a), "value below {a}");
        assert!(values.iter().any(|x| *x > a));

        let values: Vec<BigInt> = g.big_range_down(a.clone()).unwrap().take(300).collect();
        assert!(values.iter().all(|x| *x <= a), "value above {a}");
    }
}

#[test]
fn test_big_range_up_reaches_the_anchor_bin() {
    // a = 1000 has bit length 10; values in [1000, 1023] come from the anchor bin.
    let g = generator().with_scale(11);
    let values: Vec<BigInt> = g.big_range_up(BigInt::from(1000)).unwrap().take(500).collect();
    assert!(values.iter().any(|x| *x < BigInt::from(1024)));
    assert!(values.iter().any(|x| *x >= BigInt::from(1024)));
}

// ============================================================================
// Floats
// ============================================================================

#[test]
fn test_float_range_straddles_signed_zero() {
    let g = generator();
    let tiny = f32::from_bits(4);
    let values: Vec<f32> = g.float_range(-tiny, tiny).unwrap().take(1000).collect();

    assert!(values.iter().all(|x| (-tiny..=tiny).contains(x)));
    assert!(values.iter().any(|x| x.to_bits() == 0));
    assert!(values.iter().any(|x| x.to_bits() == 0x8000_0000));
    assert!(values.iter().any(|x| *x > 0.0 && !x.is_normal()));
}

#[test]
fn test_float_range_of_negative_zero() {
    let g = generator();
    assert!(g
        .float_range(-0.0f64, -0.0)
        .unwrap()
        .take(20)
        .all(|x| x.to_bits() == (-0.0f64).to_bits()));
    assert_eq!(g.position(), StreamPosition(0));
}

#[test]
fn test_float_range_up_and_down_include_infinities() {
    let g = generator();
    let up: Vec<f64> = g.float_range_up(f64::MAX).unwrap().take(200).collect();
    assert!(up.iter().all(|&x| x == f64::MAX || x == f64::INFINITY));
    assert!(up.contains(&f64::INFINITY));

    let down: Vec<f32> = g.float_range_down(f32::MIN).unwrap().take(200).collect();
    assert!(down.contains(&f32::NEG_INFINITY));
    assert!(down.iter().all(|&x| x <= f32::MIN));
}

#[test]
fn test_bit_pattern_streams() {
    let g = generator();
    let values: Vec<f32> = g.floats().take(20_000).collect();
    assert!(values
        .iter()
        .all(|x| !x.is_nan() || x.to_bits() == 0x7fc0_0000));
    assert!(values.iter().any(|x| x.is_sign_negative()));
    assert!(values.iter().any(|x| x.abs() > 1.0e30));
    assert!(values.iter().any(|x| x.abs() < 1.0e-30));

    assert!(g.positive_floats::<f64>().take(1000).all(|x| x > 0.0));
    assert!(g.negative_floats::<f32>().take(1000).all(|x| x < 0.0));
    assert!(g.nonzero_floats::<f64>().take(1000).all(|x| x != 0.0 && !x.is_nan()));
}

#[test]
fn test_real_uniform_mean() {
    let values: Vec<f64> = generator()
        .float_range_uniform(1.0, 2.0)
        .unwrap()
        .take(10_000)
        .collect();
    assert!(values.iter().all(|x| (1.0..=2.0).contains(x)));
    assert_abs_diff_eq!(mean(values.into_iter()), 1.5, epsilon = 0.02);
}

#[test]
fn test_real_uniform_differs_from_bit_pattern_uniform() {
    let g = generator();
    let real: Vec<f32> = g.float_range_uniform(0.0, 1.0).unwrap().take(5000).collect();
    let bits: Vec<f32> = g.float_range(0.0, 1.0).unwrap().take(5000).collect();

    let upper_half = |xs: &[f32]| xs.iter().filter(|&&x| x >= 0.5).count() as f64 / xs.len() as f64;
    assert_abs_diff_eq!(upper_half(&real), 0.5, epsilon = 0.05);
    // Bit patterns in [0.5, 1] are one binade out of over a hundred.
    assert!(upper_half(&bits) < 0.05);
}

#[test]
fn test_real_uniform_zero_rules() {
    let g = generator();

    let negative: Vec<f64> = g.float_range_uniform(-0.0, -0.0).unwrap().take(20).collect();
    assert!(negative.iter().all(|x| x.to_bits() == (-0.0f64).to_bits()));

    let positive: Vec<f64> = g.float_range_uniform(0.0, 0.0).unwrap().take(20).collect();
    assert!(positive.iter().all(|x| x.to_bits() == 0));

    let both: Vec<f64> = g.float_range_uniform(-0.0, 0.0).unwrap().take(100).collect();
    assert!(both.iter().any(|x| x.to_bits() == 0));
    assert!(both.iter().any(|x| x.to_bits() == (-0.0f64).to_bits()));

    let tiny = f64::from_bits(1);
    let below: Vec<f64> = g.float_range_uniform(-tiny, -0.0).unwrap().take(200).collect();
    assert!(below.iter().all(|x| x.is_sign_negative()));
    assert!(below.contains(&-tiny));

    let straddle: Vec<f32> = g.float_range_uniform(-1.0, 1.0).unwrap().take(2000).collect();
    assert!(straddle.iter().all(|x| x.to_bits() != 0x8000_0000));
}

#[test]
fn test_real_uniform_full_range_is_finite() {
    let g = generator();
    assert!(g.floats_uniform::<f32>().take(1000).all(f32::is_finite));
    assert!(g.floats_uniform::<f64>().take(1000).all(f64::is_finite));
    assert!(g
        .float_range_up_uniform(1.0e30f32)
        .unwrap()
        .take(500)
        .all(|x| x >= 1.0e30 && x.is_finite()));
    assert!(g
        .float_range_down_uniform(-1.0e300f64)
        .unwrap()
        .take(500)
        .all(|x| x <= -1.0e300 && x.is_finite()));
}

// ============================================================================
// Composite generators
// ============================================================================

#[test]
fn test_uniform_sample_covers_items() {
    let g = generator();
    let seen: HashSet<&str> = g
        .uniform_sample(vec!["a", "b", "c"])
        .unwrap()
        .take(100)
        .collect();
    assert_eq!(seen.len(), 3);

    let before = g.position();
    assert!(g.uniform_sample(vec![9]).unwrap().take(10).all(|x| x == 9));
    assert_eq!(g.position(), before);
}

#[test]
fn test_list_lengths() {
    let g = generator().with_scale(4);
    assert!(g
        .lists_of_size(3, g.range(0, 9).unwrap())
        .take(100)
        .all(|l| l.len() == 3));

    let lengths: Vec<usize> = g
        .lists(g.booleans())
        .unwrap()
        .take(5000)
        .map(|l| l.len())
        .collect();
    assert_abs_diff_eq!(mean(lengths.iter().map(|&n| n as f64)), 4.0, epsilon = 0.3);

    assert!(g
        .lists_at_least(2, g.booleans())
        .unwrap()
        .take(500)
        .all(|l| l.len() >= 2));
}

#[test]
fn test_lists_are_reproducible_with_shared_sources() {
    let draw = || {
        let g = generator().with_scale(3);
        g.lists(g.range(0, 99).unwrap())
            .unwrap()
            .take(20)
            .collect::<Vec<Vec<i32>>>()
    };
    assert_eq!(draw(), draw());
}

#[test]
fn test_strings() {
    let g = generator().with_scale(6);
    assert!(g.strings_of_length(4).take(100).all(|s| s.chars().count() == 4));
    assert!(g.strings_at_least(2).unwrap().take(100).all(|s| s.chars().count() >= 2));
    assert!(g
        .strings_from("xyz")
        .unwrap()
        .take(100)
        .all(|s| s.chars().all(|c| "xyz".contains(c))));
    assert!(g.strings().unwrap().take(100).any(|s| !s.is_ascii()));
}

#[test]
fn test_distinct_lists() {
    let g = generator();
    for list in g.distinct_lists_of_size(3, g.range(0, 2).unwrap()).take(50) {
        let mut sorted = list.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2]);
    }

    for list in g.distinct_lists(g.range(0, 1000).unwrap()).unwrap().take(100) {
        let unique: HashSet<i32> = list.iter().copied().collect();
        assert_eq!(unique.len(), list.len());
    }

    assert!(g
        .distinct_lists_at_least(3, g.range(0, 1000).unwrap())
        .unwrap()
        .take(100)
        .all(|l| l.len() >= 3));
}

#[test]
fn test_bags_and_subsets_are_sorted() {
    let g = generator().with_scale(5).with_secondary_scale(4);
    for bag in g.bags(g.range(0, 3).unwrap()).unwrap().take(100) {
        assert!(bag.windows(2).all(|w| w[0] <= w[1]));
    }
    for bag in g.bags_of_size(6, g.range(0, 3).unwrap()).take(100) {
        assert_eq!(bag.len(), 6);
        assert!(bag.windows(2).all(|w| w[0] <= w[1]));
    }
    for subset in g.subsets(g.range(0, 1000).unwrap()).unwrap().take(100) {
        assert!(subset.windows(2).all(|w| w[0] < w[1]));
    }
    for subset in g.subsets_of_size(4, g.range(0, 9).unwrap()).take(100) {
        assert_eq!(subset.len(), 4);
        assert!(subset.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_permutations_finite() {
    let g = generator();
    for mut p in g.permutations_finite(vec!['a', 'b', 'c', 'd', 'e']).take(100) {
        p.sort();
        assert_eq!(p, vec!['a', 'b', 'c', 'd', 'e']);
    }

    let before = g.position();
    assert!(g.permutations_finite(vec![1]).take(10).all(|p| p == vec![1]));
    assert!(g.permutations_finite(Vec::<u8>::new()).take(10).all(|p| p.is_empty()));
    assert_eq!(g.position(), before);
}

#[test]
fn test_prefix_permutations_keep_the_tail() {
    let g = generator().with_secondary_scale(4);
    let mut shuffled_any = false;
    for permutation in g.prefix_permutations(0u32..).unwrap().take(50) {
        let head: Vec<u32> = permutation.take(200).collect();
        let mut prefix = head[..100].to_vec();
        shuffled_any |= prefix.iter().enumerate().any(|(i, &x)| x != i as u32);
        prefix.sort_unstable();
        assert_eq!(prefix, (0..100).collect::<Vec<u32>>());
        assert!(head[100..].iter().enumerate().all(|(i, &x)| x == 100 + i as u32));
    }
    assert!(shuffled_any);
}

#[test]
fn test_choose_and_eithers() {
    let g = generator();
    let chosen: Vec<i32> = g
        .choose(std::iter::repeat(1), std::iter::repeat(2))
        .unwrap()
        .take(4000)
        .collect();
    let ones = chosen.iter().filter(|&&x| x == 1).count() as f64 / 4000.0;
    assert_abs_diff_eq!(ones, 0.5, epsilon = 0.05);

    let seen: HashSet<i32> = g
        .choose_among(vec![std::iter::repeat(0), std::iter::repeat(1), std::iter::repeat(2)])
        .unwrap()
        .take(100)
        .collect();
    assert_eq!(seen.len(), 3);

    let tagged: Vec<Either<i32, char>> = g
        .eithers(0.., "ab".chars().cycle())
        .unwrap()
        .take(100)
        .collect();
    assert!(tagged.iter().any(Either::is_left));
    assert!(tagged.iter().any(Either::is_right));
    // Each side advances only when chosen.
    let lefts: Vec<i32> = tagged.iter().filter_map(|e| e.left()).collect();
    assert_eq!(lefts, (0..lefts.len() as i32).collect::<Vec<_>>());
}

#[test]
fn test_mixing_ratio_follows_tertiary_scale() {
    let g = generator().with_tertiary_scale(5);
    let chosen: Vec<i32> = g
        .choose(std::iter::repeat(1), std::iter::repeat(2))
        .unwrap()
        .take(8000)
        .collect();
    let ones = chosen.iter().filter(|&&x| x == 1).count() as f64 / 8000.0;
    assert_abs_diff_eq!(ones, 0.2, epsilon = 0.03);

    let tagged: Vec<Either<u8, char>> = g
        .eithers(std::iter::repeat(0u8), std::iter::repeat('x'))
        .unwrap()
        .take(8000)
        .collect();
    let lefts = tagged.iter().filter(|e| e.is_left()).count() as f64 / 8000.0;
    assert_abs_diff_eq!(lefts, 0.2, epsilon = 0.03);
}

#[test]
fn test_special_element_frequency() {
    let g = generator().with_tertiary_scale(4);
    let values: Vec<i32> = g.with_element(-1, g.range(0, 9).unwrap()).unwrap().take(8000).collect();
    let special = values.iter().filter(|&&x| x == -1).count() as f64 / 8000.0;
    assert_abs_diff_eq!(special, 0.25, epsilon = 0.03);

    let options: Vec<Option<bool>> = generator().optionals(g.booleans()).unwrap().take(8000).collect();
    let none = options.iter().filter(|x| x.is_none()).count() as f64 / 8000.0;
    assert_abs_diff_eq!(none, 0.5, epsilon = 0.03);
}
