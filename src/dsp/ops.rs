//! Numeric list helpers
//!
//! Small building blocks over plain sample sequences. The mixing helpers
//! truncate to the shortest input instead of padding.

use num_traits::Num;
use rand::Rng;

use crate::engine::sound::{MAX_AMPLITUDE, MIN_AMPLITUDE};

/// Multiply every element by `factor`
pub fn scale<T: Num + Copy>(values: &[T], factor: T) -> Vec<T> {
    values.iter().map(|&v| factor * v).collect()
}

/// Element-wise sum of several sequences, truncated to the shortest one
///
/// A single input is returned unchanged. No inputs yields an empty sequence.
pub fn add<T, L>(lists: &[L]) -> Vec<T>
where
    T: Num + Copy,
    L: AsRef<[T]>,
{
    let len = lists
        .iter()
        .map(|l| l.as_ref().len())
        .min()
        .unwrap_or(0);

    (0..len)
        .map(|i| {
            lists
                .iter()
                .fold(T::zero(), |acc, list| acc + list.as_ref()[i])
        })
        .collect()
}

/// Scale each sequence by its paired factor, then sum element-wise
///
/// Pairing stops at the shorter of `lists` and `factors`; the sum is
/// truncated to the shortest scaled sequence.
pub fn add_and_scale<T, L>(lists: &[L], factors: &[T]) -> Vec<T>
where
    T: Num + Copy,
    L: AsRef<[T]>,
{
    let scaled: Vec<Vec<T>> = lists
        .iter()
        .zip(factors)
        .map(|(list, &factor)| scale(list.as_ref(), factor))
        .collect();

    add(&scaled)
}

/// With probability `chance`, replace `x` using the thread-local generator
pub fn randomize(x: f64, chance: f64) -> f64 {
    randomize_with_rng(x, chance, &mut rand::thread_rng())
}

/// With probability `chance`, replace `x` by a uniform value in the 16-bit range
pub fn randomize_with_rng<R: Rng + ?Sized>(x: f64, chance: f64, rng: &mut R) -> f64 {
    if rng.gen::<f64>() < chance {
        rng.gen_range(MIN_AMPLITUDE..=MAX_AMPLITUDE)
    } else {
        x
    }
}

/// Apply [`randomize`] independently to every element
pub fn replace_some(values: &[f64], chance: f64) -> Vec<f64> {
    replace_some_with_rng(values, chance, &mut rand::thread_rng())
}

/// Apply [`randomize_with_rng`] independently to every element
pub fn replace_some_with_rng<R: Rng + ?Sized>(
    values: &[f64],
    chance: f64,
    rng: &mut R,
) -> Vec<f64> {
    values
        .iter()
        .map(|&v| randomize_with_rng(v, chance, rng))
        .collect()
}
