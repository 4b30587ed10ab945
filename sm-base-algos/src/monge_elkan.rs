//! Monge-Elkan: a hybrid token-bag measure built on an inner pairwise measure.

use crate::edit_distance::Levenshtein;
use sm_types::*;

/// Monge-Elkan aggregator over an injected inner measure.
///
/// For every token of the first bag, the best inner score against any token
/// of the second bag is taken; the result is the mean of those maxima. The
/// range of the result is the range of the inner measure. Two bags that are
/// equal token for token score `1.0` without consulting the inner measure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MongeElkan<I> {
    pub inner: I,
}

impl Default for MongeElkan<Levenshtein> {
    fn default() -> Self {
        Self { inner: Levenshtein }
    }
}

impl<I> MongeElkan<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Score of a single token pair. An empty token on either side is
    /// maximally similar (`1.0`) whatever the inner measure says.
    #[inline]
    fn pair_score<T>(&self, t: &[T], u: &[T]) -> Score
    where
        I: Scorer<T>,
    {
        if t.is_empty() || u.is_empty() {
            1.0
        } else {
            self.inner.score(t, u)
        }
    }

    pub fn score<T, Tok: AsRef<[T]>>(
        &self,
        bag_a: &[Tok],
        bag_b: &[Tok],
    ) -> Result<Score, SimError>
    where
        T: PartialEq,
        I: Scorer<T>,
    {
        if bag_a.is_empty() {
            return Err(SimError::EmptyBag { side: Side::First });
        }
        if bag_b.is_empty() {
            return Err(SimError::EmptyBag { side: Side::Second });
        }
        if bag_a.len() == bag_b.len()
            && bag_a.iter().zip(bag_b).all(|(t, u)| t.as_ref() == u.as_ref())
        {
            return Ok(1.0);
        }
        let sum: Score = bag_a
            .iter()
            .map(|t| {
                bag_b
                    .iter()
                    .map(|u| self.pair_score(t.as_ref(), u.as_ref()))
                    .fold(Score::NEG_INFINITY, Score::max)
            })
            .sum();
        Ok(sum / bag_a.len() as Score)
    }
}

/// Monge-Elkan score of two token bags under `inner`.
pub fn monge_elkan<T: PartialEq, Tok: AsRef<[T]>, I: Scorer<T>>(
    bag_a: &[Tok],
    bag_b: &[Tok],
    inner: I,
) -> Result<Score, SimError> {
    MongeElkan::new(inner).score(bag_a, bag_b)
}
