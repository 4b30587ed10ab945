//! String-level entry point: pick a measure by name and score two optional
//! strings with a set of parameters.

use crate::{
    edit_distance::{edit_distance, Levenshtein},
    hamming::hamming_distance,
    jaro::{Jaro, JaroWinkler},
    monge_elkan::MongeElkan,
    nw::{affine::AffineNW, NW},
    set_measures::{cosine, jaccard, overlap_coefficient},
    sw::SW,
    tokenize::Tokenizer,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sm_types::{AffineGap, LinearGap, MatchMismatch, Score, Scorer, Side, SimError};
use tracing::{debug, trace};

#[derive(clap::ValueEnum, Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Measure {
    #[default]
    EditDistance,
    Hamming,
    NeedlemanWunsch,
    SmithWaterman,
    Affine,
    Jaro,
    JaroWinkler,
    MongeElkan,
    OverlapCoefficient,
    Jaccard,
    Cosine,
}

/// Parameters for all measures. Each measure reads only the fields it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureParams {
    /// Linear gap penalty of Needleman-Wunsch and Smith-Waterman.
    pub gap_cost: Score,
    /// Affine score of opening a gap.
    pub gap_start: Score,
    /// Affine score of every further gap position.
    pub gap_continuation: Score,
    pub match_score: Score,
    pub mismatch_score: Score,
    /// Jaro-Winkler prefix scale.
    pub prefix_weight: Score,
    /// Splits strings for the token measures.
    pub tokenizer: Tokenizer,
    /// Character measure applied to token pairs by Monge-Elkan.
    pub inner: Measure,
}

impl Default for MeasureParams {
    fn default() -> Self {
        let gap = LinearGap::default();
        let affine = AffineGap::default();
        let scoring = MatchMismatch::default();
        Self {
            gap_cost: gap.cost,
            gap_start: affine.start,
            gap_continuation: affine.continuation,
            match_score: scoring.matches,
            mismatch_score: scoring.mismatch,
            prefix_weight: JaroWinkler::default().prefix_weight,
            tokenizer: Tokenizer::default(),
            inner: Measure::EditDistance,
        }
    }
}

impl MeasureParams {
    pub fn from_json(s: &str) -> Result<Self, SimError> {
        serde_json::from_str(s).map_err(|e| SimError::InvalidParams(e.to_string()))
    }

    pub fn scoring(&self) -> MatchMismatch {
        MatchMismatch::new(self.match_score, self.mismatch_score)
    }

    /// Reject values the measures cannot run with.
    pub fn validate(&self) -> Result<(), SimError> {
        let values = [
            ("gap_cost", self.gap_cost),
            ("gap_start", self.gap_start),
            ("gap_continuation", self.gap_continuation),
            ("match_score", self.match_score),
            ("mismatch_score", self.mismatch_score),
            ("prefix_weight", self.prefix_weight),
        ];
        if let Some((name, v)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::InvalidParams(format!("{name} must be finite, got {v}")));
        }
        if self.gap_cost < 0.0 {
            return Err(SimError::InvalidParams(format!(
                "gap_cost must be non-negative, got {}",
                self.gap_cost
            )));
        }
        if self.prefix_weight < 0.0 {
            return Err(SimError::InvalidParams(format!(
                "prefix_weight must be non-negative, got {}",
                self.prefix_weight
            )));
        }
        Ok(())
    }
}

impl Measure {
    /// Whether the measure compares token bags instead of characters.
    pub fn is_token_level(&self) -> bool {
        matches!(
            self,
            Measure::MongeElkan | Measure::OverlapCoefficient | Measure::Jaccard | Measure::Cosine
        )
    }

    /// Build the character-level scorer for this measure.
    ///
    /// Hamming is excluded since it is only defined for equal lengths, and
    /// token measures have no character-level form.
    pub fn build(&self, params: &MeasureParams) -> Result<Box<dyn Scorer<char>>, SimError> {
        let scoring = params.scoring();
        Ok(match self {
            Measure::EditDistance => Box::new(Levenshtein),
            Measure::NeedlemanWunsch => Box::new(NW::new(params.gap_cost, scoring)),
            Measure::SmithWaterman => Box::new(SW::new(params.gap_cost, scoring)),
            Measure::Affine => Box::new(AffineNW::new(
                params.gap_start,
                params.gap_continuation,
                scoring,
            )),
            Measure::Jaro => Box::new(Jaro),
            Measure::JaroWinkler => Box::new(JaroWinkler {
                prefix_weight: params.prefix_weight,
            }),
            m => {
                return Err(SimError::InvalidParams(format!(
                    "{m:?} is not a pairwise character measure"
                )))
            }
        })
    }

    /// Score two strings.
    ///
    /// Both inputs must be present; absence is reported before anything is
    /// computed. Character measures compare the `char`s of the strings, token
    /// measures the output of `params.tokenizer`.
    pub fn score(
        &self,
        params: &MeasureParams,
        a: Option<&str>,
        b: Option<&str>,
    ) -> Result<Score, SimError> {
        let a = a.ok_or(SimError::MissingInput { arg: Side::First })?;
        let b = b.ok_or(SimError::MissingInput { arg: Side::Second })?;
        params.validate()?;
        debug!(measure = ?self, len_a = a.len(), len_b = b.len(), "score");

        if self.is_token_level() {
            let ta = params.tokenizer.tokenize(a)?;
            let tb = params.tokenizer.tokenize(b)?;
            trace!(?ta, ?tb, "tokens");
            return self.score_tokens(params, &ta, &tb);
        }

        let a = a.chars().collect_vec();
        let b = b.chars().collect_vec();
        match self {
            Measure::EditDistance => Ok(edit_distance(&a, &b) as Score),
            Measure::Hamming => Ok(hamming_distance(&a, &b)? as Score),
            m => Ok(m.build(params)?.score(&a, &b)),
        }
    }

    fn score_tokens(
        &self,
        params: &MeasureParams,
        ta: &[String],
        tb: &[String],
    ) -> Result<Score, SimError> {
        match self {
            Measure::MongeElkan => {
                let inner = params.inner.build(params)?;
                debug!(inner = ?params.inner, "monge-elkan");
                let ca = ta.iter().map(|t| t.chars().collect_vec()).collect_vec();
                let cb = tb.iter().map(|t| t.chars().collect_vec()).collect_vec();
                MongeElkan::new(inner).score::<char, _>(&ca, &cb)
            }
            Measure::OverlapCoefficient => Ok(overlap_coefficient(ta, tb)),
            Measure::Jaccard => Ok(jaccard(ta, tb)),
            Measure::Cosine => Ok(cosine(ta, tb)),
            m => Err(SimError::InvalidParams(format!("{m:?} is not a token measure"))),
        }
    }
}
