use crate::{
    measure::{Measure, MeasureParams},
    tokenize::Tokenizer,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use sm_types::Score;

/// Command line selection of a measure and overrides of its parameters.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(next_help_heading = "Measure")]
pub struct MeasureArgs {
    /// The measure to compute.
    #[clap(short, long, default_value_t, value_enum, display_order = 10)]
    pub measure: Measure,

    /// Linear gap penalty for needleman-wunsch and smith-waterman.
    #[clap(long)]
    pub gap_cost: Option<Score>,

    /// Affine gap opening score.
    #[clap(long, allow_hyphen_values = true)]
    pub gap_start: Option<Score>,

    /// Affine gap extension score.
    #[clap(long, allow_hyphen_values = true)]
    pub gap_continuation: Option<Score>,

    #[clap(long, allow_hyphen_values = true)]
    pub match_score: Option<Score>,

    #[clap(long, allow_hyphen_values = true)]
    pub mismatch_score: Option<Score>,

    /// Jaro-Winkler prefix scale.
    #[clap(long, hide_short_help = true)]
    pub prefix_weight: Option<Score>,

    /// One of `whitespace`, `delimiter[:<d>]`, `qgram[:<q>]`.
    #[clap(long)]
    pub tokenizer: Option<Tokenizer>,

    /// Inner measure of monge-elkan.
    #[clap(long, value_enum)]
    pub inner: Option<Measure>,
}

impl MeasureArgs {
    /// Overwrite the fields of `params` that were given on the command line.
    pub fn apply(&self, params: &mut MeasureParams) {
        let overrides = [
            (self.gap_cost, &mut params.gap_cost),
            (self.gap_start, &mut params.gap_start),
            (self.gap_continuation, &mut params.gap_continuation),
            (self.match_score, &mut params.match_score),
            (self.mismatch_score, &mut params.mismatch_score),
            (self.prefix_weight, &mut params.prefix_weight),
        ];
        for (arg, field) in overrides {
            if let Some(v) = arg {
                *field = v;
            }
        }
        if let Some(t) = &self.tokenizer {
            params.tokenizer = t.clone();
        }
        if let Some(inner) = self.inner {
            params.inner = inner;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides() {
        let args = MeasureArgs::parse_from([
            "sm",
            "--measure",
            "affine",
            "--gap-start",
            "-2",
            "--tokenizer",
            "qgram:3",
        ]);
        assert_eq!(args.measure, Measure::Affine);
        let mut params = MeasureParams::default();
        args.apply(&mut params);
        assert_eq!(params.gap_start, -2.0);
        assert_eq!(params.gap_continuation, -0.5);
        assert_eq!(params.tokenizer, Tokenizer::Qgram(3));
        assert_eq!(params.inner, Measure::EditDistance);
    }

    #[test]
    fn defaults_keep_params() {
        let args = MeasureArgs::parse_from(["sm"]);
        assert_eq!(args.measure, Measure::EditDistance);
        let mut params = MeasureParams {
            gap_cost: 3.0,
            ..Default::default()
        };
        args.apply(&mut params);
        assert_eq!(params.gap_cost, 3.0);
    }
}
