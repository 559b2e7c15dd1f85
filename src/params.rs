//! Tuning parameters for the scored splitter.
//!
//! All knobs have defaults tuned against the shipped frequency table; they
//! are validated once at construction and immutable afterwards.

use crate::error::{Result, SplitterError};

/// Tuning parameters for the scored splitter.
///
/// The defaults are tuned for the stock frequency table. `recognition_bias`
/// and `alt_exponent` in particular depend on the table's value range and
/// should be re-tuned if the table is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    /// Frequencies at or below this count are treated as zero.
    pub low_freq_cutoff: u64,
    /// Tokens of this length or shorter need `short_min_freq` to score.
    pub length_cutoff: usize,
    /// Minimum frequency for short tokens to score at all.
    pub short_min_freq: u64,
    /// Exponent applied to raw frequencies of unrecognized tokens.
    pub normal_exponent: f64,
    /// Exponent applied to raw frequencies of recognized tokens.
    pub dict_word_exponent: f64,
    /// Multiplier in the camel-boundary arbitration.
    pub camel_bias: f64,
    /// Scales the table maximum into the secondary score threshold used
    /// when qualifying alternate splits.
    pub recognition_bias: f64,
    /// Length exponent used to re-rank alternate multi-piece splits.
    pub alt_exponent: f64,
    /// Keep the frequency table case-sensitive and probe exact, then
    /// capitalized, then lowercase. When false the table is collapsed to
    /// lowercase keys keeping the maximum count.
    pub exact_case: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            low_freq_cutoff: 340,
            length_cutoff: 2,
            short_min_freq: 286_540,
            normal_exponent: 0.15,
            dict_word_exponent: 0.12,
            camel_bias: 8.6,
            recognition_bias: 3.6e-7,
            alt_exponent: 1.2,
            exact_case: false,
        }
    }
}

impl Parameters {
    /// Validate every numeric knob against its documented range.
    pub fn validate(&self) -> Result<()> {
        fn exponent_in_unit(name: &'static str, value: f64) -> Result<()> {
            if value.is_finite() && value > 0.0 && value < 1.0 {
                Ok(())
            } else {
                Err(SplitterError::InvalidParameter {
                    name,
                    reason: format!("must be in (0, 1), got {value}"),
                })
            }
        }

        exponent_in_unit("normal_exponent", self.normal_exponent)?;
        exponent_in_unit("dict_word_exponent", self.dict_word_exponent)?;

        if !(self.camel_bias.is_finite() && self.camel_bias > 0.0) {
            return Err(SplitterError::InvalidParameter {
                name: "camel_bias",
                reason: format!("must be positive, got {}", self.camel_bias),
            });
        }
        if !(self.recognition_bias.is_finite() && self.recognition_bias > 0.0) {
            return Err(SplitterError::InvalidParameter {
                name: "recognition_bias",
                reason: format!("must be positive, got {}", self.recognition_bias),
            });
        }
        if !(self.alt_exponent.is_finite() && self.alt_exponent >= 1.0) {
            return Err(SplitterError::InvalidParameter {
                name: "alt_exponent",
                reason: format!("must be >= 1, got {}", self.alt_exponent),
            });
        }
        Ok(())
    }
}
