//! Variant selection and the decode dispatcher used at lookup time.

use crate::error::Result;
use crate::{infix, prefix_suffix, suffix};

/// The affix-trimming variant a dictionary was built with.
///
/// A diff is opaque to every variant except the one that produced it, so the
/// selector is fixed per dictionary and must match between build and lookup.
/// A closed union rather than trait objects: the dispatcher matches once per
/// call and the compiler checks every variant is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncoderType {
    /// Reuse a common prefix, trim trailing bytes only.
    TrimSuffix,
    /// Reuse common bytes at both ends.
    TrimPrefixAndSuffix,
    /// Reuse the best common run found anywhere, plus a common suffix.
    TrimInfixAndSuffix,
}

impl EncoderType {
    /// Derives the variant from the dictionary metadata flags.
    ///
    /// Infix support subsumes prefix support, so the infix flag wins when
    /// both are set; neither flag means the suffix-only variant.
    pub fn from_dictionary_flags(use_infixes: bool, use_prefixes: bool) -> Self {
        if use_infixes {
            EncoderType::TrimInfixAndSuffix
        } else if use_prefixes {
            EncoderType::TrimPrefixAndSuffix
        } else {
            EncoderType::TrimSuffix
        }
    }

    /// Encodes `target` as a diff against `source`.
    pub fn encode(self, source: &[u8], target: &[u8]) -> Vec<u8> {
        match self {
            EncoderType::TrimSuffix => suffix::encode(source, target),
            EncoderType::TrimPrefixAndSuffix => prefix_suffix::encode(source, target),
            EncoderType::TrimInfixAndSuffix => infix::encode(source, target),
        }
    }

    /// Reconstructs the base form from a matched `source` and its stored diff.
    pub fn decode(self, source: &[u8], diff: &[u8]) -> Result<Vec<u8>> {
        match self {
            EncoderType::TrimSuffix => suffix::decode(source, diff),
            EncoderType::TrimPrefixAndSuffix => prefix_suffix::decode(source, diff),
            EncoderType::TrimInfixAndSuffix => infix::decode(source, diff),
        }
    }
}
