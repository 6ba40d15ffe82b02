//! # stemdiff
//!
//! A compact, reversible diff codec for morphological dictionaries.
//!
//! Compressed dictionaries do not store a full lemma next to every inflected
//! form; they store a short diff describing how to turn the matched form's
//! bytes back into the lemma's bytes. This crate implements the three
//! affix-trimming diff variants such dictionaries use and the decode entry
//! point a lookup component calls to reconstruct the lemma.
//!
//! ## Quick Start
//!
//! ```
//! use stemdiff::{decode_base_form, encode, EncoderType};
//!
//! let inflected = b"walking";
//! let lemma = b"walk";
//!
//! // Dictionary build time: encode the lemma against the inflected form.
//! let diff = encode(EncoderType::TrimSuffix, inflected, lemma);
//!
//! // Lookup time: reconstruct the lemma from the matched form and the diff.
//! let recovered = decode_base_form(EncoderType::TrimSuffix, inflected, &diff).unwrap();
//! assert_eq!(recovered, lemma);
//! ```
//!
//! ## Variants
//!
//! * [`EncoderType::TrimSuffix`] — reuse a common prefix, cut trailing bytes.
//!   The compact choice for suffix-inflecting languages.
//! * [`EncoderType::TrimPrefixAndSuffix`] — reuse shared bytes at both ends.
//! * [`EncoderType::TrimInfixAndSuffix`] — additionally reuse the best shared
//!   run found anywhere, for irregular stems like `Niemcami -> Niemiec`.
//!
//! The variant is fixed per dictionary (recorded in its metadata) and must be
//! identical at encode and decode time; a diff is meaningless to any other
//! variant.
//!
//! ## Guarantees
//!
//! For every variant and every pair of byte sequences, including empty and
//! fully disjoint ones, `decode_base_form(v, src, encode(v, src, dst))`
//! returns exactly `dst`. Counts that exceed what one header byte can
//! represent degrade to more literal bytes, never to lost data. Inputs are
//! raw bytes; character encoding is the dictionary layer's concern.
//!
//! All operations are pure and stateless: they read their input slices,
//! allocate a fresh output, and retain nothing across calls, so concurrent
//! use needs no coordination.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod common;
mod cursor;
mod encoder;
mod error;
mod infix;
mod prefix_suffix;
mod suffix;
mod units;

pub use encoder::EncoderType;
pub use error::{Result, StemDiffError};

/// Encodes `target` (the lemma) as a diff against `source` (the inflected
/// form).
///
/// Called once per (inflected form, lemma) pair at dictionary build time; the
/// returned bytes are what the dictionary persists next to the inflected
/// form. Encoding cannot fail: when the forms share nothing usable, the diff
/// simply carries the whole target as literal bytes.
///
/// # Examples
///
/// ```
/// use stemdiff::{encode, EncoderType};
///
/// let diff = encode(EncoderType::TrimSuffix, b"abc", b"ab");
/// assert_eq!(diff, b"B"); // cut one byte, append nothing
/// ```
pub fn encode(encoder: EncoderType, source: &[u8], target: &[u8]) -> Vec<u8> {
    encoder.encode(source, target)
}

/// Reconstructs the base form from a matched inflected form and its stored
/// diff.
///
/// Called once per matched entry at lookup time, with the variant selector
/// read from the dictionary metadata. Either the complete base form is
/// returned or an error; no partial output is ever produced.
///
/// # Errors
///
/// Returns [`StemDiffError`] if the diff is structurally invalid for the
/// selected variant: shorter than the variant's header, a count byte outside
/// the coded range, a trim/keep count exceeding the source bounds, or a
/// truncated literal fragment. These indicate a corrupted dictionary or a
/// selector mismatch, not a transient condition.
///
/// # Examples
///
/// ```
/// use stemdiff::{decode_base_form, encode, EncoderType};
///
/// let encoder = EncoderType::TrimInfixAndSuffix;
/// let diff = encode(encoder, b"Niemcami", b"Niemiec");
/// let lemma = decode_base_form(encoder, b"Niemcami", &diff).unwrap();
/// assert_eq!(lemma, b"Niemiec");
/// ```
pub fn decode_base_form(encoder: EncoderType, source: &[u8], diff: &[u8]) -> Result<Vec<u8>> {
    encoder.decode(source, diff)
}
