//! Suffix-trim codec: reuse the common prefix, cut the rest.
//!
//! The most compact variant for suffix-inflecting languages. The diff is a
//! single trim count followed by the literal tail of the base form:
//! `abc -> ab` becomes `B` (cut one byte, append nothing), `ab -> abc`
//! becomes `Ac` (cut nothing, append `c`).

use crate::common::common_prefix_len;
use crate::cursor::ByteCursor;
use crate::error::{Result, StemDiffError};
use crate::units::{self, REMOVE_EVERYTHING};

/// Encodes `target` as a diff against `source`.
pub fn encode(source: &[u8], target: &[u8]) -> Vec<u8> {
    let shared_prefix = common_prefix_len(source, target);
    let trim = source.len() - shared_prefix;

    let mut diff = Vec::with_capacity(1 + target.len() - shared_prefix);
    if units::fits(trim) {
        units::write_count(&mut diff, trim);
        diff.extend_from_slice(&target[shared_prefix..]);
    } else {
        // The trim count cannot be shortened without the retained head of
        // the source ceasing to be a prefix of the target, so cut the whole
        // source and carry the target verbatim.
        units::write_remove_everything(&mut diff);
        diff.extend_from_slice(target);
    }
    diff
}

/// Reconstructs the base form from `source` and a stored diff.
pub fn decode(source: &[u8], diff: &[u8]) -> Result<Vec<u8>> {
    let mut cursor = ByteCursor::new(diff);
    let trim = units::read_count(&mut cursor)?;

    let keep = if trim == REMOVE_EVERYTHING {
        0
    } else {
        let trim = trim as usize;
        if trim > source.len() {
            return Err(StemDiffError::MalformedDiff(format!(
                "Trim count {} exceeds source length {}",
                trim,
                source.len()
            )));
        }
        source.len() - trim
    };

    let literal = cursor.rest();
    let mut target = Vec::with_capacity(keep + literal.len());
    target.extend_from_slice(&source[..keep]);
    target.extend_from_slice(literal);
    Ok(target)
}
