//! Prefix+suffix-trim codec: reuse shared bytes at both ends.
//!
//! Handles languages that inflect with prefixes as well as endings (for
//! example `xabc -> abc`). The header carries three counts: bytes of the
//! source kept at the front, bytes cut from its middle-to-end region, and
//! bytes kept at the back. Only the unshared middle of the base form is
//! stored literally.

use crate::common::{common_prefix_len, common_suffix_len};
use crate::cursor::ByteCursor;
use crate::error::{Result, StemDiffError};
use crate::units;

/// Encodes `target` as a diff against `source`.
pub fn encode(source: &[u8], target: &[u8]) -> Vec<u8> {
    let shared_prefix = common_prefix_len(source, target);
    let shared_suffix = common_suffix_len(source, target, shared_prefix);

    // Keep counts cap safely: keeping less of a shared region only moves
    // bytes into the literal middle.
    let keep_prefix = units::cap(shared_prefix);
    let keep_suffix = units::cap(shared_suffix);
    let cut_middle = units::cap(source.len() - keep_prefix - keep_suffix);

    let literal = &target[keep_prefix..target.len() - keep_suffix];
    let mut diff = Vec::with_capacity(3 + literal.len());
    units::write_count(&mut diff, keep_prefix);
    units::write_count(&mut diff, cut_middle);
    units::write_count(&mut diff, keep_suffix);
    diff.extend_from_slice(literal);
    diff
}

/// Reconstructs the base form from `source` and a stored diff.
pub fn decode(source: &[u8], diff: &[u8]) -> Result<Vec<u8>> {
    let mut cursor = ByteCursor::new(diff);
    let keep_prefix = units::read_count(&mut cursor)? as usize;
    let cut_middle = units::read_count(&mut cursor)? as usize;
    let keep_suffix = units::read_count(&mut cursor)? as usize;

    if keep_prefix + keep_suffix > source.len() {
        return Err(StemDiffError::MalformedDiff(format!(
            "Keep counts {}+{} exceed source length {}",
            keep_prefix,
            keep_suffix,
            source.len()
        )));
    }
    if cut_middle > source.len() {
        return Err(StemDiffError::MalformedDiff(format!(
            "Cut count {} exceeds source length {}",
            cut_middle,
            source.len()
        )));
    }

    let literal = cursor.rest();
    let mut target = Vec::with_capacity(keep_prefix + literal.len() + keep_suffix);
    target.extend_from_slice(&source[..keep_prefix]);
    target.extend_from_slice(literal);
    target.extend_from_slice(&source[source.len() - keep_suffix..]);
    Ok(target)
}
