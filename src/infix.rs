//! Infix+suffix-trim codec: reuse the best shared run found anywhere.
//!
//! Irregular inflection moves the shared material away from the word edges
//! (`Niemcami -> Niemiec` shares `Niem` and little else that prefix or
//! suffix anchoring can reach). After stripping the common suffix, this
//! variant locates the longest shared run anywhere in the remainders and
//! stores only the base-form bytes around it.
//!
//! Diff layout: four count bytes (infix start in the source, infix start in
//! the base form, infix length, kept suffix length), then the varint-framed
//! literal fragment preceding the infix, then the trailing fragment.

use crate::common::{best_common_infix, common_suffix_len};
use crate::cursor::ByteCursor;
use crate::error::{Result, StemDiffError};
use crate::units;

/// Encodes `target` as a diff against `source`.
pub fn encode(source: &[u8], target: &[u8]) -> Vec<u8> {
    let keep_suffix = units::cap(common_suffix_len(source, target, 0));
    let src_head = &source[..source.len() - keep_suffix];
    let dst_head = &target[..target.len() - keep_suffix];

    let mut infix = best_common_infix(src_head, dst_head);
    // Start offsets are positions, not lengths; an unrepresentable start
    // cannot be capped, so fall back to the empty infix and carry the whole
    // head literally.
    if !units::fits(infix.start_in_a) || !units::fits(infix.start_in_b) {
        infix = Default::default();
    }
    infix.len = units::cap(infix.len);

    let frag_before = &dst_head[..infix.start_in_b];
    let frag_after = &dst_head[infix.start_in_b + infix.len..];

    let mut diff = Vec::with_capacity(4 + 2 + frag_before.len() + frag_after.len());
    units::write_count(&mut diff, infix.start_in_a);
    units::write_count(&mut diff, infix.start_in_b);
    units::write_count(&mut diff, infix.len);
    units::write_count(&mut diff, keep_suffix);
    units::write_varint(&mut diff, frag_before.len() as u64);
    diff.extend_from_slice(frag_before);
    diff.extend_from_slice(frag_after);
    diff
}

/// Reconstructs the base form from `source` and a stored diff.
pub fn decode(source: &[u8], diff: &[u8]) -> Result<Vec<u8>> {
    let mut cursor = ByteCursor::new(diff);
    let infix_start = units::read_count(&mut cursor)? as usize;
    let dst_start = units::read_count(&mut cursor)? as usize;
    let infix_len = units::read_count(&mut cursor)? as usize;
    let keep_suffix = units::read_count(&mut cursor)? as usize;

    if keep_suffix > source.len() {
        return Err(StemDiffError::MalformedDiff(format!(
            "Keep suffix {} exceeds source length {}",
            keep_suffix,
            source.len()
        )));
    }
    let head_len = source.len() - keep_suffix;
    if infix_start + infix_len > head_len {
        return Err(StemDiffError::MalformedDiff(format!(
            "Infix {}..{} exceeds source head length {}",
            infix_start,
            infix_start + infix_len,
            head_len
        )));
    }

    let before_len = units::read_varint(&mut cursor)? as usize;
    // The encoder always splits the fragments exactly at the infix position
    // in the base form; a header disagreeing with its own framing is corrupt.
    if dst_start != before_len {
        return Err(StemDiffError::MalformedDiff(format!(
            "Infix position {} disagrees with fragment length {}",
            dst_start, before_len
        )));
    }
    let frag_before = cursor.read_bytes(before_len)?;
    let frag_after = cursor.rest();

    let mut target =
        Vec::with_capacity(before_len + infix_len + frag_after.len() + keep_suffix);
    target.extend_from_slice(frag_before);
    target.extend_from_slice(&source[infix_start..infix_start + infix_len]);
    target.extend_from_slice(frag_after);
    target.extend_from_slice(&source[source.len() - keep_suffix..]);
    Ok(target)
}
