//! Byte-level coding primitives: offset-coded count bytes and the varint
//! framing for literal fragments.
//!
//! Every trim/keep count in a diff header occupies exactly one byte, stored
//! as an offset from ASCII `A` so that small counts land in the printable
//! range and the header stays legible in dictionary dumps. One byte bounds a
//! count at [`MAX_COUNT`]; encoders cap larger counts and compensate with
//! literal bytes, so decoding a header is O(1) regardless of input length.

use crate::cursor::ByteCursor;
use crate::error::{Result, StemDiffError};

/// Base value added to every count byte.
pub const CODE_BASE: u8 = b'A';

/// Marker count meaning "discard all of the source form".
///
/// The suffix-only variant transmits a trim count, and a trim count larger
/// than [`MAX_COUNT`] cannot be shortened without breaking reconstruction
/// (the retained head of the source would no longer be a prefix of the
/// target). The topmost representable value is therefore reserved to mean
/// the entire source is discarded and the target carried verbatim.
pub const REMOVE_EVERYTHING: u8 = u8::MAX - CODE_BASE;

/// Largest count representable by a single code unit.
pub const MAX_COUNT: u8 = REMOVE_EVERYTHING - 1;

/// Number of value bits per byte in varint encoding.
const VARINT_BITS: u8 = 7;

/// Mask for extracting varint value bits.
const VARINT_MASK: u64 = (1 << VARINT_BITS) - 1;

/// Caps a count at [`MAX_COUNT`].
#[inline]
pub fn cap(count: usize) -> usize {
    count.min(MAX_COUNT as usize)
}

/// Returns true if `count` fits in a single code unit.
#[inline]
pub fn fits(count: usize) -> bool {
    count <= MAX_COUNT as usize
}

/// Appends one count byte to `out`.
///
/// `count` must already be capped; values above [`REMOVE_EVERYTHING`] would
/// wrap past the byte range.
#[inline]
pub fn write_count(out: &mut Vec<u8>, count: usize) {
    debug_assert!(count <= REMOVE_EVERYTHING as usize);
    out.push(CODE_BASE + count as u8);
}

/// Appends the remove-everything marker to `out`.
#[inline]
pub fn write_remove_everything(out: &mut Vec<u8>) {
    out.push(CODE_BASE + REMOVE_EVERYTHING);
}

/// Reads one count byte from the cursor.
///
/// Bytes below [`CODE_BASE`] cannot have been produced by an encoder and are
/// rejected as malformed.
pub fn read_count(cursor: &mut ByteCursor<'_>) -> Result<u8> {
    let byte = cursor.read_u8()?;
    if byte < CODE_BASE {
        return Err(StemDiffError::MalformedDiff(format!(
            "Count byte 0x{:02x} below code base",
            byte
        )));
    }
    Ok(byte - CODE_BASE)
}

/// Writes a variable-length integer to `out`.
///
/// Each byte stores 7 bits of the value; the high bit marks continuation.
pub fn write_varint(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte_val = (value & VARINT_MASK) as u8;
        value >>= VARINT_BITS;

        if value == 0 {
            out.push(byte_val);
            break;
        } else {
            out.push(byte_val | 0x80);
        }
    }
}

/// Reads a variable-length integer from the cursor.
///
/// A u64 spans at most ten varint bytes; a continuation chain running past
/// that is malformed, not a longer value.
pub fn read_varint(cursor: &mut ByteCursor<'_>) -> Result<u64> {
    let mut value = 0u64;
    let mut shift = 0u8;

    loop {
        let byte = cursor.read_u8()?;
        let more = (byte & 0x80) != 0;
        let byte_val = (byte & 0x7F) as u64;

        if shift >= 64 {
            return Err(StemDiffError::MalformedDiff(
                "Varint length field does not terminate".to_string(),
            ));
        }
        value |= byte_val << shift;
        shift += VARINT_BITS;

        if !more {
            break;
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_roundtrip() {
        let mut out = Vec::new();
        write_count(&mut out, 0);
        write_count(&mut out, 25);
        write_count(&mut out, MAX_COUNT as usize);
        write_remove_everything(&mut out);

        assert_eq!(out[0], b'A');
        assert_eq!(out[1], b'Z');
        assert_eq!(out[3], u8::MAX);

        let mut cur = ByteCursor::new(&out);
        assert_eq!(read_count(&mut cur).unwrap(), 0);
        assert_eq!(read_count(&mut cur).unwrap(), 25);
        assert_eq!(read_count(&mut cur).unwrap(), MAX_COUNT);
        assert_eq!(read_count(&mut cur).unwrap(), REMOVE_EVERYTHING);
    }

    #[test]
    fn test_count_below_base_rejected() {
        let mut cur = ByteCursor::new(&[0x20]);
        assert!(matches!(
            read_count(&mut cur),
            Err(StemDiffError::MalformedDiff(_))
        ));
    }

    #[test]
    fn test_cap() {
        assert_eq!(cap(10), 10);
        assert_eq!(cap(MAX_COUNT as usize), MAX_COUNT as usize);
        assert_eq!(cap(100_000), MAX_COUNT as usize);
        assert!(fits(MAX_COUNT as usize));
        assert!(!fits(MAX_COUNT as usize + 1));
    }

    #[test]
    fn test_varint_roundtrip() {
        let mut out = Vec::new();
        write_varint(&mut out, 0);
        write_varint(&mut out, 127);
        write_varint(&mut out, 128);
        write_varint(&mut out, 16383);

        let mut cur = ByteCursor::new(&out);
        assert_eq!(read_varint(&mut cur).unwrap(), 0);
        assert_eq!(read_varint(&mut cur).unwrap(), 127);
        assert_eq!(read_varint(&mut cur).unwrap(), 128);
        assert_eq!(read_varint(&mut cur).unwrap(), 16383);
    }

    #[test]
    fn test_varint_truncated() {
        // Continuation bit set but no following byte.
        let mut cur = ByteCursor::new(&[0x80]);
        assert_eq!(
            read_varint(&mut cur),
            Err(StemDiffError::UnexpectedEndOfData)
        );
    }

    #[test]
    fn test_varint_unterminated_rejected() {
        // A continuation chain longer than a u64 can hold must be reported,
        // not shifted past the value width.
        let mut bytes = vec![0x80u8; 64];
        bytes.push(0x00);
        let mut cur = ByteCursor::new(&bytes);
        assert!(matches!(
            read_varint(&mut cur),
            Err(StemDiffError::MalformedDiff(_))
        ));

        // Ten bytes is the longest well-formed encoding.
        let mut cur = ByteCursor::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]);
        assert_eq!(read_varint(&mut cur).unwrap(), u64::MAX);
    }
}
