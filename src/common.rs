//! Common-region search between an inflected form and its base form.
//!
//! The encoders reduce diff size by locating byte regions the two forms
//! share: a common prefix, a common suffix, or the best common infix found
//! anywhere in the compared remainders. Prefix and suffix scans process wide
//! chunks when the `simd` feature is enabled; dictionary entries are short,
//! but batch dictionary builds run these scans millions of times.

/// Finds the length of the common prefix between two byte slices.
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    let max_len = a.len().min(b.len());
    let mut len = 0;

    #[cfg(feature = "simd")]
    {
        use wide::u8x16;

        while len + 16 <= max_len {
            let a_chunk = u8x16::new(a[len..len + 16].try_into().unwrap());
            let b_chunk = u8x16::new(b[len..len + 16].try_into().unwrap());

            if a_chunk != b_chunk {
                break;
            }
            len += 16;
        }
    }

    while len + 8 <= max_len {
        let a_chunk = u64::from_le_bytes(a[len..len + 8].try_into().unwrap());
        let b_chunk = u64::from_le_bytes(b[len..len + 8].try_into().unwrap());
        if a_chunk != b_chunk {
            break;
        }
        len += 8;
    }

    while len < max_len && a[len] == b[len] {
        len += 1;
    }

    len
}

/// Finds the length of the common suffix between two byte slices.
///
/// The first `reserved_prefix` bytes of each slice are off limits, so a
/// region already claimed by a prefix match is never counted twice when both
/// ends are trimmed.
pub fn common_suffix_len(a: &[u8], b: &[u8], reserved_prefix: usize) -> usize {
    let max_len = a
        .len()
        .min(b.len())
        .saturating_sub(reserved_prefix);
    let mut len = 0;

    #[cfg(feature = "simd")]
    {
        use wide::u8x16;

        while len + 16 <= max_len {
            let a_start = a.len() - len - 16;
            let b_start = b.len() - len - 16;
            let a_chunk = u8x16::new(a[a_start..a_start + 16].try_into().unwrap());
            let b_chunk = u8x16::new(b[b_start..b_start + 16].try_into().unwrap());

            if a_chunk != b_chunk {
                break;
            }
            len += 16;
        }
    }

    while len + 8 <= max_len {
        let a_start = a.len() - len - 8;
        let b_start = b.len() - len - 8;
        let a_chunk = u64::from_le_bytes(a[a_start..a_start + 8].try_into().unwrap());
        let b_chunk = u64::from_le_bytes(b[b_start..b_start + 8].try_into().unwrap());
        if a_chunk != b_chunk {
            break;
        }
        len += 8;
    }

    while len < max_len {
        if a[a.len() - len - 1] != b[b.len() - len - 1] {
            break;
        }
        len += 1;
    }

    len
}

/// The longest contiguous byte run appearing in both compared slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommonInfix {
    /// Start offset of the run in the first slice.
    pub start_in_a: usize,
    /// Start offset of the run in the second slice.
    pub start_in_b: usize,
    /// Run length; zero when the slices share no bytes.
    pub len: usize,
}

/// Finds the longest common substring of `a` and `b`.
///
/// Ties between equally long runs are broken deterministically: the earliest
/// start in `a` wins, then the earliest start in `b`. Encoded dictionaries
/// must be byte-reproducible across rebuilds, so the tie-break is part of the
/// contract, not an implementation detail.
///
/// Classic dynamic program over run lengths ending at each position pair,
/// with a single rolling row. Quadratic in the compared lengths, which stay
/// word-sized here.
pub fn best_common_infix(a: &[u8], b: &[u8]) -> CommonInfix {
    let mut best = CommonInfix::default();
    if a.is_empty() || b.is_empty() {
        return best;
    }

    // prev[j] = length of the common run ending at a[i-1], b[j-1].
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &byte_a) in a.iter().enumerate() {
        for (j, &byte_b) in b.iter().enumerate() {
            if byte_a == byte_b {
                let run = prev[j] + 1;
                curr[j + 1] = run;
                // Strict comparison: the first maximal run encountered has
                // the smallest end offsets, hence the earliest starts.
                if run > best.len {
                    best = CommonInfix {
                        start_in_a: i + 1 - run,
                        start_in_b: j + 1 - run,
                        len: run,
                    };
                }
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix_len(b"Hello, World!", b"Hello, Rust!"), 7);
        assert_eq!(common_prefix_len(b"abc", b"abc"), 3);
        assert_eq!(common_prefix_len(b"abc", b"xyz"), 0);
        assert_eq!(common_prefix_len(b"", b"abc"), 0);
        assert_eq!(common_prefix_len(b"", b""), 0);
    }

    #[test]
    fn test_common_prefix_long() {
        let a = vec![7u8; 100];
        let mut b = a.clone();
        b[63] = 8;
        assert_eq!(common_prefix_len(&a, &b), 63);
        assert_eq!(common_prefix_len(&a, &a), 100);
    }

    #[test]
    fn test_common_suffix() {
        assert_eq!(common_suffix_len(b"Hello, World!", b"Howdy, World!", 0), 8);
        assert_eq!(common_suffix_len(b"abc", b"abc", 0), 3);
        assert_eq!(common_suffix_len(b"abc", b"xyz", 0), 0);
        assert_eq!(common_suffix_len(b"", b"", 0), 0);
    }

    #[test]
    fn test_common_suffix_reserved_prefix() {
        // Without the reservation the whole string would count twice.
        assert_eq!(common_suffix_len(b"abc", b"abc", 3), 0);
        assert_eq!(common_suffix_len(b"aabc", b"abc", 1), 2);
        // Reservation larger than either slice saturates to zero.
        assert_eq!(common_suffix_len(b"ab", b"ab", 5), 0);
    }

    #[test]
    fn test_best_infix_basic() {
        let infix = best_common_infix(b"Niemcami", b"Niemiec");
        assert_eq!(infix.start_in_a, 0);
        assert_eq!(infix.start_in_b, 0);
        assert_eq!(infix.len, 4); // "Niem"
    }

    #[test]
    fn test_best_infix_middle() {
        let infix = best_common_infix(b"xxabcdyy", b"qqabcdpp");
        assert_eq!(infix.start_in_a, 2);
        assert_eq!(infix.start_in_b, 2);
        assert_eq!(infix.len, 4); // "abcd"
    }

    #[test]
    fn test_best_infix_none() {
        assert_eq!(best_common_infix(b"abc", b"xyz"), CommonInfix::default());
        assert_eq!(best_common_infix(b"", b"abc"), CommonInfix::default());
        assert_eq!(best_common_infix(b"abc", b""), CommonInfix::default());
    }

    #[test]
    fn test_best_infix_tie_break() {
        // Two runs of length 2 in a ("ab" at 0, "cd" at 3); earliest in a wins.
        let infix = best_common_infix(b"abxcd", b"cdxab");
        assert_eq!(infix.len, 2);
        assert_eq!(infix.start_in_a, 0);
        assert_eq!(infix.start_in_b, 3);

        // Same run twice in b; earliest in b wins.
        let infix = best_common_infix(b"ab", b"xabyab");
        assert_eq!(infix.len, 2);
        assert_eq!(infix.start_in_a, 0);
        assert_eq!(infix.start_in_b, 1);
    }
}
