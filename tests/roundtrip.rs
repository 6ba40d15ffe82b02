//! Integration tests for stemdiff.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stemdiff::{decode_base_form, encode, EncoderType};

const ALL_ENCODERS: [EncoderType; 3] = [
    EncoderType::TrimSuffix,
    EncoderType::TrimPrefixAndSuffix,
    EncoderType::TrimInfixAndSuffix,
];

fn assert_roundtrip(encoder: EncoderType, source: &[u8], target: &[u8]) {
    let diff = encode(encoder, source, target);
    let decoded = decode_base_form(encoder, source, &diff).unwrap_or_else(|e| {
        panic!(
            "decode failed for {:?}, src={:?}, dst={:?}: {}",
            encoder,
            String::from_utf8_lossy(source),
            String::from_utf8_lossy(target),
            e
        )
    });

    assert_eq!(
        decoded,
        target,
        "roundtrip mismatch for {:?}, src={:?}, dst={:?}, diff={:?}",
        encoder,
        String::from_utf8_lossy(source),
        String::from_utf8_lossy(target),
        diff
    );
}

#[test]
fn test_dictionary_samples() {
    for encoder in ALL_ENCODERS {
        assert_roundtrip(encoder, b"", b"");
        assert_roundtrip(encoder, b"abc", b"ab");
        assert_roundtrip(encoder, b"abc", b"abx");
        assert_roundtrip(encoder, b"ab", b"abc");
        assert_roundtrip(encoder, b"xabc", b"abc");
        assert_roundtrip(encoder, b"axbc", b"abc");
        assert_roundtrip(encoder, b"axybc", b"abc");
        assert_roundtrip(encoder, b"azbc", b"abcxy");

        assert_roundtrip(encoder, b"Niemcami", b"Niemiec");
        assert_roundtrip(encoder, b"Niemiec", b"Niemcami");
    }
}

#[test]
fn test_one_side_empty() {
    for encoder in ALL_ENCODERS {
        assert_roundtrip(encoder, b"wszystko", b"");
        assert_roundtrip(encoder, b"", b"wszystko");
    }
}

#[test]
fn test_identical_forms() {
    for encoder in ALL_ENCODERS {
        assert_roundtrip(encoder, b"sein", b"sein");
    }
}

#[test]
fn test_lengths_beyond_one_code_unit() {
    // Counts above what a single header byte can represent must degrade to
    // literal bytes, never truncate.
    let long_shared: Vec<u8> = (0..400).map(|i| b'a' + (i % 20) as u8).collect();

    for encoder in ALL_ENCODERS {
        let mut source = long_shared.clone();
        source.extend_from_slice(b"ami");
        let mut target = long_shared.clone();
        target.extend_from_slice(b"ec");
        assert_roundtrip(encoder, &source, &target);

        // Disjoint and long on both sides.
        let source = vec![b'x'; 450];
        let target = vec![b'y'; 450];
        assert_roundtrip(encoder, &source, &target);
    }
}

#[test]
fn test_literal_grows_by_capping_excess() {
    // A 300-byte unshared tail cannot be trimmed with one header byte; the
    // suffix variant must fall back to carrying the full target literally
    // (one byte more than the shared-prefix encoding would have needed).
    let mut source = b"a".to_vec();
    source.extend_from_slice(&[b'x'; 300]);
    let target = b"alemma".to_vec();

    let diff = encode(EncoderType::TrimSuffix, &source, &target);
    assert_eq!(diff.len(), 1 + target.len());
    assert_roundtrip(EncoderType::TrimSuffix, &source, &target);
}

#[test]
fn test_cross_decoder_consistency() {
    // The per-variant decoder reached through EncoderType and the lookup
    // entry point must agree byte for byte.
    for encoder in ALL_ENCODERS {
        let source = b"Niemcami";
        let target = b"Niemiec";
        let diff = encode(encoder, source, target);

        let via_encoder = encoder.decode(source, &diff).unwrap();
        let via_lookup = decode_base_form(encoder, source, &diff).unwrap();
        assert_eq!(via_encoder, via_lookup);
        assert_eq!(via_lookup, target);
    }
}

#[test]
fn test_metadata_flags_select_variant() {
    let source = b"xabc";
    let target = b"abc";

    let encoder = EncoderType::from_dictionary_flags(false, true);
    assert_eq!(encoder, EncoderType::TrimPrefixAndSuffix);

    let diff = encode(encoder, source, target);
    assert_eq!(decode_base_form(encoder, source, &diff).unwrap(), target);
}

#[test]
fn test_random_sequences() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for encoder in ALL_ENCODERS {
        for _ in 0..10_000 {
            let source = random_bytes(&mut rng);
            let target = random_bytes(&mut rng);
            assert_roundtrip(encoder, &source, &target);
        }
    }
}

#[test]
fn test_random_related_sequences() {
    // Mutated copies rather than independent noise: exercises long shared
    // regions, overlapping prefix/suffix claims, and mid-word edits.
    let mut rng = StdRng::seed_from_u64(0xD1FF);

    for encoder in ALL_ENCODERS {
        for _ in 0..2_000 {
            let source = random_bytes(&mut rng);
            let mut target = source.clone();

            for _ in 0..rng.random_range(0..4) {
                if target.is_empty() {
                    break;
                }
                let at = rng.random_range(0..target.len());
                match rng.random_range(0..3) {
                    0 => target[at] = rng.random(),
                    1 => {
                        target.remove(at);
                    }
                    _ => target.insert(at, rng.random()),
                }
            }

            assert_roundtrip(encoder, &source, &target);
        }
    }
}

#[test]
fn test_malformed_diffs_rejected() {
    for encoder in ALL_ENCODERS {
        // Too short for any header.
        assert!(decode_base_form(encoder, b"abc", b"").is_err());

        // Counts far beyond the source bounds.
        let oversized = [0xF0u8, 0xF0, 0xF0, 0xF0, 0x00];
        assert!(decode_base_form(encoder, b"ab", &oversized).is_err());
    }

    // Count byte below the code base.
    assert!(decode_base_form(EncoderType::TrimSuffix, b"abc", &[0x01]).is_err());
}

#[test]
fn test_unterminated_fragment_length_rejected() {
    // A fragment length whose continuation bits never terminate must come
    // back as an error, never panic or produce a garbage length.
    let mut diff = vec![b'A'; 4];
    diff.extend_from_slice(&[0x80; 64]);
    diff.push(0x00);

    assert!(matches!(
        decode_base_form(EncoderType::TrimInfixAndSuffix, b"abc", &diff),
        Err(stemdiff::StemDiffError::MalformedDiff(_))
    ));
}

fn random_bytes(rng: &mut StdRng) -> Vec<u8> {
    let len = rng.random_range(0..=500);
    (0..len).map(|_| rng.random()).collect()
}
