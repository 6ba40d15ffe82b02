//! Basic usage example for stemdiff.

use stemdiff::{decode_base_form, encode, EncoderType};

fn main() {
    // Example 1: Regular suffix inflection
    println!("=== Example 1: Suffix Inflection ===");
    let inflected = b"walking";
    let lemma = b"walk";

    let diff = encode(EncoderType::TrimSuffix, inflected, lemma);
    println!("Inflected: {:?}", String::from_utf8_lossy(inflected));
    println!("Lemma:     {:?}", String::from_utf8_lossy(lemma));
    println!("Diff:      {:?} ({} bytes)", String::from_utf8_lossy(&diff), diff.len());

    match decode_base_form(EncoderType::TrimSuffix, inflected, &diff) {
        Ok(recovered) => {
            assert_eq!(recovered, lemma);
            println!("Reconstructed: {:?}", String::from_utf8_lossy(&recovered));
        }
        Err(e) => eprintln!("Decode error: {}", e),
    }

    println!();

    // Example 2: Irregular stem, infix variant
    println!("=== Example 2: Irregular Stem ===");
    let inflected = b"Niemcami";
    let lemma = b"Niemiec";

    for (name, encoder) in [
        ("suffix only ", EncoderType::TrimSuffix),
        ("prefix+suffix", EncoderType::TrimPrefixAndSuffix),
        ("infix+suffix ", EncoderType::TrimInfixAndSuffix),
    ] {
        let diff = encode(encoder, inflected, lemma);
        let recovered = decode_base_form(encoder, inflected, &diff).unwrap();
        assert_eq!(recovered, lemma);
        println!("{}: {} diff bytes", name, diff.len());
    }

    println!();

    // Example 3: Variant selection from dictionary metadata
    println!("=== Example 3: Metadata-Driven Selection ===");
    let encoder = EncoderType::from_dictionary_flags(true, false);
    println!("use_infixes=true, use_prefixes=false -> {:?}", encoder);

    let diff = encode(encoder, inflected, lemma);
    let recovered = decode_base_form(encoder, inflected, &diff).unwrap();
    println!(
        "{} -> {}",
        String::from_utf8_lossy(inflected),
        String::from_utf8_lossy(&recovered)
    );
}
