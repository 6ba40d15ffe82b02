//! stemdiff CLI - batch diff codec for dictionary word pairs
//!
//! Usage:
//!   stemdiff encode <input> -o <output> [--encoder <variant>]
//!   stemdiff decode <input> -o <output> [--encoder <variant>]
//!
//! Input is tab-separated: `inflected<TAB>lemma` for encode,
//! `inflected<TAB>hexdiff` for decode. `-` reads stdin / writes stdout.
//! Diff bytes are arbitrary (length fields can collide with tab or newline),
//! so the diff column travels as lowercase hex.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use stemdiff::{decode_base_form, encode, EncoderType};

/// Batch diff codec for dictionary word pairs
#[derive(Parser)]
#[command(name = "stemdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode lemma columns into stored diffs
    Encode {
        /// Input file with `inflected<TAB>lemma` lines, or `-` for stdin
        input: PathBuf,

        /// Output file, or `-` for stdout
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Codec variant (must match the dictionary being built)
        #[arg(short, long, value_enum, default_value = "suffix")]
        encoder: Variant,

        /// Suppress the summary line
        #[arg(short, long)]
        quiet: bool,
    },
    /// Decode stored diffs back into lemma columns
    Decode {
        /// Input file with `inflected<TAB>diff` lines, or `-` for stdin
        input: PathBuf,

        /// Output file, or `-` for stdout
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Codec variant (must match the dictionary the diffs came from)
        #[arg(short, long, value_enum, default_value = "suffix")]
        encoder: Variant,

        /// Suppress the summary line
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Variant {
    /// Trim trailing bytes only
    Suffix,
    /// Trim from both ends
    PrefixSuffix,
    /// Reuse the best shared run anywhere
    InfixSuffix,
}

impl From<Variant> for EncoderType {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Suffix => EncoderType::TrimSuffix,
            Variant::PrefixSuffix => EncoderType::TrimPrefixAndSuffix,
            Variant::InfixSuffix => EncoderType::TrimInfixAndSuffix,
        }
    }
}

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_BAD_INPUT: i32 = 2;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            encoder,
            quiet,
        } => run(&input, &output, encoder.into(), Mode::Encode, quiet),
        Commands::Decode {
            input,
            output,
            encoder,
            quiet,
        } => run(&input, &output, encoder.into(), Mode::Decode, quiet),
    };

    match result {
        Ok(()) => process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), e);

            let exit_code = if e.to_string().contains("line") {
                EXIT_BAD_INPUT
            } else {
                EXIT_ERROR
            };
            process::exit(exit_code);
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mode {
    Encode,
    Decode,
}

fn run(
    input_path: &Path,
    output_path: &Path,
    encoder: EncoderType,
    mode: Mode,
    quiet: bool,
) -> Result<()> {
    let reader = open_input(input_path)?;
    let mut writer = open_output(output_path)?;

    let start = Instant::now();
    let mut lines = 0usize;
    let mut payload_bytes = 0usize;

    for (line_no, line) in read_records(reader)?.into_iter().enumerate() {
        let (form, payload) = split_record(&line)
            .with_context(|| format!("line {}: expected `form<TAB>value`", line_no + 1))?;

        let out = match mode {
            Mode::Encode => to_hex(&encode(encoder, form, payload)),
            Mode::Decode => {
                let diff = parse_hex(payload)
                    .with_context(|| format!("line {}: invalid hex diff", line_no + 1))?;
                decode_base_form(encoder, form, &diff)
                    .with_context(|| format!("line {}: cannot decode diff", line_no + 1))?
            }
        };

        writer.write_all(form)?;
        writer.write_all(b"\t")?;
        writer.write_all(&out)?;
        writer.write_all(b"\n")?;

        lines += 1;
        payload_bytes += out.len();
    }

    writer.flush().context("Failed to flush output")?;

    if !quiet {
        let verb = match mode {
            Mode::Encode => "Encoded",
            Mode::Decode => "Decoded",
        };
        eprintln!(
            "{} {} entries ({} payload bytes) in {:.2?}",
            verb.bright_green().bold(),
            lines,
            payload_bytes,
            start.elapsed()
        );
    }

    Ok(())
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Reads newline-delimited records as raw bytes; diffs need not be UTF-8.
fn read_records(mut reader: Box<dyn BufRead>) -> Result<Vec<Vec<u8>>> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .context("Failed to read input")?;

    Ok(data
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .map(<[u8]>::to_vec)
        .collect())
}

fn split_record(line: &[u8]) -> Option<(&[u8], &[u8])> {
    let tab = line.iter().position(|&b| b == b'\t')?;
    Some((&line[..tab], &line[tab + 1..]))
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn to_hex(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize]);
        out.push(HEX_DIGITS[(byte & 0x0F) as usize]);
    }
    out
}

fn parse_hex(text: &[u8]) -> Result<Vec<u8>> {
    if text.len() % 2 != 0 {
        bail!("odd-length hex value");
    }
    text.chunks_exact(2)
        .map(|pair| Ok(hex_val(pair[0])? << 4 | hex_val(pair[1])?))
        .collect()
}

fn hex_val(digit: u8) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => bail!("invalid hex digit 0x{:02x}", digit),
    }
}
