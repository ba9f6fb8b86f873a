use crate::config::{CodecConfig, TruncationPolicy};
use crate::error::RleError;
use crate::pipeline;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = "Byte-oriented run-length encoding codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encodes a file
    Encode {
        /// Input file to encode
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Show a progress bar
        #[arg(short, long)]
        progress: bool,
    },
    /// Decodes a file
    Decode {
        /// Input file to decode
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// What to do when the input ends mid-record [strict, lenient]
        #[arg(short, long, default_value = "strict")]
        truncation: TruncationPolicy,

        /// Show a progress bar
        #[arg(short, long)]
        progress: bool,
    },
    /// Reports record counts and the decoded checksum of an encoded file
    Info {
        /// Encoded file to inspect
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
    /// Encodes and decodes a file in memory and checks the result matches it
    Verify {
        /// File to round-trip
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
}

pub fn run() -> Result<(), RleError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode { input, output, progress } => {
            println!("Encoding {} to {}...", input.display(), output.display());
            let config = CodecConfig::default().with_progress(*progress);

            let start = Instant::now();
            let stats = pipeline::encode_file(input, output, &config)?;
            let duration = start.elapsed();

            println!("Encoding successful!");
            println!("  Original Size:  {} bytes", stats.bytes_in);
            println!("  Encoded Size:   {} bytes", stats.bytes_out);
            println!("  Ratio:          {:.2}x", stats.ratio());
            println!("  Elapsed Time:   {:.2?}", duration);
        }
        Commands::Decode { input, output, truncation, progress } => {
            println!("Decoding {} to {}...", input.display(), output.display());
            let config = CodecConfig::default()
                .with_truncation(*truncation)
                .with_progress(*progress);

            let start = Instant::now();
            let stats = pipeline::decode_file(input, output, &config)?;
            let duration = start.elapsed();

            println!("Decoding successful!");
            println!("  Decoded Size:  {} bytes", stats.bytes_out);
            println!("  Elapsed Time:  {:.2?}", duration);
        }
        Commands::Info { input } => {
            let info = pipeline::inspect_file(input)?;
            println!("{}", input.display());
            println!("  Encoded Size:     {} bytes", info.encoded_size());
            println!("  Decoded Size:     {} bytes", info.decoded_size());
            println!("  Repeat Records:   {}", info.stats.repeat_records);
            println!("  Literal Records:  {}", info.stats.literal_records);
            println!("  Decoded CRC32:    {:08x}", info.crc32);
        }
        Commands::Verify { input } => {
            println!("Verifying round trip of {}...", input.display());
            let report = pipeline::verify_file(input)?;
            println!("  Original Size:  {} bytes (crc32 {:08x})", report.original_size, report.original_crc32);
            println!("  Encoded Size:   {} bytes", report.encoded_size);
            println!("  Decoded Size:   {} bytes (crc32 {:08x})", report.decoded.decoded_size(), report.decoded.crc32);
            if !report.is_match() {
                println!("FAILURE! The decoded output does not match {}", input.display());
                return Err(RleError::RoundTripMismatch {
                    expected: report.original_crc32,
                    actual: report.decoded.crc32,
                });
            }
            println!("SUCCESS! The decoded output matches {}", input.display());
        }
    }

    Ok(())
}
