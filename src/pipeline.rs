use crate::config::CodecConfig;
use crate::decoder::{self, StreamInfo};
use crate::encoder;
use crate::error::RleError;
use crate::stats::CodecStats;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

pub fn encode<R: Read, W: Write>(
	reader: &mut R,
	writer: &mut W,
	config: &CodecConfig,
) -> Result<CodecStats, RleError> {
	config.validate()?;
	let start = Instant::now();

	let mut source = BufReader::with_capacity(config.buffer_size, reader);
	let mut sink = BufWriter::with_capacity(config.buffer_size, writer);
	let stats = encoder::encode(&mut source, &mut sink)?;
	sink.flush()?;

	info!(
		"encoded {} -> {} bytes in {} records ({:.2}x, {:.2?})",
		stats.bytes_in,
		stats.bytes_out,
		stats.records(),
		stats.ratio(),
		start.elapsed()
	);
	Ok(stats)
}

pub fn decode<R: Read, W: Write>(
	reader: &mut R,
	writer: &mut W,
	config: &CodecConfig,
) -> Result<CodecStats, RleError> {
	config.validate()?;
	let start = Instant::now();

	let mut source = BufReader::with_capacity(config.buffer_size, reader);
	let mut sink = BufWriter::with_capacity(config.buffer_size, writer);
	let stats = decoder::decode(&mut source, &mut sink, config.truncation)?;
	sink.flush()?;

	info!(
		"decoded {} -> {} bytes from {} records ({:.2?})",
		stats.bytes_in,
		stats.bytes_out,
		stats.records(),
		start.elapsed()
	);
	Ok(stats)
}

pub fn inspect<R: Read>(reader: &mut R) -> Result<StreamInfo, RleError> {
	let mut source = BufReader::new(reader);
	let info = decoder::inspect(&mut source)?;
	debug!("inspected {} records, crc32 {:08x}", info.stats.records(), info.crc32);
	Ok(info)
}

/// Rejects path pairs that cannot name a distinct input and output.
fn check_paths(input: &Path, output: &Path) -> Result<(), RleError> {
	if input.as_os_str().is_empty() {
		return Err(RleError::InvalidArgument("input path is empty".to_string()));
	}
	if output.as_os_str().is_empty() {
		return Err(RleError::InvalidArgument("output path is empty".to_string()));
	}
	let same_file = input == output
		|| match (fs::canonicalize(input), fs::canonicalize(output)) {
			(Ok(a), Ok(b)) => a == b,
			// a path that does not exist yet cannot alias the other
			_ => false,
		};
	if same_file {
		return Err(RleError::InvalidArgument(format!(
			"input and output are the same file: {} and {}",
			input.display(),
			output.display()
		)));
	}
	Ok(())
}

fn progress_bar(len: u64, config: &CodecConfig) -> ProgressBar {
	if !config.show_progress {
		return ProgressBar::hidden();
	}
	let pb = ProgressBar::new(len);
	if let Ok(style) = ProgressStyle::default_bar()
		.template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
	{
		pb.set_style(style.progress_chars("#>-"));
	}
	pb
}

pub fn encode_file(input: &Path, output: &Path, config: &CodecConfig) -> Result<CodecStats, RleError> {
	check_paths(input, output)?;
	debug!("encoding {} to {}", input.display(), output.display());

	let in_file = File::open(input)?;
	let pb = progress_bar(in_file.metadata()?.len(), config);
	let mut reader = pb.wrap_read(in_file);
	let mut out_file = File::create(output)?;

	let stats = encode(&mut reader, &mut out_file, config)?;
	pb.finish_with_message("Encoding finished");
	Ok(stats)
}

pub fn decode_file(input: &Path, output: &Path, config: &CodecConfig) -> Result<CodecStats, RleError> {
	check_paths(input, output)?;
	debug!("decoding {} to {}", input.display(), output.display());

	let in_file = File::open(input)?;
	let pb = progress_bar(in_file.metadata()?.len(), config);
	let mut reader = pb.wrap_read(in_file);
	let mut out_file = File::create(output)?;

	let stats = decode(&mut reader, &mut out_file, config)?;
	pb.finish_with_message("Decoding finished");
	Ok(stats)
}

pub fn inspect_file(input: &Path) -> Result<StreamInfo, RleError> {
	if input.as_os_str().is_empty() {
		return Err(RleError::InvalidArgument("input path is empty".to_string()));
	}
	let mut in_file = File::open(input)?;
	inspect(&mut in_file)
}

/// Outcome of encoding some input and decoding it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
	pub original_size: u64,
	pub original_crc32: u32,
	pub encoded_size: u64,
	pub decoded: StreamInfo,
}

impl VerifyReport {
	pub fn is_match(&self) -> bool {
		self.decoded.decoded_size() == self.original_size && self.decoded.crc32 == self.original_crc32
	}
}

/// Encodes `reader` in memory, decodes the result and compares length and
/// CRC32 with the original.
pub fn verify<R: Read>(reader: &mut R) -> Result<VerifyReport, RleError> {
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;

	let mut encoded: Vec<u8> = Vec::with_capacity(buffer.len());
	encoder::encode(&mut buffer.as_slice(), &mut encoded)?;
	let decoded = decoder::inspect(&mut encoded.as_slice())?;

	let report = VerifyReport {
		original_size: buffer.len() as u64,
		original_crc32: crc32fast::hash(&buffer),
		encoded_size: encoded.len() as u64,
		decoded,
	};
	if report.is_match() {
		debug!("round trip of {} bytes verified", report.original_size);
	} else {
		warn!(
			"round trip mismatch: {} bytes crc32 {:08x}, decoded {} bytes crc32 {:08x}",
			report.original_size,
			report.original_crc32,
			report.decoded.decoded_size(),
			report.decoded.crc32
		);
	}
	Ok(report)
}

pub fn verify_file(input: &Path) -> Result<VerifyReport, RleError> {
	if input.as_os_str().is_empty() {
		return Err(RleError::InvalidArgument("input path is empty".to_string()));
	}
	let mut in_file = File::open(input)?;
	verify(&mut in_file)
}
