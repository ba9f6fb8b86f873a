use rand::{rngs::StdRng, Rng, SeedableRng};
use rlepack::config::{CodecConfig, TruncationPolicy};
use rlepack::format::{ControlByte, RunKind};
use rlepack::{decode_data, encode_data, inspect_data, pipeline, RleError};
use std::fs;
use tempfile::TempDir;

/// Walks an encoded stream record by record, checking every header.
fn assert_well_formed(encoded: &[u8]) {
	let mut pos = 0;
	while pos < encoded.len() {
		let control = ControlByte::from_byte(encoded[pos]);
		assert!(!control.is_empty(), "zero-length record at {}", pos);
		pos += 1 + control.payload_len();
	}
	assert_eq!(pos, encoded.len(), "record overruns the stream");
}

fn random_runs(rng: &mut StdRng, len: usize) -> Vec<u8> {
	let mut data: Vec<u8> = Vec::with_capacity(len);
	while data.len() < len {
		let value: u8 = rng.gen_range(0..4);
		let run = if rng.gen_bool(0.3) { rng.gen_range(2..300) } else { 1 };
		data.extend(std::iter::repeat(value).take(run.min(len - data.len())));
	}
	data
}

#[test]
fn round_trip_small_buffer() {
	let input_data = (0..1024u32).flat_map(|x| x.to_le_bytes()).collect::<Vec<_>>();
	let mut reader = std::io::Cursor::new(input_data.clone());
	let mut encoded: Vec<u8> = Vec::new();
	let cfg = CodecConfig::default();
	pipeline::encode(&mut reader, &mut encoded, &cfg).unwrap();

	let mut enc_reader = std::io::Cursor::new(encoded);
	let mut restored: Vec<u8> = Vec::new();
	pipeline::decode(&mut enc_reader, &mut restored, &cfg).unwrap();
	assert_eq!(restored, input_data);
}

#[test]
fn round_trip_random_inputs() {
	let mut rng = StdRng::seed_from_u64(0x5eed);
	for len in [0usize, 1, 2, 3, 126, 127, 128, 129, 254, 255, 1000, 4096] {
		let uniform: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
		let runs = random_runs(&mut rng, len);

		for data in [uniform, runs] {
			let encoded = encode_data(&data);
			assert_well_formed(&encoded);
			assert_eq!(decode_data(&encoded).unwrap(), data, "len {}", len);
		}
	}
}

#[test]
fn run_counts_match_input_shape() {
	for len in [1usize, 127, 128, 254, 255, 1000] {
		let same = vec![0xAAu8; len];
		let encoded = encode_data(&same);
		let expected_records = (len + 126) / 127;
		assert_eq!(encoded.len(), expected_records * 2);
		let info = inspect_data(&encoded).unwrap();
		assert_eq!(info.stats.repeat_records, expected_records as u64);
		assert_eq!(info.stats.literal_records, 0);
	}

	for len in [2usize, 127, 128, 500] {
		let distinct: Vec<u8> = (0..len).map(|i| (i % 256) as u8).collect();
		let encoded = encode_data(&distinct);
		let info = inspect_data(&encoded).unwrap();
		assert_eq!(info.stats.literal_records, ((len + 126) / 127) as u64);
		assert_eq!(info.stats.repeat_records, 0);
	}
}

#[test]
fn mode_bit_predicts_payload() {
	let mut rng = StdRng::seed_from_u64(42);
	let data = random_runs(&mut rng, 5000);
	let encoded = encode_data(&data);

	let mut pos = 0;
	let mut rebuilt: Vec<u8> = Vec::new();
	while pos < encoded.len() {
		let control = ControlByte::from_byte(encoded[pos]);
		match control.kind() {
			RunKind::Repeat => {
				rebuilt.extend(std::iter::repeat(encoded[pos + 1]).take(control.len()));
				pos += 2;
			}
			RunKind::Literal => {
				rebuilt.extend_from_slice(&encoded[pos + 1..pos + 1 + control.len()]);
				pos += 1 + control.len();
			}
		}
	}
	assert_eq!(rebuilt, data);
}

#[test]
fn encoding_encoded_data_is_ordinary() {
	let mut rng = StdRng::seed_from_u64(7);
	let data = random_runs(&mut rng, 3000);
	let once = encode_data(&data);
	let twice = encode_data(&once);
	assert_well_formed(&twice);
	assert_eq!(decode_data(&twice).unwrap(), once);
}

#[test]
fn file_round_trip() {
	let temp_dir = TempDir::new().unwrap();
	let input_path = temp_dir.path().join("input.bin");
	let encoded_path = temp_dir.path().join("input.rle");
	let decoded_path = temp_dir.path().join("decoded.bin");

	let mut data = b"header: ".to_vec();
	data.extend(vec![0u8; 4000]);
	data.extend(b"trailer 1234567890");
	fs::write(&input_path, &data).unwrap();

	let config = CodecConfig::default();
	let stats = pipeline::encode_file(&input_path, &encoded_path, &config).unwrap();
	assert_eq!(stats.bytes_in, data.len() as u64);
	assert!(stats.ratio() > 1.0);

	let info = pipeline::inspect_file(&encoded_path).unwrap();
	assert_eq!(info.decoded_size(), data.len() as u64);
	assert_eq!(info.crc32, crc32fast::hash(&data));

	pipeline::decode_file(&encoded_path, &decoded_path, &config).unwrap();
	assert_eq!(fs::read(&decoded_path).unwrap(), data);
}

#[test]
fn empty_and_single_byte_files() {
	let temp_dir = TempDir::new().unwrap();
	let config = CodecConfig::default();

	for (name, data) in [("empty", Vec::new()), ("single", vec![0x41u8])] {
		let input = temp_dir.path().join(name);
		let encoded = temp_dir.path().join(format!("{}.rle", name));
		let decoded = temp_dir.path().join(format!("{}.out", name));
		fs::write(&input, &data).unwrap();

		pipeline::encode_file(&input, &encoded, &config).unwrap();
		pipeline::decode_file(&encoded, &decoded, &config).unwrap();
		assert_eq!(fs::read(&decoded).unwrap(), data);
	}

	assert!(fs::read(temp_dir.path().join("empty.rle")).unwrap().is_empty());
	assert_eq!(fs::read(temp_dir.path().join("single.rle")).unwrap(), vec![0x81, 0x41]);
}

#[test]
fn missing_input_is_io_error() {
	let temp_dir = TempDir::new().unwrap();
	let missing = temp_dir.path().join("does-not-exist");
	let output = temp_dir.path().join("out.rle");

	let err = pipeline::encode_file(&missing, &output, &CodecConfig::default()).unwrap_err();
	assert!(matches!(err, RleError::Io(_)));
}

#[test]
fn invalid_paths_rejected_before_io() {
	let temp_dir = TempDir::new().unwrap();
	let path = temp_dir.path().join("same.bin");
	fs::write(&path, b"keep me").unwrap();

	let err = pipeline::encode_file(&path, &path, &CodecConfig::default()).unwrap_err();
	assert!(matches!(err, RleError::InvalidArgument(_)));
	assert_eq!(fs::read(&path).unwrap(), b"keep me");

	// a different spelling of the same file must not truncate it either
	fs::create_dir(temp_dir.path().join("sub")).unwrap();
	let alias = temp_dir.path().join("sub").join("..").join("same.bin");
	let err = pipeline::encode_file(&path, &alias, &CodecConfig::default()).unwrap_err();
	assert!(matches!(err, RleError::InvalidArgument(_)));
	let err = pipeline::decode_file(&alias, &path, &CodecConfig::default()).unwrap_err();
	assert!(matches!(err, RleError::InvalidArgument(_)));
	assert_eq!(fs::read(&path).unwrap(), b"keep me");
}

#[test]
fn verify_file_round_trip() {
	let temp_dir = TempDir::new().unwrap();
	let mut rng = StdRng::seed_from_u64(99);

	for (name, data) in [
		("empty", Vec::new()),
		("single", vec![0x41u8]),
		("runs", random_runs(&mut rng, 10_000)),
	] {
		let path = temp_dir.path().join(name);
		fs::write(&path, &data).unwrap();

		let report = pipeline::verify_file(&path).unwrap();
		assert!(report.is_match(), "{} did not round-trip", name);
		assert_eq!(report.original_size, data.len() as u64);
		assert_eq!(report.original_crc32, crc32fast::hash(&data));
		assert_eq!(report.encoded_size, encode_data(&data).len() as u64);
	}

	let err = pipeline::verify_file(&temp_dir.path().join("missing")).unwrap_err();
	assert!(matches!(err, RleError::Io(_)));
}

#[test]
fn truncated_file_policies() {
	let temp_dir = TempDir::new().unwrap();
	let encoded = temp_dir.path().join("cut.rle");
	let decoded = temp_dir.path().join("cut.out");

	let mut stream = encode_data(b"xxxxxxxxabcdef");
	stream.pop();
	fs::write(&encoded, &stream).unwrap();

	let err = pipeline::decode_file(&encoded, &decoded, &CodecConfig::default()).unwrap_err();
	assert!(matches!(err, RleError::MalformedStream { expected: 6, actual: 5, .. }));

	let lenient = CodecConfig::default().with_truncation(TruncationPolicy::Lenient);
	pipeline::decode_file(&encoded, &decoded, &lenient).unwrap();
	assert_eq!(fs::read(&decoded).unwrap(), b"xxxxxxxxabcde");
}
