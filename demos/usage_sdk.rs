use rlepack::config::CodecConfig;
use rlepack::pipeline;

fn main() {
	let data = b"hello hello hellooooooooooooooo!!!!".to_vec();
	let mut input = std::io::Cursor::new(data.clone());
	let mut encoded: Vec<u8> = Vec::new();
	let cfg = CodecConfig::default();
	let stats = pipeline::encode(&mut input, &mut encoded, &cfg).unwrap();
	println!(
		"encoded {} -> {} ({} repeat, {} literal records)",
		stats.bytes_in, stats.bytes_out, stats.repeat_records, stats.literal_records
	);

	let mut enc_cur = std::io::Cursor::new(encoded);
	let mut restored: Vec<u8> = Vec::new();
	pipeline::decode(&mut enc_cur, &mut restored, &cfg).unwrap();
	println!("restored {} bytes", restored.len());

	if restored == data {
		println!("SUCCESS! The original and the encoded+decoded data are equal");
	} else {
		println!("FAILURE! The original and the encoded+decoded data are NOT equal");
		std::process::exit(1);
	}
}
