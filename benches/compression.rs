use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rlepack::config::CodecConfig;
use rlepack::pipeline;

fn bench_encode(c: &mut Criterion) {
	let zeroes = vec![0u8; 8 * 1024 * 1024];
	let mixed: Vec<u8> = (0..8 * 1024 * 1024u32)
		.map(|i| if (i / 64) % 2 == 0 { (i % 251) as u8 } else { 0 })
		.collect();
	let config = CodecConfig::default();

	let mut group = c.benchmark_group("encode");
	group.throughput(Throughput::Bytes(zeroes.len() as u64));
	for (name, data) in [("zeroes", &zeroes), ("mixed", &mixed)] {
		group.bench_function(name, |b| {
			b.iter(|| {
				let mut input = std::io::Cursor::new(data);
				let mut output: Vec<u8> = Vec::new();
				let _ = pipeline::encode(&mut input, &mut output, &config).unwrap();
			});
		});
	}
	group.finish();
}

fn bench_decode(c: &mut Criterion) {
	let encoded = rlepack::encode_data(&vec![0u8; 8 * 1024 * 1024]);
	let config = CodecConfig::default();

	let mut group = c.benchmark_group("decode");
	group.throughput(Throughput::Bytes(8 * 1024 * 1024));
	group.bench_function("decode_zeroes", |b| {
		b.iter(|| {
			let mut input = std::io::Cursor::new(&encoded);
			let mut output: Vec<u8> = Vec::new();
			let _ = pipeline::decode(&mut input, &mut output, &config).unwrap();
		});
	});
	group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
