//! Benchmark suite for image assembly and inspection
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use amiigen_benches::{synthetic_keys, synthetic_records};
use amiigen_types::batch::build_batch;
use amiigen_types::cipher::{AmiiboCipher, TagCipher};
use amiigen_types::tag::{UidStrategy, assemble_plaintext, build_image, encode, inspect_image};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Benchmark the identification codec alone
fn bench_encode(c: &mut Criterion) {
	let records = synthetic_records(64);

	let mut group = c.benchmark_group("ident");
	group.throughput(Throughput::Elements(records.len() as u64));
	group.bench_function("encode", |b| {
		b.iter(|| {
			for record in &records {
				black_box(encode(black_box(record)).unwrap());
			}
		});
	});
	group.finish();
}

/// Benchmark plaintext assembly, locking and unlocking separately
fn bench_single_image(c: &mut Criterion) {
	let keys = synthetic_keys();
	let cipher = AmiiboCipher::new(&keys);
	let record = &synthetic_records(1)[0];
	let (plaintext, uid) = assemble_plaintext(record, UidStrategy::Direct).unwrap();
	let locked = build_image(record, &keys).unwrap();

	let mut group = c.benchmark_group("image");
	group.bench_function("assemble_plaintext", |b| {
		b.iter(|| black_box(assemble_plaintext(black_box(record), UidStrategy::Direct)));
	});
	group.bench_function("lock", |b| {
		b.iter(|| black_box(cipher.lock(black_box(&plaintext), &uid)));
	});
	group.bench_function("unlock", |b| {
		b.iter(|| black_box(cipher.unlock(black_box(&locked))));
	});
	group.bench_function("inspect", |b| {
		b.iter(|| black_box(inspect_image(black_box(locked.as_bytes()), &keys)));
	});
	group.finish();
}

/// Benchmark whole batches
fn bench_batch(c: &mut Criterion) {
	let keys = synthetic_keys();
	let cipher = AmiiboCipher::new(&keys);

	let mut group = c.benchmark_group("batch");
	for count in [16, 256] {
		let records = synthetic_records(count);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::new("build_batch", count), &records, |b, records| {
			b.iter(|| black_box(build_batch(black_box(records), &cipher, UidStrategy::Direct)));
		});
	}
	group.finish();
}

criterion_group!(benches, bench_encode, bench_single_image, bench_batch);
criterion_main!(benches);
