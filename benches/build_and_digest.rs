use criterion::{black_box, criterion_group, criterion_main, Criterion};
use joytherun::builder::{AppendMode, BufferBuilder};
use joytherun::digest::{Digester, Md5, Sha256};
use joytherun::pack::{JOY, RUN, THE};
use joytherun::sign::login_url_sign;

const KB: usize = 1024;

// Function to generate some test data
fn generate_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn build_upload_string() -> usize {
    let mut buf = BufferBuilder::with_mode(50, AppendMode::CString).unwrap();
    buf.append_bytes(b"raowenyuan").unwrap();
    buf.append_bytes(b"po").unwrap();
    buf.append_packed_u32(JOY).unwrap();
    buf.append_bytes(b"1538284879").unwrap();
    buf.append_packed_u32(THE).unwrap();
    buf.append_bytes(b"153828487712981546").unwrap();
    buf.append_packed_u32(RUN).unwrap();
    buf.c_str_len()
}

fn builder_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Buffer building");

    group.bench_function("upload string (C-string mode)", |b| {
        b.iter(|| black_box(build_upload_string()))
    });

    group.bench_function("login_url_sign", |b| {
        b.iter(|| {
            login_url_sign(
                black_box("po.aspx"),
                black_box(1538284879),
                [1538284877u64, 1298, 1546],
            )
        })
    });

    group.finish();
}

fn digest_benchmarks(c: &mut Criterion) {
    let data_1k = generate_data(KB);
    let data_64k = generate_data(64 * KB);

    let mut group = c.benchmark_group("Digest comparison");

    // --- Benchmarks for 1KB Input ---
    group.bench_with_input("MD5 (1KB)", &data_1k, |b, data| {
        b.iter(|| Md5.hex_digest(black_box(data)))
    });

    group.bench_with_input("SHA-256 (1KB)", &data_1k, |b, data| {
        b.iter(|| Sha256.hex_digest(black_box(data)))
    });

    // --- Benchmarks for 64KB Input ---
    group.bench_with_input("MD5 (64KB)", &data_64k, |b, data| {
        b.iter(|| Md5.hex_digest(black_box(data)))
    });

    group.bench_with_input("SHA-256 (64KB)", &data_64k, |b, data| {
        b.iter(|| Sha256.hex_digest(black_box(data)))
    });

    group.finish();
}

criterion_group!(benches, builder_benchmarks, digest_benchmarks);
criterion_main!(benches);
