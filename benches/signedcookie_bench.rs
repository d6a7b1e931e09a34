#![allow(clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use signedcookie::cookie::{set_cookie_header, verify_cookie_header, CookieOptions};
use signedcookie::sign::Signer;

fn bench_sign_verify(c: &mut Criterion) {
    let signer = Signer::new().expect("signer");

    let mut group = c.benchmark_group("token");
    for size in [0usize, 16, 256, 4096] {
        let payload = vec![b'a'; size];
        let token = signer.sign(&payload);

        group.bench_with_input(BenchmarkId::new("sign", size), &payload, |b, p| {
            b.iter(|| signer.sign(p));
        });
        group.bench_with_input(BenchmarkId::new("verify", size), &token, |b, t| {
            b.iter(|| signer.verify(t).expect("verify"));
        });
    }
    group.finish();
}

fn bench_long_key(c: &mut Criterion) {
    let signer = Signer::with_key(&[0x5Au8; 1024]).expect("signer");
    let token = signer.sign(b"session=0123456789");

    c.bench_function("long_key_verify", |b| {
        b.iter(|| signer.verify(&token).expect("verify"));
    });
}

fn bench_cookie(c: &mut Criterion) {
    let signer = Signer::new().expect("signer");
    let options = CookieOptions::default();
    let set = set_cookie_header(&signer, "session", b"uid=42", &options).expect("cookie");
    let pair = set.split(';').next().expect("pair");
    let header = format!("theme=dark; {pair}; lang=en");

    c.bench_function("cookie_set", |b| {
        b.iter(|| set_cookie_header(&signer, "session", b"uid=42", &options).expect("cookie"));
    });
    c.bench_function("cookie_verify", |b| {
        b.iter(|| verify_cookie_header(&signer, &header, "session").expect("verify"));
    });
}

criterion_group!(benches, bench_sign_verify, bench_long_key, bench_cookie);
criterion_main!(benches);
