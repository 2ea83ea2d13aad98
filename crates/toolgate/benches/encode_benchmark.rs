//! HS256 encoding benchmark comparing toolgate vs jsonwebtoken
//!
//! Measures link signing for a small and a large claim set, plus full
//! authentication URL generation.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use toolgate::{AuthLink, ClaimSet, SigningKey, TokenEncoder};

const SECRET: &str = "benchmark-secret-with-enough-entropy";

/// Claim set scenarios
fn scenarios() -> Vec<(&'static str, ClaimSet)> {
    let small = ClaimSet::new()
        .with_subject("1234567890")
        .claim("name", "John Doe")
        .with_issued_at(1_516_239_022);

    let mut large = ClaimSet::new()
        .with_issuer("app-core")
        .with_audience("https://localhost:30411")
        .with_not_before(1_753_368_305)
        .with_expiration(1_753_968_245)
        .with_issued_at(1_753_368_305);
    for idx in 0..32 {
        large.insert(format!("app:attr{idx}"), format!("value-{idx}"));
    }

    vec![("small", small), ("large", large)]
}

fn benchmark_encoders(c: &mut Criterion) {
    let encoder = TokenEncoder::new(SigningKey::hs256(SECRET).unwrap());
    let header = jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256);
    let key = jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes());

    let mut group = c.benchmark_group("encode");
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(100);

    for (name, claims) in scenarios() {
        group.bench_function(format!("toolgate-{name}"), |b| {
            b.iter(|| encoder.encode(black_box(&claims)).unwrap());
        });

        group.bench_function(format!("jsonwebtoken-{name}"), |b| {
            b.iter(|| jsonwebtoken::encode(&header, black_box(&claims), &key).unwrap());
        });
    }

    group.finish();
}

fn benchmark_auth_link(c: &mut Criterion) {
    let (_, claims) = scenarios().remove(1);
    let link = AuthLink::new(
        "https://auth.example.com/api/auth/token",
        "https://auth.example.com/users",
        claims,
        SigningKey::hs256(SECRET).unwrap(),
    );

    c.bench_function("auth-link", |b| {
        b.iter(|| black_box(&link).generate().unwrap());
    });
}

criterion_group!(benches, benchmark_encoders, benchmark_auth_link);
criterion_main!(benches);
