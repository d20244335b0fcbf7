// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Criterion benchmarks for mayo-core keygen, sign, and verify.

use criterion::{criterion_group, criterion_main, Criterion};
use mayo_core::{KeyPair, MayoParams};
use signature::{Signer, Verifier};

fn bench_keygen(c: &mut Criterion, params: &'static MayoParams) {
    c.bench_function(&format!("{}/keygen", params.name), |b| {
        let mut rng = rand::rng();
        b.iter(|| KeyPair::generate(params, &mut rng).expect("keygen"));
    });
}

fn bench_sign(c: &mut Criterion, params: &'static MayoParams) {
    let mut rng = rand::rng();
    let keypair = KeyPair::generate(params, &mut rng).expect("keygen");
    let msg = b"benchmark message for signing";

    c.bench_function(&format!("{}/sign", params.name), |b| {
        b.iter(|| keypair.signing_key().try_sign(msg).expect("sign"));
    });
}

fn bench_verify(c: &mut Criterion, params: &'static MayoParams) {
    let mut rng = rand::rng();
    let keypair = KeyPair::generate(params, &mut rng).expect("keygen");
    let msg = b"benchmark message for verify";
    let sig = keypair.signing_key().try_sign(msg).expect("sign");

    c.bench_function(&format!("{}/verify", params.name), |b| {
        b.iter(|| keypair.verifying_key().verify(msg, &sig).expect("verify"));
    });
}

fn mayo1_benches(c: &mut Criterion) {
    bench_keygen(c, &MayoParams::MAYO1);
    bench_sign(c, &MayoParams::MAYO1);
    bench_verify(c, &MayoParams::MAYO1);
}

fn mayo2_benches(c: &mut Criterion) {
    bench_keygen(c, &MayoParams::MAYO2);
    bench_sign(c, &MayoParams::MAYO2);
    bench_verify(c, &MayoParams::MAYO2);
}

criterion_group!(benches, mayo1_benches, mayo2_benches);
criterion_main!(benches);
