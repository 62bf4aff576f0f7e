use std::collections::HashSet;

use curve::{Group, Point, WeierstrassCurve};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn engine() -> Ecdsa<WeierstrassCurve> {
    Ecdsa::new(WeierstrassCurve::secp256k1()).expect("standard curve")
}

fn message() -> BigUint {
    BigUint::parse_bytes(
        b"4c7a9f1d3e8b2c6a0f5d9e8c7b6a5f4e3d2c1b0a9f8e7d6c5b4a3f2e1d0c9b8a",
        16,
    )
    .expect("hex")
}

#[test]
fn test_sign_verify() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(42);
    let (sk, vk) = engine.generate_keys(&mut rng).expect("keygen");

    let msg = message();
    let sig = engine.sign(&mut rng, &msg, &sk).expect("sign");

    assert!(engine.verify(&sig, &msg, &vk));
}

#[test]
fn test_verify_rejects_wrong_message() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(42);
    let (sk, vk) = engine.generate_keys(&mut rng).expect("keygen");

    let msg = message();
    let sig = engine.sign(&mut rng, &msg, &sk).expect("sign");

    assert!(!engine.verify(&sig, &(&msg - 1u32), &vk));
    assert!(!engine.verify(&sig, &(&msg + 1u32), &vk));
}

#[test]
fn test_verify_rejects_wrong_key() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(42);
    let (sk, _vk) = engine.generate_keys(&mut rng).expect("keygen");
    let (_wrong_sk, wrong_vk) = engine.generate_keys(&mut rng).expect("keygen");

    let msg = message();
    let sig = engine.sign(&mut rng, &msg, &sk).expect("sign");

    assert!(!engine.verify(&sig, &msg, &wrong_vk));
}

#[test]
fn test_keypair_consistency() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(7);
    let (sk, vk) = engine.generate_keys(&mut rng).expect("keygen");
    let group = engine.group();

    assert_eq!(vk.point(), engine.verifying_key(&sk).point());
    assert!(group.is_on_curve(vk.point()));
    assert!(!group.is_identity(vk.point()));
    assert!(group.is_identity(&group.scalar_mul(group.order(), vk.point())));

    assert!(!sk.scalar().is_zero());
    assert!(sk.scalar() < group.order());
}

#[test]
fn test_signature_components_in_range() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(99);
    let (sk, _vk) = engine.generate_keys(&mut rng).expect("keygen");
    let order = engine.group().order().clone();

    let msg = message();
    for _ in 0..4 {
        let sig = engine.sign(&mut rng, &msg, &sk).expect("sign");
        assert!(!sig.r.is_zero() && sig.r < order);
        assert!(!sig.s.is_zero() && sig.s < order);
    }
}

#[test]
fn test_verify_rejects_zero_components() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(3);
    let (sk, vk) = engine.generate_keys(&mut rng).expect("keygen");

    let msg = message();
    let sig = engine.sign(&mut rng, &msg, &sk).expect("sign");

    let zero_r = Signature {
        r: BigUint::zero(),
        s: sig.s.clone(),
    };
    let zero_s = Signature {
        r: sig.r.clone(),
        s: BigUint::zero(),
    };

    assert!(!engine.verify(&zero_r, &msg, &vk));
    assert!(!engine.verify(&zero_s, &msg, &vk));
}

#[test]
fn test_verify_rejects_out_of_range_components() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(3);
    let (sk, vk) = engine.generate_keys(&mut rng).expect("keygen");
    let order = engine.group().order().clone();

    let msg = message();
    let sig = engine.sign(&mut rng, &msg, &sk).expect("sign");

    let big_r = Signature {
        r: &sig.r + &order,
        s: sig.s.clone(),
    };
    let order_s = Signature {
        r: sig.r.clone(),
        s: order.clone(),
    };

    assert!(!engine.verify(&big_r, &msg, &vk));
    assert!(!engine.verify(&order_s, &msg, &vk));
}

#[test]
fn test_verify_rejects_tampered_signature() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(17);
    let (sk, vk) = engine.generate_keys(&mut rng).expect("keygen");

    let msg = message();
    let sig = engine.sign(&mut rng, &msg, &sk).expect("sign");

    let bumped_r = Signature {
        r: &sig.r + 1u32,
        s: sig.s.clone(),
    };
    let bumped_s = Signature {
        r: sig.r.clone(),
        s: &sig.s + 1u32,
    };

    assert!(!engine.verify(&bumped_r, &msg, &vk));
    assert!(!engine.verify(&bumped_s, &msg, &vk));
}

#[test]
fn test_fresh_nonce_per_signature() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(23);
    let (sk, vk) = engine.generate_keys(&mut rng).expect("keygen");

    let msg = message();
    let mut seen = HashSet::new();
    for _ in 0..8 {
        let sig = engine.sign(&mut rng, &msg, &sk).expect("sign");
        assert!(engine.verify(&sig, &msg, &vk));
        assert!(
            seen.insert((sig.r.clone(), sig.s.clone())),
            "two signatures over the same message shared an ephemeral scalar"
        );
    }
}

#[test]
fn test_engine_rejects_tiny_order() {
    let curve = WeierstrassCurve::secp256k1();
    let degenerate = WeierstrassCurve::new(
        BigUint::zero(),
        BigUint::from(7u32),
        curve.field().clone(),
        BigUint::one(),
        curve.generator().clone(),
    );

    assert_eq!(Ecdsa::new(degenerate).unwrap_err(), EcdsaError::InvalidCurve);
}

#[test]
fn test_engine_rejects_wrong_generator_order() {
    let curve = WeierstrassCurve::secp256k1();
    let wrong_order = WeierstrassCurve::new(
        BigUint::zero(),
        BigUint::from(7u32),
        curve.field().clone(),
        BigUint::from(5u32),
        curve.generator().clone(),
    );

    assert_eq!(Ecdsa::new(wrong_order).unwrap_err(), EcdsaError::InvalidCurve);
}

#[test]
fn test_engine_rejects_off_curve_generator() {
    let curve = WeierstrassCurve::secp256k1();
    let off_curve = WeierstrassCurve::new(
        BigUint::zero(),
        BigUint::from(7u32),
        curve.field().clone(),
        curve.order().clone(),
        Point::new(BigUint::one(), BigUint::one()),
    );

    assert_eq!(Ecdsa::new(off_curve).unwrap_err(), EcdsaError::InvalidCurve);
}

#[test]
fn test_engine_rejects_identity_generator() {
    let curve = WeierstrassCurve::secp256k1();
    let no_generator = WeierstrassCurve::new(
        BigUint::zero(),
        BigUint::from(7u32),
        curve.field().clone(),
        curve.order().clone(),
        Point::Identity,
    );

    assert_eq!(Ecdsa::new(no_generator).unwrap_err(), EcdsaError::InvalidCurve);
}
