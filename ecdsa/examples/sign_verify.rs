use curve::WeierstrassCurve;
use ecdsa::{Ecdsa, Signature, SigningKey, VerifyingKey};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let engine = Ecdsa::new(WeierstrassCurve::secp256k1()).expect("standard curve");
    let mut rng = StdRng::seed_from_u64(42);

    let (sk, vk) = engine.generate_keys(&mut rng).expect("keygen");

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg_bytes = b"hello ecdsa";
    let message = BigUint::from_bytes_be(msg_bytes);

    let sig = engine.sign(&mut rng, &message, &sk).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let ok = engine.verify(&sig2, &message, &vk2);
    assert!(ok);

    println!("r = {:x}", sig2.r);
    println!("s = {:x}", sig2.s);
    println!("verified: {ok}");

    let _ = sk2;
}
