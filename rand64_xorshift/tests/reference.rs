use rand64_core::{Seedable64, SliceSeedable64, Source64};
use rand64_xorshift::{XorShift1024Star, XorShift128Plus, XorShift64Star};

const SEED1: u64 = 1387366483214;

#[test]
fn test_xorshift64star_reference() {
    let mut rng = XorShift64Star::new(SEED1);
    // Values produced by the reference implementation after expanding SEED1
    // through SplitMix64.
    let expected = [
        2822166619542251428,
        15719013637125578054,
        5561678958528313321,
        17233451694379724072,
        7387572601436152064,
        3352273234033349504,
        2899985483152672475,
        571698004386697050,
    ];
    for &e in &expected {
        assert_eq!(rng.next_u64(), e);
    }
}

#[test]
fn test_xorshift128plus_reference() {
    let mut rng = XorShift128Plus::new(SEED1);
    let expected = [
        15771346683385517196,
        9882470937415033222,
        10122515987812078275,
        9950291805690211997,
        5560898047753517047,
        9806550241747869425,
        16344204150069124721,
        7133254478284829050,
    ];
    for &e in &expected {
        assert_eq!(rng.next_u64(), e);
    }
}

#[test]
fn test_xorshift1024star_reference() {
    let mut rng = XorShift1024Star::new(SEED1);
    let expected = [
        14314478318729141266,
        5002514275247361877,
        1959453420035928037,
        15133026257940450009,
        10311270752396438174,
        3766918502733849924,
        15396074446274990069,
        15679784721060022461,
    ];
    for &e in &expected {
        assert_eq!(rng.next_u64(), e);
    }
}

#[test]
fn test_zero_seed_remapped() {
    // Seeding with 0 must behave exactly like seeding with the documented
    // default, and must not produce a stuck generator.
    let mut a = XorShift64Star::new(0);
    let mut b = XorShift64Star::new(89482311);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }

    let mut a = XorShift128Plus::new(0);
    let mut b = XorShift128Plus::new(89482311);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }

    let mut a = XorShift1024Star::new(0);
    let mut b = XorShift1024Star::new(89482311);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn test_determinism_across_reseed() {
    let mut rng = XorShift1024Star::new(1);
    let first: Vec<u64> = (0..40).map(|_| rng.next_u64()).collect();
    rng.seed(1);
    let second: Vec<u64> = (0..40).map(|_| rng.next_u64()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_seed_from_slice_prefix() {
    // A key longer than the state seeds the leading words verbatim; the
    // first output of xorshift128+ is the wrapping sum of both words.
    let mut rng = XorShift128Plus::new(0);
    rng.seed_from_slice(&[3, 5, 11, 13]);
    assert_eq!(rng.next_u64(), 8);
}

#[cfg(feature = "serde1")]
#[test]
fn test_serde() {
    let mut rng = XorShift1024Star::new(SEED1);
    rng.next_u64();

    let buf = bincode::serialize(&rng).expect("Could not serialize");
    let mut restored: XorShift1024Star =
        bincode::deserialize(&buf).expect("Could not deserialize");

    for _ in 0..16 {
        assert_eq!(rng.next_u64(), restored.next_u64());
    }
}
