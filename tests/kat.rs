use cryptal_sha512::hash::sha512;
use cryptal_sha512::kat::{
    Chunking, Expectation, FLASH_DATA, HashVector, KatError, SHA512_LONG_VECTORS, SHA512_VECTORS,
    VectorInput, run_all, run_vector, self_test,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn find(name: &str) -> &'static HashVector {
    SHA512_VECTORS
        .iter()
        .chain(SHA512_LONG_VECTORS.iter())
        .find(|vector| vector.name == name)
        .unwrap_or_else(|| panic!("no vector named {name}"))
}

// -------------------------------------------------------
// 1. TABLE
// -------------------------------------------------------

#[test]
fn table_payload_lengths() {
    let lengths: Vec<(&str, usize)> = SHA512_VECTORS
        .iter()
        .map(|vector| (vector.name, vector.message().unwrap().len()))
        .collect();

    assert_eq!(
        lengths,
        [
            ("SHA512 invalid hash", 64),
            ("SHA512 message_len=0", 0),
            ("SHA512 message_len=4", 4),
            ("SHA512 message_len=64", 64),
            ("SHA512 message_len=955", 920),
            ("SHA512 message_len=4088", 4088),
        ]
    );
}

#[test]
fn flash_data_layout() {
    assert_eq!(&FLASH_DATA[..10], b"1234567890");
    assert!(FLASH_DATA[10..].iter().all(|&b| b == 0));
}

#[test]
fn expected_digests_decode() {
    for vector in SHA512_VECTORS.iter().chain(SHA512_LONG_VECTORS.iter()) {
        assert!(vector.expected_digest().is_ok(), "{}", vector.name);
    }
}

// -------------------------------------------------------
// 2. RUNNER
// -------------------------------------------------------

#[test]
fn every_vector_passes() {
    init_logging();

    for vector in SHA512_VECTORS.iter().chain(SHA512_LONG_VECTORS.iter()) {
        let report = run_vector(vector).unwrap();
        assert!(report.passed, "{} produced {}", vector.name, report.digest_hex());
    }
}

#[test]
fn invalid_hash_vector_is_detected_as_mismatch() {
    let report = run_vector(find("SHA512 invalid hash")).unwrap();

    assert!(!report.matched);
    assert!(report.passed);
}

#[test]
fn invalid_hash_vector_fails_when_expected_to_pass() {
    let vector = HashVector {
        expectation: Expectation::Pass,
        ..*find("SHA512 invalid hash")
    };

    let report = run_vector(&vector).unwrap();
    assert!(!report.passed);

    assert!(matches!(
        run_all(&[vector]),
        Err(KatError::VectorFailed {
            name: "SHA512 invalid hash"
        })
    ));
}

#[test]
fn long_vector_streaming_matches_one_shot() {
    let vector = &SHA512_LONG_VECTORS[0];
    let message = vector.message().unwrap();

    assert_eq!(message.len(), 1_048_576);

    let report = run_vector(vector).unwrap();
    assert_eq!(report.digest, sha512(&message));
    assert_eq!(report.digest, vector.expected_digest().unwrap());
}

#[test]
fn self_test_runs_both_tables() {
    init_logging();

    assert_eq!(
        self_test().unwrap(),
        SHA512_VECTORS.len() + SHA512_LONG_VECTORS.len()
    );
}

// -------------------------------------------------------
// 3. MALFORMED VECTORS
// -------------------------------------------------------

const EMPTY_DIGEST: &str = concat!(
    "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce",
    "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
);

fn vector(input: VectorInput, expected: &'static str, chunking: Option<Chunking>) -> HashVector {
    HashVector {
        name: "malformed",
        input,
        expected,
        expectation: Expectation::Pass,
        chunking,
    }
}

#[test]
fn rejects_non_hex_input() {
    let result = run_vector(&vector(VectorInput::Hex("zz"), EMPTY_DIGEST, None));
    assert!(matches!(result, Err(KatError::MalformedHex { .. })));
}

#[test]
fn rejects_short_expected_digest() {
    let result = run_vector(&vector(VectorInput::Hex(""), "cf83e135", None));
    assert!(matches!(
        result,
        Err(KatError::DigestLength {
            name: "malformed",
            len: 4
        })
    ));
}

#[test]
fn rejects_bad_chunking() {
    for chunking in [
        Chunking {
            chunk_len: 0,
            iterations: 1,
        },
        Chunking {
            chunk_len: 3000,
            iterations: 1,
        },
    ] {
        let result = run_vector(&vector(
            VectorInput::Raw(&FLASH_DATA),
            EMPTY_DIGEST,
            Some(chunking),
        ));
        assert!(matches!(result, Err(KatError::InvalidChunking { .. })));
    }
}

#[test]
fn chunked_vector_with_zero_iterations_hashes_empty_message() {
    let result = run_vector(&vector(
        VectorInput::Raw(&FLASH_DATA),
        EMPTY_DIGEST,
        Some(Chunking {
            chunk_len: 1024,
            iterations: 0,
        }),
    ))
    .unwrap();

    assert!(result.passed);
}
