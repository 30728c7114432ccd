use cryptal_sha512::hash::sha512::computations::{
    big_sigma0, big_sigma1, ch, maj, message_schedule, small_sigma0, small_sigma1,
};
use cryptal_sha512::hash::sha512::core::{compress, finish};
use cryptal_sha512::hash::sha512::{BLOCK_LEN, H512_INIT, sha512};
use hex_literal::hex;

fn abc_block() -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    block[..3].copy_from_slice(b"abc");
    block[3] = 0x80;
    block[127] = 24;
    block
}

fn words_to_bytes(words: &[u64; 8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(words.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

// -------------------------------------------------------
// 1. ROUND FUNCTIONS
// -------------------------------------------------------

#[test]
fn sigma_functions_on_single_bit() {
    assert_eq!(small_sigma0(1), 0x8100000000000000);
    assert_eq!(small_sigma1(1), 0x0000200000000008);
    assert_eq!(big_sigma0(1), 0x0000001042000000);
    assert_eq!(big_sigma1(1), 0x0004400000800000);
}

#[test]
fn ch_selects_and_maj_votes() {
    let e = 0xFFFF_0000_FFFF_0000;
    let f = 0x1234_5678_9ABC_DEF0;
    let g = 0x0FED_CBA9_8765_4321;

    assert_eq!(ch(e, f, g), (f & e) | (g & !e));
    assert_eq!(maj(u64::MAX, 0, g), g);
    assert_eq!(maj(e, e, f), e);
}

#[test]
fn message_schedule_of_abc_block() {
    let block = abc_block();
    let mut words = [0u64; 16];
    for (slot, chunk) in words.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_be_bytes(chunk.try_into().unwrap());
    }

    let w = message_schedule(&words);

    assert_eq!(&w[..16], &words);
    assert_eq!(w[16], 0x6162638000000000);
    assert_eq!(w[79], 0x92aeeed1a7bcf7d2);
}

// -------------------------------------------------------
// 2. COMPRESSION
// -------------------------------------------------------

#[test]
fn compress_padded_abc_from_iv() {
    let mut state = H512_INIT;
    compress(&abc_block(), &mut state);

    assert_eq!(
        words_to_bytes(&state),
        hex!(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
            "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        )
    );
}

#[test]
fn compress_depends_on_every_byte() {
    let base = {
        let mut state = H512_INIT;
        compress(&[0u8; BLOCK_LEN], &mut state);
        state
    };

    for i in 0..BLOCK_LEN {
        let mut block = [0u8; BLOCK_LEN];
        block[i] = 1;

        let mut state = H512_INIT;
        compress(&block, &mut state);

        assert_ne!(state, base, "byte {i} did not affect the state");
    }
}

// -------------------------------------------------------
// 3. PADDING
// -------------------------------------------------------

#[test]
fn finish_uses_one_block_up_to_111_bytes() {
    let tail = [0x5Au8; 111];
    let mut state = H512_INIT;

    let (digest, blocks) = finish(&tail, 111 * 8, &mut state);

    assert_eq!(blocks, 1);
    assert_eq!(digest, sha512(&tail));
}

#[test]
fn finish_spills_into_second_block_from_112_bytes() {
    for len in [112usize, 113, 127] {
        let tail = vec![0xA5u8; len];
        let mut state = H512_INIT;

        let (digest, blocks) = finish(&tail, (len as u128) * 8, &mut state);

        assert_eq!(blocks, 2, "length {len}");
        assert_eq!(digest, sha512(&tail), "length {len}");
    }
}

#[test]
fn finish_encodes_full_bit_length() {
    // The tail is empty but one full block was already absorbed.
    let message = [0x33u8; BLOCK_LEN];

    let mut state = H512_INIT;
    compress(&message, &mut state);
    let (digest, _) = finish(&[], (BLOCK_LEN as u128) * 8, &mut state);

    assert_eq!(digest, sha512(&message));
}
