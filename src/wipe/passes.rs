/// The 33-pass destruction sequence
///
/// Passes 1-4 replace the entire buffer with fresh pseudorandom bytes.
/// Passes 5-33 XOR the buffer byte-wise with fixed 8-bit patterns taken
/// from the published 33-entry pattern table below, indexed by pass
/// number. The first four table entries are never applied as XOR; the
/// table and its indexing are preserved exactly as a black-box contract.
use rand::RngCore;
use rand::rngs::StdRng;

/// Total number of passes applied to every file, regardless of size.
pub const PASS_COUNT: usize = 33;

/// Number of leading passes that fully replace the buffer with random data.
pub const RANDOM_PASSES: usize = 4;

/// Published pattern table. Passes 5..=33 XOR with PATTERN_TABLE[pass - 1].
pub const PATTERN_TABLE: [u8; PASS_COUNT] = [
    0b0101_0101, // 1  (unused: random pass)
    0b1010_1010, // 2  (unused: random pass)
    0b1001_0010, // 3  (unused: random pass)
    0b0100_1001, // 4  (unused: random pass)
    0b0010_0100, // 5
    0b0000_0000, // 6
    0b0001_0001, // 7
    0b0010_0010, // 8
    0b0011_0011, // 9
    0b0100_0100, // 10
    0b0101_0101, // 11
    0b0110_0110, // 12
    0b0111_0111, // 13
    0b1000_1000, // 14
    0b1001_1001, // 15
    0b1010_1010, // 16
    0b1011_1011, // 17
    0b1100_1100, // 18
    0b1101_1101, // 19
    0b1110_1110, // 20
    0b1111_1111, // 21
    0b1001_0010, // 22
    0b0100_1001, // 23
    0b0010_0100, // 24
    0b0110_1101, // 25
    0b1011_0110, // 26
    0b1101_1011, // 27
    0b1111_1111, // 28
    0b1001_0010, // 29
    0b0100_1001, // 30
    0b0010_0100, // 31
    0b1001_0010, // 32
    0b0100_1001, // 33
];

/// One full-buffer transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Replace every byte with an independently drawn random byte
    Random,
    /// XOR every byte with a fixed 8-bit pattern
    Xor(u8),
}

impl Pass {
    /// Apply this pass to the whole buffer
    pub fn apply(&self, buffer: &mut [u8], rng: &mut StdRng) {
        match self {
            Pass::Random => rng.fill_bytes(buffer),
            Pass::Xor(pattern) => {
                for byte in buffer.iter_mut() {
                    *byte ^= pattern;
                }
            }
        }
    }
}

/// The fixed 33-pass sequence, identical for every file.
pub fn pass_sequence() -> [Pass; PASS_COUNT] {
    let mut sequence = [Pass::Random; PASS_COUNT];
    for (i, slot) in sequence.iter_mut().enumerate().skip(RANDOM_PASSES) {
        *slot = Pass::Xor(PATTERN_TABLE[i]);
    }
    sequence
}

/// Apply all 33 passes in order to the buffer
///
/// # Arguments
/// * `buffer` - Full file content; may be empty (all passes are no-ops)
/// * `rng` - The calling worker's own generator, never shared
pub fn apply_sequence(buffer: &mut [u8], rng: &mut StdRng) {
    for pass in pass_sequence() {
        pass.apply(buffer, rng);
    }
}
