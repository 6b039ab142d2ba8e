//! Keccak-256 sponge with Ethereum (original Keccak) padding.

use std::io;

use super::permutation::{keccak_f1600, State};

/// Bytes absorbed per permutation (1088-bit rate, 512-bit capacity).
pub const RATE: usize = 136;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// First padding byte. Keccak uses 0x01, NIST SHA3-256 uses 0x06.
const PAD_BYTE: u8 = 0x01;

/// Incremental Keccak-256 hasher.
///
/// Input may be fed in any chunking; the digest only depends on the
/// concatenated bytes.
#[derive(Clone)]
pub struct Keccak256 {
    state: State,
    buffer: [u8; RATE],
    buffered: usize,
}

impl Keccak256 {
    /// Creates a hasher over the empty input.
    pub fn new() -> Self {
        Self {
            state: [0u64; 25],
            buffer: [0u8; RATE],
            buffered: 0,
        }
    }

    /// Absorbs more input.
    pub fn update(&mut self, mut data: &[u8]) -> &mut Self {
        while !data.is_empty() {
            let take = (RATE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered == RATE {
                self.absorb_block();
            }
        }
        self
    }

    /// Pads, absorbs the final block and squeezes the 32-byte digest.
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        // buffered < RATE here, so the pad always fits in this block
        self.buffer[self.buffered..].fill(0);
        self.buffer[self.buffered] ^= PAD_BYTE;
        self.buffer[RATE - 1] ^= 0x80;
        self.absorb_block();

        let mut out = [0u8; DIGEST_LEN];
        for (chunk, lane) in out.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        out
    }

    /// Discards all absorbed input.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn absorb_block(&mut self) {
        for (lane, chunk) in self.state.iter_mut().zip(self.buffer.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(word);
        }
        keccak_f1600(&mut self.state);
        self.buffered = 0;
    }
}

impl Default for Keccak256 {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for Keccak256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
