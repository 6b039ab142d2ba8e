//! The Keccak-f[1600] permutation.
//!
//! The 5x5 lane array is stored flat: lane `(x, y)` lives at index `x + 5 * y`.

/// Keccak-f[1600] state: 25 lanes of 64 bits.
pub type State = [u64; 25];

/// Number of rounds for a 64-bit lane width (12 + 2 * log2(64)).
pub const ROUNDS: usize = 24;

/// Iota round constants.
const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation offsets, indexed like the state (`x + 5 * y`).
const RHO_OFFSETS: [u32; 25] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// Applies the full 24-round permutation in place.
pub fn keccak_f1600(state: &mut State) {
    for round in 0..ROUNDS {
        theta(state);
        rho(state);
        pi(state);
        chi(state);
        iota(state, round);
    }
}

#[inline(always)]
fn theta(state: &mut State) {
    let mut parity = [0u64; 5];
    for (x, column) in parity.iter_mut().enumerate() {
        *column = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }

    for x in 0..5 {
        let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            state[x + 5 * y] ^= d;
        }
    }
}

#[inline(always)]
fn rho(state: &mut State) {
    for (lane, offset) in state.iter_mut().zip(RHO_OFFSETS) {
        *lane = lane.rotate_left(offset);
    }
}

/// Moves lane `(x, y)` to `(y, 2x + 3y mod 5)`.
#[inline(always)]
fn pi(state: &mut State) {
    let source = *state;
    for y in 0..5 {
        for x in 0..5 {
            state[y + 5 * ((2 * x + 3 * y) % 5)] = source[x + 5 * y];
        }
    }
}

#[inline(always)]
fn chi(state: &mut State) {
    for y in 0..5 {
        let row = [
            state[5 * y],
            state[5 * y + 1],
            state[5 * y + 2],
            state[5 * y + 3],
            state[5 * y + 4],
        ];
        for x in 0..5 {
            state[x + 5 * y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

#[inline(always)]
fn iota(state: &mut State, round: usize) {
    state[0] ^= ROUND_CONSTANTS[round];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_state_permutation() {
        // Known answer for Keccak-f[1600] applied once to the all-zero state
        let mut state = [0u64; 25];
        keccak_f1600(&mut state);
        assert_eq!(state[0], 0xF125_8F79_40E1_DDE7);
        assert_eq!(state[1], 0x84D5_CCF9_33C0_478A);
        assert_eq!(state[2], 0xD598_261E_A65A_A9EE);
        assert_eq!(state[3], 0xBD15_4730_6F80_494D);
    }

    #[test]
    fn test_pi_moves_lanes() {
        let mut state: State = core::array::from_fn(|i| i as u64);
        pi(&mut state);
        // (0, 0) stays put, (1, 0) goes to (0, 2), (0, 1) goes to (1, 3)
        assert_eq!(state[0], 0);
        assert_eq!(state[10], 1);
        assert_eq!(state[16], 5);
    }

    #[test]
    fn test_iota_only_touches_first_lane() {
        let mut state = [0u64; 25];
        iota(&mut state, 1);
        assert_eq!(state[0], 0x8082);
        assert!(state[1..].iter().all(|&lane| lane == 0));
    }

    #[test]
    fn test_permutation_is_not_identity() {
        let mut state = [0u64; 25];
        state[7] = 1;
        let before = state;
        keccak_f1600(&mut state);
        assert_ne!(state, before);
    }
}
