//! M-Sequence Generator — Galois LFSR Pseudo-Noise Source
//!
//! Generates deterministic maximal-length sequences (m-sequences) of period
//! 2^m - 1 using a Galois Linear Feedback Shift Register with known
//! primitive tap polynomials for register orders 2 through 12. The
//! supported periods form the [`SequenceLength`] catalog (3, 7, 15, ...,
//! 4095) used to build generator-based synchronization patterns.
//! GNU Radio equivalent: `glfsr_source_b`.
//!
//! Output is fully deterministic: the same catalog entry always yields the
//! same bits, and [`reset`] rewinds the register to its initial state so a
//! redrain reproduces the sequence exactly.
//!
//! [`reset`]: MSequence::reset
//!
//! ## Example
//!
//! ```rust
//! use pnsync_core::msequence::{MSequence, SequenceLength};
//!
//! let mut ms = MSequence::new(SequenceLength::N7);
//! assert_eq!(ms.len(), 7);
//!
//! let first: Vec<bool> = (0..7).map(|_| ms.next_bit()).collect();
//! ms.reset();
//! let again: Vec<bool> = (0..7).map(|_| ms.next_bit()).collect();
//! assert_eq!(first, again);
//! ```

use serde::{Deserialize, Serialize};

use crate::bit_buffer::BitBuffer;
use crate::sync_pattern::PatternError;

/// Catalog of supported m-sequence lengths.
///
/// Each entry names the sequence period 2^m - 1 for an LFSR of order m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceLength {
    /// Period 3 (m = 2).
    N3,
    /// Period 7 (m = 3).
    N7,
    /// Period 15 (m = 4).
    N15,
    /// Period 31 (m = 5).
    N31,
    /// Period 63 (m = 6).
    N63,
    /// Period 127 (m = 7).
    N127,
    /// Period 255 (m = 8).
    N255,
    /// Period 511 (m = 9).
    N511,
    /// Period 1023 (m = 10).
    N1023,
    /// Period 2047 (m = 11).
    N2047,
    /// Period 4095 (m = 12).
    N4095,
}

impl SequenceLength {
    /// All catalog entries, shortest first.
    pub const ALL: [SequenceLength; 11] = [
        SequenceLength::N3,
        SequenceLength::N7,
        SequenceLength::N15,
        SequenceLength::N31,
        SequenceLength::N63,
        SequenceLength::N127,
        SequenceLength::N255,
        SequenceLength::N511,
        SequenceLength::N1023,
        SequenceLength::N2047,
        SequenceLength::N4095,
    ];

    /// LFSR order m for this entry.
    pub fn order(self) -> u32 {
        match self {
            SequenceLength::N3 => 2,
            SequenceLength::N7 => 3,
            SequenceLength::N15 => 4,
            SequenceLength::N31 => 5,
            SequenceLength::N63 => 6,
            SequenceLength::N127 => 7,
            SequenceLength::N255 => 8,
            SequenceLength::N511 => 9,
            SequenceLength::N1023 => 10,
            SequenceLength::N2047 => 11,
            SequenceLength::N4095 => 12,
        }
    }

    /// Sequence period 2^m - 1.
    pub fn length(self) -> usize {
        (1 << self.order()) - 1
    }

    /// Look up the catalog entry for a requested sequence length.
    ///
    /// Returns [`PatternError::UnsupportedLength`] when no maximal-length
    /// generator of that period exists in the catalog.
    pub fn from_length(length: usize) -> Result<Self, PatternError> {
        Self::ALL
            .iter()
            .copied()
            .find(|entry| entry.length() == length)
            .ok_or(PatternError::UnsupportedLength { length })
    }
}

/// Galois-form maximal-length tap masks, indexed by order m = 2..=12.
///
/// Same primitive polynomials the GNU Radio GLFSR source tabulates.
fn maximal_taps(order: u32) -> u32 {
    match order {
        2 => 0x3,
        3 => 0x6,
        4 => 0xC,
        5 => 0x14,
        6 => 0x30,
        7 => 0x60,
        8 => 0xB8,
        9 => 0x110,
        10 => 0x240,
        11 => 0x500,
        12 => 0xE08,
        _ => unreachable!("catalog orders are 2..=12"),
    }
}

/// Maximal-length sequence generator (Galois LFSR).
#[derive(Debug, Clone)]
pub struct MSequence {
    /// Current register state.
    state: u32,
    /// Feedback tap mask.
    taps: u32,
    /// Register order m.
    order: u32,
    /// Initial register state, restored by `reset`.
    seed: u32,
}

impl MSequence {
    /// Create a generator for the given catalog entry, at its initial state.
    pub fn new(code: SequenceLength) -> Self {
        let order = code.order();
        Self {
            state: 1,
            taps: maximal_taps(order),
            order,
            seed: 1,
        }
    }

    /// Rewind the register to its initial state.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }

    /// Advance the register one step and return the output bit.
    #[inline]
    pub fn next_bit(&mut self) -> bool {
        let out = self.state & 1 != 0;
        self.state >>= 1;
        if out {
            self.state ^= self.taps;
        }
        out
    }

    /// Sequence period 2^m - 1.
    pub fn len(&self) -> usize {
        (1 << self.order) - 1
    }

    /// Always false; the generator has a positive period.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Drain one full period into `buffer`, one push per bit.
    ///
    /// Does not reset the register first; callers that need the sequence
    /// from its start call [`reset`](Self::reset) beforehand.
    pub fn fill(&mut self, buffer: &mut BitBuffer) {
        for _ in 0..self.len() {
            buffer.push(self.next_bit());
        }
    }
}

impl Iterator for MSequence {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        Some(self.next_bit())
    }
}
