//! # P/N Sequence Synchronization Primitives
//!
//! This crate provides the hard-decision correlation front-end a digital
//! receiver uses to find frame/preamble boundaries: given a known
//! pseudo-noise (P/N) reference pattern, it scores how well the live,
//! noisy symbol stream currently aligns with that pattern, one cheap O(n)
//! bit-correlation per symbol, before the receiver commits to full
//! demodulation.
//!
//! ## Signal flow
//!
//! ```text
//! RX symbols → sign slice → sliding bit window ─┐
//!                                               ├─ corr / n → per-symbol statistic
//! P/N pattern → sign slice → reference rail(s) ─┘
//! ```
//!
//! The per-symbol output stream goes to the caller's own peak/threshold
//! policy; lock decision logic is deliberately not part of this crate.
//!
//! ## Modules
//!
//! - [`bit_buffer`]: fixed-length sliding bit window with signed correlation
//! - [`msequence`]: Galois LFSR m-sequence generator and length catalog
//! - [`sync_pattern`]: immutable one- or two-rail reference patterns
//! - [`binary_sync`]: the per-symbol correlators, one per type combination
//!
//! ## Example
//!
//! ```rust
//! use pnsync_core::prelude::*;
//!
//! // Reference pattern from the generator catalog, period 2^6 - 1 = 63.
//! let mut sync = RealBinarySync::from_msequence(SequenceLength::N63);
//!
//! // Stream the matching bipolar sequence through the correlator.
//! let mut ms = MSequence::new(SequenceLength::N63);
//! let mut rxy = 0.0;
//! for _ in 0..63 {
//!     let sym = if ms.next_bit() { 1.0 } else { -1.0 };
//!     rxy = sync.push(sym);
//! }
//! assert!((rxy - 1.0).abs() < 1e-12);
//! ```

pub mod binary_sync;
pub mod bit_buffer;
pub mod msequence;
pub mod sync_pattern;

pub mod prelude {
    //! Convenience re-exports of the main synchronization types.
    pub use crate::binary_sync::{IqBinarySync, MixedBinarySync, RealBinarySync};
    pub use crate::bit_buffer::BitBuffer;
    pub use crate::msequence::{MSequence, SequenceLength};
    pub use crate::sync_pattern::{IqSyncPattern, PatternError, SyncPattern};
}
