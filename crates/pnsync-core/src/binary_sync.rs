//! Binary Synchronizer — Per-Symbol Hard-Decision Preamble Correlator
//!
//! Scores a live symbol stream against a known P/N reference pattern, one
//! symbol at a time. Each incoming symbol is sign-sliced to hard bits,
//! shifted into a sliding window the same length as the reference, and
//! correlated rail against rail; the combined statistic is divided by the
//! pattern length so a perfect noiseless alignment of a rail scores 1.0.
//! The caller thresholds the per-symbol output stream to declare frame
//! lock; no decision logic lives here.
//!
//! Three concrete types fix the pattern/symbol combination at construction
//! so the per-symbol path carries no type branch:
//!
//! - [`RealBinarySync`]: real pattern, real symbols, real output.
//! - [`MixedBinarySync`]: real pattern, complex symbols, complex output.
//! - [`IqBinarySync`]: complex pattern, complex symbols, complex output.
//!
//! Each call is a bounded O(n) computation with no I/O, suited to a hard
//! per-sample budget in a streaming receive loop. Instances share no state;
//! parallel search channels each own their own correlator.
//!
//! ## Example
//!
//! ```rust
//! use pnsync_core::binary_sync::RealBinarySync;
//!
//! let pattern = [1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, -1.0];
//! let mut sync = RealBinarySync::from_sequence(&pattern).unwrap();
//!
//! let mut rxy = 0.0;
//! for &sym in &pattern {
//!     rxy = sync.push(sym);
//! }
//! assert!((rxy - 1.0).abs() < 1e-12); // window aligned with the reference
//! ```

use std::fmt;

use num_complex::Complex64;

use crate::bit_buffer::BitBuffer;
use crate::msequence::SequenceLength;
use crate::sync_pattern::{IqSyncPattern, PatternError, SyncPattern};

/// Real pattern, real symbols. Output is a real statistic in [-1, 1].
#[derive(Debug, Clone)]
pub struct RealBinarySync {
    /// Reference pattern, fixed for the correlator's lifetime.
    pattern: SyncPattern,
    /// Sliding window of received hard decisions.
    sym_i: BitBuffer,
    /// Last computed correlation, for diagnostics.
    rxy: f64,
}

impl RealBinarySync {
    /// Bind a correlator to a pre-built reference pattern.
    pub fn new(pattern: SyncPattern) -> Self {
        let sym_i = BitBuffer::new(pattern.len());
        Self {
            pattern,
            sym_i,
            rxy: 0.0,
        }
    }

    /// Build the reference by sign-slicing an explicit sample vector.
    pub fn from_sequence(samples: &[f64]) -> Result<Self, PatternError> {
        Ok(Self::new(SyncPattern::from_sequence(samples)?))
    }

    /// Build the reference from a catalog m-sequence.
    pub fn from_msequence(code: SequenceLength) -> Self {
        Self::new(SyncPattern::from_msequence(code))
    }

    /// Push one symbol and return the updated correlation.
    pub fn push(&mut self, sym: f64) -> f64 {
        self.sym_i.push(sym > 0.0);
        let n = self.pattern.len() as f64;
        self.rxy = f64::from(self.pattern.rail_i().correlate(&self.sym_i)) / n;
        self.rxy
    }

    /// Clear the received window; the reference pattern is untouched.
    pub fn reset(&mut self) {
        self.sym_i.clear();
        self.rxy = 0.0;
    }

    /// Last correlation computed by `push`.
    pub fn last_correlation(&self) -> f64 {
        self.rxy
    }

    /// Reference pattern length n.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// True if the reference holds no bits. Construction rejects this case.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The bound reference pattern.
    pub fn pattern(&self) -> &SyncPattern {
        &self.pattern
    }
}

impl fmt::Display for RealBinarySync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "binary sync (real/real): {}, rxy={:.4}",
            self.pattern, self.rxy
        )
    }
}

/// Real pattern, complex symbols. Output correlates the single reference
/// rail against both received rails: `corr(i, i) + j corr(i, q)`, each
/// component normalized to [-1, 1].
#[derive(Debug, Clone)]
pub struct MixedBinarySync {
    pattern: SyncPattern,
    sym_i: BitBuffer,
    sym_q: BitBuffer,
    rxy: Complex64,
}

impl MixedBinarySync {
    /// Bind a correlator to a pre-built reference pattern.
    pub fn new(pattern: SyncPattern) -> Self {
        let sym_i = BitBuffer::new(pattern.len());
        let sym_q = BitBuffer::new(pattern.len());
        Self {
            pattern,
            sym_i,
            sym_q,
            rxy: Complex64::new(0.0, 0.0),
        }
    }

    /// Build the reference by sign-slicing an explicit sample vector.
    pub fn from_sequence(samples: &[f64]) -> Result<Self, PatternError> {
        Ok(Self::new(SyncPattern::from_sequence(samples)?))
    }

    /// Build the reference from a catalog m-sequence.
    pub fn from_msequence(code: SequenceLength) -> Self {
        Self::new(SyncPattern::from_msequence(code))
    }

    /// Push one symbol and return the updated correlation.
    pub fn push(&mut self, sym: Complex64) -> Complex64 {
        self.sym_i.push(sym.re > 0.0);
        self.sym_q.push(sym.im > 0.0);

        let sync_i = self.pattern.rail_i();
        let n = self.pattern.len() as f64;
        self.rxy = Complex64::new(
            f64::from(sync_i.correlate(&self.sym_i)),
            f64::from(sync_i.correlate(&self.sym_q)),
        ) / n;
        self.rxy
    }

    /// Clear the received windows; the reference pattern is untouched.
    pub fn reset(&mut self) {
        self.sym_i.clear();
        self.sym_q.clear();
        self.rxy = Complex64::new(0.0, 0.0);
    }

    /// Last correlation computed by `push`.
    pub fn last_correlation(&self) -> Complex64 {
        self.rxy
    }

    /// Reference pattern length n.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// True if the reference holds no bits. Construction rejects this case.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The bound reference pattern.
    pub fn pattern(&self) -> &SyncPattern {
        &self.pattern
    }
}

impl fmt::Display for MixedBinarySync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "binary sync (real pattern/IQ symbols): {}, rxy={:.4}{:+.4}j",
            self.pattern, self.rxy.re, self.rxy.im
        )
    }
}

/// Complex pattern, complex symbols. The four rail correlations combine
/// like a complex multiply with the bit correlation standing in for the
/// real multiply-accumulate:
///
/// `[corr(i,i) - corr(q,q)] + j [corr(i,q) + corr(q,i)]`
#[derive(Debug, Clone)]
pub struct IqBinarySync {
    pattern: IqSyncPattern,
    sym_i: BitBuffer,
    sym_q: BitBuffer,
    rxy: Complex64,
}

impl IqBinarySync {
    /// Bind a correlator to a pre-built reference pattern.
    pub fn new(pattern: IqSyncPattern) -> Self {
        let sym_i = BitBuffer::new(pattern.len());
        let sym_q = BitBuffer::new(pattern.len());
        Self {
            pattern,
            sym_i,
            sym_q,
            rxy: Complex64::new(0.0, 0.0),
        }
    }

    /// Build the reference by sign-slicing an explicit complex vector.
    pub fn from_sequence(samples: &[Complex64]) -> Result<Self, PatternError> {
        Ok(Self::new(IqSyncPattern::from_sequence(samples)?))
    }

    /// Build the reference from a catalog m-sequence. Both reference rails
    /// carry the same bits; see [`IqSyncPattern::from_msequence`].
    pub fn from_msequence(code: SequenceLength) -> Self {
        Self::new(IqSyncPattern::from_msequence(code))
    }

    /// Push one symbol and return the updated correlation.
    pub fn push(&mut self, sym: Complex64) -> Complex64 {
        self.sym_i.push(sym.re > 0.0);
        self.sym_q.push(sym.im > 0.0);

        let sync_i = self.pattern.rail_i();
        let sync_q = self.pattern.rail_q();
        let rii = sync_i.correlate(&self.sym_i);
        let rqq = sync_q.correlate(&self.sym_q);
        let riq = sync_i.correlate(&self.sym_q);
        let rqi = sync_q.correlate(&self.sym_i);

        let n = self.pattern.len() as f64;
        self.rxy = Complex64::new(f64::from(rii - rqq), f64::from(riq + rqi)) / n;
        self.rxy
    }

    /// Clear the received windows; the reference pattern is untouched.
    pub fn reset(&mut self) {
        self.sym_i.clear();
        self.sym_q.clear();
        self.rxy = Complex64::new(0.0, 0.0);
    }

    /// Last correlation computed by `push`.
    pub fn last_correlation(&self) -> Complex64 {
        self.rxy
    }

    /// Reference pattern length n.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// True if the reference holds no bits. Construction rejects this case.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The bound reference pattern.
    pub fn pattern(&self) -> &IqSyncPattern {
        &self.pattern
    }
}

impl fmt::Display for IqBinarySync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "binary sync (IQ/IQ): {}, rxy={:.4}{:+.4}j",
            self.pattern, self.rxy.re, self.rxy.im
        )
    }
}
