//! Synchronization Pattern — Immutable Hard-Decision Reference Rails
//!
//! A synchronization pattern is the receiver's fixed reference for preamble
//! search: one bit rail for real-valued patterns ([`SyncPattern`]), or an
//! in-phase and a quadrature rail for complex patterns ([`IqSyncPattern`]).
//! Patterns are built once, either by sign-slicing an explicit sample
//! vector or by draining a maximal-length sequence generator from the
//! catalog, and never change afterwards. The correlators in
//! [`binary_sync`](crate::binary_sync) are agnostic to which path built
//! their reference.
//!
//! ## Example
//!
//! ```rust
//! use pnsync_core::sync_pattern::SyncPattern;
//! use pnsync_core::msequence::SequenceLength;
//!
//! // Sign-slice an explicit bipolar sequence.
//! let explicit = SyncPattern::from_sequence(&[1.0, -1.0, 1.0, 1.0]).unwrap();
//! assert_eq!(explicit.len(), 4);
//!
//! // Or drain a generator from the catalog.
//! let pn = SyncPattern::from_msequence(SequenceLength::N63);
//! assert_eq!(pn.len(), 63);
//! ```

use std::fmt;

use num_complex::Complex64;
use thiserror::Error;

use crate::bit_buffer::BitBuffer;
use crate::msequence::{MSequence, SequenceLength};

/// Pattern construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// An explicit reference sequence held no samples.
    #[error("reference sequence is empty")]
    EmptySequence,
    /// No maximal-length generator of the requested period exists.
    #[error("no maximal-length generator of period {length} in the catalog")]
    UnsupportedLength {
        /// The requested sequence length.
        length: usize,
    },
}

/// How a pattern was built, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSource {
    /// Sign-sliced from an explicit sample vector.
    Explicit,
    /// Drained from a catalog m-sequence generator.
    MSequence(SequenceLength),
}

impl fmt::Display for PatternSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSource::Explicit => write!(f, "explicit"),
            PatternSource::MSequence(code) => write!(f, "m-sequence (m={})", code.order()),
        }
    }
}

/// Real-valued reference pattern: a single in-phase bit rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPattern {
    rail_i: BitBuffer,
    source: PatternSource,
}

impl SyncPattern {
    /// Sign-slice an explicit sample vector into a reference rail.
    ///
    /// Each bit is `sample > 0`; a sample of exactly zero slices to 0.
    pub fn from_sequence(samples: &[f64]) -> Result<Self, PatternError> {
        if samples.is_empty() {
            return Err(PatternError::EmptySequence);
        }
        let mut rail_i = BitBuffer::new(samples.len());
        for &sample in samples {
            rail_i.push(sample > 0.0);
        }
        Ok(Self {
            rail_i,
            source: PatternSource::Explicit,
        })
    }

    /// Drain one period of a catalog m-sequence into the reference rail.
    ///
    /// The generator is scoped to this call and dropped once the rail is
    /// filled.
    pub fn from_msequence(code: SequenceLength) -> Self {
        let mut ms = MSequence::new(code);
        let mut rail_i = BitBuffer::new(ms.len());
        ms.reset();
        ms.fill(&mut rail_i);
        Self {
            rail_i,
            source: PatternSource::MSequence(code),
        }
    }

    /// Pattern length in bits.
    pub fn len(&self) -> usize {
        self.rail_i.len()
    }

    /// True if the pattern holds no bits. Construction rejects this case.
    pub fn is_empty(&self) -> bool {
        self.rail_i.is_empty()
    }

    /// In-phase reference rail.
    pub fn rail_i(&self) -> &BitBuffer {
        &self.rail_i
    }

    /// How this pattern was built.
    pub fn source(&self) -> PatternSource {
        self.source
    }
}

impl fmt::Display for SyncPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sync pattern: n={}, source={}", self.len(), self.source)
    }
}

/// Complex reference pattern: in-phase and quadrature bit rails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IqSyncPattern {
    rail_i: BitBuffer,
    rail_q: BitBuffer,
    source: PatternSource,
}

impl IqSyncPattern {
    /// Sign-slice an explicit complex sample vector into I and Q rails.
    ///
    /// The in-phase rail takes `re > 0`, the quadrature rail `im > 0`.
    pub fn from_sequence(samples: &[Complex64]) -> Result<Self, PatternError> {
        if samples.is_empty() {
            return Err(PatternError::EmptySequence);
        }
        let mut rail_i = BitBuffer::new(samples.len());
        let mut rail_q = BitBuffer::new(samples.len());
        for &sample in samples {
            rail_i.push(sample.re > 0.0);
            rail_q.push(sample.im > 0.0);
        }
        Ok(Self {
            rail_i,
            rail_q,
            source: PatternSource::Explicit,
        })
    }

    /// Drain a catalog m-sequence into both rails.
    ///
    /// The same generator is reset and redrained for the quadrature rail,
    /// so both rails carry identical bits. Receivers built against this
    /// layout depend on it; callers wanting independent rails should build
    /// the pattern from an explicit sample vector instead.
    pub fn from_msequence(code: SequenceLength) -> Self {
        let mut ms = MSequence::new(code);
        let mut rail_i = BitBuffer::new(ms.len());
        let mut rail_q = BitBuffer::new(ms.len());
        ms.reset();
        ms.fill(&mut rail_i);
        ms.reset();
        ms.fill(&mut rail_q);
        Self {
            rail_i,
            rail_q,
            source: PatternSource::MSequence(code),
        }
    }

    /// Pattern length in bits.
    pub fn len(&self) -> usize {
        self.rail_i.len()
    }

    /// True if the pattern holds no bits. Construction rejects this case.
    pub fn is_empty(&self) -> bool {
        self.rail_i.is_empty()
    }

    /// In-phase reference rail.
    pub fn rail_i(&self) -> &BitBuffer {
        &self.rail_i
    }

    /// Quadrature reference rail.
    pub fn rail_q(&self) -> &BitBuffer {
        &self.rail_q
    }

    /// How this pattern was built.
    pub fn source(&self) -> PatternSource {
        self.source
    }
}

impl fmt::Display for IqSyncPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IQ sync pattern: n={}, source={}", self.len(), self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_slicing() {
        let pattern = SyncPattern::from_sequence(&[1.0, -1.0, 0.5, -0.1, 2.0]).unwrap();
        assert_eq!(pattern.rail_i().bits(), &[true, false, true, false, true]);
    }

    #[test]
    fn test_zero_slices_to_zero() {
        let pattern = SyncPattern::from_sequence(&[0.0, 1.0, 0.0]).unwrap();
        assert_eq!(pattern.rail_i().bits(), &[false, true, false]);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert_eq!(
            SyncPattern::from_sequence(&[]),
            Err(PatternError::EmptySequence)
        );
        assert_eq!(
            IqSyncPattern::from_sequence(&[]),
            Err(PatternError::EmptySequence)
        );
    }

    #[test]
    fn test_iq_slicing() {
        let samples = [
            Complex64::new(1.0, -1.0),
            Complex64::new(-1.0, 1.0),
            Complex64::new(0.3, 0.3),
        ];
        let pattern = IqSyncPattern::from_sequence(&samples).unwrap();
        assert_eq!(pattern.rail_i().bits(), &[true, false, true]);
        assert_eq!(pattern.rail_q().bits(), &[false, true, true]);
    }

    #[test]
    fn test_msequence_length() {
        assert_eq!(SyncPattern::from_msequence(SequenceLength::N7).len(), 7);
        assert_eq!(
            SyncPattern::from_msequence(SequenceLength::N1023).len(),
            1023
        );
    }

    #[test]
    fn test_msequence_deterministic() {
        let a = SyncPattern::from_msequence(SequenceLength::N63);
        let b = SyncPattern::from_msequence(SequenceLength::N63);
        assert_eq!(a, b);
    }

    #[test]
    fn test_iq_msequence_rails_identical() {
        // Both rails drain resets of the same generator.
        let pattern = IqSyncPattern::from_msequence(SequenceLength::N31);
        assert_eq!(pattern.rail_i(), pattern.rail_q());
    }

    #[test]
    fn test_display() {
        let pattern = SyncPattern::from_msequence(SequenceLength::N31);
        assert_eq!(pattern.to_string(), "sync pattern: n=31, source=m-sequence (m=5)");

        let explicit = SyncPattern::from_sequence(&[1.0, -1.0]).unwrap();
        assert_eq!(explicit.to_string(), "sync pattern: n=2, source=explicit");
    }
}
