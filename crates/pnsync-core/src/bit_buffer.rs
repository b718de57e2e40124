//! Bit Buffer — Fixed-Length Sliding Window of Hard Decisions
//!
//! A fixed-length FIFO of single-bit values with a signed correlation
//! primitive. Pushing a bit shifts out the oldest, so the buffer always
//! holds the most recent `len` decisions. [`correlate`] counts agreeing
//! minus disagreeing positions against an equal-length buffer, the cheap
//! binary stand-in for a full cross-correlation used by preamble search
//! front-ends: the result equals `len - 2 * hamming_distance` and spans
//! `[-len, len]`.
//!
//! [`correlate`]: BitBuffer::correlate
//!
//! ## Example
//!
//! ```rust
//! use pnsync_core::bit_buffer::BitBuffer;
//!
//! let reference = BitBuffer::from_bits(&[true, false, true, true]);
//! let mut window = BitBuffer::new(4);
//! for &bit in &[true, false, true, true] {
//!     window.push(bit);
//! }
//! assert_eq!(reference.correlate(&window), 4); // full agreement
//!
//! window.push(false); // oldest bit evicted, window now [false, true, true, false]
//! assert!(reference.correlate(&window) < 4);
//! ```

use std::fmt;

/// Fixed-length sliding bit window.
///
/// The newest bit sits at the highest index; `push` evicts index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitBuffer {
    /// Bit storage, oldest first.
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Create a buffer of `len` bits, all zero.
    pub fn new(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Create a buffer holding exactly the given bits, oldest first.
    pub fn from_bits(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }

    /// Shift in the newest bit, evicting the oldest.
    pub fn push(&mut self, bit: bool) {
        if self.bits.is_empty() {
            return;
        }
        self.bits.copy_within(1.., 0);
        let last = self.bits.len() - 1;
        self.bits[last] = bit;
    }

    /// Signed correlation against an equal-length buffer.
    ///
    /// Sums +1 for each agreeing position and -1 for each disagreeing
    /// position; equivalently `len - 2 * hamming_distance`.
    ///
    /// # Panics
    ///
    /// Panics if the buffers have different lengths.
    pub fn correlate(&self, other: &BitBuffer) -> i32 {
        assert_eq!(
            self.bits.len(),
            other.bits.len(),
            "correlation requires equal-length buffers"
        );
        let agree = self
            .bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a == b)
            .count() as i32;
        2 * agree - self.bits.len() as i32
    }

    /// Number of differing positions against an equal-length buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffers have different lengths.
    pub fn hamming_distance(&self, other: &BitBuffer) -> usize {
        assert_eq!(
            self.bits.len(),
            other.bits.len(),
            "Hamming distance requires equal-length buffers"
        );
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Reset every bit to zero without reallocating.
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Buffer length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the buffer holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit contents, oldest first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_all_zero() {
        let buf = BitBuffer::new(8);
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.count_ones(), 0);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut buf = BitBuffer::new(3);
        buf.push(true);
        buf.push(false);
        buf.push(true);
        assert_eq!(buf.bits(), &[true, false, true]);
        buf.push(true);
        assert_eq!(buf.bits(), &[false, true, true]);
    }

    #[test]
    fn test_correlate_identical() {
        let a = BitBuffer::from_bits(&[true, false, true, true, false]);
        assert_eq!(a.correlate(&a), 5);
    }

    #[test]
    fn test_correlate_complement() {
        let a = BitBuffer::from_bits(&[true, false, true, false]);
        let b = BitBuffer::from_bits(&[false, true, false, true]);
        assert_eq!(a.correlate(&b), -4);
    }

    #[test]
    fn test_correlate_single_flip() {
        let a = BitBuffer::from_bits(&[true, true, false, false, true, false, true, true]);
        let mut flipped = a.bits().to_vec();
        flipped[3] = !flipped[3];
        let b = BitBuffer::from_bits(&flipped);
        assert_eq!(a.correlate(&b), 8 - 2);
        assert_eq!(a.hamming_distance(&b), 1);
    }

    #[test]
    fn test_correlate_matches_hamming() {
        let a = BitBuffer::from_bits(&[true, false, false, true, true, false]);
        let b = BitBuffer::from_bits(&[false, false, true, true, false, false]);
        let n = a.len() as i32;
        assert_eq!(a.correlate(&b), n - 2 * a.hamming_distance(&b) as i32);
    }

    #[test]
    #[should_panic(expected = "equal-length")]
    fn test_correlate_length_mismatch() {
        let a = BitBuffer::new(4);
        let b = BitBuffer::new(5);
        let _ = a.correlate(&b);
    }

    #[test]
    fn test_clear() {
        let mut buf = BitBuffer::from_bits(&[true, true, true]);
        buf.clear();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.count_ones(), 0);
    }

    #[test]
    fn test_display() {
        let buf = BitBuffer::from_bits(&[true, false, true, true]);
        assert_eq!(buf.to_string(), "1011");
    }
}
