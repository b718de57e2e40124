//! Locate a P/N preamble embedded in a noisy symbol stream.
//!
//! Run with: cargo run --example preamble_search -p pnsync-core

use pnsync_core::prelude::*;

fn main() {
    let code = SequenceLength::N63;
    let n = code.length();
    let mut sync = RealBinarySync::from_msequence(code);

    // Build a stream: 40 symbols of deterministic noise, then the bipolar
    // preamble with additive noise, then more noise.
    let preamble: Vec<f64> = {
        let mut ms = MSequence::new(code);
        (0..n).map(|_| if ms.next_bit() { 1.0 } else { -1.0 }).collect()
    };

    let mut stream: Vec<f64> = (0..40).map(|k| (k as f64 * 1.9).sin()).collect();
    for (k, &chip) in preamble.iter().enumerate() {
        stream.push(chip + 0.4 * (k as f64 * 0.7).sin());
    }
    stream.extend((0..40).map(|k| (k as f64 * 2.3).cos()));

    println!("Searching {} symbols for a period-{} preamble...\n", stream.len(), n);

    let mut peak = 0.0_f64;
    let mut peak_index = 0;
    for (index, &sym) in stream.iter().enumerate() {
        let rxy = sync.push(sym);
        if rxy.abs() > peak.abs() {
            peak = rxy;
            peak_index = index;
        }
    }

    println!("Reference: {}", sync.pattern());
    println!("Peak correlation {:.3} at symbol {}", peak, peak_index);
    println!("Preamble ends at symbol {}", 40 + n - 1);
}
