//! Fuzz target for date detection and type inference.
//!
//! This fuzzer tests that:
//! 1. Regex-based date detection doesn't crash on pathological input
//! 2. Calendar validation rejects malformed dates without panicking
//! 3. Column classification never panics on any text values

#![no_main]

use datalens::inference::{classify, looks_like_date};
use datalens::Scalar;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        let _ = looks_like_date(content);

        // Treat each line as a sampled cell of one column.
        let values: Vec<Scalar> = content.lines().map(Scalar::from).collect();
        let samples: Vec<&Scalar> = values.iter().collect();
        let _ = classify(&samples);
    }
});
