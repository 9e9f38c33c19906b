#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: strict decoder on arbitrary bytes.
//
// The decoder must never panic, and on success the output must hold one
// line per entry plus the header line.
fuzz_target!(|data: &[u8]| {
    let mut out = Vec::new();
    if let Ok(summary) = tree_decoder::decode(data, &mut out) {
        assert_eq!(summary.bytes_read, data.len() as u64);
        assert_eq!(
            out.iter().filter(|&&b| b == b'\n').count(),
            summary.entries + 1
        );
    }
});
