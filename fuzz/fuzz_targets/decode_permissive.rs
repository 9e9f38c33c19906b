#![no_main]

use libfuzzer_sys::fuzz_target;
use tree_decoder::{DecoderConfig, Grammar};

// Fuzz target: permissive decoder on arbitrary bytes.
//
// Every input the strict grammar accepts must also be accepted by the
// permissive grammar, with identical output.
fuzz_target!(|data: &[u8]| {
    let config = DecoderConfig {
        grammar: Grammar::Permissive,
    };
    let mut permissive = Vec::new();
    let relaxed = tree_decoder::decode_with_config(data, &mut permissive, config);

    if let Ok(strict) = tree_decoder::decode_to_vec(data) {
        assert!(relaxed.is_ok());
        assert_eq!(strict, permissive);
    }
});
