#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tree_tests::RecordBuilder;
use tree_wire::hash::HASH_LEN;

#[derive(Arbitrary, Debug)]
struct FuzzEntry {
    mode: u32,
    name: Vec<u8>,
    hash: [u8; HASH_LEN],
}

// Fuzz target: well-formed records built from arbitrary entries.
//
// Names are scrubbed of the bytes the layout reserves, so every record is
// valid and must decode to exactly the builder's expected text.
fuzz_target!(|input: (u16, Vec<FuzzEntry>)| {
    let (size, entries) = input;
    let mut builder = RecordBuilder::new();
    builder.size(size.to_string().as_bytes());

    for entry in &entries {
        let name: Vec<u8> = entry
            .name
            .iter()
            .copied()
            .filter(|b| !matches!(b, b':' | b'\n' | 0))
            .collect();
        let mode = format!("{:o}", entry.mode);
        builder.add_entry(&mode, &name, entry.hash);
    }

    let out = tree_decoder::decode_to_vec(&builder.encode()).expect("well-formed record");
    assert_eq!(out, builder.expected_text());
});
