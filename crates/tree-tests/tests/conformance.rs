//! Conformance tests: fixed records decoded end to end, plus the exact
//! wording of every diagnostic.
//!
//! Diagnostics are pinned with insta inline snapshots. A wording change is
//! deliberate only if the snapshot is updated with `cargo insta review`.

use insta::assert_snapshot;
use tree_decoder::{DecodeError, DecoderConfig, Grammar, decode_to_vec, decode_with_config};
use tree_tests::{RecordBuilder, sample_hash};

fn diagnostic(input: &[u8]) -> String {
    decode_to_vec(input)
        .expect_err("record should be rejected")
        .to_string()
}

// ── Fixed scenarios ──────────────────────────────────────────────────────────

#[test]
fn empty_record() {
    assert_eq!(decode_to_vec(b"tree 0\0").unwrap(), b"tree:0\n");
}

#[test]
fn one_entry() {
    let mut input = b"tree 0\0644 a.txt\0".to_vec();
    input.extend(0x00u8..=0x13);

    assert_eq!(
        decode_to_vec(&input).unwrap(),
        b"tree:0\n644:a.txt:000102030405060708090a0b0c0d0e0f10111213\n"
    );
}

#[test]
fn typical_git_style_tree() {
    let mut builder = RecordBuilder::new();
    builder
        .size(b"211")
        .add_entry("100644", b".gitignore", sample_hash(1))
        .add_entry("100644", b"Cargo.toml", sample_hash(2))
        .add_entry("100755", b"build.sh", sample_hash(3))
        .add_entry("40000", b"src", sample_hash(4))
        .add_entry("120000", b"link to readme", sample_hash(5));

    let out = decode_to_vec(&builder.encode()).unwrap();
    assert_eq!(out, builder.expected_text());
}

#[test]
fn permissive_grammar_reads_other_tokens() {
    let mut input = b"listing 1k\0rwxr-xr-x run.sh\0".to_vec();
    input.extend(sample_hash(9));

    let mut out = Vec::new();
    let summary = decode_with_config(
        &input[..],
        &mut out,
        DecoderConfig {
            grammar: Grammar::Permissive,
        },
    )
    .unwrap();

    assert_eq!(summary.entries, 1);
    let expected = format!("listing:1k\nrwxr-xr-x:run.sh:{}\n", hex::encode(sample_hash(9)));
    assert_eq!(out, expected.as_bytes());
}

#[test]
fn strict_grammar_rejects_symbolic_permissions() {
    let mut builder = RecordBuilder::new();
    builder.add_entry("rw-", b"f", sample_hash(0));

    assert!(matches!(
        decode_to_vec(&builder.encode()),
        Err(DecodeError::InvalidPermissions { byte: b'r', offset: 7 })
    ));
}

// ── Diagnostics ──────────────────────────────────────────────────────────────

#[test]
fn header_diagnostic() {
    assert_snapshot!(
        diagnostic(b"blob 0\0"),
        @r##"invalid tree header: expected "tree ", found "blob ""##
    );
}

#[test]
fn size_diagnostic() {
    assert_snapshot!(
        diagnostic(b"tree 12a\0"),
        @"invalid character 'a' in size field at offset 7"
    );
}

#[test]
fn empty_permissions_diagnostic() {
    assert_snapshot!(
        diagnostic(b"tree 0\0 a\0"),
        @"empty permissions field at offset 7"
    );
}

#[test]
fn permissions_diagnostic_escapes_bytes() {
    assert_snapshot!(
        diagnostic(b"tree 0\0\xff44 a\0"),
        @r"invalid character '\xff' in permissions field at offset 7"
    );
}

#[test]
fn filename_diagnostic() {
    assert_snapshot!(
        diagnostic(b"tree 0\0644 a\nb\0"),
        @r"filename field contains '\n' at offset 12"
    );
}

#[test]
fn truncation_diagnostic() {
    let mut input = b"tree 0\0644 a\0".to_vec();
    input.extend([1u8; 5]);
    assert_snapshot!(
        diagnostic(&input),
        @"unexpected end of input in hash field at offset 18"
    );
}
