// Integration tests (native) for the `flower-garden` crate.
// These tests avoid wasm-specific functionality and exercise the public
// datasets so they can run under `cargo test` on the host.

#[test]
fn flower_palette_has_six_variants() {
    assert_eq!(flower_garden::FLOWER_COLORS.len(), 6);
}

#[test]
fn secret_sequence_is_ten_keys_ending_in_b_a() {
    let seq = flower_garden::SECRET_SEQUENCE;
    assert_eq!(seq.len(), 10);
    assert_eq!(&seq[8..], &["b", "a"]);
}
