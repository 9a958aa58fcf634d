// Additional integration tests for dataset invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

#[test]
fn flower_colors_are_unique_css_tokens() {
    let mut seen = HashSet::new();
    for color in flower_garden::FLOWER_COLORS {
        assert!(seen.insert(*color), "duplicate color '{}' in FLOWER_COLORS", color);
        assert!(!color.is_empty(), "empty color class in FLOWER_COLORS");
        assert!(
            color.chars().all(|c| c.is_ascii_lowercase()),
            "color '{}' is not a plain lowercase class name",
            color
        );
    }
}

#[test]
fn secret_sequence_uses_valid_key_names() {
    for key in flower_garden::SECRET_SEQUENCE {
        let valid = key.starts_with("Arrow") || key.chars().all(|c| c.is_ascii_lowercase());
        assert!(valid, "unexpected key name '{}' in SECRET_SEQUENCE", key);
    }
}

#[test]
fn secret_sequence_is_the_classic_pattern() {
    let seq = flower_garden::SECRET_SEQUENCE;
    assert_eq!(seq.iter().filter(|k| **k == "ArrowUp").count(), 2);
    assert_eq!(seq.iter().filter(|k| **k == "ArrowDown").count(), 2);
    assert_eq!(seq.iter().filter(|k| **k == "ArrowLeft").count(), 2);
    assert_eq!(seq.iter().filter(|k| **k == "ArrowRight").count(), 2);
}
