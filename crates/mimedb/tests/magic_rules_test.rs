// Magic rule construction and evaluation against realistic rule text,
// including the error isolation contract: one malformed definition must
// not poison the definitions around it.

use mimedb::magic::{
    best_magic_candidate, build_match_node, build_rule_set, validate_rule_set, MagicError,
};

#[test]
fn test_realistic_rule_table() {
    let rule_sets = vec![
        (
            "image/png",
            build_rule_set(
                50,
                vec![build_match_node("string", "\\x89PNG\\r\\n\\x1a\\n", None, "0").unwrap()],
            ),
        ),
        (
            "application/zip",
            build_rule_set(
                50,
                vec![build_match_node("string", "PK\\003\\004", None, "0").unwrap()],
            ),
        ),
        (
            "audio/mpeg",
            build_rule_set(
                // MPEG frame sync: 0xFFE0 under mask, anywhere in the
                // first few bytes
                30,
                vec![build_match_node("big16", "0xFFE0", Some("0xFFE0"), "0:4").unwrap()],
            ),
        ),
        (
            "application/x-executable",
            build_rule_set(
                80,
                vec![build_match_node("string", "\\177ELF", None, "0").unwrap()],
            ),
        ),
    ];

    let best = best_magic_candidate(b"PK\x03\x04....", &rule_sets).unwrap();
    assert_eq!(*best.0, "application/zip");

    let best = best_magic_candidate(b"\x7FELF\x02\x01\x01", &rule_sets).unwrap();
    assert_eq!(*best.0, "application/x-executable");
    assert_eq!(best.1, 80);

    // 0xFF 0xFB: sync bits set under the 0xFFE0 mask
    let best = best_magic_candidate(&[0xFF, 0xFB, 0x90, 0x00], &rule_sets).unwrap();
    assert_eq!(*best.0, "audio/mpeg");

    assert!(best_magic_candidate(b"plain text here", &rule_sets).is_none());
}

#[test]
fn test_malformed_definitions_fail_individually() {
    // Each failure is scoped to its own rule; the good rule still works
    assert!(matches!(
        build_match_node("big16", "0xFFFFF", None, "0"),
        Err(MagicError::MalformedValue(_))
    ));
    assert!(matches!(
        build_match_node("string", "ab", Some("0xF"), "0"),
        Err(MagicError::MalformedMask(_))
    ));
    assert!(matches!(
        build_match_node("byte", "1", None, "9:2"),
        Err(MagicError::MalformedOffset(_))
    ));

    let good = build_match_node("string", "OggS", None, "0").unwrap();
    let rule_sets = vec![("audio/ogg", build_rule_set(50, vec![good]))];
    let best = best_magic_candidate(b"OggS\x00\x02", &rule_sets).unwrap();
    assert_eq!(*best.0, "audio/ogg");
}

#[test]
fn test_validation_accepts_built_rules() {
    let mut riff = build_match_node("string", "RIFF", None, "0").unwrap();
    riff.add_child(build_match_node("string", "WEBP", None, "8").unwrap());
    let result = validate_rule_set(&build_rule_set(50, vec![riff]));
    assert!(result.is_valid());
    assert_eq!(result.stats.node_count, 2);
    assert_eq!(result.stats.max_depth, 2);
}
