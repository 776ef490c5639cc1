#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tigon_bridge::config;
use tigon_core::TigonError;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
view:
  allows_inline_media_playbak: false # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, TigonError::BadConfig(_)), "got {err:?}");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert!(cfg.view.allows_inline_media_playback);
    assert!(cfg.view.passthrough_channels.is_empty());
    assert_eq!(cfg.logging.filter, "info");
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
view:
  allows_inline_media_playback: false
  passthrough_channels: ["analytics", "console"]
logging:
  filter: "tigon_bridge=debug,info"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert!(!cfg.view.allows_inline_media_playback);
    assert_eq!(cfg.view.passthrough_channels, vec!["analytics", "console"]);
    assert_eq!(cfg.logging.filter, "tigon_bridge=debug,info");
}

#[test]
fn rejects_other_versions() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(matches!(err, TigonError::UnsupportedVersion));
}

#[test]
fn rejects_bridge_channel_as_passthrough() {
    let bad = r#"
version: 1
view:
  passthrough_channels: ["tigon"]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, TigonError::BadConfig(_)));
}

#[test]
fn rejects_duplicate_passthrough_channels() {
    let bad = r#"
version: 1
view:
  passthrough_channels: ["a", "a"]
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn rejects_empty_log_filter() {
    let bad = r#"
version: 1
logging:
  filter: "  "
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, TigonError::BadConfig(_)));
}

#[test]
fn missing_file_is_reported() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert!(matches!(err, TigonError::Internal(_)));
}
