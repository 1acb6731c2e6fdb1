use super::*;

// =============================================================================
// env_bool: uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on", "TRUE", "  On  "].iter().enumerate() {
        let key = format!("__TEST_GR_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off", "No"].iter().enumerate() {
        let key = format!("__TEST_GR_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__TEST_GR_EB_INVALID_311__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_GR_EB_SURELY_UNSET_42__"), None);
}

// =============================================================================
// ServerConfig::from_values
// =============================================================================

#[test]
fn defaults_when_nothing_set() {
    let config = ServerConfig::from_values(None, None, None).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_host, DEFAULT_BIND_HOST);
    assert!(config.compression);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_are_used() {
    let config = ServerConfig::from_values(Some("8080"), Some("127.0.0.1"), Some(false)).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_host, "127.0.0.1");
    assert!(!config.compression);
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_values(Some("  "), Some(""), None).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_host, DEFAULT_BIND_HOST);
}

#[test]
fn port_is_trimmed() {
    let config = ServerConfig::from_values(Some(" 4000 "), None, None).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_values(Some("http"), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
    assert!(err.to_string().starts_with("invalid PORT \"http\""));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_values(Some("70000"), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}
