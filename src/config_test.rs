use super::*;

/// # Safety
/// Env mutation is confined to `from_env_reads_overrides`; the remaining tests
/// call the pure parsers.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
    }
}

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_padded_number() {
    assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "eighty"));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_bind_addr_defaults_to_all_interfaces() {
    assert_eq!(parse_bind_addr(None).unwrap().to_string(), DEFAULT_BIND_ADDR);
}

#[test]
fn parse_bind_addr_rejects_hostnames() {
    assert!(matches!(
        parse_bind_addr(Some("localhost")),
        Err(ConfigError::InvalidBindAddr(_))
    ));
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "4100");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:4100");

    unsafe { clear_host_env() };
}
