use crate::conf::{EnvOverrides, parse_config};

fn config(listen: &str) -> crate::conf::RailwatchConfig {
    let mut cfg = parse_config(r#"source = { url = "http://localhost/" }"#).unwrap();
    cfg.server.listen = listen.to_string();
    cfg
}

#[test]
fn no_overrides_leave_listen_alone() {
    let mut cfg = config("0.0.0.0:5555");

    EnvOverrides::default().apply(&mut cfg);

    assert_eq!(cfg.server.listen, "0.0.0.0:5555");
}

#[test]
fn port_only_keeps_host() {
    let mut cfg = config("0.0.0.0:5555");
    let overrides = EnvOverrides {
        bind_host: None,
        port: Some("9000".to_string()),
    };

    overrides.apply(&mut cfg);

    assert_eq!(cfg.server.listen, "0.0.0.0:9000");
}

#[test]
fn host_only_keeps_port() {
    let mut cfg = config("0.0.0.0:5555");
    let overrides = EnvOverrides {
        bind_host: Some("127.0.0.1".to_string()),
        port: None,
    };

    overrides.apply(&mut cfg);

    assert_eq!(cfg.server.listen, "127.0.0.1:5555");
}

#[test]
fn ipv6_hosts_are_bracketed() {
    let mut cfg = config("[::1]:5555");
    let overrides = EnvOverrides {
        bind_host: Some("::".to_string()),
        port: None,
    };

    overrides.apply(&mut cfg);

    assert_eq!(cfg.server.listen, "[::]:5555");
    assert!(cfg.server.listen.parse::<std::net::SocketAddr>().is_ok());
}
