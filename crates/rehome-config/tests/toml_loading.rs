//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use rehome_config::{ConfigError, InFlightPolicy, PayloadEncoding, RehomeConfig};

#[test]
fn loads_server_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "https://central.example.org/"
timeout_secs = 30
user_agent = "rehome-test"
payload = "json"
"#,
        )?;

        let config = RehomeConfig::from_figment(
            Figment::from(Serialized::defaults(RehomeConfig::default()))
                .merge(Toml::file("config.toml")),
        )
        .expect("config loads");

        assert_eq!(config.server.base_url(), "https://central.example.org");
        assert_eq!(config.server.timeout_secs, 30);
        assert_eq!(config.server.user_agent, "rehome-test");
        assert_eq!(config.server.payload, PayloadEncoding::Json);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
in_flight = "parallel"
"#,
        )?;

        let config = RehomeConfig::from_figment(
            Figment::from(Serialized::defaults(RehomeConfig::default()))
                .merge(Toml::file("config.toml")),
        )
        .expect("config loads");

        assert_eq!(config.general.in_flight, InFlightPolicy::Parallel);
        assert!(config.general.validate_selection);
        assert_eq!(config.server.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rehome")?;
        jail.create_file(
            ".rehome/config.toml",
            r#"
[server]
base_url = "http://localhost:8080"
"#,
        )?;

        let config = RehomeConfig::load().expect("config loads");
        assert_eq!(config.server.base_url(), "http://localhost:8080");
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "central.example.org"
"#,
        )?;

        let result = RehomeConfig::from_figment(
            Figment::from(Serialized::defaults(RehomeConfig::default()))
                .merge(Toml::file("config.toml")),
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn unknown_payload_encoding_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
payload = "xml"
"#,
        )?;

        let result = RehomeConfig::from_figment(
            Figment::from(Serialized::defaults(RehomeConfig::default()))
                .merge(Toml::file("config.toml")),
        );
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
