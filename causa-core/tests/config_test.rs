use causa_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CausaConfig::from_toml("").unwrap();

    assert_eq!(config.adjustment.max_set_size, 0);
    assert!(config.adjustment.exclude_descendants);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.tracing_enabled);
    assert_eq!(config, CausaConfig::default());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[adjustment]
max_set_size = 3

[observability]
log_level = "debug"
"#;
    let config = CausaConfig::from_toml(toml).unwrap();
    assert_eq!(config.adjustment.max_set_size, 3);
    // Non-overridden fields keep defaults
    assert!(config.adjustment.exclude_descendants);
    assert_eq!(config.observability.log_level, "debug");
    assert!(!config.observability.tracing_enabled);
}

#[test]
fn config_rejects_unknown_log_level() {
    let err = CausaConfig::from_toml("[observability]\nlog_level = \"loud\"\n").unwrap_err();
    assert!(matches!(err, causa_core::CausaError::ConfigError(_)));
    assert!(err.to_string().contains("loud"));
}

#[test]
fn config_rejects_malformed_toml() {
    let err = CausaConfig::from_toml("[adjustment\nmax_set_size = ").unwrap_err();
    assert!(matches!(err, causa_core::CausaError::ConfigError(_)));
}

#[test]
fn config_serde_roundtrip() {
    let mut config = CausaConfig::default();
    config.adjustment.max_set_size = 2;
    config.adjustment.exclude_descendants = false;
    let toml_str = config.to_toml().unwrap();
    let roundtripped = CausaConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn filter_directive_scopes_every_crate() {
    let config = ObservabilityConfig {
        log_level: "trace".into(),
        tracing_enabled: true,
    };
    let directive = config.filter_directive();
    assert!(directive.contains("causa_graph=trace"));
    assert!(directive.contains("causa_core=trace"));
}

proptest::proptest! {
    #[test]
    fn adjustment_section_roundtrips_through_toml(
        max_set_size in 0_usize..10_000,
        exclude_descendants in proptest::bool::ANY,
    ) {
        let config = CausaConfig {
            adjustment: AdjustmentConfig { max_set_size, exclude_descendants },
            ..CausaConfig::default()
        };
        let parsed = CausaConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        proptest::prop_assert_eq!(parsed, config);
    }
}
