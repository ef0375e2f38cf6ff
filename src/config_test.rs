use super::*;

#[test]
fn default_config_points_at_original_deployment() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.identity.subdomain, DEFAULT_NHOST_SUBDOMAIN);
    assert_eq!(cfg.identity.region, DEFAULT_NHOST_REGION);
    assert_eq!(cfg.identity.auth_url, None);
    assert_eq!(cfg.webhook_url, DEFAULT_WEBHOOK_URL);
}

#[test]
fn base_url_built_from_subdomain_and_region() {
    let cfg = AppConfig::default();
    assert_eq!(
        cfg.identity.base_url(),
        "https://rqhbnhgtusbwbqghesfy.auth.ap-south-1.nhost.run/v1"
    );
}

#[test]
fn auth_url_override_wins_and_drops_trailing_slash() {
    let cfg = AppConfig::from_overrides(ConfigOverrides {
        nhost_auth_url: Some("http://localhost:1337/v1/"),
        ..ConfigOverrides::default()
    });
    assert_eq!(cfg.identity.base_url(), "http://localhost:1337/v1");
}

#[test]
fn overrides_replace_defaults() {
    let cfg = AppConfig::from_overrides(ConfigOverrides {
        nhost_subdomain: Some("local"),
        nhost_region: Some("eu-central-1"),
        nhost_auth_url: None,
        webhook_url: Some("https://hooks.example.test/summarize"),
    });
    assert_eq!(cfg.identity.base_url(), "https://local.auth.eu-central-1.nhost.run/v1");
    assert_eq!(cfg.webhook_url, "https://hooks.example.test/summarize");
}

#[test]
fn blank_overrides_fall_back_to_defaults() {
    let cfg = AppConfig::from_overrides(ConfigOverrides {
        nhost_subdomain: Some("  "),
        nhost_region: Some(""),
        nhost_auth_url: Some(" "),
        webhook_url: Some(""),
    });
    assert_eq!(cfg, AppConfig::default());
}
