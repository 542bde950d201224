use common::config::ClientConfig;

/// Configuration baked in at build time. `KEEPDM_API_URL` and
/// `KEEPDM_REQUEST_TIMEOUT_MS` override the defaults when set.
pub fn load() -> ClientConfig {
    ClientConfig::from_overrides(option_env!("KEEPDM_API_URL"), option_env!("KEEPDM_REQUEST_TIMEOUT_MS"))
}
