use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let bind_addr = parse_addr("KENTEKEN_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("KENTEKEN_LOG_LEVEL", "info");
    let rdw_base_url = lookup("KENTEKEN_RDW_BASE_URL").ok();
    let rdw_timeout_secs = parse_u64("KENTEKEN_RDW_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        rdw_base_url,
        rdw_timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_env_yields_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.rdw_base_url, None);
        assert_eq!(cfg.rdw_timeout_secs, 30);
    }

    #[test]
    fn bind_addr_override() {
        let mut map = HashMap::new();
        map.insert("KENTEKEN_BIND_ADDR", "127.0.0.1:8080");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn bind_addr_invalid() {
        let mut map = HashMap::new();
        map.insert("KENTEKEN_BIND_ADDR", "not-an-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KENTEKEN_BIND_ADDR"),
            "expected InvalidEnvVar(KENTEKEN_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn rdw_base_url_override() {
        let mut map = HashMap::new();
        map.insert("KENTEKEN_RDW_BASE_URL", "http://127.0.0.1:9999/data.json");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.rdw_base_url.as_deref(),
            Some("http://127.0.0.1:9999/data.json")
        );
    }

    #[test]
    fn rdw_timeout_override() {
        let mut map = HashMap::new();
        map.insert("KENTEKEN_RDW_TIMEOUT_SECS", "5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.rdw_timeout_secs, 5);
    }

    #[test]
    fn rdw_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("KENTEKEN_RDW_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KENTEKEN_RDW_TIMEOUT_SECS"),
            "expected InvalidEnvVar(KENTEKEN_RDW_TIMEOUT_SECS), got: {result:?}"
        );
    }
}
