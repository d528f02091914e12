//! Server settings loaded from the environment

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use office::OfficeConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WEB_DIR: &str = "./web";

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub office: OfficeConfig,
    /// Directory of the static frontend
    pub web_dir: PathBuf,
    /// Stamped into `init.js`; `None` keeps the service worker disabled
    pub service_worker_version: Option<String>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let base = if cfg!(debug_assertions) {
            OfficeConfig::development()
        } else {
            OfficeConfig::default()
        };
        Self::from_lookup(base, |key| env::var(key).ok())
    }

    /// Build settings from `lookup`, falling back to `base` for the editor
    fn from_lookup<F>(base: OfficeConfig, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank variables count as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("HTTP_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("HTTP_PORT must be a port number, got {port:?}"))?,
            None => DEFAULT_PORT,
        };

        let token_ttl = match var("ONLYOFFICE_TOKEN_TTL_SECS") {
            Some(secs) => Some(Duration::from_secs(
                secs.trim().parse::<u64>().with_context(|| {
                    format!("ONLYOFFICE_TOKEN_TTL_SECS must be a number of seconds, got {secs:?}")
                })?,
            )),
            None => base.token_ttl,
        };

        let office = OfficeConfig {
            server: var("ONLYOFFICE_SERVER").or(base.server),
            title: var("ONLYOFFICE_TITLE").unwrap_or(base.title),
            hostname: var("MAIN_HOSTNAME").unwrap_or_else(|| format!("http://localhost:{port}")),
            lang: var("ONLYOFFICE_LANG").unwrap_or(base.lang),
            jwt_secret: var("ONLYOFFICE_JWT_SECRET").or(base.jwt_secret),
            token_ttl,
            allowed_domain: var("ALLOWED_DOMAIN").or(base.allowed_domain),
            ..base
        };

        Ok(Self {
            port,
            office,
            web_dir: var("WEB_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WEB_DIR)),
            service_worker_version: var("SERVICE_WORKER_VERSION"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(OfficeConfig::default(), |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.office.hostname, "http://localhost:8080");
        assert_eq!(settings.office.server, None);
        assert_eq!(settings.office.title, "Office");
        assert!(!settings.office.signing_enabled());
        assert_eq!(settings.web_dir, PathBuf::from("./web"));
        assert_eq!(settings.service_worker_version, None);
    }

    #[test]
    fn test_hostname_follows_port() {
        let settings = settings(&[("HTTP_PORT", "9090")]).unwrap();
        assert_eq!(settings.port, 9090);
        assert_eq!(settings.office.hostname, "http://localhost:9090");
    }

    #[test]
    fn test_full_environment() {
        let settings = settings(&[
            ("HTTP_PORT", "8081"),
            ("MAIN_HOSTNAME", "https://atrium.io"),
            ("ONLYOFFICE_SERVER", "https://docs.atrium.io"),
            ("ONLYOFFICE_TITLE", "Atrium Office"),
            ("ONLYOFFICE_JWT_SECRET", "s3cret"),
            ("ONLYOFFICE_LANG", "en-US"),
            ("ONLYOFFICE_TOKEN_TTL_SECS", "600"),
            ("ALLOWED_DOMAIN", "atrium.io"),
            ("WEB_DIR", "/srv/web"),
            ("SERVICE_WORKER_VERSION", "1234"),
        ])
        .unwrap();

        assert_eq!(settings.office.hostname, "https://atrium.io");
        assert_eq!(settings.office.server.as_deref(), Some("https://docs.atrium.io"));
        assert_eq!(settings.office.title, "Atrium Office");
        assert_eq!(settings.office.secret(), Some(&b"s3cret"[..]));
        assert_eq!(settings.office.lang, "en-US");
        assert_eq!(settings.office.token_ttl, Some(Duration::from_secs(600)));
        assert_eq!(settings.office.allowed_domain.as_deref(), Some("atrium.io"));
        assert_eq!(settings.web_dir, PathBuf::from("/srv/web"));
        assert_eq!(settings.service_worker_version.as_deref(), Some("1234"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let settings = settings(&[("ONLYOFFICE_SERVER", " "), ("HTTP_PORT", "")]).unwrap();
        assert_eq!(settings.office.server, None);
        assert_eq!(settings.port, 8080);
    }

    #[test]
    fn test_invalid_numbers() {
        let err = settings(&[("HTTP_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("HTTP_PORT"));

        let err = settings(&[("ONLYOFFICE_TOKEN_TTL_SECS", "-1")]).unwrap_err();
        assert!(err.to_string().contains("ONLYOFFICE_TOKEN_TTL_SECS"));
    }
}
