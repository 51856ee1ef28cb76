use std::net::SocketAddr;

use crate::client::CourseApiConfig;
use crate::error::AppError;
use crate::services::{IncomePolicy, PLACEHOLDER_THUMBNAIL};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_REFRESH_SECS: u64 = 300;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` runs the service without a backend.
    pub course_api: Option<CourseApiConfig>,
    pub refresh_secs: u64,
    pub income_policy: IncomePolicy,
    pub thumbnail_placeholder: String,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is invalid: {}", e)))?;

        let course_api = lookup("COURSE_API_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|base_url| CourseApiConfig {
                base_url,
                api_token: lookup("COURSE_API_TOKEN").filter(|t| !t.is_empty()),
            });

        let refresh_secs = match lookup("CATALOG_REFRESH_SECS") {
            None => DEFAULT_REFRESH_SECS,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(AppError::Config(format!(
                        "CATALOG_REFRESH_SECS must be a positive integer, got {:?}",
                        raw
                    )));
                }
            },
        };

        let income_policy = match lookup("INCOME_POLICY").as_deref() {
            None | Some("price") => IncomePolicy::FromPrice,
            Some("zero") => IncomePolicy::Zero,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "INCOME_POLICY must be \"price\" or \"zero\", got {:?}",
                    other
                )));
            }
        };

        let thumbnail_placeholder = lookup("THUMBNAIL_PLACEHOLDER")
            .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());

        Ok(Self {
            bind_addr,
            course_api,
            refresh_secs,
            income_policy,
            thumbnail_placeholder,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_any_variable() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(cfg.course_api.is_none());
        assert_eq!(cfg.refresh_secs, DEFAULT_REFRESH_SECS);
        assert_eq!(cfg.income_policy, IncomePolicy::FromPrice);
        assert_eq!(cfg.thumbnail_placeholder, PLACEHOLDER_THUMBNAIL);
    }

    #[test]
    fn reads_backend_settings() {
        let cfg = config(&[
            ("COURSE_API_URL", "http://localhost:8080/api"),
            ("COURSE_API_TOKEN", "secret"),
            ("INCOME_POLICY", "zero"),
            ("CATALOG_REFRESH_SECS", "15"),
        ])
        .unwrap();

        let api = cfg.course_api.unwrap();
        assert_eq!(api.base_url, "http://localhost:8080/api");
        assert_eq!(api.api_token.as_deref(), Some("secret"));
        assert_eq!(cfg.income_policy, IncomePolicy::Zero);
        assert_eq!(cfg.refresh_secs, 15);
    }

    #[test]
    fn rejects_bad_values() {
        for vars in [
            [("CATALOG_REFRESH_SECS", "0")],
            [("CATALOG_REFRESH_SECS", "soon")],
            [("INCOME_POLICY", "revenue")],
            [("BIND_ADDR", "localhost")],
        ] {
            assert!(matches!(config(&vars), Err(AppError::Config(_))));
        }
    }
}
