//! Cross-origin policy for browser clients served from another origin.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origins allowed during development (a static file server on port 5500)
pub const DEVELOPMENT_ORIGINS: [&str; 2] = ["http://localhost:5500", "http://127.0.0.1:5500"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Same-origin only (production serves the client itself)
    Disabled,
    /// Allow the listed origins with credentials
    AllowOrigins(Vec<String>),
}

impl CorsPolicy {
    pub fn from_config(production: bool, origins: Vec<String>) -> Self {
        if production {
            return CorsPolicy::Disabled;
        }
        let origins = if origins.is_empty() {
            DEVELOPMENT_ORIGINS.iter().map(|o| o.to_string()).collect()
        } else {
            origins
        };
        CorsPolicy::AllowOrigins(origins)
    }

    /// Build the tower layer, or `None` when cross-origin access is disabled.
    pub fn layer(&self) -> Option<CorsLayer> {
        let CorsPolicy::AllowOrigins(origins) = self else {
            return None;
        };

        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                    None
                }
            })
            .collect();

        Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_disables_cors() {
        // テスト項目: 本番モードではクロスオリジンを許可しない
        // given (前提条件):
        let origins = vec!["http://example.com".to_string()];

        // when (操作):
        let policy = CorsPolicy::from_config(true, origins);

        // then (期待する結果):
        assert_eq!(policy, CorsPolicy::Disabled);
        assert!(policy.layer().is_none());
    }

    #[test]
    fn test_development_defaults() {
        // テスト項目: 開発モードでオリジン未指定なら localhost:5500 系が許可される
        // given (前提条件):
        let origins = vec![];

        // when (操作):
        let policy = CorsPolicy::from_config(false, origins);

        // then (期待する結果):
        assert_eq!(
            policy,
            CorsPolicy::AllowOrigins(vec![
                "http://localhost:5500".to_string(),
                "http://127.0.0.1:5500".to_string(),
            ])
        );
        assert!(policy.layer().is_some());
    }

    #[test]
    fn test_explicit_origins_override_defaults() {
        // テスト項目: オリジンを指定した場合はデフォルトではなく指定値が使われる
        // given (前提条件):
        let origins = vec!["https://chat.example.com".to_string()];

        // when (操作):
        let policy = CorsPolicy::from_config(false, origins.clone());

        // then (期待する結果):
        assert_eq!(policy, CorsPolicy::AllowOrigins(origins));
    }
}
