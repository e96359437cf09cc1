//! # 외부 인증 서비스 클라이언트 설정
//!
//! 릴레이가 요청을 위임하는 외부 인증 서비스의 접속 정보를 관리합니다.
//! 서버 시작 시 한 번 로드되어 [`AuthClient`](crate::sdk::AuthClient) 초기화에 사용됩니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export API_KEY="your-api-key"
//! export API_SECRET="your-api-secret"
//! export AUTH_SERVICE_URL="https://auth.example.com/api/v1"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="123456789-abc.apps.googleusercontent.com"
//! export AUTH_KEY_IN_PATH="true"       # API 키를 경로에 포함 (기본값: true)
//! export AUTH_TIMEOUT_SECONDS="30"     # 업스트림 요청 타임아웃 (기본값: 30)
//! export AUTH_POOL_MAX_IDLE_PER_HOST="0"  # 유휴 커넥션 상한 (기본값: 제한 없음)
//! ```

use std::env;
use std::time::Duration;

use crate::errors::errors::AppError;

/// 외부 인증 서비스 접속 설정
///
/// `api_secret`은 로그에 남기지 않도록 `Debug` 출력에서 가려집니다.
#[derive(Clone)]
pub struct AuthClientConfig {
    pub api_key: String,
    pub api_secret: String,
    pub google_client_id: Option<String>,
    pub base_url: String,
    pub key_in_path: bool,
    pub timeout: Duration,
    /// `None`이면 reqwest 기본값(제한 없음)
    pub pool_max_idle_per_host: Option<usize>,
}

impl AuthClientConfig {
    /// 환경 변수에서 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - `API_KEY`, `API_SECRET`, `AUTH_SERVICE_URL` 중 하나라도 비어 있는 경우
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = required("API_KEY")?;
        let api_secret = required("API_SECRET")?;
        let base_url = required("AUTH_SERVICE_URL")?;

        let google_client_id = env::var("GOOGLE_CLIENT_ID")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let key_in_path = env::var("AUTH_KEY_IN_PATH")
            .map(|v| parse_bool(&v))
            .unwrap_or(true);

        let timeout_secs = env::var("AUTH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let pool_max_idle_per_host = env::var("AUTH_POOL_MAX_IDLE_PER_HOST")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());

        Ok(Self {
            api_key,
            api_secret,
            google_client_id,
            base_url,
            key_in_path,
            timeout: Duration::from_secs(timeout_secs),
            pool_max_idle_per_host,
        })
    }

    /// 테스트나 임베딩 용도로 직접 설정을 구성합니다.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            google_client_id: None,
            base_url: base_url.into(),
            key_in_path: true,
            timeout: Duration::from_secs(30),
            pool_max_idle_per_host: None,
        }
    }

    pub fn with_google_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.google_client_id = Some(client_id.into());
        self
    }

    pub fn with_key_in_path(mut self, key_in_path: bool) -> Self {
        self.key_in_path = key_in_path;
        self
    }

    /// 유휴 커넥션을 호스트당 `max`개까지만 보관합니다. `0`이면 커넥션을 재사용하지 않습니다.
    pub fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = Some(max);
        self
    }
}

impl std::fmt::Debug for AuthClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClientConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .field("google_client_id", &self.google_client_id)
            .field("base_url", &self.base_url)
            .field("key_in_path", &self.key_in_path)
            .field("timeout", &self.timeout)
            .field("pool_max_idle_per_host", &self.pool_max_idle_per_host)
            .finish()
    }
}

fn required(key: &str) -> Result<String, AppError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
}

fn parse_bool(raw: &str) -> bool {
    !matches!(
        raw.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_falsy_values() {
        assert!(!parse_bool("false"));
        assert!(!parse_bool(" OFF "));
        assert!(!parse_bool("0"));
        assert!(parse_bool("true"));
        assert!(parse_bool("yes"));
    }

    #[test]
    fn test_required_reports_missing_key() {
        let err = required("AUTH_RELAY_TEST_MISSING_SECRET").unwrap_err();
        match err {
            AppError::ConfigError(msg) => assert!(msg.contains("AUTH_RELAY_TEST_MISSING_SECRET")),
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_masks_secret() {
        let config = AuthClientConfig::new("http://localhost", "key-1", "super-secret");
        let printed = format!("{:?}", config);

        assert!(printed.contains("key-1"));
        assert!(!printed.contains("super-secret"));
    }

    #[test]
    fn test_builder_defaults() {
        let config = AuthClientConfig::new("http://localhost", "k", "s")
            .with_google_client_id("gid")
            .with_key_in_path(false);

        assert_eq!(config.google_client_id.as_deref(), Some("gid"));
        assert!(!config.key_in_path);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.pool_max_idle_per_host, None);
        assert_eq!(
            config.with_pool_max_idle_per_host(0).pool_max_idle_per_host,
            Some(0)
        );
    }
}
