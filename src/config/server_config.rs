//! 서버 실행 관련 설정
//!
//! 바인딩 주소, 워커 수, 요청 본문 크기 제한, Rate Limiting, CORS 허용 Origin 등
//! HTTP 서버 구동에 필요한 값들을 환경 변수에서 읽어옵니다.

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 3001
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3001)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(4)
    }

    /// JSON 요청 본문 최대 크기 (바이트). 기본값: 1 MiB
    pub fn json_body_limit() -> usize {
        env::var("JSON_BODY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1_048_576)
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패한 값은 에러 로그를 남기고 기본값으로 대체합니다.
    pub fn from_env() -> Self {
        let per_second = parse_or_default("RATE_LIMIT_PER_SECOND", 100u64);
        let burst_size = parse_or_default("RATE_LIMIT_BURST_SIZE", 200u32);

        let config = Self {
            per_second,
            burst_size,
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (콤마 구분)에서 허용 Origin 목록을 읽습니다.
    ///
    /// 값이 없거나 비어 있으면 `None`을 반환하며, 이 경우 모든 Origin을 허용합니다.
    pub fn allowed_origins() -> Option<Vec<String>> {
        env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .map(|raw| split_origins(&raw))
            .filter(|origins| !origins.is_empty())
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3001);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("JSON_BODY_LIMIT").is_err() {
            assert_eq!(ServerConfig::json_body_limit(), 1_048_576);
        }
    }

    #[test]
    fn test_split_origins_trims_and_skips_blanks() {
        let origins = split_origins(" http://localhost:5173, ,http://127.0.0.1:5173 ");
        assert_eq!(
            origins,
            vec!["http://localhost:5173".to_string(), "http://127.0.0.1:5173".to_string()]
        );
        assert!(split_origins(" , ").is_empty());
    }

    #[test]
    fn test_parse_or_default_falls_back_on_missing_key() {
        let value = parse_or_default("AUTH_RELAY_TEST_UNSET_KEY", 42u64);
        assert_eq!(value, 42);
    }
}
