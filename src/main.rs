//! 인증 중계 서버 메인 애플리케이션
//!
//! 외부 인증 서비스 클라이언트를 구성하고 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use auth_relay_backend::config::{AuthClientConfig, CorsConfig, RateLimitConfig, ServerConfig};
use auth_relay_backend::core::registry::ServiceLocator;
use auth_relay_backend::routes::configure_all_routes;
use auth_relay_backend::sdk::AuthClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // RUST_LOG가 .env 파일에 있을 수 있으므로 로드 결과는 로거 초기화 후에 기록합니다.
    let env_file = load_env_file();
    init_logging();
    log_env_file(&env_file);

    info!("🚀 인증 중계 서버 시작중...");

    let auth_client = initialize_auth_client();
    ServiceLocator::set(auth_client);

    if let Err(e) = ServiceLocator::initialize_all().await {
        error!("서비스 초기화 실패: {}", e);
        std::process::exit(1);
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

/// 외부 인증 서비스 클라이언트를 생성합니다
///
/// 필수 설정(`API_KEY`, `API_SECRET`, `AUTH_SERVICE_URL`)이 없으면 종료 코드 1로 종료합니다.
fn initialize_auth_client() -> Arc<AuthClient> {
    let config = AuthClientConfig::from_env().unwrap_or_else(|e| {
        error!("인증 서비스 설정 오류: {}", e);
        std::process::exit(1);
    });

    info!("📡 외부 인증 서비스: {}", config.base_url);

    match AuthClient::new(config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("인증 서비스 클라이언트 생성 실패: {}", e);
            std::process::exit(1);
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "RATE_LIMIT_PER_SECOND, RATE_LIMIT_BURST_SIZE는 0보다 커야 합니다",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        let cors = configure_cors(allowed_origins.as_deref());

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일 로드 결과
struct EnvFileLoad {
    profile: String,
    file: &'static str,
    result: Result<(), dotenv::Error>,
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거가 아직 없으므로 결과만 반환하고 기록은 [`log_env_file`]이 합니다.
fn load_env_file() -> EnvFileLoad {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let (file, result) = match profile.as_str() {
        "prod" => (".env.prod", dotenv::from_filename(".env.prod").map(|_| ())),
        "dev" => (".env.dev", dotenv::from_filename(".env.dev").map(|_| ())),
        _ => (".env", dotenv().map(|_| ())),
    };

    EnvFileLoad { profile, file, result }
}

fn log_env_file(load: &EnvFileLoad) {
    info!("Current profile: {}", load.profile);

    match &load.result {
        Ok(()) => info!("{} 파일 로드 됨", load.file),
        Err(e) => error!("{} 파일 로드 실패: {}", load.file, e),
    }
}

/// `RUST_LOG`가 없으면 `info,actix_web=info`로 초기화합니다
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`가 비어 있으면 모든 Origin을 허용합니다.
fn configure_cors(allowed_origins: Option<&[String]>) -> Cors {
    let cors = match allowed_origins {
        Some(origins) => origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials(),
        None => Cors::default().allow_any_origin().send_wildcard(),
    };

    cors.allowed_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_env_file_reports_profile_file() {
        // SAFETY: 이 바이너리의 테스트 중 환경 변수를 다루는 것은 이 테스트뿐입니다.
        unsafe { std::env::set_var("PROFILE", "prod") };

        let load = load_env_file();

        assert_eq!(load.profile, "prod");
        assert_eq!(load.file, ".env.prod");
        assert!(load.result.is_err());
    }
}
