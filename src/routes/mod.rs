//! HTTP 라우트 구성
//!
//! | 경로 | 핸들러 |
//! |------|--------|
//! | `GET /health` | [`health_check`] |
//! | `/api/auth/*` | [`handlers::auth`] |
//! | `/api/user/profile` | [`handlers::user`] |

use crate::config::ServerConfig;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 요청 본문 크기 제한(`JSON_BODY_LIMIT`)도 여기서 함께 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(ServerConfig::json_body_limit()));

    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
}

/// 인증 흐름 라우트
///
/// ```bash
/// curl -X POST http://localhost:3001/api/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"password123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::google)
            .service(handlers::auth::verify_token)
            .service(handlers::auth::request_password_reset)
            .service(handlers::auth::request_change_password_link)
            .service(handlers::auth::resend_verification)
            .service(handlers::auth::delete_account)
            .service(handlers::auth::set_password_google_user),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/user")
            .service(handlers::user::get_profile)
            .service(handlers::user::update_profile),
    );
}

/// 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "auth_relay_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
