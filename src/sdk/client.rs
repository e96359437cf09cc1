//! 외부 인증 서비스 HTTP 클라이언트
//!
//! ## 요청 규칙
//!
//! | 항목 | 값 |
//! |------|----|
//! | 경로 접두사 | `key_in_path`면 `{base_url}/{api_key}`, 아니면 `{base_url}` |
//! | 공통 헤더 | `X-API-Secret`, `X-Request-Id`, `Accept: application/json` |
//! | API 키 헤더 | `key_in_path`가 아닐 때만 `X-API-Key` |
//! | 사용자 토큰 | `Authorization: UserToken <token>` |
//!
//! ## 엔드포인트
//!
//! | 메서드 | 업스트림 |
//! |--------|----------|
//! | `register` | `POST /user/register` |
//! | `login` | `POST /user/login` |
//! | `google_auth` | `POST /user/google-auth` |
//! | `verify_token` | `POST /user/verify-token` |
//! | `request_password_reset` | `POST /user/request-password-reset` |
//! | `request_change_password_link` | `POST /user/request-change-password-link` |
//! | `resend_verification_email` | `POST /user/resend-verification` |
//! | `delete_account` | `POST /user/delete-account` |
//! | `send_google_user_set_password_email` | `POST /user/set-password-google-user` |
//! | `UserSession::get_profile` | `GET /user/profile` |
//! | `UserSession::update_profile` | `PATCH /user/profile` |

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::config::AuthClientConfig;
use crate::domain::dto::request::{
    DeleteAccountRequest, EmailRequest, GoogleAuthRequest, LoginRequest, RegisterRequest,
    ResendVerificationRequest,
};
use crate::sdk::error::AuthError;

/// 외부 인증 서비스 클라이언트
///
/// 서버 시작 시 한 번 생성되어 모든 요청이 공유합니다. 내부 상태는 불변이며,
/// 사용자 토큰은 호출마다 [`UserSession`]으로 전달합니다.
pub struct AuthClient {
    http: reqwest::Client,
    config: AuthClientConfig,
    prefix: String,
}

/// 특정 사용자 토큰에 묶인 호출 핸들
///
/// 요청 사이에 공유되는 가변 토큰 없이, 토큰이 필요한 호출을 수행합니다.
pub struct UserSession<'a> {
    client: &'a AuthClient,
    token: String,
}

#[derive(Serialize)]
struct GoogleAuthPayload<'a> {
    #[serde(flatten)]
    request: &'a GoogleAuthRequest,

    #[serde(skip_serializing_if = "Option::is_none")]
    google_client_id: Option<&'a str>,
}

impl AuthClient {
    /// 설정으로부터 클라이언트를 초기화합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Network` - HTTP 클라이언트 생성 실패 (TLS 백엔드 초기화 오류 등)
    pub fn new(config: AuthClientConfig) -> Result<Self, AuthError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if let Some(max) = config.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max);
        }
        let http = builder.build()?;

        let base = config.base_url.trim_end_matches('/');
        let prefix = if config.key_in_path {
            format!("{}/{}", base, urlencoding::encode(&config.api_key))
        } else {
            base.to_string()
        };

        Ok(Self {
            http,
            config,
            prefix,
        })
    }

    /// 사용자 토큰이 필요한 호출을 위한 세션을 만듭니다.
    pub fn with_token(&self, token: impl Into<String>) -> UserSession<'_> {
        UserSession {
            client: self,
            token: token.into(),
        }
    }

    pub async fn register(&self, params: &RegisterRequest) -> Result<Value, AuthError> {
        self.post("/user/register", params, None).await
    }

    pub async fn login(&self, params: &LoginRequest) -> Result<Value, AuthError> {
        self.post("/user/login", params, None).await
    }

    /// Google ID 토큰을 외부 서비스의 사용자 토큰으로 교환합니다.
    ///
    /// Google Client ID가 설정되어 있으면 `google_client_id`로 함께 전달합니다.
    pub async fn google_auth(&self, params: &GoogleAuthRequest) -> Result<Value, AuthError> {
        let payload = GoogleAuthPayload {
            request: params,
            google_client_id: self.config.google_client_id.as_deref(),
        };
        self.post("/user/google-auth", &payload, None).await
    }

    /// 사용자 토큰을 검증하고 응답의 `data` 부분을 반환합니다.
    ///
    /// `data`가 없는 응답이면 본문 전체를 반환합니다.
    pub async fn verify_token(&self, token: &str) -> Result<Value, AuthError> {
        let body = self
            .send(Method::POST, "/user/verify-token", None, Some(token))
            .await?;

        Ok(match body {
            Value::Object(mut map) if map.contains_key("data") => {
                map.remove("data").unwrap_or(Value::Null)
            }
            other => other,
        })
    }

    pub async fn request_password_reset(&self, params: &EmailRequest) -> Result<Value, AuthError> {
        self.post("/user/request-password-reset", params, None).await
    }

    pub async fn request_change_password_link(
        &self,
        params: &EmailRequest,
    ) -> Result<Value, AuthError> {
        self.post("/user/request-change-password-link", params, None)
            .await
    }

    pub async fn resend_verification_email(
        &self,
        params: &ResendVerificationRequest,
    ) -> Result<Value, AuthError> {
        self.post("/user/resend-verification", params, None).await
    }

    pub async fn delete_account(&self, params: &DeleteAccountRequest) -> Result<Value, AuthError> {
        self.post("/user/delete-account", params, None).await
    }

    pub async fn send_google_user_set_password_email(
        &self,
        params: &EmailRequest,
    ) -> Result<Value, AuthError> {
        self.post("/user/set-password-google-user", params, None)
            .await
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        user_token: Option<&str>,
    ) -> Result<Value, AuthError> {
        let body = serde_json::to_value(body)?;
        self.send(Method::POST, path, Some(body), user_token).await
    }

    /// 외부 서비스에 요청을 보내고 JSON 본문을 그대로 반환합니다.
    ///
    /// 2xx가 아니거나 본문의 `success`가 `false`이면 [`AuthError::Api`]를 돌려줍니다.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        user_token: Option<&str>,
    ) -> Result<Value, AuthError> {
        let request_id = Uuid::new_v4().to_string();
        let url = format!("{}{}", self.prefix, path);

        log::debug!("외부 인증 서비스 호출: {} {} (request_id={})", method, path, request_id);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json")
            .header("X-API-Secret", &self.config.api_secret)
            .header("X-Request-Id", &request_id);

        if !self.config.key_in_path {
            request = request.header("X-API-Key", &self.config.api_key);
        }
        if let Some(token) = user_token {
            request = request.header(AUTHORIZATION, format!("UserToken {}", token));
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            let err = AuthError::from(e);
            log::warn!("외부 인증 서비스 연결 실패: {} {} (request_id={}): {}", method, path, request_id, err);
            err
        })?;

        let status = response.status();
        let text = response.text().await?;

        let parsed: Option<Value> = if text.trim().is_empty() {
            Some(Value::Null)
        } else {
            serde_json::from_str(&text).ok()
        };

        if !status.is_success() {
            let err = AuthError::from_body(status.as_u16(), parsed.as_ref().unwrap_or(&Value::Null));
            log::warn!(
                "외부 인증 서비스 실패 응답: {} {} → {} (request_id={}): {}",
                method,
                path,
                status.as_u16(),
                request_id,
                err
            );
            return Err(err);
        }

        let body = parsed.ok_or_else(|| {
            AuthError::InvalidResponse(format!("{} {} returned non-JSON body", method, path))
        })?;

        if body.get("success") == Some(&Value::Bool(false)) {
            log::warn!(
                "외부 인증 서비스가 success=false 반환: {} {} (request_id={})",
                method,
                path,
                request_id
            );
            return Err(AuthError::from_body(400, &body));
        }

        Ok(body)
    }
}

impl UserSession<'_> {
    pub fn token(&self) -> &str {
        &self.token
    }

    /// 토큰 소유자의 프로필을 조회합니다.
    pub async fn get_profile(&self) -> Result<Value, AuthError> {
        self.client
            .send(Method::GET, "/user/profile", None, Some(&self.token))
            .await
    }

    /// 토큰 소유자의 프로필을 수정합니다. `updates`는 그대로 전달됩니다.
    pub async fn update_profile(&self, updates: &Value) -> Result<Value, AuthError> {
        self.client
            .send(Method::PATCH, "/user/profile", Some(updates.clone()), Some(&self.token))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AuthClient {
        AuthClient::new(AuthClientConfig::new(server.uri(), "app key", "secret-1")).unwrap()
    }

    #[tokio::test]
    async fn test_login_posts_to_key_prefixed_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/app%20key/user/login"))
            .and(header("X-API-Secret", "secret-1"))
            .and(header_exists("X-Request-Id"))
            .and(body_json(json!({ "email": "a@b.com", "password": "pw" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "user_token": "tok" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .login(&LoginRequest::with_email("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(result["data"]["user_token"], "tok");
    }

    #[tokio::test]
    async fn test_key_in_header_when_not_in_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/user/request-password-reset"))
            .and(header("X-API-Key", "k"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let config = AuthClientConfig::new(format!("{}/", server.uri()), "k", "s").with_key_in_path(false);
        let client = AuthClient::new(config).unwrap();

        let result = client
            .request_password_reset(&EmailRequest::new("a@b.com"))
            .await
            .unwrap();
        assert_eq!(result, json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_google_auth_adds_configured_client_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/k/user/google-auth"))
            .and(body_json(json!({ "id_token": "gid-token", "google_client_id": "client-1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": { "is_new_user": true } })))
            .expect(1)
            .mount(&server)
            .await;

        let config = AuthClientConfig::new(server.uri(), "k", "s").with_google_client_id("client-1");
        let client = AuthClient::new(config).unwrap();

        let result = client
            .google_auth(&GoogleAuthRequest::new("gid-token"))
            .await
            .unwrap();
        assert_eq!(result["data"]["is_new_user"], true);
    }

    #[tokio::test]
    async fn test_profile_calls_carry_user_token() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/app%20key/user/profile"))
            .and(header("Authorization", "UserToken tok-9"))
            .and(body_json(json!({ "name": "New Name" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": { "user": { "name": "New Name" } } })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let session = client.with_token("tok-9");
        let result = session.update_profile(&json!({ "name": "New Name" })).await.unwrap();

        assert_eq!(session.token(), "tok-9");
        assert_eq!(result["data"]["user"]["name"], "New Name");
    }

    #[tokio::test]
    async fn test_verify_token_unwraps_data() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/app%20key/user/verify-token"))
            .and(header("Authorization", "UserToken tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": { "valid": true, "user_id": 3 } })))
            .mount(&server)
            .await;

        let data = client_for(&server).verify_token("tok-1").await.unwrap();
        assert_eq!(data, json!({ "valid": true, "user_id": 3 }));
    }

    #[tokio::test]
    async fn test_error_status_and_code_are_preserved() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/app%20key/user/login"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "success": false,
                "message": "Email has not been verified",
                "code": "EMAIL_NOT_VERIFIED"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .login(&LoginRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert_eq!(err.code(), Some("EMAIL_NOT_VERIFIED"));
        assert_eq!(err.message(), "Email has not been verified");
    }

    #[tokio::test]
    async fn test_success_false_in_ok_response_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/app%20key/user/delete-account"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false, "message": "Wrong password" })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .delete_account(&DeleteAccountRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.message(), "Wrong password");
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/app%20key/user/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.with_token("t").get_profile().await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidResponse(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        let config = AuthClientConfig::new("http://127.0.0.1:9", "k", "s");
        let client = AuthClient::new(config).unwrap();

        let err = client
            .send_google_user_set_password_email(&EmailRequest::new("a@b.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Network(_)));
        assert_eq!(err.code(), Some("NETWORK_ERROR"));
    }

    #[tokio::test]
    async fn test_network_error_does_not_expose_api_key() {
        let config = AuthClientConfig::new("http://127.0.0.1:9", "SUPER-SECRET-KEY", "s");
        let client = AuthClient::new(config).unwrap();

        let err = client
            .request_password_reset(&EmailRequest::new("a@b.com"))
            .await
            .unwrap_err();

        assert!(!err.to_string().contains("SUPER-SECRET-KEY"));
        assert!(!format!("{:?}", err).contains("SUPER-SECRET-KEY"));

        let app_err = crate::errors::AppError::from(err);
        assert_eq!(app_err.message(), "Auth service unreachable");
        assert_eq!(app_err.code().as_deref(), Some("NETWORK_ERROR"));
    }
}
