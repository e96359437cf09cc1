//! 릴레이 서버 호출과 세션 상태 관리
//!
//! | 메서드 | 요청 | 상태 변화 |
//! |--------|------|-----------|
//! | `login` | `POST /auth/login` (Bearer 없음) | token, user, loading, last_error |
//! | `google_login` | `POST /auth/google` (Bearer 없음) | token, user, loading, last_error |
//! | `logout` | - | token, user 초기화 |
//! | `refresh_profile` | `GET /user/profile` | user, loading, last_error |
//! | 그 외 | [`RelayClient::api_call`] | 없음 |

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use crate::client::error::{ClientError, LastError};
use crate::client::forms::{EmailForm, LoginForm, RegisterForm};
use crate::client::token_store::TokenStore;
use crate::domain::dto::request::{DeleteAccountRequest, GoogleAuthRequest, ResendVerificationRequest};
use crate::domain::dto::response::{AuthSessionData, ProfileData, UserProfile};
use crate::utils::token_utils;

const REQUEST_FAILED: &str = "Request failed";
const LOGIN_FAILED: &str = "Login failed";
const GOOGLE_LOGIN_FAILED: &str = "Google login failed";
const NEW_ACCOUNT_PURPOSE: &str = "New Account";

/// 화면에 노출되는 세션 상태
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub loading: bool,
    pub last_error: Option<LastError>,
}

/// Google 로그인 결과
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoogleLoginOutcome {
    pub user: Option<UserProfile>,
    pub is_new_user: Option<bool>,
}

pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    state: RwLock<ClientState>,
}

impl RelayClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3001/api";

    /// 저장소에 남아 있는 토큰으로 상태를 초기화합니다.
    ///
    /// 저장소를 읽지 못하면 경고만 남기고 토큰 없이 시작합니다.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Self {
        let token = store.load().unwrap_or_else(|e| {
            log::warn!("저장된 토큰 로드 실패: {}", e);
            None
        });

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
            state: RwLock::new(ClientState {
                token,
                ..ClientState::default()
            }),
        }
    }

    pub fn state(&self) -> ClientState {
        self.read_state().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read_state().token.clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.read_state().user.clone()
    }

    /// 화면 표시용 토큰 앞부분 (`abcdefghijklmnopqr…` 또는 `none`)
    pub fn token_preview(&self) -> String {
        token_utils::token_preview(self.read_state().token.as_deref())
    }

    /// 릴레이 엔드포인트를 호출합니다.
    ///
    /// 토큰이 있으면 `Authorization: Bearer <token>`을 붙입니다.
    ///
    /// # Errors
    ///
    /// * `ClientError::Api` - 2xx가 아니거나 본문의 `success`가 `false`
    /// * `ClientError::Network` - 연결 실패
    /// * `ClientError::InvalidResponse` - 2xx이지만 JSON이 아닌 본문
    pub async fn api_call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let token = self.token();
        self.send(method, endpoint, body, token.as_deref(), REQUEST_FAILED)
            .await
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 성공하면 `data.user_token`을 저장하고 `data.user`를 현재 사용자로 설정합니다.
    pub async fn login(&self, form: &LoginForm) -> Result<Option<UserProfile>, ClientError> {
        form.validate()?;

        self.tracked(async {
            let body = serde_json::to_value(form)
                .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
            let response = self
                .send(Method::POST, "/auth/login", Some(&body), None, LOGIN_FAILED)
                .await?;

            let session = session_data(&response)?;
            Ok(self.start_session(session).0)
        })
        .await
    }

    /// Google ID 토큰 로그인
    pub async fn google_login(&self, id_token: &str) -> Result<GoogleLoginOutcome, ClientError> {
        self.tracked(async {
            let request = GoogleAuthRequest::new(id_token);
            let body = serde_json::to_value(&request)
                .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
            let response = self
                .send(Method::POST, "/auth/google", Some(&body), None, GOOGLE_LOGIN_FAILED)
                .await?;

            let session = session_data(&response)?;
            let (user, is_new_user) = self.start_session(session);
            Ok(GoogleLoginOutcome { user, is_new_user })
        })
        .await
    }

    pub fn logout(&self) {
        {
            let mut state = self.write_state();
            state.user = None;
            state.token = None;
        }
        self.persist_token(None);
        log::info!("로그아웃");
    }

    /// 현재 토큰으로 프로필을 다시 읽습니다. 토큰이 없으면 요청하지 않고 `None`을 반환합니다.
    pub async fn refresh_profile(&self) -> Result<Option<UserProfile>, ClientError> {
        if self.token().is_none() {
            return Ok(None);
        }

        self.tracked(async {
            let response = self.api_call(Method::GET, "/user/profile", None).await?;
            let profile: ProfileData = data_as(&response)?;

            self.write_state().user = profile.user.clone();
            Ok(profile.user)
        })
        .await
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<Value, ClientError> {
        form.validate()?;
        self.post("/auth/register", form).await
    }

    pub async fn request_password_reset(&self, form: &EmailForm) -> Result<Value, ClientError> {
        form.validate()?;
        self.post("/auth/request-password-reset", form).await
    }

    pub async fn request_change_password_link(&self, form: &EmailForm) -> Result<Value, ClientError> {
        form.validate()?;
        self.post("/auth/request-change-password-link", form).await
    }

    pub async fn resend_verification_email(
        &self,
        email: &str,
        purpose: &str,
    ) -> Result<Value, ClientError> {
        EmailForm::new(email).validate()?;

        let request = ResendVerificationRequest::new(email, purpose);
        self.post("/auth/resend-verification", &request).await
    }

    /// 가입 직후 인증 메일을 다시 보냅니다 (`purpose: "New Account"`).
    pub async fn resend_new_account_verification(&self, email: &str) -> Result<Value, ClientError> {
        self.resend_verification_email(email, NEW_ACCOUNT_PURPOSE)
            .await
    }

    pub async fn delete_account(&self, email: &str, password: &str) -> Result<Value, ClientError> {
        let request = DeleteAccountRequest::new(email, password);
        self.post("/auth/delete-account", &request).await
    }

    /// 계정을 삭제하고 성공하면 로그아웃합니다. 실패하면 세션을 유지합니다.
    pub async fn delete_account_and_logout(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Value, ClientError> {
        let result = self.delete_account(email, password).await?;
        self.logout();
        Ok(result)
    }

    pub async fn send_google_user_set_password_email(
        &self,
        form: &EmailForm,
    ) -> Result<Value, ClientError> {
        form.validate()?;
        self.post("/auth/set-password-google-user", form).await
    }

    pub async fn update_profile(&self, updates: &Value) -> Result<Value, ClientError> {
        self.api_call(Method::PATCH, "/user/profile", Some(updates))
            .await
    }

    pub async fn get_profile(&self) -> Result<Value, ClientError> {
        self.api_call(Method::GET, "/user/profile", None).await
    }

    async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Value, ClientError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        self.api_call(Method::POST, endpoint, Some(&body)).await
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
        default_message: &str,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let parsed = serde_json::from_str::<Value>(&text);

        if !status.is_success() {
            log::debug!("릴레이 실패 응답: {} {} → {}", method, endpoint, status.as_u16());
            return Err(ClientError::from_response(
                status.as_u16(),
                parsed.unwrap_or(Value::Null),
                default_message,
            ));
        }

        let body = parsed.map_err(|e| {
            ClientError::InvalidResponse(format!("{} {}: {}", method, endpoint, e))
        })?;

        if body.get("success") == Some(&Value::Bool(false)) {
            return Err(ClientError::from_response(status.as_u16(), body, default_message));
        }

        Ok(body)
    }

    /// `loading`과 `last_error`를 갱신하며 작업을 실행합니다.
    async fn tracked<T, F>(&self, task: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        {
            let mut state = self.write_state();
            state.loading = true;
            state.last_error = None;
        }

        let result = task.await;

        let mut state = self.write_state();
        state.loading = false;
        if let Err(e) = &result {
            state.last_error = Some(LastError::from(e));
        }
        result
    }

    fn start_session(&self, session: AuthSessionData) -> (Option<UserProfile>, Option<bool>) {
        let AuthSessionData {
            user_token,
            user,
            is_new_user,
        } = session;

        {
            let mut state = self.write_state();
            if let Some(token) = &user_token {
                state.token = Some(token.clone());
            }
            state.user = user.clone();
        }

        if let Some(token) = &user_token {
            self.persist_token(Some(token));
            log::info!("세션 시작: {}", token_utils::token_hint(Some(token)));
        }

        (user, is_new_user)
    }

    fn persist_token(&self, token: Option<&str>) {
        let result = match token {
            Some(token) => self.store.save(token),
            None => self.store.clear(),
        };

        if let Err(e) = result {
            log::warn!("토큰 저장소 갱신 실패: {}", e);
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, ClientState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, ClientState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn session_data(response: &Value) -> Result<AuthSessionData, ClientError> {
    data_as(response)
}

/// 응답의 `data`를 `T`로 해석합니다. `data`가 없거나 `null`이면 `T::default()`입니다.
fn data_as<T>(response: &Value) -> Result<T, ClientError>
where
    T: serde::de::DeserializeOwned + Default,
{
    match response.get("data") {
        None | Some(Value::Null) => Ok(T::default()),
        Some(data) => serde_json::from_value(data.clone())
            .map_err(|e| ClientError::InvalidResponse(e.to_string())),
    }
}
