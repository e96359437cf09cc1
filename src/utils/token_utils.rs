//! 토큰 문자열 유틸리티

const PREVIEW_CHARS: usize = 18;
const HINT_MAX_CHARS: usize = 8;

/// Authorization 헤더 값에서 사용자 토큰을 꺼냅니다.
///
/// | 헤더 값 | 결과 |
/// |---------|------|
/// | `Bearer abc` | `abc` |
/// | `UserToken abc` | `abc` |
/// | `abc` | `abc` (헤더 값 전체) |
/// | 없음 / 빈 값 / `Bearer ` | `None` |
///
/// # Examples
///
/// ```rust
/// use auth_relay_backend::utils::token_utils::extract_token;
///
/// assert_eq!(extract_token(Some("Bearer abc")), Some("abc"));
/// assert_eq!(extract_token(Some("UserToken abc")), Some("abc"));
/// assert_eq!(extract_token(None), None);
/// ```
pub fn extract_token(auth_header: Option<&str>) -> Option<&str> {
    let header = auth_header?;

    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("UserToken "))
        .unwrap_or(header);

    if token.is_empty() { None } else { Some(token) }
}

/// 화면 표시용으로 토큰 앞부분만 남깁니다.
///
/// 토큰이 없으면 `"none"`을 반환합니다. 짧은 토큰은 전부 드러나므로 로그에는
/// [`token_hint`]를 사용합니다.
pub fn token_preview(token: Option<&str>) -> String {
    match token {
        Some(t) if !t.is_empty() => {
            let head: String = t.chars().take(PREVIEW_CHARS).collect();
            format!("{}…", head)
        }
        _ => "none".to_string(),
    }
}

/// 서버 로그용 토큰 식별자
///
/// 길이의 1/4(최대 8자)까지만 남기고 나머지는 `…`와 길이로 대체합니다.
/// 4자 미만의 토큰은 문자를 하나도 드러내지 않습니다.
pub fn token_hint(token: Option<&str>) -> String {
    match token {
        Some(t) if !t.is_empty() => {
            let len = t.chars().count();
            let head: String = t.chars().take((len / 4).min(HINT_MAX_CHARS)).collect();
            format!("{}…({} chars)", head, len)
        }
        _ => "none".to_string(),
    }
}
