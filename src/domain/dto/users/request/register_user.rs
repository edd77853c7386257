//! 회원 가입 요청 DTO
//!
//! 새로운 사용자 등록을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::users::User;

/// 이메일 형식: `local@domain.com` 모양만 허용
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.com$").unwrap());

/// 회원 가입 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 사용자명/이메일의 유니크성은 여기서 검사하지 않으며,
/// 별도의 존재 확인과 유니크 인덱스가 담당합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// 사용자명 (필수)
    #[validate(length(min = 1, message = "사용자명은 필수 항목입니다"))]
    pub username: String,

    /// 사용자 이메일 주소 (`local@domain.com` 형식)
    #[validate(regex(
        path = *EMAIL_REGEX,
        message = "유효한 이메일 주소 형식이 아닙니다"
    ))]
    pub email: String,

    /// 계정 비밀번호 (영숫자만, 영문/숫자 각 1자 이상, 8자 이상)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl RegisterUserRequest {
    /// 영속 가능한 User 엔티티로 변환합니다.
    pub fn into_user(self) -> User {
        User::new(self.username, self.email, self.password)
    }
}

/// 비밀번호 형식 검증 (영숫자만 허용, 영문과 숫자 각 1자 이상 포함)
fn validate_password(password: &str) -> Result<(), ValidationError> {
    let alphanumeric_only = password.chars().all(|c| c.is_ascii_alphanumeric());
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(alphanumeric_only && has_letter && has_digit) {
        return Err(ValidationError::new("invalid_password")
            .with_message("비밀번호는 영문과 숫자만으로 구성되어야 하며 각각 1자 이상 포함해야 합니다".into()));
    }

    Ok(())
}
