//! # 사용자 HTTP 핸들러
//!
//! 회원 가입 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/user/register` | 회원 가입 | 200 (빈 본문) |

use actix_web::{HttpResponse, post, web};
use log::info;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::services::blogs::BlogSiteService;

/// 회원 가입 핸들러
///
/// 입력 검증 후 사용자명/이메일 중복을 확인하고 사용자를 저장합니다.
/// 중복 확인과 저장 사이의 경합은 유니크 인덱스가 막아주며,
/// 그 경우에도 동일한 충돌 응답(400)이 반환됩니다.
///
/// # 응답
///
/// * `200 OK` - 가입 성공 (빈 본문)
/// * `400 Bad Request` - 검증 실패 또는 사용자명/이메일 중복
/// * `500 Internal Server Error` - 저장소 오류
#[post("/user/register")]
pub async fn register_user(
    service: web::Data<dyn BlogSiteService>,
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    info!(
        "User registration started for {} with {}",
        payload.username, payload.email
    );

    payload
        .validate()
        .map_err(|e| AppError::from_validation(&e))?;

    if service
        .does_user_exist(&payload.username, &payload.email)
        .await?
    {
        let message = "동일한 사용자명 또는 이메일의 사용자가 이미 존재합니다";
        info!("{}", message);
        return Err(AppError::ConflictError(message.to_string()));
    }

    let user = service
        .register_user(payload.into_inner().into_user())
        .await?;

    info!(
        "Registration successful for user: {}, ID: {}",
        user.username,
        user.id_string().unwrap_or_default()
    );

    Ok(HttpResponse::Ok().finish())
}
