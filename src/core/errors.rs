//! # Application Error Handling System
//!
//! 블로그 서비스 전역의 통합 에러 처리 모듈입니다.
//! `thiserror` 기반의 에러 열거형을 `actix_web::ResponseError`와 결합하여
//! 모든 실패가 일관된 HTTP 응답으로 변환되도록 보장합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 ID/날짜 형식 |
//! | `ConflictError` | 400 Bad Request | 사용자명/이메일 중복 |
//! | `NotFound` | 404 Not Found | 삭제 대상 블로그 없음 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 모든 에러 응답은 `{"error": "<message>"}` 형식의 JSON 본문을 가지며,
//! 5xx 에러의 상세 내용은 서버 로그에만 기록됩니다.

use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 핸들러가 `Result<HttpResponse, AppError>`를 반환하면
/// `ResponseError` 구현을 통해 자동으로 적절한 상태 코드로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류입니다. 500으로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 필수 필드 누락, 형식 오류, 길이/단어 수 제한 위반 등
    /// 클라이언트 입력이 요구사항을 만족하지 않을 때 발생합니다.
    /// 400으로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 요청된 리소스(블로그, 사용자)가 존재하지 않을 때 발생합니다.
    /// 404로 응답됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 동일한 사용자명 또는 이메일로 중복 가입을 시도할 때 발생합니다.
    /// 이 API의 계약상 400으로 응답됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류입니다. 500으로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// `validator` 검증 결과를 필드 단위 위반 목록으로 변환합니다.
    ///
    /// 필드명 기준으로 정렬하여 항상 동일한 순서의 메시지를 생성합니다.
    /// 각 항목은 `필드명: 메시지` 형태입니다.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let violations: Vec<String> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();

        AppError::ValidationError(violations.join("; "))
    }
}

impl actix_web::ResponseError for AppError {
    /// 각 `AppError` 변형을 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// 5xx 에러는 이 시점에 상세 내용을 서버 로그에 남기고,
    /// 클라이언트에는 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("Operation failed, Error: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
