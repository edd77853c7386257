//! 블로그 추가 요청 DTO
//!
//! 블로그 추가 요청은 본문 페이로드 외에 경로 파라미터(블로그 제목)와
//! `userId` 헤더(작성자 ID)를 함께 사용합니다. 세 입력은 단일 병합
//! 단계에서 결정적으로 합쳐지며, 우선순위는 경로/헤더 > 본문입니다.
//! 병합 결과인 [`NewBlog`]가 한 번만 검증됩니다.

use chrono::{DateTime as ChronoDateTime, Utc};
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::blogs::Blog;

/// 본문 최소 단어 수
const MIN_ARTICLE_WORDS: usize = 1000;

/// 블로그 추가 요청 본문
///
/// `blog_name`/`user_id`/`timestamp`는 클라이언트가 보낼 수는 있지만
/// 각각 경로 파라미터, 헤더, 서버 시각에 의해 대체되는 필드입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBlogRequest {
    /// 블로그 제목 (경로 파라미터가 항상 우선)
    #[serde(default)]
    pub blog_name: Option<String>,
    /// 카테고리
    pub category: String,
    /// 본문
    pub article: String,
    /// 작성자 표시 이름
    pub author_name: String,
    /// 작성자 ID (`userId` 헤더가 우선)
    #[serde(default)]
    pub user_id: Option<String>,
    /// 클라이언트 제시 타임스탬프 (저장 시 서버 시각으로 대체됨)
    #[serde(default)]
    pub timestamp: Option<ChronoDateTime<Utc>>,
}

impl AddBlogRequest {
    /// 경로/헤더 값을 본문보다 우선하여 병합합니다.
    ///
    /// 병합 규칙:
    /// - `blog_name` ← 경로 파라미터 (항상)
    /// - `user_id` ← `userId` 헤더, 없으면 본문의 `user_id`
    ///
    /// # 에러
    ///
    /// * `ValidationError` - 작성자 ID가 어디에도 없거나 ObjectId 형식이
    ///   아닌 경우
    pub fn resolve(
        self,
        path_blog_name: &str,
        header_user_id: Option<&str>,
    ) -> AppResult<NewBlog> {
        let raw_user_id = header_user_id
            .map(str::to_owned)
            .or(self.user_id)
            .ok_or_else(|| {
                AppError::ValidationError("userId 헤더가 없습니다".to_string())
            })?;

        let user_id = ObjectId::parse_str(&raw_user_id).map_err(|_| {
            AppError::ValidationError("유효하지 않은 사용자 ID 형식입니다".to_string())
        })?;

        Ok(NewBlog {
            user_id,
            blog_name: path_blog_name.to_string(),
            category: self.category,
            article: self.article,
            author_name: self.author_name,
            requested_at: self.timestamp,
        })
    }
}

/// 병합이 끝난 블로그 추가 레코드
///
/// 검증 규칙이 모두 이 타입에 걸려 있으므로, 경로 파라미터로 들어온
/// 짧은 제목도 본문으로 들어온 짧은 제목과 동일하게 걸러집니다.
#[derive(Debug, Clone, Validate)]
pub struct NewBlog {
    pub user_id: ObjectId,

    #[validate(length(min = 20, message = "블로그 제목은 20자 이상이어야 합니다"))]
    pub blog_name: String,

    #[validate(length(min = 20, message = "카테고리는 20자 이상이어야 합니다"))]
    pub category: String,

    #[validate(custom(function = "validate_article"))]
    pub article: String,

    #[validate(length(min = 1, message = "작성자 이름은 필수 항목입니다"))]
    pub author_name: String,

    /// 클라이언트 제시 타임스탬프. 서비스가 저장 직전에 서버 시각으로
    /// 덮어쓰므로 응답에 그대로 나타나지 않습니다.
    pub requested_at: Option<ChronoDateTime<Utc>>,
}

impl NewBlog {
    /// 영속 가능한 Blog 엔티티로 변환합니다.
    pub fn into_blog(self) -> Blog {
        let timestamp = self
            .requested_at
            .map(|dt| DateTime::from_millis(dt.timestamp_millis()))
            .unwrap_or_else(DateTime::now);

        Blog {
            id: None,
            user_id: self.user_id,
            blog_name: self.blog_name,
            category: self.category,
            article: self.article,
            author_name: self.author_name,
            timestamp,
        }
    }
}

/// 본문 단어 수 검증
///
/// 공백/개행으로 토큰화하고 빈 토큰은 버린 뒤 단어 수를 셉니다.
fn validate_article(article: &str) -> Result<(), ValidationError> {
    let words = article.split_whitespace().count();

    if words < MIN_ARTICLE_WORDS {
        return Err(ValidationError::new("min_words").with_message(
            format!("본문은 최소 {}단어 이상이어야 합니다", MIN_ARTICLE_WORDS).into(),
        ));
    }

    Ok(())
}
