//! 블로그 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::blogs::Blog;

/// 블로그 응답 DTO
///
/// BSON 전용 표현(ObjectId, BSON DateTime)을 클라이언트 친화적인
/// 16진수 문자열과 RFC 3339 문자열로 변환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: String,
    pub user_id: String,
    pub blog_name: String,
    pub category: String,
    pub article: String,
    pub author_name: String,
    /// 생성 시각 (RFC 3339)
    pub timestamp: String,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        let Blog {
            id,
            user_id,
            blog_name,
            category,
            article,
            author_name,
            timestamp,
        } = blog;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: user_id.to_hex(),
            blog_name,
            category,
            article,
            author_name,
            timestamp: timestamp.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}
