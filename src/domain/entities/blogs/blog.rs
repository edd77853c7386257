//! Blog Entity Implementation
//!
//! 블로그 게시물 엔티티입니다. 추가 시점에 서버 시각으로 타임스탬프가
//! 찍히며, 생성 이후 수정되지 않고 `(user_id, blog_name)` 쌍으로만
//! 삭제됩니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 블로그 게시물 엔티티
///
/// `blogs` 컬렉션에 저장됩니다. `user_id`는 작성자 User를 가리키는
/// 외래 참조이지만 스토어 수준에서 강제되지는 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 작성자 User의 ID (외래 참조, 스토어 미강제)
    pub user_id: ObjectId,
    /// 블로그 제목 (20자 이상)
    pub blog_name: String,
    /// 카테고리 (20자 이상)
    pub category: String,
    /// 본문 (1000단어 이상)
    pub article: String,
    /// 작성자 표시 이름
    pub author_name: String,
    /// 생성 시각 (UTC, 저장 시점에 서버가 기록)
    pub timestamp: DateTime,
}

impl Blog {
    /// 타임스탬프를 현재 UTC 시각으로 덮어씁니다.
    ///
    /// 클라이언트가 페이로드에 어떤 값을 보냈든 저장 직전에 항상
    /// 호출되어 서버 시각이 기록됩니다.
    pub fn stamp_now(&mut self) {
        self.timestamp = DateTime::now();
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_blog(timestamp: DateTime) -> Blog {
        Blog {
            id: None,
            user_id: ObjectId::new(),
            blog_name: "A sufficiently long blog name".to_string(),
            category: "A sufficiently long category".to_string(),
            article: "word".to_string(),
            author_name: "Author".to_string(),
            timestamp,
        }
    }

    #[test]
    fn test_stamp_now_overwrites_caller_supplied_timestamp() {
        // 과거 시각을 넣어도 저장 직전 현재 시각으로 교체된다
        let supplied = DateTime::from_millis(0);
        let mut blog = sample_blog(supplied);

        let before = DateTime::now().timestamp_millis();
        blog.stamp_now();
        let after = DateTime::now().timestamp_millis();

        assert_ne!(blog.timestamp, supplied);
        assert!(blog.timestamp.timestamp_millis() >= before);
        assert!(blog.timestamp.timestamp_millis() <= after);
    }
}
