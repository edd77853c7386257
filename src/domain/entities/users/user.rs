//! User Entity Implementation
//!
//! 블로그 플랫폼 사용자 엔티티입니다.
//! 가입 시점에 생성되며 이후 수정되거나 삭제되지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션에 저장되는 핵심 도메인 엔티티입니다.
/// 사용자명과 이메일은 각각 유니크 인덱스로 보호됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique)
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 계정 비밀번호
    pub password: String,
}

impl User {
    /// 새 사용자 생성
    ///
    /// ID는 저장 시점에 MongoDB가 할당합니다.
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            id: None,
            username,
            email,
            password,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
