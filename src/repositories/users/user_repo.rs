//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! `users` 컬렉션에 대한 삽입/조회 연산과 유니크 인덱스 관리를 제공합니다.

use std::sync::Arc;

use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::{Database, is_duplicate_key_error};
use crate::domain::entities::users::User;

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 가입은 영구적이므로 이 리포지토리에는 갱신/삭제 연산이 없습니다.
/// 사용자명과 이메일의 유니크 인덱스 덕분에 존재 확인과 삽입 사이의
/// 경합은 삽입 시점의 duplicate key 에러로 원자적으로 드러납니다.
pub struct UserRepository {
    /// 생성 시 주입되는 MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection("users")
    }

    /// 새 사용자 저장
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 사용자 (ID 할당됨)
    /// * `Err(AppError::ConflictError)` - 사용자명 또는 이메일 유니크
    ///   인덱스 충돌
    /// * `Err(AppError::DatabaseError)` - 그 외 데이터베이스 오류
    pub async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection().insert_one(&user).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                AppError::ConflictError(
                    "동일한 사용자명 또는 이메일의 사용자가 이미 존재합니다".to_string(),
                )
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 사용자명 또는 이메일이 일치하는 사용자가 있는지 확인합니다.
    ///
    /// 둘 중 하나만 겹쳐도 가입이 차단되어야 하므로 OR 조건입니다.
    pub async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> AppResult<bool> {
        let found = self
            .collection()
            .find_one(doc! {
                "$or": [
                    { "username": username },
                    { "email": email },
                ]
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    /// 사용자명/이메일 유니크 인덱스가 가입 충돌의 최종 방어선입니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([username_index, email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
