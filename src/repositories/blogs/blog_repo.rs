//! # 블로그 리포지토리 구현
//!
//! 블로그 게시물의 데이터 액세스 계층입니다. `blogs` 컬렉션에 대한
//! 삽입/조회/삭제 연산과 조회용 인덱스(작성자, 카테고리) 관리를
//! 제공합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{DateTime, doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::blogs::Blog;

/// 블로그 데이터 액세스 리포지토리
///
/// 블로그의 식별 키는 `(user_id, blog_name)` 쌍입니다. 조회 결과의
/// 순서는 보장하지 않습니다.
pub struct BlogRepository {
    /// 생성 시 주입되는 MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl BlogRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Blog> {
        self.db.get_database().collection("blogs")
    }

    /// 새 블로그 저장
    pub async fn insert(&self, mut blog: Blog) -> AppResult<Blog> {
        let result = self
            .collection()
            .insert_one(&blog)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        blog.id = result.inserted_id.as_object_id();

        Ok(blog)
    }

    /// `(작성자, 제목)` 쌍이 모두 일치하는 블로그가 있는지 확인합니다.
    pub async fn exists_by_owner_and_name(
        &self,
        user_id: ObjectId,
        blog_name: &str,
    ) -> AppResult<bool> {
        let found = self
            .collection()
            .find_one(doc! { "user_id": user_id, "blog_name": blog_name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    /// `(작성자, 제목)` 쌍이 일치하는 첫 블로그를 삭제합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 정확히 한 건 삭제됨
    /// * `Ok(false)` - 일치하는 블로그 없음 (정상 결과이며 에러가 아님)
    pub async fn delete_by_owner_and_name(
        &self,
        user_id: ObjectId,
        blog_name: &str,
    ) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "user_id": user_id, "blog_name": blog_name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 작성자의 모든 블로그 조회
    pub async fn find_by_owner(&self, user_id: ObjectId) -> AppResult<Vec<Blog>> {
        let cursor = self
            .collection()
            .find(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 카테고리가 일치하는 모든 블로그 조회
    pub async fn find_by_category(&self, category: &str) -> AppResult<Vec<Blog>> {
        let cursor = self
            .collection()
            .find(doc! { "category": category })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 카테고리가 일치하고 타임스탬프가 `[from, to]` 구간(양끝 포함)에
    /// 속하는 블로그 조회
    pub async fn find_by_category_in_range(
        &self,
        category: &str,
        from: DateTime,
        to: DateTime,
    ) -> AppResult<Vec<Blog>> {
        let cursor = self
            .collection()
            .find(doc! {
                "category": category,
                "timestamp": { "$gte": from, "$lte": to },
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 블로그 컬렉션 인덱스 생성
    ///
    /// 작성자별 조회와 카테고리별 조회를 위한 일반 인덱스입니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id_asc".to_string()).build())
            .build();

        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1 })
            .options(IndexOptions::builder().name("category_asc".to_string()).build())
            .build();

        self.collection()
            .create_indexes([user_id_index, category_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
