//! # 블로그 서비스 구현
//!
//! 블로그 플랫폼의 핵심 비즈니스 로직을 구현합니다.
//! 모든 연산은 검증된 입력을 받아 리포지토리에 위임하는 단일
//! 왕복이며, 연산 간에 트랜잭션이나 잠금은 없습니다.
//!
//! 핸들러는 [`BlogSiteService`] trait에만 의존하므로 테스트에서는
//! 인메모리 구현으로 대체할 수 있습니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime as ChronoDateTime, Utc};
use log::{info, warn};
use mongodb::bson::{DateTime, oid::ObjectId};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::blogs::Blog;
use crate::domain::entities::users::User;
use crate::repositories::blogs::BlogRepository;
use crate::repositories::users::UserRepository;

/// 블로그 플랫폼 도메인 서비스 인터페이스
///
/// 모든 연산은 저장소에 접근할 수 없을 때
/// `AppError::DatabaseError`로 실패할 수 있습니다.
#[async_trait]
pub trait BlogSiteService: Send + Sync {
    /// 사용자를 저장하고 그대로 반환합니다 (ID 할당됨).
    ///
    /// 존재 확인은 호출자 책임이며, 유니크 인덱스 충돌 시
    /// `ConflictError`가 발생합니다.
    async fn register_user(&self, user: User) -> AppResult<User>;

    /// 사용자명 **또는** 이메일이 일치하는 사용자가 있으면 true.
    async fn does_user_exist(&self, username: &str, email: &str) -> AppResult<bool>;

    /// ID로 사용자 조회. 없으면 `NotFound`.
    async fn get_user(&self, id: ObjectId) -> AppResult<User>;

    /// 타임스탬프를 현재 UTC 시각으로 찍은 뒤 저장하고,
    /// 저장된 블로그를 반환합니다.
    async fn add_blog(&self, blog: Blog) -> AppResult<Blog>;

    /// `(작성자, 제목)`이 **모두** 일치하는 블로그가 있으면 true.
    async fn does_blog_exist(&self, user_id: ObjectId, blog_name: &str) -> AppResult<bool>;

    /// `(작성자, 제목)`이 일치하는 첫 블로그를 삭제합니다.
    /// 없으면 `false`를 반환하며, 이는 에러가 아닌 정상 결과입니다.
    async fn delete_blog(&self, user_id: ObjectId, blog_name: &str) -> AppResult<bool>;

    /// 작성자의 모든 블로그. 순서는 보장하지 않습니다.
    async fn get_all_user_blogs(&self, user_id: ObjectId) -> AppResult<Vec<Blog>>;

    /// 카테고리가 일치하는 모든 블로그. 순서는 보장하지 않습니다.
    async fn get_blogs_by_category(&self, category: &str) -> AppResult<Vec<Blog>>;

    /// 카테고리가 일치하고 타임스탬프가 `[from, to]` 구간(양끝 포함)에
    /// 속하는 모든 블로그.
    async fn get_blogs_by_duration(
        &self,
        category: &str,
        from: ChronoDateTime<Utc>,
        to: ChronoDateTime<Utc>,
    ) -> AppResult<Vec<Blog>>;
}

/// MongoDB 기반 블로그 서비스
///
/// 리포지토리들을 생성 시 주입받습니다.
pub struct BlogService {
    user_repo: Arc<UserRepository>,
    blog_repo: Arc<BlogRepository>,
}

impl BlogService {
    pub fn new(user_repo: Arc<UserRepository>, blog_repo: Arc<BlogRepository>) -> Self {
        Self {
            user_repo,
            blog_repo,
        }
    }
}

#[async_trait]
impl BlogSiteService for BlogService {
    async fn register_user(&self, user: User) -> AppResult<User> {
        self.user_repo.insert(user).await
    }

    async fn does_user_exist(&self, username: &str, email: &str) -> AppResult<bool> {
        self.user_repo
            .exists_by_username_or_email(username, email)
            .await
    }

    async fn get_user(&self, id: ObjectId) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    async fn add_blog(&self, mut blog: Blog) -> AppResult<Blog> {
        // 클라이언트가 보낸 타임스탬프는 여기서 무조건 대체된다
        blog.stamp_now();

        self.blog_repo.insert(blog).await
    }

    async fn does_blog_exist(&self, user_id: ObjectId, blog_name: &str) -> AppResult<bool> {
        self.blog_repo
            .exists_by_owner_and_name(user_id, blog_name)
            .await
    }

    async fn delete_blog(&self, user_id: ObjectId, blog_name: &str) -> AppResult<bool> {
        let deleted = self
            .blog_repo
            .delete_by_owner_and_name(user_id, blog_name)
            .await?;

        if deleted {
            info!("Blog deleted successfully.");
        } else {
            warn!("Blog not found.");
        }

        Ok(deleted)
    }

    async fn get_all_user_blogs(&self, user_id: ObjectId) -> AppResult<Vec<Blog>> {
        self.blog_repo.find_by_owner(user_id).await
    }

    async fn get_blogs_by_category(&self, category: &str) -> AppResult<Vec<Blog>> {
        self.blog_repo.find_by_category(category).await
    }

    async fn get_blogs_by_duration(
        &self,
        category: &str,
        from: ChronoDateTime<Utc>,
        to: ChronoDateTime<Utc>,
    ) -> AppResult<Vec<Blog>> {
        let from = DateTime::from_millis(from.timestamp_millis());
        let to = DateTime::from_millis(to.timestamp_millis());

        self.blog_repo
            .find_by_category_in_range(category, from, to)
            .await
    }
}
