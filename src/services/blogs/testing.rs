//! 테스트용 인메모리 서비스 구현
//!
//! 핸들러 테스트가 MongoDB 없이 [`BlogSiteService`] 계약 전체를
//! 구동할 수 있도록 하는 페이크입니다.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime as ChronoDateTime, Utc};
use mongodb::bson::{DateTime, oid::ObjectId};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::blogs::Blog;
use crate::domain::entities::users::User;
use crate::services::blogs::BlogSiteService;

/// 인메모리 [`BlogSiteService`] 구현
#[derive(Default)]
pub struct FakeBlogSiteService {
    pub users: Mutex<Vec<User>>,
    pub blogs: Mutex<Vec<Blog>>,
}

impl FakeBlogSiteService {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            blogs: Mutex::new(Vec::new()),
        }
    }

    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            blogs: Mutex::new(blogs),
        }
    }
}

#[async_trait]
impl BlogSiteService for FakeBlogSiteService {
    async fn register_user(&self, mut user: User) -> AppResult<User> {
        user.id = Some(ObjectId::new());
        self.users.lock().unwrap().push(user.clone());

        Ok(user)
    }

    async fn does_user_exist(&self, username: &str, email: &str) -> AppResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.username == username || u.email == email))
    }

    async fn get_user(&self, id: ObjectId) -> AppResult<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == Some(id))
            .cloned()
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    async fn add_blog(&self, mut blog: Blog) -> AppResult<Blog> {
        blog.id = Some(ObjectId::new());
        blog.stamp_now();
        self.blogs.lock().unwrap().push(blog.clone());

        Ok(blog)
    }

    async fn does_blog_exist(&self, user_id: ObjectId, blog_name: &str) -> AppResult<bool> {
        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .any(|b| b.user_id == user_id && b.blog_name == blog_name))
    }

    async fn delete_blog(&self, user_id: ObjectId, blog_name: &str) -> AppResult<bool> {
        let mut blogs = self.blogs.lock().unwrap();

        match blogs
            .iter()
            .position(|b| b.user_id == user_id && b.blog_name == blog_name)
        {
            Some(pos) => {
                blogs.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_all_user_blogs(&self, user_id: ObjectId) -> AppResult<Vec<Blog>> {
        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_blogs_by_category(&self, category: &str) -> AppResult<Vec<Blog>> {
        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.category == category)
            .cloned()
            .collect())
    }

    async fn get_blogs_by_duration(
        &self,
        category: &str,
        from: ChronoDateTime<Utc>,
        to: ChronoDateTime<Utc>,
    ) -> AppResult<Vec<Blog>> {
        let from = DateTime::from_millis(from.timestamp_millis());
        let to = DateTime::from_millis(to.timestamp_millis());

        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.category == category && b.timestamp >= from && b.timestamp <= to)
            .cloned()
            .collect())
    }
}
