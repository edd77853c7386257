//! API 라우트 설정 모듈
//!
//! 블로그 플랫폼의 REST API 엔드포인트들을 버전이 붙은 기본 경로
//! 아래에 등록합니다. 헬스체크 엔드포인트를 포함합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{App, web};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_blogsite_routes(cfg);
}

/// 블로그 플랫폼 라우트를 설정합니다
///
/// 모든 엔드포인트는 `/api/v1.0/blogsite` 기본 경로 아래에 있습니다.
///
/// # Available Routes
///
/// - `POST /api/v1.0/blogsite/user/register` - 회원 가입
/// - `GET /api/v1.0/blogsite/blogs/info/{category}` - 카테고리별 목록
/// - `GET /api/v1.0/blogsite/user/getall` - 작성자의 블로그 목록 (userId 헤더)
/// - `DELETE /api/v1.0/blogsite/user/delete/{blogname}` - 블로그 삭제 (userId 헤더)
/// - `POST /api/v1.0/blogsite/user/blogs/add/{blogname}` - 블로그 추가 (userId 헤더)
/// - `GET /api/v1.0/blogsite/blogs/get/{category}/{from}/{to}` - 카테고리+기간 목록
fn configure_blogsite_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1.0/blogsite")
            .service(handlers::users::register_user)
            .service(handlers::blogs::get_blogs_by_category)
            .service(handlers::blogs::get_all_user_blogs)
            .service(handlers::blogs::delete_blog)
            .service(handlers::blogs::add_blog)
            .service(handlers::blogs::get_blogs_by_duration),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "blog_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB"
        }
    }))
}
