//! # 블로그 HTTP 핸들러
//!
//! 블로그 추가/삭제/조회 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/user/blogs/add/{blogname}` | 블로그 추가 | 200 + 블로그 |
//! | `DELETE` | `/user/delete/{blogname}` | 블로그 삭제 | 200 (빈 본문) |
//! | `GET` | `/user/getall` | 작성자의 블로그 목록 | 200 + 목록 |
//! | `GET` | `/blogs/info/{category}` | 카테고리별 목록 | 200 + 목록 |
//! | `GET` | `/blogs/get/{category}/{from}/{to}` | 카테고리+기간 목록 | 200 + 목록 |
//!
//! 작성자 ID는 `userId` 요청 헤더로 전달됩니다. 모든 목록 응답은 결과가
//! 없을 때에도 200과 빈 목록을 반환합니다.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use log::info;
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::blogs::request::AddBlogRequest;
use crate::domain::dto::blogs::response::BlogResponse;
use crate::domain::entities::blogs::Blog;
use crate::services::blogs::BlogSiteService;
use crate::utils::datetime::parse_utc_datetime;

/// `userId` 헤더 값을 추출합니다. 빈 값은 누락으로 취급합니다.
fn user_id_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("userId")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

/// 헤더가 필수인 핸들러용 추출. 누락/형식 오류는 검증 에러가 됩니다.
fn require_user_id(req: &HttpRequest) -> AppResult<ObjectId> {
    let raw = user_id_header(req).ok_or_else(|| {
        AppError::ValidationError("userId 헤더가 없습니다".to_string())
    })?;

    ObjectId::parse_str(raw).map_err(|_| {
        AppError::ValidationError("유효하지 않은 사용자 ID 형식입니다".to_string())
    })
}

fn to_response_list(blogs: Vec<Blog>) -> Vec<BlogResponse> {
    blogs.into_iter().map(BlogResponse::from).collect()
}

/// 블로그 추가 핸들러
///
/// 경로의 블로그 제목과 `userId` 헤더를 본문보다 우선하여 병합한 뒤
/// 병합 결과를 한 번 검증하고 저장합니다. 저장된 블로그(서버가 찍은
/// 타임스탬프 포함)를 본문으로 반환합니다.
///
/// # 응답
///
/// * `200 OK` - 저장된 블로그 JSON
/// * `400 Bad Request` - 작성자 ID 누락/형식 오류, 제목/카테고리 길이,
///   본문 단어 수 등 검증 실패
/// * `500 Internal Server Error` - 저장소 오류
#[post("/user/blogs/add/{blogname}")]
pub async fn add_blog(
    service: web::Data<dyn BlogSiteService>,
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<AddBlogRequest>,
) -> Result<HttpResponse, AppError> {
    let blog_name = path.into_inner();
    info!("Add blog request started for blogname: {}", blog_name);

    let resolved = payload
        .into_inner()
        .resolve(&blog_name, user_id_header(&req))?;

    resolved
        .validate()
        .map_err(|e| AppError::from_validation(&e))?;

    let blog = service.add_blog(resolved.into_blog()).await?;
    info!("Blog added successfully for userId: {}", blog.user_id);

    Ok(HttpResponse::Ok().json(BlogResponse::from(blog)))
}

/// 블로그 삭제 핸들러
///
/// `(userId 헤더, 경로의 블로그 제목)` 쌍으로 블로그를 찾아 삭제합니다.
///
/// # 응답
///
/// * `200 OK` - 삭제 성공 (빈 본문)
/// * `400 Bad Request` - 작성자 ID 누락/형식 오류
/// * `404 Not Found` - 일치하는 블로그 없음
#[delete("/user/delete/{blogname}")]
pub async fn delete_blog(
    service: web::Data<dyn BlogSiteService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let blog_name = path.into_inner();
    info!("Delete blog request started for blogname: {}", blog_name);

    let user_id = require_user_id(&req)?;

    if service.delete_blog(user_id, &blog_name).await? {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(AppError::NotFound(
            "블로그가 존재하지 않거나 사용자 ID가 올바르지 않습니다".to_string(),
        ))
    }
}

/// 작성자별 블로그 목록 핸들러
///
/// # 응답
///
/// * `200 OK` - 블로그 목록 (빈 목록 가능)
/// * `400 Bad Request` - 작성자 ID 누락/형식 오류
#[get("/user/getall")]
pub async fn get_all_user_blogs(
    service: web::Data<dyn BlogSiteService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    info!("Get all blogs request started");

    let user_id = require_user_id(&req)?;

    let blogs = service.get_all_user_blogs(user_id).await?;
    info!("{} blogs found successfully.", blogs.len());

    Ok(HttpResponse::Ok().json(to_response_list(blogs)))
}

/// 카테고리별 블로그 목록 핸들러
///
/// # 응답
///
/// * `200 OK` - 블로그 목록 (빈 목록 가능)
/// * `400 Bad Request` - 카테고리 누락
#[get("/blogs/info/{category}")]
pub async fn get_blogs_by_category(
    service: web::Data<dyn BlogSiteService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let category = path.into_inner();
    info!(
        "Get blogs by category request started for category: {}",
        category
    );

    if category.trim().is_empty() {
        return Err(AppError::ValidationError("카테고리가 없습니다".to_string()));
    }

    let blogs = service.get_blogs_by_category(&category).await?;
    info!(
        "{} blogs found successfully for category: {}.",
        blogs.len(),
        category
    );

    Ok(HttpResponse::Ok().json(to_response_list(blogs)))
}

/// 카테고리+기간 블로그 목록 핸들러
///
/// `{from}`/`{to}`는 RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD`
/// 형식을 받으며 구간은 양끝을 포함합니다. 파싱 불가 값과
/// `from > to`는 조회 전에 거부됩니다.
///
/// # 응답
///
/// * `200 OK` - 블로그 목록 (빈 목록 가능)
/// * `400 Bad Request` - 카테고리 누락, 일시 형식 오류, 역전된 기간
#[get("/blogs/get/{category}/{from}/{to}")]
pub async fn get_blogs_by_duration(
    service: web::Data<dyn BlogSiteService>,
    path: web::Path<(String, String, String)>,
) -> Result<HttpResponse, AppError> {
    let (category, from_raw, to_raw) = path.into_inner();
    info!(
        "Get blogs by duration request started for category: {} between {} - {}",
        category, from_raw, to_raw
    );

    if category.trim().is_empty() {
        return Err(AppError::ValidationError("카테고리가 없습니다".to_string()));
    }

    let from = parse_utc_datetime(&from_raw)?;
    let to = parse_utc_datetime(&to_raw)?;

    if from > to {
        return Err(AppError::ValidationError(
            "유효하지 않은 기간입니다. 시작 일시가 종료 일시보다 늦을 수 없습니다".to_string(),
        ));
    }

    let blogs = service.get_blogs_by_duration(&category, from, to).await?;
    info!(
        "{} blogs found successfully for category: {} within the given duration.",
        blogs.len(),
        category
    );

    Ok(HttpResponse::Ok().json(to_response_list(blogs)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use mongodb::bson::DateTime;

    use super::*;
    use crate::services::blogs::testing::FakeBlogSiteService;

    const LONG_NAME: &str = "This is the title of my new blog post";
    const LONG_CATEGORY: &str = "Technology and programming";
    const USER_ID: &str = "60d5ea9f2e59d623b30b1772";

    fn service_data(fake: Arc<FakeBlogSiteService>) -> web::Data<dyn BlogSiteService> {
        web::Data::from(fake as Arc<dyn BlogSiteService>)
    }

    fn blog(user_id: ObjectId, name: &str, category: &str, millis: i64) -> Blog {
        Blog {
            id: Some(ObjectId::new()),
            user_id,
            blog_name: name.to_string(),
            category: category.to_string(),
            article: "word".to_string(),
            author_name: "Author".to_string(),
            timestamp: DateTime::from_millis(millis),
        }
    }

    fn add_blog_payload(words: usize) -> serde_json::Value {
        serde_json::json!({
            "category": LONG_CATEGORY,
            "article": vec!["word"; words].join(" "),
            "author_name": "Author's Name"
        })
    }

    macro_rules! init_app {
        ($fake:expr) => {
            test::init_service(
                App::new()
                    .app_data(service_data($fake))
                    .service(add_blog)
                    .service(delete_blog)
                    .service(get_all_user_blogs)
                    .service(get_blogs_by_category)
                    .service(get_blogs_by_duration),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_add_blog_returns_stored_blog_with_server_timestamp() {
        let fake = Arc::new(FakeBlogSiteService::default());
        let app = init_app!(fake.clone());

        let before = DateTime::now().timestamp_millis();
        let req = test::TestRequest::post()
            .uri(&format!(
                "/user/blogs/add/{}",
                LONG_NAME.replace(' ', "%20")
            ))
            .insert_header(("userId", USER_ID))
            .set_json(add_blog_payload(1000))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: BlogResponse = test::read_body_json(resp).await;
        assert_eq!(body.blog_name, LONG_NAME);
        assert_eq!(body.user_id, USER_ID);

        let stored = fake.blogs.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].timestamp.timestamp_millis() >= before);
    }

    #[actix_web::test]
    async fn test_add_blog_path_name_overrides_body_name() {
        let fake = Arc::new(FakeBlogSiteService::default());
        let app = init_app!(fake.clone());

        let mut payload = add_blog_payload(1000);
        payload["blog_name"] = serde_json::json!("body title that must be ignored");

        let req = test::TestRequest::post()
            .uri(&format!(
                "/user/blogs/add/{}",
                LONG_NAME.replace(' ', "%20")
            ))
            .insert_header(("userId", USER_ID))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(fake.blogs.lock().unwrap()[0].blog_name, LONG_NAME);
    }

    #[actix_web::test]
    async fn test_add_blog_rejects_short_path_name() {
        let fake = Arc::new(FakeBlogSiteService::default());
        let app = init_app!(fake.clone());

        let req = test::TestRequest::post()
            .uri("/user/blogs/add/short")
            .insert_header(("userId", USER_ID))
            .set_json(add_blog_payload(1000))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(fake.blogs.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_add_blog_rejects_short_article() {
        let fake = Arc::new(FakeBlogSiteService::default());
        let app = init_app!(fake.clone());

        let req = test::TestRequest::post()
            .uri(&format!(
                "/user/blogs/add/{}",
                LONG_NAME.replace(' ', "%20")
            ))
            .insert_header(("userId", USER_ID))
            .set_json(add_blog_payload(25))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(fake.blogs.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_add_blog_requires_user_id() {
        let fake = Arc::new(FakeBlogSiteService::default());
        let app = init_app!(fake);

        // 헤더도 본문 user_id도 없음
        let req = test::TestRequest::post()
            .uri(&format!(
                "/user/blogs/add/{}",
                LONG_NAME.replace(' ', "%20")
            ))
            .set_json(add_blog_payload(1000))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_blog_removes_exactly_one_record() {
        let owner = ObjectId::parse_str(USER_ID).unwrap();
        let fake = Arc::new(FakeBlogSiteService::with_blogs(vec![
            blog(owner, LONG_NAME, LONG_CATEGORY, 0),
            blog(owner, "Another sufficiently long name", LONG_CATEGORY, 0),
        ]));
        let app = init_app!(fake.clone());

        let req = test::TestRequest::delete()
            .uri(&format!("/user/delete/{}", LONG_NAME.replace(' ', "%20")))
            .insert_header(("userId", USER_ID))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
        assert_eq!(fake.blogs.lock().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_delete_blog_returns_not_found_and_leaves_store_unchanged() {
        let owner = ObjectId::parse_str(USER_ID).unwrap();
        let fake = Arc::new(FakeBlogSiteService::with_blogs(vec![blog(
            owner,
            LONG_NAME,
            LONG_CATEGORY,
            0,
        )]));
        let app = init_app!(fake.clone());

        // 다른 사용자의 삭제 시도
        let req = test::TestRequest::delete()
            .uri(&format!("/user/delete/{}", LONG_NAME.replace(' ', "%20")))
            .insert_header(("userId", ObjectId::new().to_hex()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(fake.blogs.lock().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_delete_blog_requires_user_id_header() {
        let fake = Arc::new(FakeBlogSiteService::default());
        let app = init_app!(fake);

        let req = test::TestRequest::delete()
            .uri(&format!("/user/delete/{}", LONG_NAME.replace(' ', "%20")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_all_user_blogs_returns_only_owner_blogs() {
        let owner = ObjectId::parse_str(USER_ID).unwrap();
        let other = ObjectId::new();
        let fake = Arc::new(FakeBlogSiteService::with_blogs(vec![
            blog(owner, LONG_NAME, LONG_CATEGORY, 0),
            blog(other, "Somebody else's long blog name", LONG_CATEGORY, 0),
        ]));
        let app = init_app!(fake);

        let req = test::TestRequest::get()
            .uri("/user/getall")
            .insert_header(("userId", USER_ID))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Vec<BlogResponse> = test::read_body_json(resp).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].user_id, USER_ID);
    }

    #[actix_web::test]
    async fn test_get_all_user_blogs_rejects_malformed_user_id() {
        let fake = Arc::new(FakeBlogSiteService::default());
        let app = init_app!(fake);

        let req = test::TestRequest::get()
            .uri("/user/getall")
            .insert_header(("userId", "not-an-object-id"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_blogs_by_category_returns_empty_list_with_ok() {
        let fake = Arc::new(FakeBlogSiteService::default());
        let app = init_app!(fake);

        let req = test::TestRequest::get()
            .uri("/blogs/info/technology")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Vec<BlogResponse> = test::read_body_json(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_get_blogs_by_category_returns_matching_blogs() {
        let owner = ObjectId::new();
        let fake = Arc::new(FakeBlogSiteService::with_blogs(vec![
            blog(owner, LONG_NAME, "technology", 0),
            blog(owner, "Another sufficiently long name", "cooking", 0),
        ]));
        let app = init_app!(fake);

        let req = test::TestRequest::get()
            .uri("/blogs/info/technology")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Vec<BlogResponse> = test::read_body_json(resp).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].category, "technology");
    }

    #[actix_web::test]
    async fn test_get_blogs_by_duration_inclusive_bounds() {
        let owner = ObjectId::new();
        // 2024-01-01T00:00:00Z / 2024-06-01T00:00:00Z / 2025-01-01T00:00:00Z
        let jan: i64 = 1_704_067_200_000;
        let jun: i64 = 1_717_200_000_000;
        let next_year: i64 = 1_735_689_600_000;
        let fake = Arc::new(FakeBlogSiteService::with_blogs(vec![
            blog(owner, "First sufficiently long name", "technology", jan),
            blog(owner, "Second sufficiently long name", "technology", jun),
            blog(owner, "Third sufficiently long name", "technology", next_year),
        ]));
        let app = init_app!(fake);

        // 양끝 경계의 블로그도 포함된다
        let req = test::TestRequest::get()
            .uri("/blogs/get/technology/2024-01-01T00:00:00Z/2024-06-01T00:00:00Z")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Vec<BlogResponse> = test::read_body_json(resp).await;
        assert_eq!(body.len(), 2);
    }

    #[actix_web::test]
    async fn test_get_blogs_by_duration_empty_result_is_ok() {
        let fake = Arc::new(FakeBlogSiteService::default());
        let app = init_app!(fake);

        let req = test::TestRequest::get()
            .uri("/blogs/get/technology/2024-01-01/2024-12-31")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Vec<BlogResponse> = test::read_body_json(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_get_blogs_by_duration_rejects_inverted_range() {
        let fake = Arc::new(FakeBlogSiteService::default());
        let app = init_app!(fake);

        let req = test::TestRequest::get()
            .uri("/blogs/get/technology/2024-12-31/2024-01-01")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_blogs_by_duration_rejects_unparseable_dates() {
        let fake = Arc::new(FakeBlogSiteService::default());
        let app = init_app!(fake);

        let req = test::TestRequest::get()
            .uri("/blogs/get/technology/yesterday/tomorrow")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
