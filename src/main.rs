//! 블로그 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 컴포넌트를 초기화합니다.
//! MongoDB 연결과 인덱스를 설정하고 블로그 플랫폼 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use blog_service_backend::config::AppConfig;
use blog_service_backend::db::Database;
use blog_service_backend::repositories::blogs::BlogRepository;
use blog_service_backend::repositories::users::UserRepository;
use blog_service_backend::routes::configure_all_routes;
use blog_service_backend::services::blogs::{BlogService, BlogSiteService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 블로그 서비스 시작중...");

    let config = AppConfig::from_env();

    // 데이터 스토어 및 도메인 서비스 조립
    let service = initialize_blog_service(&config).await;

    info!("✅ 모든 컴포넌트가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(config, service).await
}

/// MongoDB 연결을 초기화하고 도메인 서비스를 조립합니다
///
/// 리포지토리와 서비스는 여기서 한 번 구성되어 핸들러에
/// `web::Data`로 주입됩니다. 연결 또는 인덱스 생성 실패 시
/// 애플리케이션이 종료됩니다.
async fn initialize_blog_service(config: &AppConfig) -> Arc<dyn BlogSiteService> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(
        Database::new(&config.database)
            .await
            .expect("데이터베이스 연결 실패"),
    );

    let user_repo = Arc::new(UserRepository::new(database.clone()));
    let blog_repo = Arc::new(BlogRepository::new(database.clone()));

    // 유니크/조회 인덱스는 서비스 시작 시점에 보장한다
    user_repo
        .create_indexes()
        .await
        .expect("users 인덱스 생성 실패");
    blog_repo
        .create_indexes()
        .await
        .expect("blogs 인덱스 생성 실패");

    info!("✅ 인덱스 생성 완료");

    Arc::new(BlogService::new(user_repo, blog_repo))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: AppConfig,
    service: Arc<dyn BlogSiteService>,
) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API 엔드포인트: http://{}/api/v1.0/blogsite", bind_address);

    // Rate Limiting 설정
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second, config.rate_limit.burst_size
    );

    let service_data: web::Data<dyn BlogSiteService> = web::Data::from(service);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 도메인 서비스 주입
            .app_data(service_data.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS 설정입니다.
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // userId 커스텀 헤더 허용
        .allowed_header("userId")
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
