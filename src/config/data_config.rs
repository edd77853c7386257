//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, Rate Limiting 관련 설정을 관리합니다.
//! 모든 구조체는 `from_env()`로 환경 변수에서 값을 읽으며,
//! 누락된 값에는 개발 환경용 기본값을 사용합니다.

use std::env;

use log::error;

/// 애플리케이션 전체 설정
///
/// `main`에서 한 번 생성하여 서버 구동과 데이터베이스 연결에 전달합니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩 호스트 (기본값: "127.0.0.1")
    pub host: String,
    /// 바인딩 포트 (기본값: 8080)
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .unwrap_or_else(|e| {
                error!("PORT 파싱 실패: {}. 기본값 8080 사용", e);
                8080
            });

        Self { host, port }
    }

    /// `HttpServer::bind`에 전달할 주소 문자열을 생성합니다.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    pub uri: String,
    /// 사용할 데이터베이스 이름 (기본값: "blogsite_dev")
    pub database: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database = env::var("DATABASE_NAME").unwrap_or_else(|_| "blogsite_dev".to_string());

        Self { uri, database }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수 (기본값: 100)
    pub per_second: u64,
    /// 버스트 허용량 (기본값: 200)
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}
