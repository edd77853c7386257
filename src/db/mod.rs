//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 풀링은 드라이버가 관리하며, 이 모듈은 연결 구성과
//! 리포지토리 계층에 대한 데이터베이스 핸들 제공을 담당합니다.

use log::info;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 연결을 관리하며,
/// 리포지토리 계층에서 데이터베이스 작업을 위한 기본 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 전달받은 설정으로 클라이언트를 초기화하고 `ping` 명령으로
    /// 연결 상태를 검증한 후 `Database` 인스턴스를 반환합니다.
    ///
    /// # 인자
    ///
    /// * `config` - `main`에서 구성한 MongoDB 연결 설정
    pub async fn new(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 모니터링 및 로깅용 애플리케이션 이름
        client_options.app_name = Some("blogsite".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&config.database)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database);

        Ok(Self {
            client,
            database_name: config.database.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// 리포지토리에서 컬렉션에 접근할 때 사용됩니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

/// 드라이버 에러가 유니크 인덱스 충돌(duplicate key)인지 확인합니다.
///
/// `users` 컬렉션의 사용자명/이메일 유니크 인덱스와 충돌한 삽입을
/// 가입 충돌로 분류하는 데 사용됩니다.
pub fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}
