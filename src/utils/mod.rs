//! 유틸리티 모듈

pub mod datetime;
