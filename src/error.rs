//! 에러 타입 정의 모듈
//!
//! nistconv에서 발생할 수 있는 에러 타입을 정의합니다.
//! 잘못된 데이터 행이나 누락된 메타데이터는 에러가 아니며, I/O 실패만 여기로 옵니다.

use std::path::PathBuf;
use thiserror::Error;

/// nistconv에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum NistConvError {
    /// 원시 데이터 파일 읽기 실패
    #[error("파일을 읽을 수 없습니다 ({path}): {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 출력 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({path}): {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패 ({path}): {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CSV 기록 실패
    #[error("CSV 기록 실패 ({path}): {source}")]
    CsvError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// 작업 폴더가 존재하지 않음
    #[error("작업 폴더를 찾을 수 없습니다: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// 실행 파일 위치를 알 수 없음
    #[error("실행 파일 위치를 확인할 수 없습니다: {reason}")]
    ExecutableDirUnavailable { reason: String },
}

/// nistconv 결과 타입 별칭
pub type Result<T> = std::result::Result<T, NistConvError>;
