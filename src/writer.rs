//! 출력 파일 작성 모듈
//!
//! 같은 레코드를 JSON (2칸 들여쓰기)과 CSV 두 형식으로 저장합니다.
//! 각 함수는 기록한 바이트 수를 반환합니다.

use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{NistConvError, Result};
use crate::record::OpticalConstants;

/// CSV 한 행
///
/// 구조체 필드 이름이 헤더 `energy_keV,f1,f2`가 됩니다.
#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "energy_keV")]
    energy_kev: f64,
    f1: f64,
    f2: f64,
}

/// 레코드를 JSON 파일로 저장
pub fn write_json(record: &OpticalConstants, path: &Path) -> Result<u64> {
    let json = serde_json::to_string_pretty(record).map_err(|e| NistConvError::JsonError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let write_err = |e: std::io::Error| NistConvError::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    writer.write_all(json.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    Ok(json.len() as u64)
}

/// 레코드의 세 열을 CSV 파일로 저장 (메타데이터 제외)
pub fn write_csv(record: &OpticalConstants, path: &Path) -> Result<u64> {
    let csv_err = |e: csv::Error| NistConvError::CsvError {
        path: path.to_path_buf(),
        source: e,
    };
    let write_err = |e: std::io::Error| NistConvError::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    };

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .map_err(csv_err)?;

    if record.is_empty() {
        // 행이 없으면 serialize가 헤더를 만들지 않으므로 직접 쓴다
        wtr.write_record(["energy_keV", "f1", "f2"])
            .map_err(csv_err)?;
    }

    for (energy_kev, f1, f2) in record.rows() {
        wtr.serialize(CsvRow { energy_kev, f1, f2 })
            .map_err(csv_err)?;
    }

    wtr.flush().map_err(write_err)?;
    drop(wtr);

    fs::metadata(path).map(|m| m.len()).map_err(write_err)
}
