//! 물질별 변환 실행 모듈
//!
//! 고정된 물질 목록을 순서대로 돌며 `{물질}_nist_raw.txt`를 찾아
//! JSON/CSV 두 파일로 변환합니다. 원시 파일이 없으면 경고만 남기고 넘어갑니다.

use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{NistConvError, Result};
use crate::parser::parse_file;
use crate::stats::Statistics;
use crate::writer::{write_csv, write_json};

/// 기본 변환 대상 물질
pub const DEFAULT_MATERIALS: [&str; 4] = ["Si", "SiO2", "H2O", "Au"];

/// 물질 하나에 대응하는 입출력 경로
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialPaths {
    pub raw: PathBuf,
    pub json: PathBuf,
    pub csv: PathBuf,
}

impl MaterialPaths {
    pub fn new(dir: &Path, material: &str) -> Self {
        Self {
            raw: dir.join(format!("{}_nist_raw.txt", material)),
            json: dir.join(format!("{}_optical_constants.json", material)),
            csv: dir.join(format!("{}_optical_constants.csv", material)),
        }
    }
}

/// 물질 하나의 처리 결과
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialOutcome {
    /// 변환 완료
    Converted {
        paths: MaterialPaths,
        rows: usize,
        bytes_written: u64,
    },
    /// 원시 파일 없음
    Missing { raw: PathBuf },
}

/// 물질 하나를 변환
///
/// 원시 파일이 없으면 `Missing`을 반환하며, 읽기/쓰기 실패만 에러로 전파합니다.
pub fn convert_material(dir: &Path, material: &str) -> Result<MaterialOutcome> {
    let paths = MaterialPaths::new(dir, material);

    if !paths.raw.exists() {
        println!(
            "{} {} not found",
            "Warning:".yellow().bold(),
            paths.raw.display()
        );
        debug!(material, path = %paths.raw.display(), "raw file missing, skipped");
        return Ok(MaterialOutcome::Missing { raw: paths.raw });
    }

    println!("{} {}...", "Processing".bright_cyan(), material);
    let record = parse_file(&paths.raw)?;
    debug!(
        material,
        rows = record.len(),
        name = %record.metadata.material,
        "raw file parsed"
    );

    let json_bytes = write_json(&record, &paths.json)?;
    println!("  {} {}", "Saved JSON:".green(), paths.json.display());

    let csv_bytes = write_csv(&record, &paths.csv)?;
    println!("  {} {}", "Saved CSV:".green(), paths.csv.display());

    info!(material, rows = record.len(), "converted");

    Ok(MaterialOutcome::Converted {
        rows: record.len(),
        bytes_written: json_bytes + csv_bytes,
        paths,
    })
}

/// 목록의 모든 물질을 순서대로 변환
pub fn run<S: AsRef<str>>(dir: &Path, materials: &[S]) -> Result<Statistics> {
    if !dir.is_dir() {
        return Err(NistConvError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut stats = Statistics::new(materials.len());

    for material in materials {
        match convert_material(dir, material.as_ref())? {
            MaterialOutcome::Converted {
                rows,
                bytes_written,
                ..
            } => stats.record_converted(rows, bytes_written),
            MaterialOutcome::Missing { .. } => stats.record_missing(),
        }
    }

    Ok(stats)
}
