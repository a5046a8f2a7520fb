//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 작업 폴더 결정을 담당합니다.
//! 인자 없이 실행하면 실행 파일이 있는 폴더에서 기본 물질 목록을 변환합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::driver::DEFAULT_MATERIALS;
use crate::error::{NistConvError, Result};

/// nistconv CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "nistconv",
    author = "YourName <your@email.com>",
    version,
    about = "NIST X-RAY OPTICAL CONSTANTS CONVERTER - NIST 원시 테이블을 JSON/CSV로 변환",
    long_about = r#"
NIST X-RAY OPTICAL CONSTANTS CONVERTER
======================================

<물질>_nist_raw.txt 파일에서 에너지(keV), f1, f2 열과 주석 헤더의
메타데이터를 읽어 <물질>_optical_constants.json / .csv 로 저장합니다.

기본 물질 목록: Si, SiO2, H2O, Au
원시 파일이 없는 물질은 경고만 출력하고 건너뜁니다.

예제:
  nistconv
  nistconv --dir ./reference
  nistconv --materials "Si,Au" --verbose
"#
)]
pub struct Args {
    /// 원시 파일이 있는 폴더 (기본값: 실행 파일 위치)
    #[arg(short, long, env = "NISTCONV_DIR")]
    pub dir: Option<PathBuf>,

    /// 변환할 물질 목록 (쉼표로 구분, 기본값: Si,SiO2,H2O,Au)
    #[arg(short, long)]
    pub materials: Option<String>,

    /// 상세 로그 출력
    #[arg(short, long)]
    pub verbose: bool,

    /// 마지막 통계 요약 생략
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// 물질 목록을 파싱하여 벡터로 반환
    pub fn get_materials(&self) -> Vec<String> {
        match &self.materials {
            Some(list) => list
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => DEFAULT_MATERIALS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 작업 폴더 결정
    pub fn resolve_dir(&self) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => executable_dir(),
        }
    }

    /// 로그 레벨 문자열
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// 실행 파일이 위치한 폴더
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| NistConvError::ExecutableDirUnavailable {
        reason: e.to_string(),
    })?;

    exe.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| NistConvError::ExecutableDirUnavailable {
            reason: format!("상위 폴더 없음: {}", exe.display()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(dir: Option<&str>, materials: Option<&str>) -> Args {
        Args {
            dir: dir.map(PathBuf::from),
            materials: materials.map(str::to_string),
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn test_default_materials() {
        let args = args_with(None, None);
        assert_eq!(args.get_materials(), vec!["Si", "SiO2", "H2O", "Au"]);
    }

    #[test]
    fn test_materials_override() {
        let args = args_with(None, Some(" Au, ,Si "));
        assert_eq!(args.get_materials(), vec!["Au", "Si"]);
    }

    #[test]
    fn test_resolve_dir() {
        let args = args_with(Some("/tmp/nist"), None);
        assert_eq!(args.resolve_dir().unwrap(), PathBuf::from("/tmp/nist"));

        let default_dir = args_with(None, None).resolve_dir().unwrap();
        assert!(default_dir.is_dir());
    }

    #[test]
    fn test_parse_without_arguments() {
        let args = Args::try_parse_from(["nistconv"]).unwrap();
        assert!(args.materials.is_none());
        assert!(!args.verbose);
        assert_eq!(args.log_level(), "warn");
    }
}
