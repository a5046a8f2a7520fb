//! nistconv - NIST X-RAY OPTICAL CONSTANTS CONVERTER
//!
//! NIST X선 광학 상수 원시 테이블(`<물질>_nist_raw.txt`)을 JSON과 CSV로 변환하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 📄 **헤더 메타데이터**: 주석 줄에서 물질 이름, 원자 번호, 밀도 추출
//! - 🔢 **데이터 행**: 에너지(keV), f1, f2 세 열 수집 (잘못된 행은 건너뜀)
//! - 💾 **두 가지 출력**: 2칸 들여쓰기 JSON과 헤더가 있는 CSV
//! - ⚠️ **누락 허용**: 원시 파일이 없는 물질은 경고 후 다음 물질로 진행
//!
//! # 예제
//!
//! ```bash
//! # 실행 파일 위치에서 Si, SiO2, H2O, Au 변환
//! nistconv
//!
//! # 폴더와 물질 지정
//! nistconv --dir ./reference --materials "Si,Au"
//! ```

pub mod cli;
pub mod driver;
pub mod error;
pub mod parser;
pub mod record;
pub mod stats;
pub mod writer;

// Re-exports for convenient access
pub use cli::Args;
pub use driver::{convert_material, run, MaterialOutcome, MaterialPaths, DEFAULT_MATERIALS};
pub use error::{NistConvError, Result};
pub use parser::{parse_content, parse_file};
pub use record::{Metadata, OpticalConstants};
pub use stats::{format_bytes, Statistics};
pub use writer::{write_csv, write_json};
