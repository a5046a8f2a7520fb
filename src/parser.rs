//! NIST 원시 파일 파싱 모듈
//!
//! `#`으로 시작하는 주석 줄에서 메타데이터를, 나머지 줄에서 숫자 행을 읽습니다.
//! 숫자로 해석할 수 없는 행은 경고 없이 버립니다.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{NistConvError, Result};
use crate::record::{Metadata, OpticalConstants};

const ATOMIC_NUMBER_MARKER: &str = "Z =";
const DENSITY_MARKER: &str = "Density:";
const DENSITY_UNIT: &str = "g/cm3";

/// 원시 파일을 읽어 레코드로 변환
///
/// 파일을 열거나 읽지 못한 경우에만 에러를 반환합니다.
pub fn parse_file(path: &Path) -> Result<OpticalConstants> {
    let content = fs::read_to_string(path).map_err(|e| NistConvError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "raw file loaded");
    Ok(parse_content(&content))
}

/// 문자열 내용을 레코드로 변환
pub fn parse_content(content: &str) -> OpticalConstants {
    let mut header = HeaderFields::default();
    let mut record = OpticalConstants::new();
    let mut dropped = 0usize;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with('#') {
            header.absorb(line);
            continue;
        }

        if line.is_empty() {
            continue;
        }

        match parse_data_row(line) {
            Some((energy, f1, f2)) => record.push_row(energy, f1, f2),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = record.len(), "skipped malformed data rows");
    }

    record.metadata = header.into_metadata();
    record
}

/// 주석 헤더에서 모으는 중간 값
///
/// 각 필드는 처음 성공한 추출 값만 유지합니다.
/// 주석 한 줄은 `Z =`, `Density:`, 괄호 순으로 처음 들어 있는 표식 하나에만 쓰입니다.
#[derive(Debug, Default)]
struct HeaderFields {
    material: Option<String>,
    atomic_number: Option<i64>,
    density: Option<f64>,
}

impl HeaderFields {
    fn absorb(&mut self, line: &str) {
        if line.contains(ATOMIC_NUMBER_MARKER) {
            if self.atomic_number.is_none() {
                self.atomic_number = extract_atomic_number(line);
            }
        } else if line.contains(DENSITY_MARKER) {
            if self.density.is_none() {
                self.density = extract_density(line);
            }
        } else if self.material.is_none() {
            self.material = extract_material(line);
        }
    }

    fn into_metadata(self) -> Metadata {
        Metadata::new(
            self.material.unwrap_or_default(),
            self.atomic_number,
            self.density,
        )
    }
}

/// `Z = 14` 형식에서 원자 번호 추출
fn extract_atomic_number(line: &str) -> Option<i64> {
    let (_, rest) = line.split_once(ATOMIC_NUMBER_MARKER)?;
    let rest = rest.trim();

    // 뒤에 다른 글자가 붙어 있으면 첫 토큰만 본다
    rest.parse()
        .ok()
        .or_else(|| rest.split_whitespace().next()?.parse().ok())
}

/// `Density: 2.33 g/cm3` 형식에서 밀도 추출
fn extract_density(line: &str) -> Option<f64> {
    let (_, rest) = line.split_once(DENSITY_MARKER)?;
    let value = rest.split(DENSITY_UNIT).next().unwrap_or(rest);
    value.trim().parse().ok()
}

/// 첫 `(`와 첫 `)` 사이의 물질 이름 추출
///
/// `)`가 `(`보다 앞에 있으면 빈 이름으로 보고 다음 줄을 기다린다.
fn extract_material(line: &str) -> Option<String> {
    let start = line.find('(')?;
    let end = line.find(')')?;
    if end <= start {
        return None;
    }
    let name = &line[start + 1..end];

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// 공백으로 나눈 앞의 세 토큰을 (energy, f1, f2)로 해석
///
/// JSON 숫자로 쓸 수 없는 `nan`/`inf` 값이 있는 행은 버린다.
fn parse_data_row(line: &str) -> Option<(f64, f64, f64)> {
    let mut tokens = line.split_whitespace();
    let energy = parse_finite(tokens.next()?)?;
    let f1 = parse_finite(tokens.next()?)?;
    let f2 = parse_finite(tokens.next()?)?;
    Some((energy, f1, f2))
}

fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_density() {
        assert_eq!(extract_density("# Density: 2.33 g/cm3"), Some(2.33));
        assert_eq!(extract_density("# Density:19.3g/cm3"), Some(19.3));
        assert_eq!(extract_density("# Density: 1.0"), Some(1.0));
        assert_eq!(extract_density("# Density: unknown g/cm3"), None);
        assert_eq!(extract_density("# no density here"), None);
    }

    #[test]
    fn test_extract_atomic_number() {
        assert_eq!(extract_atomic_number("# Z = 14"), Some(14));
        assert_eq!(extract_atomic_number("# Z = 79 (gold)"), Some(79));
        assert_eq!(extract_atomic_number("# Z = many"), None);
        assert_eq!(extract_atomic_number("# Z=14"), None);
    }

    #[test]
    fn test_extract_material() {
        assert_eq!(extract_material("# Silicon (Si)"), Some("Si".to_string()));
        assert_eq!(
            extract_material("# Water (H2O) liquid (ignored)"),
            Some("H2O".to_string())
        );
        assert_eq!(extract_material("# empty ()"), None);
        assert_eq!(extract_material("# reversed ) ("), None);
        assert_eq!(extract_material("# a) b (c)"), None);
        assert_eq!(extract_material("# no parens"), None);
    }

    #[test]
    fn test_parse_data_row() {
        assert_eq!(parse_data_row("10.0 0.5 0.2 extra"), Some((10.0, 0.5, 0.2)));
        assert_eq!(parse_data_row("1e-2\t3.5E+1  -0.25"), Some((0.01, 35.0, -0.25)));
        assert_eq!(parse_data_row("abc 0.5 0.2"), None);
        assert_eq!(parse_data_row("10.0 0.5"), None);
        assert_eq!(parse_data_row("nan 0.5 0.2"), None);
        assert_eq!(parse_data_row("10.0 inf 0.2"), None);
        assert_eq!(parse_data_row("10.0 0.5 -Infinity"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let content = "\
# Silicon (Si)
# Z = 14
# Density: 2.33 g/cm3
# Other (SiO2)
# Z = 8
# Density: 2.2 g/cm3
1.0 2.0 3.0
";
        let record = parse_content(content);
        assert_eq!(record.metadata.material, "Si");
        assert_eq!(record.metadata.atomic_number, Some(14));
        assert_eq!(record.metadata.density_g_cm3, Some(2.33));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_comment_line_feeds_only_its_first_marker() {
        let content = "\
# Density: 2.33 g/cm3 (solid)
# Z = 14 (Si)
# Silicon (Si)
1 2 3
";
        let record = parse_content(content);
        assert_eq!(record.metadata.material, "Si");
        assert_eq!(record.metadata.atomic_number, Some(14));
        assert_eq!(record.metadata.density_g_cm3, Some(2.33));

        let record = parse_content("# Gold (Au) Density: 19.3 g/cm3 Z = 79\n");
        assert_eq!(record.metadata.atomic_number, Some(79));
        assert_eq!(record.metadata.density_g_cm3, None);
        assert_eq!(record.metadata.material, "");
    }

    #[test]
    fn test_unparsable_marker_line_does_not_set_material() {
        let content = "\
# Z = unknown (n/a)
# Density: ? g/cm3 (n/a)
# Quartz (SiO2)
# Z = 14
";
        let record = parse_content(content);
        assert_eq!(record.metadata.material, "SiO2");
        assert_eq!(record.metadata.atomic_number, Some(14));
        assert_eq!(record.metadata.density_g_cm3, None);
    }

    #[test]
    fn test_material_waits_for_well_ordered_parens() {
        let record = parse_content("# a) b (c)\n# Silicon (Si)\n");
        assert_eq!(record.metadata.material, "Si");
    }

    #[test]
    fn test_non_finite_rows_are_dropped() {
        let record = parse_content("1.0 2.0 3.0\nnan 2.0 3.0\n4.0 inf 6.0\n");
        assert_eq!(record.energy_kev(), &[1.0]);
    }

    #[test]
    fn test_missing_metadata_defaults() {
        let record = parse_content("1.0 2.0 3.0\n");
        assert_eq!(record.metadata.material, "");
        assert_eq!(record.metadata.atomic_number, None);
        assert_eq!(record.metadata.density_g_cm3, None);
        assert_eq!(record.metadata.description, "X-ray optical constants for ");
    }

    #[test]
    fn test_malformed_rows_are_dropped() {
        let content = "\
   # indented comment (Si)
1.0 2.0 3.0

abc 0.5 0.2
4.0 5.0
  7.0   8.0   9.0  trailing
";
        let record = parse_content(content);
        assert_eq!(record.energy_kev(), &[1.0, 7.0]);
        assert_eq!(record.f1(), &[2.0, 8.0]);
        assert_eq!(record.f2(), &[3.0, 9.0]);
        assert_eq!(record.metadata.material, "Si");
    }
}
