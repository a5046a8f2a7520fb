//! 광학 상수 레코드 모듈
//!
//! 원시 파일 하나에서 읽어 들인 에너지/f1/f2 열과 메타데이터를 담습니다.
//! 필드 순서는 JSON 출력의 키 순서와 동일합니다.

use serde::Serialize;

/// 데이터 출처 (고정 문자열)
pub const NIST_SOURCE: &str = "NIST X-ray Form Factor, Attenuation and Scattering Tables";

/// 열 이름과 설명
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptions {
    #[serde(rename = "energy_keV")]
    pub energy_kev: &'static str,
    pub f1: &'static str,
    pub f2: &'static str,
}

impl Default for ColumnDescriptions {
    fn default() -> Self {
        Self {
            energy_kev: "Photon energy in keV",
            f1: "Real part of atomic scattering factor",
            f2: "Imaginary part of atomic scattering factor",
        }
    }
}

/// 주석 헤더에서 추출한 메타데이터
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    /// 물질 이름 (찾지 못하면 빈 문자열)
    pub material: String,
    pub source: &'static str,
    /// 원자 번호 (없으면 null)
    pub atomic_number: Option<i64>,
    /// 밀도 g/cm3 (없으면 null)
    pub density_g_cm3: Option<f64>,
    pub description: String,
    pub columns: ColumnDescriptions,
}

impl Metadata {
    /// 추출된 값으로 메타데이터 생성
    ///
    /// `description`은 물질 이름에서 파생됩니다.
    pub fn new(material: String, atomic_number: Option<i64>, density_g_cm3: Option<f64>) -> Self {
        let description = format!("X-ray optical constants for {}", material);
        Self {
            material,
            source: NIST_SOURCE,
            atomic_number,
            density_g_cm3,
            description,
            columns: ColumnDescriptions::default(),
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new(String::new(), None, None)
    }
}

/// 원시 파일 하나에 대응하는 레코드
///
/// 세 열은 항상 같은 길이를 유지합니다. 행 추가는 [`OpticalConstants::push_row`]로만 합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpticalConstants {
    #[serde(rename = "energy_keV")]
    energy_kev: Vec<f64>,
    f1: Vec<f64>,
    f2: Vec<f64>,
    pub metadata: Metadata,
}

impl OpticalConstants {
    /// 빈 레코드 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 한 행 추가
    pub fn push_row(&mut self, energy_kev: f64, f1: f64, f2: f64) {
        self.energy_kev.push(energy_kev);
        self.f1.push(f1);
        self.f2.push(f2);
    }

    pub fn energy_kev(&self) -> &[f64] {
        &self.energy_kev
    }

    pub fn f1(&self) -> &[f64] {
        &self.f1
    }

    pub fn f2(&self) -> &[f64] {
        &self.f2
    }

    /// 행 수
    pub fn len(&self) -> usize {
        self.energy_kev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy_kev.is_empty()
    }

    /// 파일 순서대로 (energy, f1, f2) 행을 순회
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.energy_kev
            .iter()
            .zip(&self.f1)
            .zip(&self.f2)
            .map(|((&e, &f1), &f2)| (e, f1, f2))
    }
}
