//! 통계 및 유틸리티 모듈
//!
//! 변환 결과 집계와 요약 출력을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

/// 변환 통계 구조체
#[derive(Debug)]
pub struct Statistics {
    /// 대상 물질 수
    pub total_materials: usize,
    /// 변환 완료 수
    pub converted: usize,
    /// 원시 파일 누락 수
    pub missing: usize,
    /// 저장된 데이터 행 합계
    pub rows: usize,
    /// 쓴 총 바이트 (JSON + CSV)
    pub bytes_written: u64,
    start_time: Instant,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_materials: usize) -> Self {
        Self {
            total_materials,
            converted: 0,
            missing: 0,
            rows: 0,
            bytes_written: 0,
            start_time: Instant::now(),
        }
    }

    /// 변환 성공 기록
    pub fn record_converted(&mut self, rows: usize, bytes_written: u64) {
        self.converted += 1;
        self.rows += rows;
        self.bytes_written += bytes_written;
    }

    /// 누락 기록
    pub fn record_missing(&mut self) {
        self.missing += 1;
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 변환 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 변환 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 대상 물질:    {}",
            "📁".bright_cyan(),
            self.total_materials
        );
        println!(
            "  {} 변환:         {}",
            "✅".bright_green(),
            self.converted.to_string().green()
        );

        if self.missing > 0 {
            println!(
                "  {} 누락:         {}",
                "⚠️".bright_yellow(),
                self.missing.to_string().yellow()
            );
        } else {
            println!("  {} 누락:         {}", "✅".bright_green(), "0".green());
        }

        println!("  {} 데이터 행:    {}", "📈".bright_white(), self.rows);
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );
        println!(
            "  {} 처리 시간:    {:.2}초",
            "⏱️".bright_cyan(),
            self.elapsed().as_secs_f64()
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use nistconv::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
