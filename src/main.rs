//! nistconv - NIST X-RAY OPTICAL CONSTANTS CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nistconv::{cli::Args, driver};

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args);

    let dir = args.resolve_dir().context("작업 폴더 결정 실패")?;
    let materials = args.get_materials();
    debug!(dir = %dir.display(), ?materials, "starting conversion");

    let stats = driver::run(&dir, &materials)
        .with_context(|| format!("변환 실패: {}", dir.display()))?;

    if !args.quiet {
        stats.print_summary();
    }

    Ok(())
}

/// 로그 설정 (stderr, RUST_LOG 우선)
fn setup_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nistconv={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
