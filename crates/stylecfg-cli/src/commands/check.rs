use super::{load_settings, resolve_document};
use crate::GlobalOpts;
use anyhow::bail;
use colored::Colorize;
use std::path::Path;
use stylecfg::{lint, validate_all, Loader, ReportMode, UnknownKeyPolicy};
use stylecfg_logger as logger;

pub fn run(
    path: Option<&Path>,
    all: bool,
    reject_unknown: bool,
    _opts: &GlobalOpts,
) -> anyhow::Result<()> {
    let settings = load_settings()?;

    let loader = if reject_unknown {
        Loader::with_policy(UnknownKeyPolicy::Reject)
    } else {
        Loader::from_settings(&settings)
    };
    let report = if all {
        ReportMode::All
    } else {
        settings.report_mode()
    };
    logger::debug(&format!(
        "Checking with unknown-keys={}, report={}",
        loader.policy(),
        report
    ));

    let doc = resolve_document(path, &settings, &loader)?;
    logger::step(&format!(
        "Checking {}",
        path.map(|p| p.display().to_string())
            .unwrap_or_else(|| "configured document".to_string())
    ));

    for warning in lint(&doc) {
        logger::warn(&warning.to_string());
    }

    let errors = validate_all(&doc);
    if errors.is_empty() {
        logger::success(&format!(
            "{} content glob(s), {} plugin(s), {} theme list(s)",
            doc.content_globs().len(),
            doc.plugins().len(),
            doc.all_themes().len()
        ));
        return Ok(());
    }

    match report {
        ReportMode::First => bail!("{}", errors[0]),
        ReportMode::All => {
            for err in &errors {
                eprintln!("  {} {}", "-".red(), err);
            }
            bail!("{} validation problem(s)", errors.len())
        }
    }
}
