use super::load_settings;
use anyhow::anyhow;
use colored::Colorize;
use stylecfg_config::Settings;
use stylecfg_logger as logger;

pub fn get(key: &str) -> anyhow::Result<()> {
    if !Settings::keys().iter().any(|k| *k == key) {
        return Err(anyhow!(
            "unknown setting '{}', expected one of: {}",
            key,
            Settings::keys().join(", ")
        ));
    }
    let settings = load_settings()?;
    match settings.get(key) {
        Some(value) => println!("{}", value),
        None => println!("{}", "(unset)".dimmed()),
    }
    Ok(())
}

pub fn set(key: &str, value: String) -> anyhow::Result<()> {
    let mut settings = load_settings()?;
    settings.set(key, value).map_err(|e| anyhow!("{}", e))?;
    settings
        .save()
        .map_err(|e| anyhow!("Failed to save settings: {}", e))?;
    logger::success(&format!("Set {}", key));
    Ok(())
}

pub fn list() -> anyhow::Result<()> {
    let settings = load_settings()?;
    if settings.is_empty() {
        println!("No settings configured.");
        return Ok(());
    }
    for (key, value) in settings.values_iter() {
        println!("{} = {}", key.cyan(), value);
    }
    Ok(())
}

pub fn path() -> anyhow::Result<()> {
    println!("{}", Settings::path().display());
    Ok(())
}

pub fn reset(yes: bool) -> anyhow::Result<()> {
    if !yes {
        println!("To actually reset, run with --yes flag.");
        return Ok(());
    }
    Settings::reset().map_err(|e| anyhow!("Failed to reset settings: {}", e))?;
    logger::success("Settings reset");
    Ok(())
}
