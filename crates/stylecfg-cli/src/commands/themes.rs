use super::{load_settings, resolve_valid_document};
use crate::GlobalOpts;
use anyhow::anyhow;
use colored::Colorize;
use std::path::Path;
use stylecfg::Loader;
use stylecfg_logger as logger;

pub fn run(path: Option<&Path>, plugin: Option<&str>, _opts: &GlobalOpts) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let doc = resolve_valid_document(path, &settings, &Loader::from_settings(&settings))?;

    if let Some(plugin) = plugin {
        let themes = doc
            .themes(plugin)
            .ok_or_else(|| anyhow!("Plugin '{}' declares no themes", plugin))?;
        for theme in themes {
            println!("{}", theme);
        }
        return Ok(());
    }

    let all = doc.all_themes();
    if all.is_empty() {
        logger::warn("No plugin declares a theme list.");
        return Ok(());
    }

    for (plugin, themes) in all {
        println!("{} {}", plugin.cyan(), format!("({})", themes.len()).dimmed());
        for theme in themes {
            println!("  {}", theme);
        }
    }
    Ok(())
}
