use super::{load_settings, resolve_valid_document};
use crate::GlobalOpts;
use std::path::Path;
use stylecfg::{DocumentFormat, Loader};
use stylecfg_logger as logger;

pub fn run(path: Option<&Path>, format: Option<&str>, _opts: &GlobalOpts) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let format: DocumentFormat = format.unwrap_or(settings.output_format()).parse()?;

    let doc = resolve_valid_document(path, &settings, &Loader::from_settings(&settings))?;
    logger::debug(&format!("Rendering projection as {}", format));

    print!("{}", doc.to_external_format().render(format)?);
    Ok(())
}
