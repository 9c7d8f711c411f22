use crate::descriptor::{Assembled, ClassDescriptor};
use anyhow::{Context, Result};
use immutagen_java::Clazz;
use immutagen_runtime::GeneratorConfig;
use std::path::{Path, PathBuf};

pub fn load_descriptor(path: &Path) -> Result<ClassDescriptor> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading descriptor {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing descriptor {}", path.display()))
}

/// Build the class described at `path`, logging every annotation that
/// requalification dropped.
pub fn assemble(path: &Path, config: &GeneratorConfig) -> Result<Clazz> {
    let descriptor = load_descriptor(path)?;
    let Assembled { clazz, dropped } = descriptor.assemble(config.requalify_annotations)?;
    for entry in &dropped {
        tracing::warn!(
            "Dropped unresolved annotation {} on {} of {}: no matching import",
            entry.annotation.ty(),
            entry.site,
            clazz.name()
        );
    }
    tracing::debug!(
        "Imports of {}: {:?}",
        clazz.name(),
        clazz
            .imports()
            .iter()
            .map(|i| i.ty().to_string())
            .collect::<Vec<_>>()
    );
    Ok(clazz)
}

/// `<out_dir>/<package segments>/<Name>.java`
pub fn output_path(out_dir: &Path, clazz: &Clazz) -> PathBuf {
    let mut path = out_dir.to_path_buf();
    for segment in clazz.package().segments() {
        path.push(segment);
    }
    path.push(format!("{}.java", clazz.name()));
    path
}

/// Render `clazz` into `out_dir`, returning the written path.
pub fn write_source(out_dir: &Path, clazz: &Clazz) -> Result<PathBuf> {
    let path = output_path(out_dir, clazz);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&path, clazz.to_string())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn run(descriptor: &Path, config: &GeneratorConfig) -> Result<()> {
    let clazz = assemble(descriptor, config)?;
    match &config.output_dir {
        Some(out_dir) => {
            let path = write_source(out_dir, &clazz)?;
            tracing::info!("Rendered {} to {}", clazz.name(), path.display());
            println!("{}", path.display());
        }
        None => {
            tracing::info!("Rendered {} to stdout", clazz.name());
            print!("{}", clazz);
        }
    }
    Ok(())
}
