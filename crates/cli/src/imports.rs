use crate::render;
use anyhow::Result;
use immutagen_runtime::GeneratorConfig;
use std::path::Path;

pub fn run(descriptor: &Path, config: &GeneratorConfig) -> Result<()> {
    let clazz = render::assemble(descriptor, config)?;
    print!("{}", clazz.imports());
    Ok(())
}
