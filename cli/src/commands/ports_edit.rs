//! Ports-edit command - open the registry in an editor.

use anyhow::Result;
use netpeek_core::ports::RegistryRepository;
use netpeek_core::{EditorLauncher, RegistryStore};

pub async fn run(registry: &RegistryStore) -> Result<()> {
    let launcher = EditorLauncher::from_env();

    if let Err(e) = launcher.open(registry.location()).await {
        eprintln!("{}", e);
    }

    Ok(())
}
