use anyhow::Result;
use draftlock_runtime::Draftlock;
use std::path::PathBuf;

pub fn handle(workspace: &Draftlock, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "draftlock-export-{}.json",
            chrono::Local::now().format("%Y%m%d")
        ))
    });

    let docs = workspace.store().documents();
    let json = serde_json::to_string_pretty(docs)?;
    std::fs::write(&path, json)?;

    println!("Exported {} documents to {}", docs.len(), path.display());
    Ok(())
}
