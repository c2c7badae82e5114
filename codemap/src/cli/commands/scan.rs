use anyhow::Result;
use std::path::PathBuf;

use crate::cli::app::ScanArgs;

pub async fn execute(args: ScanArgs) -> Result<()> {
    let root = args.path.unwrap_or_else(|| PathBuf::from("."));
    let indexed = codemap_core::scanner::scan(&root).await?;
    println!("Indexed {} source files under {}", indexed, root.display());
    Ok(())
}
