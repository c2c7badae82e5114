use anyhow::Result;
use std::path::PathBuf;

use codemap_core::index::MapStorage;
use codemap_core::{conventions, summary};

use crate::cli::app::SummaryArgs;

pub async fn execute(args: SummaryArgs) -> Result<()> {
    let root = args.path.unwrap_or_else(|| PathBuf::from("."));

    let storage = MapStorage::new(&root);
    let index = storage.load_index().await;
    let record = conventions::detect(&index);

    print!("{}", summary::render(&index, &record));
    Ok(())
}
