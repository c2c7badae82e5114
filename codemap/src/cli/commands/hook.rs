//! The per-trigger hook entry point
//!
//! Error taxonomy: malformed payloads, unsupported actions or extensions, and
//! unreadable targets are expected no-ops; anything else is a fault. Both are
//! absorbed here so the invoking workflow never sees a failure. The next
//! trigger naturally retries, so nothing is retried in place.

use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};

use codemap_core::update::{TriggerEvent, UpdateOutcome, run_update};

use crate::cli::app::HookArgs;

pub async fn execute(args: HookArgs) {
    let root = args
        .root
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut raw = String::new();
    if std::io::stdin().read_to_string(&mut raw).is_err() {
        debug!("no trigger payload on stdin");
        return;
    }

    let event: TriggerEvent = match serde_json::from_str(&raw) {
        Ok(event) => event,
        Err(err) => {
            debug!("unusable trigger payload: {}", err);
            return;
        }
    };

    match run_update(&root, &event).await {
        Ok(UpdateOutcome::Indexed) => {}
        Ok(UpdateOutcome::Skipped(reason)) => debug!("trigger skipped: {:?}", reason),
        Err(err) => warn!("map update abandoned: {:#}", err),
    }
}
