//! Cache maintenance commands

use crate::{CacheCommand, CacheFilterArgs};
use anyhow::{Context, Result};
use gamut_cache::{AnyStore, DocumentStore, GamutConfig, RecordQuery};
use tracing::info;

fn query(filter: &CacheFilterArgs) -> RecordQuery {
    RecordQuery {
        kind: filter.kind.map(Into::into),
        fidelity: filter.fidelity,
        ..RecordQuery::all()
    }
}

pub async fn run(cmd: CacheCommand, config: GamutConfig) -> Result<()> {
    let store = AnyStore::from_config(&config.store).await.context("Failed to open store")?;
    match cmd {
        CacheCommand::Count(filter) => {
            let n = store.count(&query(&filter)).await?;
            println!("{n}");
        }
        CacheCommand::Clear(filter) => {
            let n = store.delete_many(&query(&filter)).await?;
            info!(removed = n, "Cache cleared");
            println!("removed {n} records");
        }
    }
    Ok(())
}
