//! # Logging Example
//!
//! The registries log through the standard `log` crate, so the host picks the
//! backend. This example wires up `env_logger` and runs a few operations that
//! log at each level: INFO for writes, DEBUG for reads, TRACE for payloads
//! and WARN for rejected writes.

use mocknode_core::schema::FieldSchema;
use mocknode_core::storage::InMemoryStorage;
use mocknode_core::{CollectionRegistry, CoreConfig, ProjectRegistry, RecordStore, UserDirectory};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG overrides the default filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format_timestamp_secs()
        .init();

    // Or configure per module:
    // env_logger::Builder::new()
    //     .filter_level(log::LevelFilter::Info)
    //     .filter_module("mocknode_core::providers::records", log::LevelFilter::Trace)
    //     .init();

    log::info!("🚀 Starting Logging Example");

    // Quota limits can come from MOCKNODE_PROJECT_QUOTA / MOCKNODE_COLLECTION_QUOTA
    let config = CoreConfig::from_env();

    let storage = InMemoryStorage::new();
    let users = UserDirectory::new(storage.clone());
    let projects = ProjectRegistry::new(storage.clone(), config.clone());
    let collections = CollectionRegistry::new(storage.clone(), config);
    let records = RecordStore::new(storage);

    let owner = users.create("Sam Smith", "sam@example.com").await?;
    let project = projects
        .create(&owner.id.to_string(), "Logging demo", "")
        .await?;
    let notes = collections
        .create(
            &project.id.to_string(),
            "notes",
            vec![FieldSchema::new("body", "string").required().with_length(Some(1), None)],
        )
        .await?;
    let notes_id = notes.id.to_string();

    log::info!("📝 Writing a valid record (INFO, TRACE)");
    let note = records
        .create(
            &notes_id,
            json!({"body": "hello"}).as_object().cloned().unwrap_or_default(),
        )
        .await?;

    log::info!("🔍 Reading it back (DEBUG)");
    records.get_by_id(&note.id.to_string()).await?;
    records.list_by_collection(&notes_id).await?;

    log::info!("⚠️ Writing an invalid record (WARN)");
    if let Err(e) = records
        .create(
            &notes_id,
            json!({"body": ""}).as_object().cloned().unwrap_or_default(),
        )
        .await
    {
        log::info!("Rejected as expected: {}", e);
    }

    log::info!("🧹 Cleaning up");
    records.delete(&note.id.to_string()).await?;
    collections.delete(&notes_id).await?;

    log::info!("Environment Variables:");
    log::info!("  RUST_LOG=debug                             # Reads and writes");
    log::info!("  RUST_LOG=mocknode_core=trace               # Include payloads");
    log::info!("  RUST_LOG=mocknode_core::providers=warn     # Rejections only");

    Ok(())
}
