//! Basic Usage Example
//!
//! Walks through the owner → project → collection → record lifecycle using
//! in-memory storage: schema validation on create and update, full
//! replacement on update, and the collection quota.

use mocknode_core::schema::FieldSchema;
use mocknode_core::storage::InMemoryStorage;
use mocknode_core::{
    CollectionRegistry, CoreConfig, CoreError, ProjectRegistry, RecordData, RecordStore,
    UserDirectory,
};
use serde_json::{Value, json};

fn record_data(value: Value) -> RecordData {
    match value {
        Value::Object(map) => map,
        _ => RecordData::new(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Starting Basic Usage Example");

    // One store handle shared by every registry
    let storage = InMemoryStorage::new();
    let config = CoreConfig::default();

    let users = UserDirectory::new(storage.clone());
    let projects = ProjectRegistry::new(storage.clone(), config.clone());
    let collections = CollectionRegistry::new(storage.clone(), config);
    let records = RecordStore::new(storage.clone());

    println!("✅ Registries initialized with in-memory storage");

    let owner = users.create("Jane Doe", "jane@example.com").await?;
    let owner_id = owner.id.to_string();
    let project = projects
        .create(&owner_id, "Issue tracker", "Mock backend for the tracker UI")
        .await?;
    let project_id = project.id.to_string();
    println!("✅ Created project '{}' (ID: {})", project.name, project.id);

    println!("\n📝 Defining the 'issues' collection...");
    let fields = vec![
        FieldSchema::new("title", "string")
            .required()
            .with_length(Some(3), Some(120)),
        FieldSchema::new("status", "enum")
            .required()
            .with_enum_values(["open", "in_progress", "closed"]),
        FieldSchema::new("reporter", "email"),
        FieldSchema::new("priority", "number").with_range(Some(1.0), Some(5.0)),
        FieldSchema::new("labels", "array"),
    ];
    let issues = collections.create(&project_id, "issues", fields).await?;
    let issues_id = issues.id.to_string();
    println!(
        "✅ Created collection '{}' with {} fields",
        issues.name,
        issues.fields.len()
    );

    println!("\n📝 Creating records...");
    let first = records
        .create(
            &issues_id,
            record_data(json!({
                "title": "Login button misaligned",
                "status": "open",
                "reporter": "qa@example.com",
                "priority": 2,
                "labels": ["ui"],
                "browser": "firefox"
            })),
        )
        .await?;
    println!("✅ Created record {} (version {})", first.id, first.version());
    println!("   Undeclared 'browser' kept: {:?}", first.get("browser"));

    match records
        .create(
            &issues_id,
            record_data(json!({"title": "Crash on save", "status": "pending"})),
        )
        .await
    {
        Ok(_) => println!("❌ Invalid record accepted (unexpected)"),
        Err(e) => println!("✅ Invalid record rejected: {}", e),
    }

    println!("\n🔄 Replacing record data...");
    let updated = records
        .update(
            &first.id.to_string(),
            record_data(json!({"title": "Login button misaligned", "status": "closed"})),
        )
        .await?;
    println!("✅ Updated record data: {}", Value::Object(updated.data.clone()));

    match records
        .update_if_match(
            &first.id.to_string(),
            record_data(json!({"title": "Stale write", "status": "open"})),
            &first.version(),
        )
        .await
    {
        Err(CoreError::VersionMismatch { expected, current }) => {
            println!("✅ Stale write rejected: expected {}, current {}", expected, current)
        }
        other => println!("❌ Unexpected result: {:?}", other),
    }

    println!("\n📊 Exercising the collection quota...");
    for name in ["comments", "milestones"] {
        collections.create(&project_id, name, vec![]).await?;
        println!("✅ Created collection '{}'", name);
    }
    match collections.create(&project_id, "attachments", vec![]).await {
        Err(e @ CoreError::QuotaExceeded { .. }) => println!("✅ Fourth collection refused: {}", e),
        other => println!("❌ Unexpected result: {:?}", other),
    }

    users.set_upgraded(&owner_id, true).await?;
    collections.create(&project_id, "attachments", vec![]).await?;
    println!("✅ Upgraded owner created a fourth collection");

    let listed = records.list_by_collection(&issues_id).await?;
    println!("\n📋 {} record(s) in '{}'", listed.len(), issues.name);

    let stats = storage.stats().await;
    println!(
        "📋 Store: {} users, {} projects, {} collections, {} records",
        stats.users, stats.projects, stats.collections, stats.records
    );

    println!("\n🎉 Basic usage example completed!");
    Ok(())
}
