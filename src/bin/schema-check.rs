//! # Schema Check
//!
//! A command-line utility for validating record data against a collection's
//! field list, using the same validator the record store runs on every write.
//!
//! ## Usage
//!
//! ### Validate Records Against a Field List
//!
//! ```bash
//! cargo run --bin schema-check fields.json record.json
//! cargo run --bin schema-check fields.json ./records/
//! ```
//!
//! `fields.json` holds a JSON array of field definitions. A record file holds
//! either one JSON object or an array of them. A directory is scanned for
//! `*.json` files.
//!
//! ### List Supported Field Types
//!
//! ```bash
//! cargo run --bin schema-check --types
//! ```
//!
//! ### Print Preset Mock Data
//!
//! ```bash
//! cargo run --bin schema-check --presets users
//! cargo run --bin schema-check --presets users 2
//! ```
//!
//! ## Output Examples
//!
//! ```text
//! Field list: fields.json (3 fields)
//!   - title: string (required)
//!   - status: enum
//!   - location: geo (unknown type, not checked)
//!
//! record.json
//!   ✓ Valid
//! ```
//!
//! ```text
//! record.json
//!   ❌ field 'status' has invalid value 'pending', must be one of ["open", "closed"]
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Every record is valid
//! - `1`: One or more records are invalid, an input could not be read, or a
//!   preset category or id is unknown

use mocknode_core::schema::{
    CompiledSchema, FieldSchema, FieldType, SchemaValidator, field_type_catalog, preset,
    preset_categories, presets,
};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 2 && args[1] == "--types" {
        print_catalog();
        return;
    }

    if (args.len() == 3 || args.len() == 4) && args[1] == "--presets" {
        if let Err(e) = print_presets(&args[2], args.get(3).map(String::as_str)) {
            eprintln!("❌ {}", e);
            eprintln!(
                "Categories: {}",
                preset_categories().collect::<Vec<_>>().join(", ")
            );
            process::exit(1);
        }
        return;
    }

    if args.len() < 3 {
        eprintln!("Usage: {} <fields.json> <record-file-or-directory>", args[0]);
        eprintln!("       {} --types", args[0]);
        eprintln!("       {} --presets <category> [id]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} fields.json record.json", args[0]);
        eprintln!("  {} fields.json ./records/", args[0]);
        process::exit(1);
    }

    let fields_path = Path::new(&args[1]);
    let fields = match load_fields(fields_path) {
        Ok(fields) => fields,
        Err(e) => {
            eprintln!("❌ Failed to load field list: {}", e);
            process::exit(1);
        }
    };
    print_field_summary(fields_path, &fields);
    let schema = SchemaValidator::compile(&fields);

    let target = Path::new(&args[2]);
    let files = if target.is_dir() {
        match json_files_in(target) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("Error reading directory: {}", e);
                process::exit(1);
            }
        }
    } else if target.is_file() {
        vec![target.to_path_buf()]
    } else {
        eprintln!(
            "Error: '{}' is not a valid file or directory",
            target.display()
        );
        process::exit(1);
    };

    let mut valid_count = 0;
    let mut error_count = 0;

    for file in &files {
        println!("\n{}", file.display());
        match load_records(file) {
            Ok(records) => {
                for (i, record) in records.iter().enumerate() {
                    let label = if records.len() > 1 {
                        format!("[{}] ", i)
                    } else {
                        String::new()
                    };
                    match check_record(&schema, record) {
                        Ok(()) => {
                            println!("  ✓ {}Valid", label);
                            valid_count += 1;
                        }
                        Err(e) => {
                            eprintln!("  ❌ {}{}", label, e);
                            error_count += 1;
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("  ❌ Unreadable: {}", e);
                error_count += 1;
            }
        }
    }

    if files.len() > 1 || valid_count + error_count > 1 {
        println!("\nValidation Summary:");
        println!("  Valid records: {}", valid_count);
        println!("  Invalid records: {}", error_count);
    }

    if error_count > 0 {
        process::exit(1);
    }
}

fn load_fields(path: &Path) -> Result<Vec<FieldSchema>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let fields: Vec<FieldSchema> = serde_json::from_str(&content)?;
    Ok(fields)
}

fn load_records(path: &Path) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str(&content)? {
        Value::Array(items) => Ok(items),
        single => Ok(vec![single]),
    }
}

fn check_record(schema: &CompiledSchema<'_>, record: &Value) -> Result<(), Box<dyn std::error::Error>> {
    let data = record
        .as_object()
        .ok_or("Record data must be a JSON object")?;
    schema.validate(data)?;
    Ok(())
}

fn json_files_in(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn print_field_summary(path: &Path, fields: &[FieldSchema]) {
    println!("Field list: {} ({} fields)", path.display(), fields.len());
    for field in fields {
        let mut notes = Vec::new();
        if field.required {
            notes.push("required");
        }
        if matches!(field.field_type, FieldType::Unknown(_)) {
            notes.push("unknown type, not checked");
        }
        if notes.is_empty() {
            println!("  - {}: {}", field.name, field.field_type);
        } else {
            println!(
                "  - {}: {} ({})",
                field.name,
                field.field_type,
                notes.join(", ")
            );
        }
    }
}

fn print_catalog() {
    println!("Supported field types:");
    for info in field_type_catalog() {
        println!("  {} ({}): {}", info.field_type, info.label, info.description);
        if !info.options.is_empty() {
            println!("    options: {}", info.options.join(", "));
        }
    }
}

fn print_presets(category: &str, id: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let output = match id {
        Some(id) => serde_json::to_string_pretty(preset(category, id)?)?,
        None => serde_json::to_string_pretty(presets(category)?)?,
    };
    println!("{}", output);
    Ok(())
}
