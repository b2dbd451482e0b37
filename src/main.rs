// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

use talentai_search::{
    EngineConfig, FieldValue, FilterValue, Record, SearchEngine, SearchOptions, SearchResult,
    SortOrder,
};

mod cli;
use cli::{Cli, Commands, Entity, Order};

/// Data file layout: one collection per entity type, any of them optional.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct DataFile {
    users: Vec<Record>,
    jobs: Vec<Record>,
    applications: Vec<Record>,
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            data,
            entity,
            query,
            filters,
            sort_by,
            order,
            limit,
            offset,
            config,
            json,
        } => run_search(
            &data, entity, query, &filters, sort_by, order, limit, offset, config, json,
        ),
        Commands::Fields { data, entity } => run_fields(&data, entity),
    };

    if let Err(e) = outcome {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_search(
    data_path: &str,
    entity: Entity,
    query: Option<String>,
    raw_filters: &[String],
    sort_by: Option<String>,
    order: Order,
    limit: Option<usize>,
    offset: usize,
    config_path: Option<String>,
    json: bool,
) -> Result<(), String> {
    let data = load_data(data_path)?;
    let engine_config = match config_path {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .map_err(|e| format!("cannot read config {}: {}", path, e))?;
            let config: EngineConfig = serde_json::from_str(&raw)
                .map_err(|e| format!("invalid config {}: {}", path, e))?;
            config
        }
        None => EngineConfig::default(),
    };

    let mut engine =
        SearchEngine::with_config(engine_config).map_err(|e| format!("invalid config: {}", e))?;
    engine.update_data(data.users, data.jobs, data.applications);

    let options = SearchOptions {
        query,
        filters: parse_filters(raw_filters)?,
        sort_by,
        sort_order: match order {
            Order::Asc => SortOrder::Asc,
            Order::Desc => SortOrder::Desc,
        },
        limit,
        offset,
    };

    let result = match entity {
        Entity::Users => engine.search_users(&options),
        Entity::Jobs => engine.search_jobs(&options),
        Entity::Applications => engine.search_applications(&options),
    };

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("cannot serialize result: {}", e))?;
        println!("{}", out);
    } else {
        print_result_table(&result, offset);
    }
    Ok(())
}

fn run_fields(data_path: &str, entity: Entity) -> Result<(), String> {
    let data = load_data(data_path)?;
    let records = match entity {
        Entity::Users => &data.users,
        Entity::Jobs => &data.jobs,
        Entity::Applications => &data.applications,
    };

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        collect_field_paths(record, "", &mut counts);
    }

    println!("{} records, {} distinct fields", records.len(), counts.len());
    for (path, count) in counts {
        println!("  {:<32} {}", path, count);
    }
    Ok(())
}

fn load_data(path: &str) -> Result<DataFile, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
    serde_json::from_str(&raw).map_err(|e| format!("invalid data file {}: {}", path, e))
}

/// Parse `field=value` pairs. A value containing `|` becomes a multi-select;
/// an empty value is kept as the blank no-op filter.
fn parse_filters(raw: &[String]) -> Result<BTreeMap<String, FilterValue>, String> {
    let mut filters = BTreeMap::new();
    for entry in raw {
        let (field, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("filter '{}' is not field=value", entry))?;
        let filter = if value.contains('|') {
            FilterValue::AnyOf(value.split('|').map(str::to_string).collect())
        } else {
            FilterValue::Str(value.to_string())
        };
        filters.insert(field.to_string(), filter);
    }
    Ok(filters)
}

/// Collect dot-paths of every field, recursing into nested records.
fn collect_field_paths(record: &Record, prefix: &str, counts: &mut BTreeMap<String, usize>) {
    for (field, value) in record.fields() {
        let path = if prefix.is_empty() {
            field.clone()
        } else {
            format!("{}.{}", prefix, field)
        };
        match value {
            FieldValue::Record(nested) => collect_field_paths(nested, &path, counts),
            _ => *counts.entry(path).or_insert(0) += 1,
        }
    }
}

fn print_result_table(result: &SearchResult<Record>, offset: usize) {
    let color = atty::is(atty::Stream::Stdout);
    let (bold, dim, reset) = if color {
        ("\x1b[1m", "\x1b[2m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    println!(
        "{}{} of {} record(s){}{}",
        bold,
        result.items.len(),
        result.total,
        reset,
        if result.has_more { "  (more pages)" } else { "" }
    );

    for (i, record) in result.items.iter().enumerate() {
        println!("{}#{}{}", dim, offset + i + 1, reset);
        for (field, value) in record.fields() {
            println!("  {:<20} {}", field, render_value(value));
        }
    }
}

fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => "-".to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Number(n) => {
            if n.fract() == 0.0 {
                format!("{}", *n as i64)
            } else {
                n.to_string()
            }
        }
        FieldValue::Str(s) => s.clone(),
        FieldValue::List(items) => items.join(", "),
        FieldValue::Record(nested) => {
            let inner: Vec<String> = nested
                .fields()
                .map(|(k, v)| format!("{}: {}", k, render_value(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}
