// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "talentai-search",
    about = "Search, filter, sort, and paginate TalentAI record collections",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a search against a JSON data file
    Search {
        /// Data file: {"users": [...], "jobs": [...], "applications": [...]}
        #[arg(short, long)]
        data: String,

        /// Which collection to search
        #[arg(short, long, value_enum)]
        entity: Entity,

        /// Free-text query
        #[arg(short, long)]
        query: Option<String>,

        /// Filter as field=value (repeatable); value "a|b|c" is a multi-select
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Sort key (dot-paths allowed)
        #[arg(long)]
        sort_by: Option<String>,

        /// Sort direction
        #[arg(long, value_enum, default_value_t = Order::Asc)]
        order: Order,

        /// Page size
        #[arg(long)]
        limit: Option<usize>,

        /// Page start
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Weights/threshold overrides (JSON, same shape as EngineConfig)
        #[arg(short, long)]
        config: Option<String>,

        /// Emit the result page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the fields a collection carries, with occurrence counts
    Fields {
        /// Data file: {"users": [...], "jobs": [...], "applications": [...]}
        #[arg(short, long)]
        data: String,

        /// Which collection to inspect
        #[arg(short, long, value_enum)]
        entity: Entity,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Users,
    Jobs,
    Applications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    Asc,
    Desc,
}
