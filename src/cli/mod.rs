//! CLI module for caseflow
//!
//! Provides the command-line interface using clap.

pub mod commands;

use chrono::{DateTime, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::Timestamp;
use crate::views::{ColumnFilter, TimeRange};

/// Caseflow - Complaint workflow tracker with per-role views and session timing
#[derive(Parser, Debug)]
#[command(name = "caseflow")]
#[command(version)]
#[command(about = "Complaint workflow tracker with per-role views and session timing")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Item data file (defaults to the configured one)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Acting user (defaults to the configured default actor)
    #[arg(long, global = true)]
    pub actor: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind to
        #[arg(long)]
        bind: Option<String>,
    },

    /// List items for a role view
    List {
        /// View: manager, handler or referral
        #[arg(long, default_value = "manager")]
        view: String,

        /// Manager quick filter: all, pipeline or completed
        #[arg(long, default_value = "all")]
        quick: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Sort column (id, title, received, logged, assignee, status, start, end, spent)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details of a specific item
    Show {
        /// Item ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new unallocated item
    Create {
        /// Item ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        /// Item title
        #[arg(long)]
        title: Option<String>,
    },

    /// Allocate an unallocated item to a handler
    Allocate {
        /// Item ID
        id: String,

        /// Handler receiving the item
        handler: String,
    },

    /// Pick up an item as the acting user and start its session
    PickUp {
        /// Item ID
        id: String,
    },

    /// Move an item to another status
    Move {
        /// Item ID
        id: String,

        /// Target status symbol (e.g. ref_to_ph)
        status: String,
    },

    /// Append a comment as the acting user
    Comment {
        /// Item ID
        id: String,

        /// Comment text
        text: String,
    },

    /// Delete an item
    Delete {
        /// Item ID
        id: String,
    },

    /// List all statuses with labels and descriptions
    Statuses {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show status counts and totals
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Column filters for `list`. Text filters are case-insensitive "contains";
/// times accept epoch millis, `YYYY-MM-DD` or RFC 3339.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Item id contains
    #[arg(long)]
    pub id: Option<String>,

    /// Title contains
    #[arg(long)]
    pub title: Option<String>,

    /// Assignee contains
    #[arg(long)]
    pub assignee: Option<String>,

    /// Status label contains
    #[arg(long)]
    pub status: Option<String>,

    /// Any comment text contains
    #[arg(long)]
    pub comments: Option<String>,

    /// Received on or after
    #[arg(long, value_parser = parse_time)]
    pub received_from: Option<Timestamp>,

    /// Received on or before (whole day)
    #[arg(long, value_parser = parse_time)]
    pub received_to: Option<Timestamp>,

    /// Logged on or after
    #[arg(long, value_parser = parse_time)]
    pub logged_from: Option<Timestamp>,

    /// Logged on or before (whole day)
    #[arg(long, value_parser = parse_time)]
    pub logged_to: Option<Timestamp>,

    /// Session started at or after
    #[arg(long, value_parser = parse_time)]
    pub start_from: Option<Timestamp>,

    /// Session started at or before
    #[arg(long, value_parser = parse_time)]
    pub start_to: Option<Timestamp>,

    /// Session ended at or after
    #[arg(long, value_parser = parse_time)]
    pub end_from: Option<Timestamp>,

    /// Session ended at or before
    #[arg(long, value_parser = parse_time)]
    pub end_to: Option<Timestamp>,

    /// Minimum total time spent, in seconds
    #[arg(long)]
    pub time_min_secs: Option<u64>,

    /// Maximum total time spent, in seconds
    #[arg(long)]
    pub time_max_secs: Option<u64>,
}

impl FilterArgs {
    pub fn to_column_filter(&self) -> ColumnFilter {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        ColumnFilter {
            id: text(&self.id),
            title: text(&self.title),
            assignee: text(&self.assignee),
            status: text(&self.status),
            comments: text(&self.comments),
            received: TimeRange {
                from: self.received_from,
                to: self.received_to,
            },
            logged: TimeRange {
                from: self.logged_from,
                to: self.logged_to,
            },
            start: TimeRange {
                from: self.start_from,
                to: self.start_to,
            },
            end: TimeRange {
                from: self.end_from,
                to: self.end_to,
            },
            time_min_secs: self.time_min_secs,
            time_max_secs: self.time_max_secs,
        }
    }
}

fn parse_time(value: &str) -> std::result::Result<Timestamp, String> {
    let value = value.trim();
    if let Ok(millis) = value.parse::<i64>() {
        return Ok(millis);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp_millis());
        }
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| format!("expected epoch millis, YYYY-MM-DD or RFC 3339: {}", value))
}
