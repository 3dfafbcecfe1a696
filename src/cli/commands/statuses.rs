//! Statuses command - List the fixed status set

use serde_json::json;

use crate::domain::allowed_targets;
use crate::errors::{CaseflowError, Result};
use crate::schemas::Status;

pub async fn run(json: bool) -> Result<()> {
    if json {
        let list: Vec<_> = Status::ALL
            .iter()
            .map(|status| {
                json!({
                    "status": status,
                    "label": status.label(),
                    "description": status.description(),
                    "next": allowed_targets(*status),
                })
            })
            .collect();
        let out = serde_json::to_string_pretty(&list)
            .map_err(|e| CaseflowError::wrap(e, "failed to serialize statuses"))?;
        println!("{}", out);
        return Ok(());
    }

    for status in Status::ALL {
        let next: Vec<&str> = allowed_targets(status).iter().map(|s| s.as_str()).collect();
        println!("{:<24} {:<24} {}", status.as_str(), status.label(), status.description());
        if !next.is_empty() {
            println!("{:<24} -> {}", "", next.join(", "));
        }
    }
    Ok(())
}
