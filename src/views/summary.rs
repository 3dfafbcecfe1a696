//! Status counts and roll-up totals

use serde::Serialize;

use crate::domain::is_terminal;
use crate::schemas::{Status, WorkItem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total: usize,
    /// Not yet closed
    pub pipeline: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// One entry per status, in canonical order, zeros included
    pub counts: Vec<StatusCount>,
    pub totals: Totals,
}

pub fn summary(items: &[WorkItem]) -> Summary {
    let counts = Status::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            label: status.label(),
            count: items.iter().filter(|item| item.status == status).count(),
        })
        .collect();

    let completed = items.iter().filter(|item| is_terminal(item.status)).count();
    Summary {
        counts,
        totals: Totals {
            total: items.len(),
            pipeline: items.len() - completed,
            completed,
        },
    }
}
