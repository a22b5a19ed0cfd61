//! Board-to-snapshot extraction.
//!
//! Extraction is deliberately forgiving: a page without the expected
//! furniture yields no snapshot, and a task element that fails to parse is
//! skipped without aborting the pass.

use crate::ports::clock::Clock;
use crate::ports::page::{TaskElement, TaskPage};

use super::model::{TaskKind, TaskRecord, TaskSnapshot};

/// Delimiter between the category prefix and the display name.
const NAME_DELIMITER: &str = " - ";

/// Progress line prefixes, per client locale.
const PROGRESS_PREFIXES: [&str; 2] = ["进度:", "Progress:"];

/// Extracts a snapshot from the current page.
///
/// Returns `None` when the board has no task elements or the character-name
/// element is missing. Individual elements that fail to parse are logged and
/// skipped; the rest of the board is still extracted.
#[must_use]
pub fn extract(page: &dyn TaskPage, clock: &dyn Clock) -> Option<TaskSnapshot> {
    let elements = page.task_elements();
    if elements.is_empty() {
        log::debug!("no task elements on the page, skipping pass");
        return None;
    }
    let Some(user_name) = page.character_name() else {
        log::debug!("character-name element missing, skipping pass");
        return None;
    };

    let mut tasks = Vec::with_capacity(elements.len());
    for element in &elements {
        match parse_task(element) {
            Ok(record) => tasks.push(record),
            Err(reason) => log::warn!("skipping task element: {reason}"),
        }
    }

    let total_count = tasks.len();
    Some(TaskSnapshot {
        tasks,
        user_name,
        total_count,
        timestamp: clock.now(),
        location: page.location(),
    })
}

/// Parses one task element into a record.
fn parse_task(element: &TaskElement) -> Result<TaskRecord, String> {
    let full_name = element
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or("name sub-element missing")?
        .to_string();

    let progress = element
        .lines
        .iter()
        .map(|line| line.trim())
        .find(|line| PROGRESS_PREFIXES.iter().any(|prefix| line.starts_with(prefix)))
        .ok_or_else(|| format!("no progress line in {full_name:?}"))?
        .to_string();

    // A recognized prefix splits the label; anything else passes the full
    // label through unchanged as the display name.
    let (kind, name) = match full_name.split_once(NAME_DELIMITER) {
        Some((label, rest)) => match TaskKind::from_label(label) {
            Some(kind) => (kind, rest.to_string()),
            None => (TaskKind::Unknown, full_name.clone()),
        },
        None => (TaskKind::Unknown, full_name.clone()),
    };

    Ok(TaskRecord { kind, name, full_name, progress })
}
