use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One `{id, order}` pair from a bulk reorder request.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderUpdate {
    pub id: Uuid,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

/// Outcome for a single item of a bulk operation. Updates are applied
/// independently, so one failing item never rolls back the others.
#[derive(Debug, Serialize)]
pub struct ReorderOutcome {
    pub id: Uuid,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReorderReport {
    pub applied: usize,
    pub failed: usize,
    pub results: Vec<ReorderOutcome>,
}

impl ReorderReport {
    pub fn from_outcomes(results: Vec<ReorderOutcome>) -> Self {
        let applied = results.iter().filter(|r| r.ok).count();
        ReorderReport {
            applied,
            failed: results.len() - applied,
            results,
        }
    }
}
