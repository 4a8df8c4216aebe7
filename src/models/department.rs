use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Inbound payload for create and full replace. Every field overwrites the
/// stored record; an omitted description is written back as NULL.
#[derive(Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentData {
    // Accepted and discarded: the path parameter (or storage) decides the id.
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
