use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    pub department_id: i64,
}

/// Inbound payload for create and full replace. Every field overwrites the
/// stored record; this is not a partial merge.
#[derive(Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeData {
    // Accepted and discarded: the path parameter (or storage) decides the id.
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub surname: String,
    #[validate(email)]
    pub email: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    pub department_id: i64,
}
