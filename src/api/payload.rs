//! Wire shape of the partial update body.

use crate::errors::{AppError, AppResult};
use crate::models::record::RecordUpdate;
use serde::Deserialize;

/// Body of `PUT /employee/{id}/year/{year}`.
///
/// A missing key and an explicit `null` both mean "leave unchanged".
/// Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePayload {
    #[serde(rename = "Employee_Name", alias = "employee_name", default)]
    pub employee_name: Option<String>,
    #[serde(rename = "Leave_Taken", alias = "leave_taken", default)]
    pub leave_taken: Option<i64>,
    #[serde(rename = "Courses_Completed", alias = "courses_completed", default)]
    pub courses_completed: Option<i64>,
}

impl UpdatePayload {
    pub fn into_update(self) -> AppResult<RecordUpdate> {
        Ok(RecordUpdate {
            employee_name: self.employee_name.into(),
            leave_taken: counter("Leave_Taken", self.leave_taken)?.into(),
            courses_completed: counter("Courses_Completed", self.courses_completed)?.into(),
        })
    }
}

fn counter(field: &str, value: Option<i64>) -> AppResult<Option<u32>> {
    value
        .map(|v| {
            u32::try_from(v).map_err(|_| {
                if v < 0 {
                    AppError::BadRequest(format!(
                        "{field} must be a non-negative integer, got {v}."
                    ))
                } else {
                    AppError::BadRequest(format!(
                        "{field} is out of range: {v} exceeds the maximum of {}.",
                        u32::MAX
                    ))
                }
            })
        })
        .transpose()
}
