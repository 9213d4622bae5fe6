use serde::{Deserialize, Serialize};

/// One employee's leave/courses data for a single year.
///
/// Identity is the pair `(employee_id, year)`; the store keeps at most one
/// row per pair. Field names on the wire follow the dashboard's casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeYearRecord {
    #[serde(rename = "Employee_Id")]
    pub employee_id: i64,
    #[serde(rename = "Employee_Name")]
    pub employee_name: String,
    #[serde(rename = "Leave_Taken")]
    pub leave_taken: u32,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Courses_Completed")]
    pub courses_completed: u32,
}

impl EmployeeYearRecord {
    pub fn new(
        employee_id: i64,
        year: i32,
        employee_name: impl Into<String>,
        leave_taken: u32,
        courses_completed: u32,
    ) -> Self {
        Self {
            employee_id,
            employee_name: employee_name.into(),
            leave_taken,
            year,
            courses_completed,
        }
    }
}

/// Per-field instruction of a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    SetTo(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, FieldUpdate::SetTo(_))
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            FieldUpdate::SetTo(v) => Some(v),
            FieldUpdate::Unchanged => None,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldUpdate::Unchanged, FieldUpdate::SetTo)
    }
}

/// Partial update of a year-record. Only `SetTo` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub employee_name: FieldUpdate<String>,
    pub leave_taken: FieldUpdate<u32>,
    pub courses_completed: FieldUpdate<u32>,
}

impl RecordUpdate {
    pub fn is_empty(&self) -> bool {
        !self.employee_name.is_set()
            && !self.leave_taken.is_set()
            && !self.courses_completed.is_set()
    }
}
