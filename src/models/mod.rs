pub mod record;

pub use record::{EmployeeYearRecord, FieldUpdate, RecordUpdate};
