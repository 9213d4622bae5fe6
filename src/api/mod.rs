//! HTTP surface of the record store.
//!
//! - `GET    /employee_ids`
//! - `GET    /employee/{employee_id}`
//! - `DELETE /employee/{employee_id}` (also `/employee_delete/{employee_id}`)
//! - `PUT    /employee/{employee_id}/year/{year}`
//! - `GET    /health`

pub mod payload;
pub mod routes;
pub mod server;

pub use routes::ApiState;
pub use server::HttpServer;
