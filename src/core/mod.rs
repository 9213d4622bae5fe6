pub mod add;
pub mod del;
pub mod list;
pub mod update;
