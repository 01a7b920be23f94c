pub mod error;
pub mod list;
pub mod model;
pub mod storage;
