pub mod types;

pub use types::{AppError, AppResult, AppResultExt, ErrorKind, Resource};
