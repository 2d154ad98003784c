pub mod engine;
pub mod pipeline;
pub mod range;

pub use crate::domain::model::{GridResult, GridRow};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
