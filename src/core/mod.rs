pub mod session;

pub use crate::domain::model::{SideLabel, Sides, Verdict};
pub use crate::domain::ports::{InputPolicy, SideSource};
pub use crate::utils::error::Result;
