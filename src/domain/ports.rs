use crate::domain::model::SideLabel;
use crate::utils::error::Result;

/// Where the raw text for each side comes from.
pub trait SideSource {
    /// Next line of input for `label`, or `None` once the source is exhausted.
    fn next_line(&mut self, label: SideLabel) -> Result<Option<String>>;

    /// Interactive sources get a prompt written before every read.
    fn interactive(&self) -> bool;
}

pub trait InputPolicy {
    fn reprompt_on_invalid(&self) -> bool;
    fn max_attempts(&self) -> u32;
}
