mod plan;
mod refresh;

pub use plan::cmd_plan;
pub use refresh::cmd_refresh;
