//! CLI command handlers. Each command is in its own file.

mod batch;
mod missing;
mod validate;

pub use batch::run_batch;
pub use missing::run_missing;
pub use validate::run_validate;
