pub mod session;
pub mod task;

pub use session::{SessionExport, SessionRecord};
pub use task::Task;
