pub mod backup;
pub mod controller;
pub mod export;
pub mod session_log;
pub mod tasks;
pub mod timer;
