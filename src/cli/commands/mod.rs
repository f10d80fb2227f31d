pub mod check;
pub mod clean;
mod command_result;
pub mod export;
pub mod helper;
pub mod init;
pub mod lookup;
pub mod stats;
pub mod sync;

pub use command_result::*;
