/// Single field read command.
pub mod get;
/// Header summary command.
pub mod info;
/// Single field write command.
pub mod set;
/// Full container report command.
pub mod show;
/// Shared argument and output helpers.
pub mod util;
