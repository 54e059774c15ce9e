/// Variable summary command.
pub mod info;
/// Value printing command.
pub mod show;
/// Shared argument and output helpers.
pub mod util;
