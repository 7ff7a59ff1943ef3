//! Exit code constants for the fancy-writer CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable program, caller failure)
//! - 2: Unresolved operation
//! - 3: I/O failure while writing output

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed program file, or a failing caller operation.
pub const USER_ERROR: i32 = 1;

/// A program invoked a name that nothing could resolve.
pub const UNRESOLVED_OPERATION: i32 = 2;

/// The output sink could not be written.
pub const IO_FAILURE: i32 = 3;
