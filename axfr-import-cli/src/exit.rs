//! Process exit codes

use axfr_import_core::CoreError;

/// Zone lookup or creation raised an error
pub const ZONE_RESOLUTION_FAILED: u8 = 1;
/// Zone neither found nor created; also clap's usage error code
pub const ZONE_NOT_FOUND: u8 = 2;
/// Change submission or status query failed
pub const CHANGE_FAILED: u8 = 3;
/// Stopped waiting before INSYNC
pub const WAIT_ABORTED: u8 = 4;
/// Standard input could not be read
pub const INPUT_FAILED: u8 = 5;

pub fn exit_code(err: &CoreError) -> u8 {
    match err {
        CoreError::ZoneResolution { .. } => ZONE_RESOLUTION_FAILED,
        CoreError::ZoneNotFound(_) => ZONE_NOT_FOUND,
        CoreError::Submission(_) | CoreError::Poll { .. } | CoreError::Provider(_) => {
            CHANGE_FAILED
        }
        CoreError::PollTimeout(_) | CoreError::PollCancelled(_) => WAIT_ABORTED,
        CoreError::Io(_) => INPUT_FAILED,
    }
}
