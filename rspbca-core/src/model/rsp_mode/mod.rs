mod rsp_mode;
mod run_mode_error;

pub use rsp_mode::{RspMode, NO_BUILD_MARKER};
pub use run_mode_error::RunModeError;
