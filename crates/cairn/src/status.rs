//! Engine status codes

use std::ffi::{c_int, CStr};
use std::fmt;

use crate::ffi;

/// A raw engine status code.
///
/// Every foreign call that can fail reports one of these out of band; the
/// wrappers translate any non-success code into [`crate::Error::Foreign`]
/// immediately, so user code normally only meets a `Status` inside that
/// error. The display form carries the engine's own message text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(pub(crate) c_int);

impl Status {
    pub const SUCCESS: Status = Status(0);
    pub const NO_MEMORY: Status = Status(1);
    pub const INVALID_RESTORE: Status = Status(2);
    pub const INVALID_POP_GROUP: Status = Status(3);
    pub const NO_CURRENT_POINT: Status = Status(4);
    pub const INVALID_MATRIX: Status = Status(5);
    pub const INVALID_STATUS: Status = Status(6);
    pub const NULL_POINTER: Status = Status(7);
    pub const INVALID_STRING: Status = Status(8);
    pub const INVALID_PATH_DATA: Status = Status(9);
    pub const READ_ERROR: Status = Status(10);
    pub const WRITE_ERROR: Status = Status(11);
    pub const SURFACE_FINISHED: Status = Status(12);
    pub const SURFACE_TYPE_MISMATCH: Status = Status(13);
    pub const PATTERN_TYPE_MISMATCH: Status = Status(14);
    pub const INVALID_CONTENT: Status = Status(15);
    pub const INVALID_FORMAT: Status = Status(16);
    pub const INVALID_VISUAL: Status = Status(17);
    pub const FILE_NOT_FOUND: Status = Status(18);
    pub const INVALID_DASH: Status = Status(19);
    pub const INVALID_INDEX: Status = Status(21);
    pub const INVALID_STRIDE: Status = Status(24);
    pub const FONT_TYPE_MISMATCH: Status = Status(25);
    pub const INVALID_SIZE: Status = Status(32);

    pub fn is_success(self) -> bool {
        self == Status::SUCCESS
    }

    /// The raw code, as the engine reported it.
    pub fn code(self) -> i32 {
        self.0
    }

    /// The engine's message for this code.
    pub fn message(self) -> String {
        let raw = unsafe { ffi::cairo_status_to_string(self.0) };
        if raw.is_null() {
            return format!("unknown status {}", self.0);
        }
        unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned()
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status({})", self.0)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.message(), self.0)
    }
}
