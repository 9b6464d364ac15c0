use core::alloc::Layout;
use core::fmt;

/// Errors reported by the map and its underlying table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// No key equal to the requested one under the map's comparator.
    KeyNotFound,
    /// The requested capacity does not fit in `usize` once sized for the load
    /// factor.
    CapacityOverflow,
    /// The allocator refused to provide memory for a growth.
    AllocError {
        /// Layout of the allocation that failed.
        layout: Layout,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound => f.write_str("key not found"),
            Error::CapacityOverflow => f.write_str("capacity overflow"),
            Error::AllocError { layout } => write!(
                f,
                "memory allocation of {} bytes failed",
                layout.size()
            ),
        }
    }
}

impl core::error::Error for Error {}
