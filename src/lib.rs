//! Locates the Free Pascal compiler executable.
//!
//! Outside Windows the compiler is expected on `PATH`, so the bare command name
//! is returned. On Windows the conventional install directories are searched for
//! the newest versioned toolchain.

mod error;
mod locate;
mod platform;
mod probe;
mod version;

pub use error::LocateError;
pub use locate::{
    find_fpc, Locator, ARCH_CANDIDATES, COMMAND_NAME, SEARCH_ROOTS, WINDOWS_EXECUTABLE,
};
pub use platform::Platform;
pub use probe::{HostFs, MemoryFs, Probe};
pub use version::VersionDir;
