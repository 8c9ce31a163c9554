//! Opening documents in the default viewer.

use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::error::{Error, Result};

/// Time a viewer is given to load a temporary file before it is removed.
pub const GRACE_PERIOD: Duration = Duration::from_secs(2);

/// Returns whether the host OS has a native "open" facility.
pub fn is_supported() -> bool {
    cfg!(any(
        target_os = "linux",
        target_os = "macos",
        target_os = "windows",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "dragonfly",
        target_os = "illumos",
        target_os = "solaris",
        target_os = "android",
        target_os = "ios",
        target_os = "haiku",
    ))
}

/// Opens a file with the OS default application.
///
/// Delegates to `xdg-open`, `open` or `start` depending on the platform and
/// waits for the launcher, not the viewer, to exit.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPlatform`] when no opener exists for this OS
/// and [`Error::Launch`] when the launcher fails.
pub fn preview(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if !is_supported() {
        return Err(Error::UnsupportedPlatform);
    }

    info!(path = %path.display(), "opening preview");
    open::that(path).map_err(|source| Error::Launch {
        path: path.to_path_buf(),
        source,
    })
}
