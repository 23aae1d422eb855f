//! Shared path helpers (home resolution, path validation).

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Environment variable name for user home directory.
const HOME_ENV: &str = "HOME";
/// Windows fallback for the user home directory.
const USERPROFILE_ENV: &str = "USERPROFILE";

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Resolve the current user's home directory.
///
/// Resolution order:
/// 1. `$HOME` when set and non-empty.
/// 2. `$USERPROFILE` otherwise.
pub fn resolve_home_dir() -> Option<PathBuf> {
    resolve_home_dir_from(env::var_os(HOME_ENV), env::var_os(USERPROFILE_ENV))
}

/// Resolve home directory from explicit environment values (testable helper).
pub(crate) fn resolve_home_dir_from(
    home: Option<OsString>,
    user_profile: Option<OsString>,
) -> Option<PathBuf> {
    [home, user_profile]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}
