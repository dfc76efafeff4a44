//! Executable and license probes

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use offtk_domain::ports::Availability;

use crate::constants::{AMBERHOME_ENV, ANTECHAMBER_EXECUTABLE, OE_LICENSE_ENV, SQM_EXECUTABLE};

/// Whether `path` is a regular file this process may execute
pub fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = path.metadata() else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// Locate `program` in the directories of `search_path`
///
/// A program containing a path separator is checked as given.
pub fn find_executable_in(program: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    env::split_paths(search_path?)
        .map(|dir| dir.join(program))
        .find(|path| is_executable(path))
}

/// Locate `program` on `PATH`
pub fn find_executable(program: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH");
    find_executable_in(program, path.as_deref())
}

/// Available when `program` resolves to an executable
pub fn probe_program(program: &str) -> Availability {
    match find_executable(program) {
        Some(_) => Availability::Available,
        None => Availability::unavailable(format!("'{program}' not found on PATH")),
    }
}

/// Available when the OpenEye license file exists
///
/// `configured` takes precedence over the `OE_LICENSE` environment variable.
pub fn probe_license(configured: Option<&Path>) -> Availability {
    let path = match configured {
        Some(path) => path.to_path_buf(),
        None => match env::var_os(OE_LICENSE_ENV) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => {
                return Availability::unavailable(format!(
                    "no OpenEye license configured and {OE_LICENSE_ENV} is not set"
                ));
            }
        },
    };

    if path.is_file() {
        Availability::Available
    } else {
        Availability::unavailable(format!(
            "OpenEye license file '{}' does not exist",
            path.display()
        ))
    }
}

/// Available when `antechamber` and `sqm` are both executable
///
/// Locations are tried in order: `bin_dir`, `$AMBERHOME/bin`, then `PATH`.
pub fn probe_ambertools(bin_dir: Option<&Path>) -> Availability {
    let amberhome = env::var_os(AMBERHOME_ENV);
    let path = env::var_os("PATH");
    probe_ambertools_in(bin_dir, amberhome.as_deref(), path.as_deref())
}

/// [`probe_ambertools`] with explicit `AMBERHOME` and `PATH` values
///
/// The first location holding both executables wins.
pub fn probe_ambertools_in(
    bin_dir: Option<&Path>,
    amberhome: Option<&OsStr>,
    search_path: Option<&OsStr>,
) -> Availability {
    let amber_bin = amberhome
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join("bin").into_os_string());
    let locations = [
        bin_dir.map(|dir| dir.as_os_str().to_os_string()),
        amber_bin,
        search_path.map(OsStr::to_os_string),
    ];

    let mut missing = ANTECHAMBER_EXECUTABLE;
    for location in locations.iter().flatten() {
        match [ANTECHAMBER_EXECUTABLE, SQM_EXECUTABLE]
            .into_iter()
            .find(|program| find_executable_in(program, Some(location)).is_none())
        {
            None => return Availability::Available,
            Some(program) => missing = program,
        }
    }
    Availability::unavailable(format!("AmberTools executable '{missing}' not found"))
}
