//! Availability probes
//!
//! Side-effect-free filesystem checks deciding whether a toolkit's native
//! dependency can be used. Nothing here spawns a process.

mod probe;

pub use probe::{
    find_executable, find_executable_in, is_executable, probe_ambertools,
    probe_ambertools_in, probe_license, probe_program,
};
