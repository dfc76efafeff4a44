//! Domain ports
//!
//! | Port | Implemented by |
//! |------|----------------|
//! | [`ToolkitWrapper`] | OpenEye, RDKit and AmberTools wrappers in `offtk-providers` |
//! | [`ToolkitBackend`] | The subprocess bridge in `offtk-providers` |

pub mod backend;
pub mod toolkit;

pub use backend::{BackendReply, ToolkitBackend};
pub use toolkit::{Availability, ToolkitWrapper};
