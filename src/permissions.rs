//! Capability checks the shell runs before capture and export.
//!
//! The camera app this mirrors gates each step on a runtime permission.
//! Here those become three independent boolean checks with at most one
//! re-prompt: [`ensure`] asks once, and on denial asks [`request`] exactly
//! once more. There is no further retry logic — a denied capability stays
//! denied for the run.
//!
//! Dialog plumbing and OS integration stay out of scope; [`HostProbe`] maps
//! the capabilities onto their filesystem analogues.
//!
//! [`request`]: PermissionProbe::request

use std::fmt;
use std::path::PathBuf;

/// The three capabilities the shell needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// May we read the capture input?
    Camera,
    /// May we write into the gallery?
    Storage,
    /// Do we have a location fix?
    Location,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Camera => write!(f, "camera"),
            Capability::Storage => write!(f, "storage"),
            Capability::Location => write!(f, "location"),
        }
    }
}

/// Checks and requests capabilities.
pub trait PermissionProbe {
    /// Is the capability currently granted?
    fn check(&self, capability: Capability) -> bool;

    /// Prompt for the capability once; returns the new state.
    fn request(&self, capability: Capability) -> bool;
}

/// Check a capability, re-prompting at most once on denial.
pub fn ensure(probe: &dyn PermissionProbe, capability: Capability) -> bool {
    probe.check(capability) || probe.request(capability)
}

/// Probe mapping capabilities onto the CLI host:
///
/// - **Camera** — the capture input file exists and is a regular file.
/// - **Storage** — the gallery directory exists; requesting it creates the
///   directory (the single "re-prompt").
/// - **Location** — a fix was supplied up front. There is nobody to ask, so
///   requesting always fails and the caller falls back to placeholder text.
pub struct HostProbe {
    pub input: PathBuf,
    pub gallery: PathBuf,
    pub has_fix: bool,
}

impl PermissionProbe for HostProbe {
    fn check(&self, capability: Capability) -> bool {
        match capability {
            Capability::Camera => self.input.is_file(),
            Capability::Storage => self.gallery.is_dir(),
            Capability::Location => self.has_fix,
        }
    }

    fn request(&self, capability: Capability) -> bool {
        match capability {
            Capability::Camera => self.input.is_file(),
            Capability::Storage => std::fs::create_dir_all(&self.gallery).is_ok(),
            Capability::Location => false,
        }
    }
}
