//! Package manager detection.

pub mod context;
pub mod os;
pub mod probe;
pub mod resolver;

pub use context::{alias_from_program, DetectionContext, GENERIC_NAME};
pub use os::{OsFamily, OsRelease};
pub use probe::{PathProbe, Probe, StaticProbe};
pub use resolver::{distro_manager, ManagerResolver, Resolution, ResolvedManager};
