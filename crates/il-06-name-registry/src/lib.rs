//! # Name Registry Subsystem (IL-06)
//!
//! Service discovery after deployment: fixed-width names mapped to the
//! deployed component addresses. Not protocol logic: consumers look up
//! where the protocol lives, nothing more.

pub mod registry;

pub use registry::{NameRegistry, RegistryError, RegistryEvent};
