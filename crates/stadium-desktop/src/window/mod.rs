//! Window management module
//!
//! Provides the closed set of window identifiers, their descriptors, the
//! registry that owns them, and hit-test regions for the window chrome.

mod id;
mod descriptor;
mod region;
mod registry;
mod event;

pub use id::WindowId;
pub use descriptor::WindowDescriptor;
pub use region::WindowRegion;
pub use registry::{SubscriptionId, WindowRegistry};
pub use event::RegistryEvent;
