//! Input routing module
//!
//! Mouse and touch are collapsed into one [`PointerInput`] type so the drag
//! logic is written once. The router tracks which window holds pointer
//! capture between a title-bar press and its release.

mod pointer;
mod drag;
mod result;
mod router;

pub use pointer::PointerInput;
pub use drag::DragState;
pub use result::InputResult;
pub use router::InputRouter;
