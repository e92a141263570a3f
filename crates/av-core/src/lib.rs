//! Core functionality for the exhibition dashboard
//! 
//! This crate holds the selection state machine that decides which derived
//! views need recomputing after an interaction, and the event bus that carries
//! those notifications to the render layer.

pub mod events;
pub mod selection;

// Re-export commonly used types
pub use events::{EventBus, Event, EventHandler, handler_from_fn};
pub use selection::{Selection, SelectionState, RefreshPlan, ViewKind, YearBounds};
