//! Pipeline domain
//!
//! The fixed five-stage sequence, its states, and the blocks each stage
//! hands to a UI surface.
//!
//! ```text
//! Idle → Submitted → Explained → Drafted → Debugged → Reviewed → UseCased → Done
//!          │                        │
//!          └─ Failed(EmptyInput)    └─ Failed(EmptyCode)
//! ```

mod block;
mod report;
mod stage;
mod state;

pub use block::RenderBlock;
pub use report::PipelineReport;
pub use stage::{Stage, final_code_heading};
pub use state::{FailureReason, PipelineState};
