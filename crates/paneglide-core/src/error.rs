//! Public error type for caller-contract violations.

use thiserror::Error;

/// Errors returned by the scroller façade for invalid arguments.
///
/// Runtime conditions the engine tolerates (degenerate snap sets, missing
/// bounds, fully disabled axes) are not errors; they make the affected
/// operation inert and are reported through `log` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScrollError {
    #[error("axis index {0} out of range (expected 0 or 1)")]
    InvalidAxis(usize),
    #[error("panel index {index} out of range ({count} panels)")]
    PanelOutOfRange { index: usize, count: usize },
}
