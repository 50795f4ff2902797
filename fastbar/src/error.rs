use thiserror::Error;

/// Errors raised at the indicator attach boundary.
///
/// Steady-state scroll and drag handling never returns errors; degenerate
/// geometry is handled as a policy outcome, not a failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachError {
    /// The host list does not expose the section-label capability required
    /// by an indicator. This is a wiring bug in the host application, so the
    /// attach fails loudly instead of degrading.
    #[error("list view does not expose section labels, cannot attach indicator")]
    CapabilityMissing,
}
