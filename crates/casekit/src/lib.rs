//! Facade crate for casekit features and shared modules.
//! Re-exports domain/kernel primitives and the feature slices for applications.
//! Keep this crate thin: it should compose other crates, not implement behaviour.
//!
//! ## Usage
//! - Depend on `casekit` from an application instead of the individual crates.
//! - Call [`showcase_suite`] to obtain the bundled suite, then run it with
//!   [`harness::Runner`].

pub use casekit_domain as domain;
pub use casekit_kernel as kernel;

/// Feature slices.
pub mod features {
    pub use casekit_arithmetic as arithmetic;
    pub use casekit_harness as harness;
    pub use casekit_showcase as showcase;

    /// Names of the bundled feature slices.
    pub const ENABLED: &[&str] = &["arithmetic", "harness", "showcase"];
}

pub use features::harness;

/// Builds the bundled showcase suite.
///
/// # Errors
/// Returns [`harness::HarnessError`] if a case cannot be registered.
pub fn showcase_suite() -> Result<harness::Suite, harness::HarnessError> {
    casekit_showcase::suite()
}
