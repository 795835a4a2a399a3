//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it owns layered configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use casekit_kernel::config::load_config;
//! use casekit_kernel::domain::config::CasekitConfig;
//!
//! let cfg: CasekitConfig = load_config(Some("casekit.toml")).unwrap_or_default();
//! # let _ = cfg;
//! ```
pub mod config;

pub use casekit_domain as domain;
