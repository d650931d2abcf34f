//! # stevedore-core - Core Domain Types
//!
//! Foundation crate for Stevedore. Provides the container record and
//! monitoring data model, the container store, error handling, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Container`] - One managed workload instance (id, name, image, status, ports, createdAt)
//! - [`AppPhase`] - Console lifecycle phase
//! - [`STATUS_RUNNING`] - The single status value the console special-cases
//!
//! ### Monitoring (`metrics`)
//! - [`MetricData`], [`ResourceMetric`] - Resource-usage time series
//! - [`Alarm`], [`AlarmCondition`], [`AlarmStatus`] - Threshold alarms
//!
//! ### State (`store`)
//! - [`ContainerStore`] - Replace/add/update-by-id/remove-by-id collection
//!   with transient loading/error flags
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use stevedore_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod metrics;
pub mod store;
pub mod types;

/// Prelude for common imports used throughout all Stevedore crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use metrics::{Alarm, AlarmCondition, AlarmStatus, MetricData, ResourceMetric};
pub use store::ContainerStore;
pub use types::{AppPhase, Container, STATUS_RUNNING};
