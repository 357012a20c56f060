//! Process-wide build-once cache for the fitted estimator.
//!
//! The build is slow (dataset read plus forest fit) and must run at most
//! once even when the first requests arrive concurrently, so the cell
//! serializes initialization. A failed build is not cached: the next
//! caller retries, and callers treat the failure as fatal.

use once_cell::sync::OnceCell;

use calhome_core::Estimator;

use crate::errors::BuildError;

static SHARED: OnceCell<Estimator> = OnceCell::new();

/// Get the process-wide estimator, building it on first access.
///
/// `build` runs at most once across all threads; later calls return the
/// cached pair without invoking it.
pub fn shared_estimator<F>(build: F) -> Result<&'static Estimator, BuildError>
where
    F: FnOnce() -> Result<Estimator, BuildError>,
{
    SHARED.get_or_try_init(build)
}

/// The cached estimator, if a build has already completed.
pub fn cached_estimator() -> Option<&'static Estimator> {
    SHARED.get()
}
