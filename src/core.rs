//! Core, non-public data structures shared by the provider modules.

use std::sync::Arc;

/// The stored form of a factory function.
///
/// A named function and a capturing closure both coerce into this single
/// shape. The handle is reference-counted so `invoke` can clone it out of
/// the selection lock and run the factory body with the lock released.
pub(crate) type Factory<R, A> = Arc<dyn Fn(A) -> R + Send + Sync>;

/// The common supertype through which `ProviderRegistry` tracks providers of
/// differing return/argument types uniformly.
pub(crate) trait Resettable: Send + Sync {
  /// Clear the overwrite factory, restoring the default.
  fn reset(&self);
}
