//! The `ProviderRegistry` struct: constructs providers and tracks them for
//! bulk reset.

use crate::core::Resettable;
use crate::provider::Provider;
use log::debug;
use parking_lot::Mutex;
use std::any::type_name;
use std::sync::Arc;

/// A factory for [`Provider`]s that remembers every provider it creates so
/// all of them can be reset in one call.
///
/// The registry is ordinary state, not a process-wide singleton: construct
/// one wherever the application wires its factories and pass it to the code
/// that needs it. One long-lived registry per application (or per test
/// module) is typical.
///
/// # Examples
///
/// ```
/// use rewire::ProviderRegistry;
///
/// struct Pool {
///   size: usize,
/// }
///
/// let registry = ProviderRegistry::new();
/// let pool_provider = registry.new_provider(|size| Pool { size });
///
/// // Test setup pins the pool; teardown restores everything at once.
/// pool_provider.overwrite(|_requested| Pool { size: 1 });
/// assert_eq!(pool_provider.invoke(64).size, 1);
///
/// registry.reset();
/// assert_eq!(pool_provider.invoke(64).size, 64);
/// ```
#[derive(Default)]
pub struct ProviderRegistry {
  providers: Mutex<Vec<Arc<dyn Resettable>>>,
}

impl ProviderRegistry {
  /// Creates a new, empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a provider with the given default factory and tracks it.
  ///
  /// Each call returns a distinct provider, even for identical factories.
  /// The registry keeps its own handle for the rest of its lifetime; the
  /// returned `Arc` is the caller's handle for invocation and overwriting.
  pub fn new_provider<R, A>(
    &self,
    default: impl Fn(A) -> R + Send + Sync + 'static,
  ) -> Arc<Provider<R, A>>
  where
    R: 'static,
    A: 'static,
  {
    let provider = Arc::new(Provider::new(default));
    let handle: Arc<dyn Resettable> = provider.clone();
    let tracked = {
      let mut providers = self.providers.lock();
      providers.push(handle);
      providers.len()
    };
    debug!(
      "registered Provider<{}, {}> ({} tracked)",
      type_name::<R>(),
      type_name::<A>(),
      tracked
    );
    provider
  }

  /// Resets every tracked provider to its default factory.
  ///
  /// The tracked sequence is snapshotted under the registry lock and the
  /// providers are reset after the lock is released, one provider at a time.
  /// Providers registered while a reset is in flight keep their overwrites;
  /// there is no cross-provider snapshot guarantee.
  pub fn reset(&self) {
    let snapshot: Vec<Arc<dyn Resettable>> = self.providers.lock().clone();
    debug!("resetting {} tracked provider(s)", snapshot.len());
    for provider in &snapshot {
      provider.reset();
    }
  }

  /// Number of providers created through this registry.
  pub fn len(&self) -> usize {
    self.providers.lock().len()
  }

  /// Returns `true` if no providers have been created yet.
  pub fn is_empty(&self) -> bool {
    self.providers.lock().is_empty()
  }
}
