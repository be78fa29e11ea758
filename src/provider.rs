//! The `Provider` struct: a swappable factory function behind a lock.

use crate::core::{Factory, Resettable};
use log::{debug, trace};
use parking_lot::Mutex;
use std::any::type_name;
use std::sync::Arc;

/// A swappable factory producing values of type `R` from an argument of
/// type `A`.
///
/// A provider is constructed with a default factory that never changes.
/// Test code installs a replacement with [`overwrite`](Provider::overwrite)
/// and restores the default with [`reset`](Provider::reset). Invocation runs
/// whichever factory is active at the moment of the call.
///
/// All methods take `&self`; a provider is usually shared as
/// `Arc<Provider<R, A>>` and may be used from many threads at once.
pub struct Provider<R, A> {
  default: Factory<R, A>,
  overwrite: Mutex<Option<Factory<R, A>>>,
}

impl<R, A> Provider<R, A> {
  /// Creates a provider with the given default factory.
  ///
  /// Providers created directly are not tracked by any registry; use
  /// [`ProviderRegistry::new_provider`](crate::ProviderRegistry::new_provider)
  /// to make one that participates in bulk reset.
  pub fn new(default: impl Fn(A) -> R + Send + Sync + 'static) -> Self {
    Self {
      default: Arc::new(default),
      overwrite: Mutex::new(None),
    }
  }

  /// Installs `factory` as the active factory.
  ///
  /// Subsequent invocations use `factory` until [`reset`](Provider::reset)
  /// is called or another overwrite replaces it.
  pub fn overwrite(&self, factory: impl Fn(A) -> R + Send + Sync + 'static) {
    *self.overwrite.lock() = Some(Arc::new(factory));
    debug!(
      "installed overwrite factory on Provider<{}, {}>",
      type_name::<R>(),
      type_name::<A>()
    );
  }

  /// Clears the overwrite factory, restoring the default.
  ///
  /// Calling this when no overwrite is installed is a no-op.
  pub fn reset(&self) {
    *self.overwrite.lock() = None;
    debug!(
      "reset Provider<{}, {}> to its default factory",
      type_name::<R>(),
      type_name::<A>()
    );
  }

  /// Reports whether an overwrite factory is currently installed.
  pub fn is_overwritten(&self) -> bool {
    self.overwrite.lock().is_some()
  }

  /// Calls the active factory with `argument` and returns its result.
  ///
  /// The lock guards only the *selection* of the factory; the factory body
  /// runs with the lock released. A slow factory therefore does not block
  /// concurrent `overwrite`/`reset` calls, and a factory may re-enter the
  /// provider it is installed on without deadlocking.
  ///
  /// Panics raised by the factory propagate unmodified.
  pub fn invoke(&self, argument: A) -> R {
    let target = match &*self.overwrite.lock() {
      Some(factory) => {
        trace!(
          "Provider<{}, {}> selecting overwrite factory",
          type_name::<R>(),
          type_name::<A>()
        );
        Arc::clone(factory)
      }
      None => Arc::clone(&self.default),
    };
    target(argument)
  }
}

impl<R, A> Resettable for Provider<R, A> {
  fn reset(&self) {
    Provider::reset(self);
  }
}
