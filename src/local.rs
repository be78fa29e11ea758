// src/local.rs

//! Single-threaded provider types, free of `Send + Sync` bounds.

use log::debug;
use std::any::type_name;
use std::cell::RefCell;
use std::rc::Rc;

// The unsync mirror of `core::Factory`.
type LocalFactory<R, A> = Rc<dyn Fn(A) -> R>;

// The unsync mirror of `core::Resettable`.
trait LocalResettable {
  fn reset(&self);
}

/// A single-threaded counterpart to [`Provider`](crate::Provider).
///
/// Factories carry no `Send`/`Sync` bounds, so they may capture `Rc`,
/// `Cell`, and other thread-bound state. Sharing happens through `Rc`
/// instead of `Arc`.
pub struct LocalProvider<R, A> {
  default: LocalFactory<R, A>,
  overwrite: RefCell<Option<LocalFactory<R, A>>>,
}

impl<R, A> LocalProvider<R, A> {
  /// Creates a provider with the given default factory.
  pub fn new(default: impl Fn(A) -> R + 'static) -> Self {
    Self {
      default: Rc::new(default),
      overwrite: RefCell::new(None),
    }
  }

  /// Installs `factory` as the active factory until the next `overwrite`
  /// or [`reset`](LocalProvider::reset).
  pub fn overwrite(&self, factory: impl Fn(A) -> R + 'static) {
    *self.overwrite.borrow_mut() = Some(Rc::new(factory));
    debug!(
      "installed overwrite factory on LocalProvider<{}, {}>",
      type_name::<R>(),
      type_name::<A>()
    );
  }

  /// Clears the overwrite factory, restoring the default. No-op when no
  /// overwrite is installed.
  pub fn reset(&self) {
    *self.overwrite.borrow_mut() = None;
  }

  /// Reports whether an overwrite factory is currently installed.
  pub fn is_overwritten(&self) -> bool {
    self.overwrite.borrow().is_some()
  }

  /// Calls the active factory with `argument` and returns its result.
  ///
  /// The `RefCell` borrow ends before the factory body runs, so a factory
  /// may re-enter the provider it is installed on without a
  /// `BorrowMutError`.
  pub fn invoke(&self, argument: A) -> R {
    let target = match &*self.overwrite.borrow() {
      Some(factory) => Rc::clone(factory),
      None => Rc::clone(&self.default),
    };
    target(argument)
  }
}

impl<R, A> LocalResettable for LocalProvider<R, A> {
  fn reset(&self) {
    LocalProvider::reset(self);
  }
}

/// A single-threaded counterpart to
/// [`ProviderRegistry`](crate::ProviderRegistry).
///
/// # Note on API
///
/// Unlike the thread-safe registry, `new_provider` requires a mutable
/// reference (`&mut self`) because the tracked sequence is a plain `Vec`
/// with no interior mutability.
#[derive(Default)]
pub struct LocalProviderRegistry {
  providers: Vec<Rc<dyn LocalResettable>>,
}

impl LocalProviderRegistry {
  /// Creates a new, empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a provider with the given default factory and tracks it.
  pub fn new_provider<R, A>(
    &mut self,
    default: impl Fn(A) -> R + 'static,
  ) -> Rc<LocalProvider<R, A>>
  where
    R: 'static,
    A: 'static,
  {
    let provider = Rc::new(LocalProvider::new(default));
    let handle: Rc<dyn LocalResettable> = provider.clone();
    self.providers.push(handle);
    provider
  }

  /// Resets every tracked provider to its default factory.
  pub fn reset(&self) {
    for provider in &self.providers {
      provider.reset();
    }
  }

  /// Number of providers created through this registry.
  pub fn len(&self) -> usize {
    self.providers.len()
  }

  /// Returns `true` if no providers have been created yet.
  pub fn is_empty(&self) -> bool {
    self.providers.is_empty()
  }
}
