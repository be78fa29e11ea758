use rewire::{Provider, ProviderRegistry};
use std::sync::Arc;

// --- Test Fixtures ---

// A connection-like value with an observable origin.
#[derive(Debug, PartialEq, Eq)]
struct Connection {
  url: String,
}

// The trait must be Send + Sync so factories can hand out trait objects.
trait Notifier: Send + Sync {
  fn notify(&self) -> String;
}

struct EmailNotifier;
impl Notifier for EmailNotifier {
  fn notify(&self) -> String {
    "email sent".to_string()
  }
}

struct SilentNotifier;
impl Notifier for SilentNotifier {
  fn notify(&self) -> String {
    "suppressed".to_string()
  }
}

// --- Provider Tests ---

#[test]
fn test_default_factory_is_used_before_any_overwrite() {
  let provider = Provider::new(|x: i32| x * 2);

  assert_eq!(provider.invoke(5), 10);
  assert_eq!(provider.invoke(-3), -6);
  assert!(!provider.is_overwritten());
}

#[test]
fn test_overwrite_then_reset_round_trip() {
  // Arrange: the canonical default/overwrite/reset scenario.
  let provider = Provider::new(|x: i32| x * 2);
  assert_eq!(provider.invoke(5), 10);

  // Act: install an overwrite.
  provider.overwrite(|x| x * 3);

  // Assert: the overwrite takes precedence.
  assert!(provider.is_overwritten());
  assert_eq!(provider.invoke(5), 15);

  // Act: roll back to the default.
  provider.reset();

  // Assert: the default applies again.
  assert!(!provider.is_overwritten());
  assert_eq!(provider.invoke(5), 10);
}

#[test]
fn test_repeated_overwrites_replace_each_other() {
  let provider = Provider::new(|x: i32| x);

  provider.overwrite(|x| x + 100);
  provider.overwrite(|x| x + 200);

  // Only the most recent overwrite is active.
  assert_eq!(provider.invoke(1), 201);

  provider.reset();
  assert_eq!(provider.invoke(1), 1);
}

#[test]
fn test_reset_is_idempotent() {
  let provider = Provider::new(|x: i32| x * 2);

  // Resetting with no overwrite installed is a no-op.
  provider.reset();
  assert_eq!(provider.invoke(5), 10);

  // Double reset has the same effect as a single reset.
  provider.overwrite(|x| x * 3);
  provider.reset();
  provider.reset();
  assert_eq!(provider.invoke(5), 10);
}

#[test]
fn test_factory_receives_argument_by_value() {
  let provider = Provider::new(|url: String| Connection { url });

  let conn = provider.invoke("postgres://localhost".to_string());

  assert_eq!(
    conn,
    Connection {
      url: "postgres://localhost".to_string()
    }
  );
}

#[test]
fn test_provider_hands_out_trait_objects() {
  // Arrange: the mock-friendly shape, a factory returning Arc<dyn Trait>.
  let provider = Provider::new(|_: ()| Arc::new(EmailNotifier) as Arc<dyn Notifier>);
  assert_eq!(provider.invoke(()).notify(), "email sent");

  // Act: swap the implementation behind the trait.
  provider.overwrite(|_| Arc::new(SilentNotifier) as Arc<dyn Notifier>);

  // Assert
  assert_eq!(provider.invoke(()).notify(), "suppressed");
}

#[test]
fn test_panicking_factory_leaves_provider_usable() {
  let provider = Provider::new(|x: i32| x + 1);
  provider.overwrite(|_| panic!("mock exploded"));

  // The factory's panic propagates through invoke unmodified.
  let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| provider.invoke(1)));
  assert!(result.is_err());

  // The provider itself is unharmed; resetting restores the default.
  provider.reset();
  assert_eq!(provider.invoke(1), 2);
}

// --- Registry Tests ---

#[test]
fn test_new_provider_returns_distinct_instances() {
  let registry = ProviderRegistry::new();

  // Identical default factories still yield independent providers.
  let p1 = registry.new_provider(|x: i32| x + 1);
  let p2 = registry.new_provider(|x: i32| x + 1);

  assert!(!Arc::ptr_eq(&p1, &p2));
  assert_eq!(registry.len(), 2);

  p1.overwrite(|x| x - 1);
  assert_eq!(p1.invoke(10), 9);
  assert_eq!(p2.invoke(10), 11);
}

#[test]
fn test_registry_reset_restores_every_provider() {
  // Arrange: two providers of different shapes in one registry.
  let registry = ProviderRegistry::new();
  let double = registry.new_provider(|x: i32| x * 2);
  let greet = registry.new_provider(|name: String| format!("Hello, {}!", name));

  double.overwrite(|x| x * 100);
  greet.overwrite(|_| "mocked".to_string());
  assert_eq!(double.invoke(2), 200);
  assert_eq!(greet.invoke("Ada".to_string()), "mocked");

  // Act
  registry.reset();

  // Assert: each provider is back on its own default.
  assert_eq!(double.invoke(2), 4);
  assert_eq!(greet.invoke("Ada".to_string()), "Hello, Ada!");
  assert!(!double.is_overwritten());
  assert!(!greet.is_overwritten());
}

#[test]
fn test_registry_reset_on_empty_registry_is_a_no_op() {
  let registry = ProviderRegistry::new();

  assert!(registry.is_empty());
  registry.reset();
  assert!(registry.is_empty());
}

#[test]
fn test_directly_constructed_provider_is_not_tracked() {
  let registry = ProviderRegistry::new();
  let tracked = registry.new_provider(|x: i32| x);
  let standalone = Provider::new(|x: i32| x);

  tracked.overwrite(|_| 7);
  standalone.overwrite(|_| 7);

  registry.reset();

  // Only the provider created through the registry was restored.
  assert_eq!(tracked.invoke(0), 0);
  assert_eq!(standalone.invoke(0), 7);
  assert_eq!(registry.len(), 1);
}

#[test]
fn test_registry_reset_is_repeatable() {
  let registry = ProviderRegistry::new();
  let provider = registry.new_provider(|x: u64| x + 1);

  for round in 0..3 {
    provider.overwrite(move |_| round);
    assert_eq!(provider.invoke(0), round);
    registry.reset();
    assert_eq!(provider.invoke(0), 1);
  }
}
