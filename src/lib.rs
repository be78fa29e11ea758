//! # Rewire
//!
//! A minimal, thread-safe dependency provider that can be swapped at runtime.
//!
//! Rewire wraps a factory function in a [`Provider`] whose implementation can
//! be overwritten while the application runs, typically from test setup to
//! substitute a mock, and restored afterwards. A [`ProviderRegistry`] tracks
//! every provider it creates so a single call puts all of them back to their
//! defaults.
//!
//! It is deliberately not a full DI container. There is no dependency graph
//! and no automatic injection; each provider is an independent, manually
//! registered factory.
//!
//! ## Core Concepts
//!
//! - **Provider**: a swappable factory producing values of a fixed return
//!   type from a fixed argument type.
//! - **Overwrite**: a temporarily installed factory that takes precedence
//!   over the default, typically a mock.
//! - **Registry**: a tracking collection of providers supporting bulk reset
//!   to defaults.
//!
//! ## Quick Start
//!
//! ```
//! use rewire::ProviderRegistry;
//!
//! struct HttpClient {
//!   base_url: String,
//! }
//!
//! let registry = ProviderRegistry::new();
//!
//! // Production wiring: build a real client from a base URL.
//! let client_provider = registry.new_provider(|base_url: String| HttpClient {
//!   base_url,
//! });
//!
//! let client = client_provider.invoke("https://api.example.com".to_string());
//! assert_eq!(client.base_url, "https://api.example.com");
//!
//! // Test wiring: substitute a stub, no matter which URL is asked for.
//! client_provider.overwrite(|_base_url| HttpClient {
//!   base_url: "http://localhost:9999".to_string(),
//! });
//! let client = client_provider.invoke("https://api.example.com".to_string());
//! assert_eq!(client.base_url, "http://localhost:9999");
//!
//! // Teardown: every provider the registry created goes back to its default.
//! registry.reset();
//! let client = client_provider.invoke("https://api.example.com".to_string());
//! assert_eq!(client.base_url, "https://api.example.com");
//! ```

mod core;
#[cfg(feature = "local")]
mod local;
mod provider;
mod registry;

#[cfg(feature = "local")]
pub use local::{LocalProvider, LocalProviderRegistry};
pub use provider::Provider;
pub use registry::ProviderRegistry;
