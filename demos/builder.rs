use once_cell::sync::Lazy;
use rewire::{Provider, ProviderRegistry};
use std::sync::Arc;

// Application-wide wiring lives in one place. The registry is ordinary state
// owned by this struct; the library itself exposes no global.
struct Wiring {
  registry: ProviderRegistry,
  http_client: Arc<Provider<HttpClient, HttpClientBuilder>>,
}

static WIRING: Lazy<Wiring> = Lazy::new(|| {
  let registry = ProviderRegistry::new();
  let http_client = registry.new_provider(|builder: HttpClientBuilder| HttpClient {
    base_url: builder.base_url,
    timeout_ms: builder.timeout_ms,
  });
  Wiring {
    registry,
    http_client,
  }
});

struct HttpClient {
  base_url: String,
  timeout_ms: u64,
}

// The builder carries per-call configuration and hands itself to the
// provider, which runs whichever factory is active.
struct HttpClientBuilder {
  base_url: String,
  timeout_ms: u64,
}

impl HttpClientBuilder {
  fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.to_string(),
      timeout_ms: 30_000,
    }
  }

  fn timeout_ms(mut self, timeout_ms: u64) -> Self {
    self.timeout_ms = timeout_ms;
    self
  }

  fn build(self) -> HttpClient {
    WIRING.http_client.invoke(self)
  }
}

fn main() {
  println!("--- Builder goes through the default factory ---");
  let client = HttpClientBuilder::new("https://api.example.com")
    .timeout_ms(5_000)
    .build();
  println!("client -> {} (timeout {} ms)", client.base_url, client.timeout_ms);
  assert_eq!(client.timeout_ms, 5_000);

  println!("\n--- A test pins the client, whatever the builder asks for ---");
  WIRING.http_client.overwrite(|_builder| HttpClient {
    base_url: "http://localhost:1".to_string(),
    timeout_ms: 1,
  });
  let client = HttpClientBuilder::new("https://api.example.com").build();
  println!("mocked -> {} (timeout {} ms)", client.base_url, client.timeout_ms);
  assert_eq!(client.base_url, "http://localhost:1");

  println!("\n--- Teardown restores the default wiring ---");
  WIRING.registry.reset();
  let client = HttpClientBuilder::new("https://api.example.com").build();
  println!("restored -> {}", client.base_url);
  assert_eq!(client.base_url, "https://api.example.com");
}
