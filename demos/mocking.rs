use rewire::ProviderRegistry;
use std::sync::Arc;

// The collaborator we want to swap out in tests.
trait Mailer: Send + Sync {
  fn send(&self, to: &str) -> String;
}

struct SmtpMailer {
  host: String,
}
impl Mailer for SmtpMailer {
  fn send(&self, to: &str) -> String {
    format!("smtp[{}] -> {}", self.host, to)
  }
}

struct FakeMailer;
impl Mailer for FakeMailer {
  fn send(&self, to: &str) -> String {
    format!("recorded mail to {}", to)
  }
}

fn main() {
  let registry = ProviderRegistry::new();

  // Production wiring: the factory builds the real mailer from its host.
  let mailer_provider =
    registry.new_provider(|host: String| Arc::new(SmtpMailer { host }) as Arc<dyn Mailer>);

  println!("--- Production ---");
  let mailer = mailer_provider.invoke("mail.example.com".to_string());
  println!("{}", mailer.send("ops@example.com"));
  assert!(
    mailer.send("ops@example.com").starts_with("smtp[mail.example.com]"),
    "expected the real mailer"
  );

  println!("\n--- Test setup: overwrite with a fake ---");
  mailer_provider.overwrite(|_host| Arc::new(FakeMailer) as Arc<dyn Mailer>);
  let mailer = mailer_provider.invoke("mail.example.com".to_string());
  println!("{}", mailer.send("ops@example.com"));
  assert_eq!(mailer.send("ops@example.com"), "recorded mail to ops@example.com");

  println!("\n--- Teardown: registry-wide reset ---");
  registry.reset();
  let mailer = mailer_provider.invoke("mail.example.com".to_string());
  println!("{}", mailer.send("ops@example.com"));
  assert!(
    !mailer_provider.is_overwritten(),
    "reset should have removed the fake"
  );
}
