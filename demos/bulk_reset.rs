use rewire::ProviderRegistry;

fn main() {
  let registry = ProviderRegistry::new();

  let ids = registry.new_provider(|seed: u64| {
    seed
      .wrapping_mul(6364136223846793005)
      .wrapping_add(1442695040888963407)
  });
  let tags = registry.new_provider(|n: usize| format!("tag-{}", n));
  let flags = registry.new_provider(|_: ()| false);

  println!(
    "defaults: id={} tag={} flag={}",
    ids.invoke(1),
    tags.invoke(7),
    flags.invoke(())
  );

  // Pin every provider, the way a test module would.
  ids.overwrite(|_| 42);
  tags.overwrite(|_| "tag-under-test".to_string());
  flags.overwrite(|_| true);
  println!(
    "pinned:   id={} tag={} flag={}",
    ids.invoke(1),
    tags.invoke(7),
    flags.invoke(())
  );

  // One call restores all three defaults.
  registry.reset();
  println!(
    "restored: id={} tag={} flag={}",
    ids.invoke(1),
    tags.invoke(7),
    flags.invoke(())
  );
  assert_eq!(tags.invoke(7), "tag-7");
  assert!(!flags.invoke(()));

  println!("\n{} providers tracked by the registry.", registry.len());
}
