use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use logsynth::config::{Config, LogBudget};
use logsynth::generator::EventGenerator;
use logsynth::sink::MemorySink;

fn main() {
  println!("logsynth seeded demo");
  println!("====================");

  // Fixed seed: rerunning prints the identical stream.
  let config = Config {
    interval: Duration::ZERO,
    budget: LogBudget::Count(10),
  };
  let mut generator = EventGenerator::new(StdRng::seed_from_u64(42));
  let sink = MemorySink::new();

  generator.run(&config, &sink);

  for event in sink.events() {
    println!("{}", event.serialize());
  }
}
