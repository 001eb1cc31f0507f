use logsynth::config::Config;
use logsynth::generator::EventGenerator;
use logsynth::sink::{self, TracingSink};

fn main() {
  if let Err(e) = sink::init_stdout() {
    eprintln!("[logsynth] failed to install tracing subscriber: {}", e);
  }

  let config = Config::from_env();
  let mut generator = EventGenerator::new(rand::rng());
  generator.run(&config, &TracingSink);
}
