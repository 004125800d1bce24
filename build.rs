use dotenvy::dotenv;

// Alert tuning is optional at compile time; defaults live in utils::config.
const FORWARDED_KEYS: [&str; 2] = ["ALERT_REPROMPT_MS", "ALERT_SHOW_DELAY_MS"];

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // a missing .env is fine, the shell environment still applies
  dotenv().ok();

  for key in FORWARDED_KEYS {
    println!("cargo::rerun-if-env-changed={}", key);
    if let Ok(value) = std::env::var(key) {
      println!("cargo::rustc-env={}={}", key, value);
    }
  }
}
