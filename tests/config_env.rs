// tests/config_env.rs
//
// Kept in its own test binary: it mutates the process environment.

use std::io::Write;

use gerris_wrapper::config::{load_or_default, CONFIG_ENV_VAR};
use tempfile::NamedTempFile;

#[test]
fn env_var_points_at_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[docker]\nimage = \"from-env\"\n").unwrap();

    // SAFETY: this is the only test in this binary, so nothing else reads
    // the environment concurrently.
    unsafe { std::env::set_var(CONFIG_ENV_VAR, file.path()) };

    let cfg = load_or_default(None).unwrap();

    unsafe { std::env::remove_var(CONFIG_ENV_VAR) };
    assert_eq!(cfg.docker.image, "from-env");
}
