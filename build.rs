use std::env;
use std::fs;
use std::path::Path;

// Las variables de `.env` se exponen a `option_env!` (ver src/config.rs).
// Una variable ya definida en el entorno del build tiene prioridad.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env file found, using compiled-in defaults (BACKEND_URL_*, ENVIRONMENT, LOG_LEVEL...)");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"');
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
