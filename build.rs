use std::env;
use std::fs;
use std::path::Path;

/// Variables que lee `src/config.rs` con `option_env!`
const CONFIG_VARS: &[&str] = &[
    "API_BASE_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "TOKEN_EXPIRES_IN_MINS",
    "PRODUCTS_SORT_BY",
    "PRODUCTS_ORDER",
];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE (las comillas opcionales se eliminan)
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !CONFIG_VARS.contains(&key) {
                        println!("cargo:warning=.env: {} no es una variable conocida, se ignora", key);
                        continue;
                    }
                    // El entorno del proceso tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using DummyJSON defaults (copy .env.example to .env to override API_BASE_URL).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }
}
