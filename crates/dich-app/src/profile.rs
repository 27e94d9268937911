use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use dich_config::Config;
use serde_json::Value;

/// Config file picked up from the working directory when none is given
const DEFAULT_CONFIG_FILE: &str = "dich.json";

/// Overlay a JSON config file on `base`. Keys the file leaves out keep their
/// value from `base`.
fn load_config_file(path: &Path, base: Config) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let overrides: Value = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let mut merged = serde_json::to_value(base).context("failed to serialize config")?;
    merge(&mut merged, overrides);
    let config = serde_json::from_value(merged)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}

/// Objects merge key by key, anything else replaces
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}

/// Environment first, then the explicit path or `dich.json` if present on top
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let base = Config::new();
    if let Some(path) = path {
        return load_config_file(path, base);
    }

    let default_file = Path::new(DEFAULT_CONFIG_FILE);
    if default_file.exists() {
        return load_config_file(default_file, base);
    }

    tracing::debug!("No config file, using environment");
    Ok(base)
}
