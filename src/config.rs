use crate::error::{Result, ScorerError};
use crate::types::config::ScorerConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "seoscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".seoscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/seoscore/config.toml";

/// Loads `seoscore.toml` from `root`, layered over the user's global config
/// and under `.seoscore/local.toml`.
///
/// Returns `None` when the project has no `seoscore.toml`; the global and
/// local layers alone never activate configuration.
pub fn load_config(root: &Path) -> Result<Option<ScorerConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ScorerConfig>> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    if !project_path.is_file() {
        return Ok(None);
    }

    let mut merged = Table::new();
    for layer in config_layers(root, global_path) {
        if let Some(table) = read_layer(&layer)? {
            tracing::debug!(layer = %layer.display(), "applying config layer");
            overlay(&mut merged, table);
        }
    }

    let cfg: ScorerConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| ScorerError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

/// Lowest precedence first.
fn config_layers(root: &Path, global_path: Option<&Path>) -> Vec<PathBuf> {
    global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .collect()
}

fn read_layer(path: &Path) -> Result<Option<Table>> {
    if !path.is_file() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)?;
    let table = raw
        .parse::<Table>()
        .map_err(|e| ScorerError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    Ok(Some(table))
}

/// Nested tables merge key by key; any other value in `layer` replaces what
/// `base` held, arrays included.
fn overlay(base: &mut Table, layer: Table) {
    for (key, incoming) in layer {
        match incoming {
            Value::Table(nested) => {
                if let Some(Value::Table(existing)) = base.get_mut(&key) {
                    overlay(existing, nested);
                    continue;
                }
                base.insert(key, Value::Table(nested));
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
