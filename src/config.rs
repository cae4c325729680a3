//! Startup configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file
//! (`--config <path>` or `TWENTY48_CONFIG`), then `TWENTY48_*` environment
//! variables. The result is validated once before the first round starts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::Rules;
use crate::input::KeyBindings;
use crate::types::{MAX_TILE, WINNING_TILE};

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV: &str = "TWENTY48_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// RNG seed; `None` picks one from the clock at startup.
    pub seed: Option<u64>,
    pub win_tile: u32,
    /// Tile that ends a round outright.
    pub max_tile: u32,
    pub keys: KeyBindings,
    /// Log destination. Logging to the terminal would draw over the board.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            win_tile: WINNING_TILE,
            max_tile: MAX_TILE,
            keys: KeyBindings::WASD,
            log_file: None,
        }
    }
}

/// On-disk shape. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    seed: Option<u64>,
    win_tile: Option<u32>,
    max_tile: Option<u32>,
    keys: Option<String>,
    log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load from command-line arguments and the process environment.
    pub fn load(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let path = config_path(args)?
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let mut config = Self::default();
        if let Some(path) = path {
            config.merge_file(&path)?;
        }
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from a JSON file.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        self.merge_json(&text)
            .with_context(|| format!("parse config file {}", path.display()))
    }

    /// Overlay values from JSON text.
    pub fn merge_json(&mut self, text: &str) -> Result<()> {
        let file: FileConfig = serde_json::from_str(text)?;
        if let Some(seed) = file.seed {
            self.seed = Some(seed);
        }
        if let Some(win_tile) = file.win_tile {
            self.win_tile = win_tile;
        }
        if let Some(max_tile) = file.max_tile {
            self.max_tile = max_tile;
        }
        if let Some(keys) = file.keys {
            self.keys = parse_keys(&keys)?;
        }
        if let Some(log_file) = file.log_file {
            self.log_file = Some(log_file);
        }
        Ok(())
    }

    /// Overlay `TWENTY48_*` variables read through `var`. Blank values are
    /// ignored.
    pub fn apply_env<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            var(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(seed) = get("TWENTY48_SEED") {
            self.seed = Some(
                seed.parse()
                    .with_context(|| format!("TWENTY48_SEED={seed}"))?,
            );
        }
        if let Some(tile) = get("TWENTY48_WIN_TILE") {
            self.win_tile = tile
                .parse()
                .with_context(|| format!("TWENTY48_WIN_TILE={tile}"))?;
        }
        if let Some(tile) = get("TWENTY48_MAX_TILE") {
            self.max_tile = tile
                .parse()
                .with_context(|| format!("TWENTY48_MAX_TILE={tile}"))?;
        }
        if let Some(keys) = get("TWENTY48_KEYS") {
            self.keys = parse_keys(&keys).with_context(|| format!("TWENTY48_KEYS={keys}"))?;
        }
        if let Some(path) = get("TWENTY48_LOG_FILE") {
            self.log_file = Some(PathBuf::from(path));
        }
        Ok(())
    }

    /// Check the tile thresholds against [`Rules::is_valid`].
    pub fn validate(&self) -> Result<()> {
        if !self.rules().is_valid() {
            bail!(
                "win tile {} and max tile {} must be powers of two >= 4 \
                 with the max tile not below the win tile",
                self.win_tile,
                self.max_tile
            );
        }
        Ok(())
    }

    pub fn rules(&self) -> Rules {
        Rules::new(self.win_tile, Some(self.max_tile))
    }
}

/// Parse `wasd`, `esdf`, or five comma-separated keys
/// (`up,left,down,right,quit`).
pub fn parse_keys(s: &str) -> Result<KeyBindings> {
    match s.trim().to_ascii_lowercase().as_str() {
        "wasd" => return Ok(KeyBindings::WASD),
        "esdf" => return Ok(KeyBindings::ESDF),
        _ => {}
    }

    let mut keys = Vec::with_capacity(5);
    for part in s.split(',') {
        let mut chars = part.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => keys.push(c),
            _ => bail!("expected a single character, got {:?}", part.trim()),
        }
    }
    Ok(KeyBindings::from_keys(&keys)?)
}

/// Value of `--config <path>` or `--config=<path>`, if given.
fn config_path(args: impl IntoIterator<Item = String>) -> Result<Option<PathBuf>> {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config needs a path")?;
            return Ok(Some(PathBuf::from(path)));
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Ok(Some(PathBuf::from(path)));
        }
    }
    Ok(None)
}
