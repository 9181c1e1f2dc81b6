//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the project-local file taking
//! precedence:
//! 1. User-level: `~/.lineup/config.toml`
//! 2. Project-local: `<cwd>/.lineup/config.toml`
//!
//! Defines the tracked lines (name plus accent color), the goal prompt's
//! dismissal behavior, and keymap overrides. Uses TOML format with serde;
//! unreadable files fall back to defaults silently.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::prompt::DismissBehavior;

const DEFAULT_QUIT: &str = "ctrl+q";

/// Accent used when a line's color is missing or unparseable.
pub const DEFAULT_ACCENT: (u8, u8, u8) = (0x5f, 0x87, 0xd7);

#[derive(Debug, Clone)]
pub struct Config {
    pub lines: Vec<LineConfig>,
    pub prompt: PromptConfig,
    pub keymap: KeymapConfig,
}

/// A tracked work category: display name plus accent color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineConfig {
    pub name: String,
    pub color: (u8, u8, u8),
}

#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub dismiss: DismissBehavior,
}

#[derive(Debug, Clone)]
pub struct KeymapConfig {
    pub quit: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    lines: Option<Vec<RawLine>>,
    prompt: Option<RawPrompt>,
    keymap: Option<RawKeymap>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawLine {
    name: Option<String>,
    color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPrompt {
    #[serde(alias = "onDismiss")]
    dismiss: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawKeymap {
    quit: Option<String>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    toml::from_str::<RawConfig>(&contents).ok()
}

/// Parse `#rrggbb` (leading `#` optional) into an RGB tuple.
pub(crate) fn parse_hex_color(input: &str) -> Option<(u8, u8, u8)> {
    let hex = input.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((red, green, blue))
}

fn resolve_lines(raw: Option<Vec<RawLine>>) -> Vec<LineConfig> {
    raw.unwrap_or_default()
        .into_iter()
        .filter_map(|line| {
            let name = line.name?.trim().to_string();
            if name.is_empty() {
                return None;
            }
            let color = line
                .color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(DEFAULT_ACCENT);
            Some(LineConfig { name, color })
        })
        .collect()
}

fn resolve_dismiss(raw: Option<&str>) -> DismissBehavior {
    match raw.map(str::trim) {
        Some("ignore") => DismissBehavior::Ignore,
        _ => DismissBehavior::Skip,
    }
}

fn merge_config(user: Option<RawConfig>, local: Option<RawConfig>) -> Config {
    let local_lines = local.as_ref().and_then(|c| c.lines.clone());
    let user_lines = user.as_ref().and_then(|c| c.lines.clone());
    let lines = resolve_lines(local_lines.or(user_lines));

    let local_prompt = local.as_ref().and_then(|c| c.prompt.as_ref());
    let user_prompt = user.as_ref().and_then(|c| c.prompt.as_ref());
    let dismiss = local_prompt
        .and_then(|p| p.dismiss.clone())
        .or_else(|| user_prompt.and_then(|p| p.dismiss.clone()));

    let local_keymap = local.as_ref().and_then(|c| c.keymap.as_ref());
    let user_keymap = user.as_ref().and_then(|c| c.keymap.as_ref());
    let quit = local_keymap
        .and_then(|k| k.quit.clone())
        .or_else(|| user_keymap.and_then(|k| k.quit.clone()))
        .unwrap_or_else(|| DEFAULT_QUIT.to_string());

    Config {
        lines,
        prompt: PromptConfig {
            dismiss: resolve_dismiss(dismiss.as_deref()),
        },
        keymap: KeymapConfig { quit },
    }
}

fn config_path_from_root(root: &Path) -> PathBuf {
    root.join(".lineup").join("config.toml")
}

fn user_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(config_path_from_root(&home))
}

pub fn load_config(root: &Path) -> Config {
    let local_path = config_path_from_root(root);
    let user_path = user_config_path();

    let local_config = read_toml(&local_path);
    let user_config = user_path.and_then(|path| read_toml(&path));

    merge_config(user_config, local_config)
}
