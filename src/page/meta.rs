//! Page metadata from YAML-like (`---`) or TOML (`+++`) frontmatter.

use serde_json::Value;

use super::JsonMap;

/// Frontmatter delimiter style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrontmatterFormat {
    /// `---` fenced `key: value` lines
    Yaml,
    /// `+++` fenced TOML table
    Toml,
}

/// Extract frontmatter and return `(metadata, body)`.
///
/// Returns `Ok(None)` when the document has no frontmatter. Errors carry the
/// TOML parser message; YAML-like frontmatter never fails.
pub fn extract_frontmatter(content: &str) -> Result<Option<(JsonMap, &str)>, String> {
    let Some((fm, body, format)) = detect_frontmatter(content) else {
        return Ok(None);
    };

    let meta = match format {
        FrontmatterFormat::Yaml => parse_yaml_like(fm),
        FrontmatterFormat::Toml => toml::from_str(fm).map_err(|e| e.to_string())?,
    };
    Ok(Some((meta, body)))
}

/// Detect and split off frontmatter.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, FrontmatterFormat)> {
    let trimmed = content.trim_start();

    for (fence, format) in [
        ("---", FrontmatterFormat::Yaml),
        ("+++", FrontmatterFormat::Toml),
    ] {
        if trimmed.starts_with(fence)
            && let Some(end) = trimmed[3..].find(&format!("\n{fence}"))
        {
            let fm = trimmed[3..3 + end].trim();
            let body = trimmed[3 + end + 4..].trim_start_matches('\n');
            return Some((fm, body, format));
        }
    }

    None
}

/// Parse simple `key: value` lines, keeping the key's original case.
///
/// Values stay the author's raw text. Lists such as `css: a, b,` are split
/// by whoever consumes the key, so empty entries and numeric-looking names
/// survive.
fn parse_yaml_like(content: &str) -> JsonMap {
    let mut meta = JsonMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            meta.insert(key.trim().to_string(), Value::String(value.trim().to_string()));
        }
    }

    meta
}
