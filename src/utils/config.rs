use std::path::PathBuf;

use tracing::Level;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub course_catalog_url: Option<String>,
    pub course_catalog_path: Option<PathBuf>,
    pub log_level: Level,
}

fn optional_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn parse_level(value: &str) -> Level {
    match value.trim().to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

impl Config {
    /// Reads the environment (after `.env` is loaded), keeping defaults for
    /// anything unset.
    pub fn init() -> Self {
        let defaults = Config::default();
        Config {
            bind_addr: optional_var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            course_catalog_url: optional_var("COURSE_CATALOG_URL"),
            course_catalog_path: optional_var("COURSE_CATALOG_PATH").map(PathBuf::from),
            log_level: optional_var("LOG_LEVEL")
                .map(|v| parse_level(&v))
                .unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "127.0.0.1:3000".to_string(),
            course_catalog_url: None,
            course_catalog_path: None,
            log_level: Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_fall_back_to_info() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level(" warn "), Level::WARN);
        assert_eq!(parse_level("loud"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }
}
