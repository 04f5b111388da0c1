use crate::logging::LogLevel;
use crate::theme::DEFAULT_THEME_TRANSITION_MS;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const THEME_TRANSITION_MS_BOUNDS: (u32, u32) = (0, 2_000);

const THEME_TRANSITION_MS_KEY: &str = "PORTFOLIO_THEME_TRANSITION_MS";
const LOG_LEVEL_KEY: &str = "PORTFOLIO_LOG_LEVEL";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub theme_transition_ms: u32,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_transition_ms: DEFAULT_THEME_TRANSITION_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PageConfig {
    /// The page has no process environment at runtime, so values are baked in
    /// when the bundle is compiled.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| {
            let value = match name {
                THEME_TRANSITION_MS_KEY => option_env!("PORTFOLIO_THEME_TRANSITION_MS"),
                LOG_LEVEL_KEY => option_env!("PORTFOLIO_LOG_LEVEL"),
                _ => None,
            };
            value.map(ToString::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let theme_transition_ms = parse_u32_with_bounds(
            &lookup,
            THEME_TRANSITION_MS_KEY,
            DEFAULT_THEME_TRANSITION_MS,
            THEME_TRANSITION_MS_BOUNDS,
        );
        let log_level = parse_log_level(&lookup, LOG_LEVEL_KEY, DEFAULT_LOG_LEVEL);

        Self {
            theme_transition_ms,
            log_level,
        }
    }
}

fn parse_non_empty_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u32_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u32,
    bounds: (u32, u32),
) -> u32 {
    parse_non_empty_string(lookup, name)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: LogLevel,
) -> LogLevel {
    match parse_non_empty_string(lookup, name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}
