use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_ADDR: &str = "RATIOSHEET_ADDR";
pub const ENV_CHART_DIR: &str = "RATIOSHEET_CHART_DIR";
pub const ENV_MAX_UPLOAD_BYTES: &str = "RATIOSHEET_MAX_UPLOAD_BYTES";
pub const ENV_CHART_WIDTH: &str = "RATIOSHEET_CHART_WIDTH";
pub const ENV_CHART_HEIGHT: &str = "RATIOSHEET_CHART_HEIGHT";

/// Server settings
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Directory chart images are written to and served from
    pub chart_dir: PathBuf,

    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,

    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            chart_dir: PathBuf::from("static/charts"),
            max_upload_bytes: 10 * 1024 * 1024,
            chart_width: 640,
            chart_height: 480,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults.
    ///
    /// Values that do not parse are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup(ENV_ADDR) {
            config.bind_addr = addr;
        }
        if let Some(dir) = lookup(ENV_CHART_DIR) {
            config.chart_dir = PathBuf::from(dir);
        }
        parse_into(&lookup, ENV_MAX_UPLOAD_BYTES, &mut config.max_upload_bytes);
        parse_into(&lookup, ENV_CHART_WIDTH, &mut config.chart_width);
        parse_into(&lookup, ENV_CHART_HEIGHT, &mut config.chart_height);

        let defaults = Self::default();
        if config.chart_width == 0 || config.chart_height == 0 {
            log::warn!("chart dimensions must be non-zero, using defaults");
            config.chart_width = defaults.chart_width;
            config.chart_height = defaults.chart_height;
        }

        config
    }

    /// Applies positional command line overrides: `[BIND_ADDR] [CHART_DIR]`.
    ///
    /// `args` excludes the program name.
    pub fn with_args(mut self, args: &[String]) -> Self {
        if let Some(addr) = args.first() {
            self.bind_addr = addr.clone();
        }
        if let Some(dir) = args.get(1) {
            self.chart_dir = PathBuf::from(dir);
        }
        self
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => *target = value,
        Err(_) => log::warn!("ignoring invalid {}={:?}, keeping {}", key, raw, target),
    }
}
