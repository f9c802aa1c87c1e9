//! Configuration types for shelf.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults, an
//! optional TOML file, `SHELF_*` environment variables (`__` separates the
//! section from the key, e.g. `SHELF_SERVER__PORT`), and finally the bare
//! `PORT` variable. [`Config::defaults`] returns the embedded defaults without
//! touching the filesystem or the environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 1234

[catalog]
path = "./products.json"

[assets]
templates_dir = "templates/"
static_dir    = "static/"
js_dir        = "js/"
"#;

/// Environment variable holding the listen port, as `1234` or `:1234`.
pub const PORT_ENV: &str = "PORT";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 1234 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port`, bracketing bare IPv6 hosts. Hostnames are left for the
    /// listener to resolve.
    pub fn socket_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// `[catalog]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf { PathBuf::from("./products.json") }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// `[assets]` section: where the home page and browser assets live.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_js_dir")]
    pub js_dir: PathBuf,
}

fn default_templates_dir() -> PathBuf { PathBuf::from("templates/") }
fn default_static_dir() -> PathBuf { PathBuf::from("static/") }
fn default_js_dir() -> PathBuf { PathBuf::from("js/") }

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            static_dir: default_static_dir(),
            js_dir: default_js_dir(),
        }
    }
}

impl AssetsConfig {
    /// The home page served at `/`.
    pub fn index_page(&self) -> PathBuf {
        self.templates_dir.join("index.html")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the full layered configuration. `file` is optional on disk: a
    /// missing file is skipped, a malformed one is an error.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(file, std::env::vars())
    }

    /// [`Config::load`] against an explicit set of environment variables
    /// instead of the process environment.
    pub fn load_with_env<I>(file: Option<&Path>, vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: config::Map<String, String> = vars.into_iter().collect();

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let port = match vars.get(PORT_ENV) {
            Some(raw) if !raw.trim().is_empty() => Some(parse_port(raw)?),
            _ => None,
        };

        builder
            .add_source(
                config::Environment::with_prefix("SHELF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("server.port", port.map(i64::from))?
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Parse a TOML document layered over the defaults. No environment.
    pub fn from_toml(toml: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

/// Accepts `1234` as well as the listen-address form `:1234`.
pub fn parse_port(raw: &str) -> anyhow::Result<u16> {
    let digits = raw.trim().trim_start_matches(':');
    digits
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid {PORT_ENV} value {raw:?}: {e}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
