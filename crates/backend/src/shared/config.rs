use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StaticFilesConfig {
    /// Каталог со сборкой фронтенда (trunk build)
    pub dist_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[static_files]
dist_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

impl StaticFilesConfig {
    /// Relative paths resolve against the executable directory.
    pub fn resolve_dist_dir(&self) -> PathBuf {
        resolve_against(&self.dist_dir, exe_dir().as_deref())
    }
}

fn resolve_against(path: &str, base: Option<&Path>) -> PathBuf {
    let p = Path::new(path);
    match base {
        Some(base) if !p.is_absolute() => base.join(p),
        _ => p.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dist_dir, "dist");
        assert_eq!(config.server.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").is_err());
    }

    #[test]
    fn test_bad_host_is_rejected() {
        let server = ServerConfig {
            host: "not a host".into(),
            port: 80,
        };
        assert!(server.socket_addr().is_err());
    }

    #[test]
    fn test_resolve_against() {
        let base = Path::new("/opt/recruithub");
        assert_eq!(
            resolve_against("dist", Some(base)),
            PathBuf::from("/opt/recruithub/dist")
        );
        assert_eq!(
            resolve_against("/srv/www", Some(base)),
            PathBuf::from("/srv/www")
        );
        assert_eq!(resolve_against("dist", None), PathBuf::from("dist"));
    }
}
