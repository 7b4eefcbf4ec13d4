use std::fmt;
use std::fmt::{Display, Formatter};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

// IdScheme selects how new book ids are generated
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum IdScheme {
    Token,
    Uuid,
}

impl From<String> for IdScheme {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "uuid" => IdScheme::Uuid,
            _ => IdScheme::Token,
        }
    }
}

impl Display for IdScheme {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            IdScheme::Token => write!(f, "token"),
            IdScheme::Uuid => write!(f, "uuid"),
        }
    }
}

// Runtime selects how the HTTP router is served
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Runtime {
    Local,
    Lambda,
}

impl From<String> for Runtime {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "lambda" => Runtime::Lambda,
            _ => Runtime::Local,
        }
    }
}

impl Display for Runtime {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Runtime::Local => write!(f, "local"),
            Runtime::Lambda => write!(f, "lambda"),
        }
    }
}

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5000;

// Configuration abstracts config options for the bookshelf service
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub host: String,
    pub port: u16,
    pub id_scheme: IdScheme,
    pub runtime: Runtime,
}

impl Configuration {
    pub fn new(host: &str, port: u16) -> Self {
        Configuration {
            host: host.to_string(),
            port,
            id_scheme: IdScheme::Token,
            runtime: Runtime::Local,
        }
    }

    /// Reads `BOOKSHELF_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new(DEFAULT_HOST, DEFAULT_PORT);
        if let Some(host) = lookup("BOOKSHELF_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("BOOKSHELF_PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(err) => {
                    tracing::warn!("ignoring BOOKSHELF_PORT={:?}: {}, using {}", port, err, DEFAULT_PORT);
                }
            }
        }
        if let Some(scheme) = lookup("BOOKSHELF_ID_SCHEME") {
            config.id_scheme = IdScheme::from(scheme);
        }
        if let Some(runtime) = lookup("BOOKSHELF_RUNTIME") {
            config.runtime = Runtime::from(runtime);
        }
        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}
