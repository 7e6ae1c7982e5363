//! # Configuration des requêtes AMT
//!
//! Ce module décrit, en YAML, ce qui varie d'un déploiement à l'autre :
//! - l'endpoint WS-Management de la machine AMT (hôte, port, TLS, chemin)
//! - les préfixes d'espaces de noms utilisés dans les documents
//! - les options de rendu XML (déclaration, indentation)
//!
//! Toutes les sections sont optionnelles et retombent sur les valeurs par
//! défaut du firmware AMT.
//!
//! ```yaml
//! endpoint:
//!   host: 10.0.0.5
//!   tls: false
//! xml:
//!   indent: false
//! ```

use std::fs;
use std::net::Ipv6Addr;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::info;
use xmltree::EmitterConfig;

use crate::builder::EnvelopeBuilder;
use crate::namespaces::NamespaceContext;

/// Port WS-Management HTTP d'AMT
pub const DEFAULT_AMT_HTTP_PORT: u16 = 16992;
/// Port WS-Management HTTPS d'AMT
pub const DEFAULT_AMT_HTTPS_PORT: u16 = 16993;
pub const DEFAULT_WSMAN_PATH: &str = "/wsman";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_INDENT: &str = "  ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmtConfig {
    pub endpoint: AmtEndpoint,
    pub namespaces: NamespaceContext,
    pub xml: XmlOptions,
}

impl AmtConfig {
    /// Charge et valide la configuration (préfixes et hôte)
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("Invalid AMT configuration")?;
        config
            .namespaces
            .validate()
            .context("Invalid namespace prefixes in AMT configuration")?;
        config.endpoint.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read AMT configuration {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Cannot load AMT configuration {}", path.display()))?;
        info!(path = %path.display(), endpoint = %config.endpoint.uri(), "AMT configuration loaded");
        Ok(config)
    }

    /// Builder utilisant les préfixes configurés
    pub fn envelope_builder(&self) -> Result<EnvelopeBuilder> {
        EnvelopeBuilder::with_context(self.namespaces.clone())
            .context("Invalid namespace prefixes in AMT configuration")
    }
}

/// Endpoint WS-Management d'une machine AMT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmtEndpoint {
    /// Nom d'hôte ou adresse IP seuls, sans port ni crochets IPv6
    pub host: String,
    /// Port explicite, sinon 16992 (HTTP) ou 16993 (TLS)
    pub port: Option<u16>,
    pub tls: bool,
    pub path: String,
}

impl Default for AmtEndpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: None,
            tls: false,
            path: DEFAULT_WSMAN_PATH.to_string(),
        }
    }
}

impl AmtEndpoint {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn port(&self) -> u16 {
        match (self.port, self.tls) {
            (Some(port), _) => port,
            (None, true) => DEFAULT_AMT_HTTPS_PORT,
            (None, false) => DEFAULT_AMT_HTTP_PORT,
        }
    }

    /// Refuse un hôte vide ou de la forme `host:port`
    ///
    /// Le port se configure dans `port` ; seule une adresse IPv6 peut
    /// contenir `:`.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            bail!("AMT endpoint host is empty");
        }
        let bare = self.host.trim_start_matches('[').trim_end_matches(']');
        if self.host.contains(':') && bare.parse::<Ipv6Addr>().is_err() {
            bail!(
                "AMT endpoint host '{}' must not carry a port, use the port field",
                self.host
            );
        }
        Ok(())
    }

    /// URI passée dans `wsa:To`, ex. `http://10.0.0.5:16992/wsman`
    ///
    /// Seule une adresse IPv6 littérale est mise entre crochets.
    pub fn uri(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        let host = if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        let path = if self.path.is_empty() || self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };
        format!("{}://{}:{}{}", scheme, host, self.port(), path)
    }
}

/// Options de rendu du XML sérialisé
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlOptions {
    pub write_declaration: bool,
    pub indent: bool,
    pub indent_string: String,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            write_declaration: true,
            indent: true,
            indent_string: DEFAULT_INDENT.to_string(),
        }
    }
}

impl XmlOptions {
    pub fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig::new()
            .write_document_declaration(self.write_declaration)
            .perform_indent(self.indent)
            .indent_string(self.indent_string.clone())
    }
}
