//! Espaces de noms XML des enveloppes WS-Management
//!
//! Les préfixes sont portés par un [`NamespaceContext`] explicite, possédé par
//! le builder et par chaque enveloppe. Il n'existe aucune table globale :
//! deux documents construits avec le même contexte produisent exactement les
//! mêmes déclarations, quel que soit le thread qui les sérialise.

use serde::{Deserialize, Serialize};
use xmltree::{Element, XMLNode};

use crate::error::{Result, WsmanError};

/// Enveloppe SOAP 1.2
pub const NS_SOAP_ENV: &str = "http://www.w3.org/2003/05/soap-envelope";

/// WS-Addressing (version 2004/08 utilisée par AMT)
pub const NS_WS_ADDR: &str = "http://schemas.xmlsoap.org/ws/2004/08/addressing";

/// WS-Management (DMTF)
pub const NS_WSMAN: &str = "http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd";

/// Rôle anonyme WS-Addressing, seule adresse de réponse supportée
pub const ANONYMOUS: &str = "http://schemas.xmlsoap.org/ws/2004/08/addressing/role/anonymous";

/// Action WS-Transfer Get
pub const METHOD_GET: &str = "http://schemas.xmlsoap.org/ws/2004/09/transfer/Get";

/// Action WS-Transfer Put
pub const METHOD_PUT: &str = "http://schemas.xmlsoap.org/ws/2004/09/transfer/Put";

/// Préfixe local des fragments CIM (`<Method>_INPUT`, représentations Put).
///
/// Il est déclaré sur la racine du fragment lui-même.
pub const RESOURCE_PREFIX: &str = "n1";

/// Espaces de noms fixes d'une enveloppe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Soap,
    Addressing,
    Wsman,
}

impl Namespace {
    /// Ordre de déclaration sur la racine `Envelope`
    pub const ALL: [Namespace; 3] = [Namespace::Soap, Namespace::Addressing, Namespace::Wsman];

    pub const fn uri(self) -> &'static str {
        match self {
            Self::Soap => NS_SOAP_ENV,
            Self::Addressing => NS_WS_ADDR,
            Self::Wsman => NS_WSMAN,
        }
    }

    pub const fn default_prefix(self) -> &'static str {
        match self {
            Self::Soap => "s",
            Self::Addressing => "wsa",
            Self::Wsman => "wsman",
        }
    }
}

/// Association préfixe ↔ espace de noms pour un document
///
/// # Exemple
///
/// ```rust
/// use pmoamt::namespaces::{Namespace, NamespaceContext};
///
/// let ctx = NamespaceContext::default();
/// assert_eq!(ctx.qname(Namespace::Addressing, "Action"), "wsa:Action");
///
/// let custom = NamespaceContext::default()
///     .with_prefix(Namespace::Addressing, "a")
///     .unwrap();
/// assert_eq!(custom.qname(Namespace::Addressing, "Action"), "a:Action");
///
/// // Deux espaces de noms ne peuvent pas partager un préfixe
/// assert!(NamespaceContext::default().with_prefix(Namespace::Addressing, "s").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceContext {
    soap: String,
    addressing: String,
    wsman: String,
}

impl Default for NamespaceContext {
    fn default() -> Self {
        Self {
            soap: Namespace::Soap.default_prefix().to_string(),
            addressing: Namespace::Addressing.default_prefix().to_string(),
            wsman: Namespace::Wsman.default_prefix().to_string(),
        }
    }
}

impl NamespaceContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remplace le préfixe lié à `ns`, puis revalide l'ensemble
    pub fn with_prefix(mut self, ns: Namespace, prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        match ns {
            Namespace::Soap => self.soap = prefix,
            Namespace::Addressing => self.addressing = prefix,
            Namespace::Wsman => self.wsman = prefix,
        }
        self.validate()?;
        Ok(self)
    }

    /// Vérifie que chaque préfixe est un NCName utilisable et qu'il lie un
    /// seul espace de noms (y compris [`RESOURCE_PREFIX`], réservé aux fragments).
    pub fn validate(&self) -> Result<()> {
        for (i, ns) in Namespace::ALL.iter().enumerate() {
            let prefix = self.prefix(*ns);
            check_prefix(prefix)?;
            if Namespace::ALL[..i]
                .iter()
                .any(|other| self.prefix(*other) == prefix)
            {
                return Err(WsmanError::invalid_prefix(
                    prefix,
                    "bound to more than one namespace",
                ));
            }
        }
        Ok(())
    }

    pub fn prefix(&self, ns: Namespace) -> &str {
        match ns {
            Namespace::Soap => &self.soap,
            Namespace::Addressing => &self.addressing,
            Namespace::Wsman => &self.wsman,
        }
    }

    /// Nom qualifié `prefix:local`
    pub fn qname(&self, ns: Namespace, local: &str) -> String {
        format!("{}:{}", self.prefix(ns), local)
    }

    pub fn element(&self, ns: Namespace, local: &str) -> Element {
        Element::new(&self.qname(ns, local))
    }

    /// Élément qualifié contenant uniquement du texte
    pub fn text_element(&self, ns: Namespace, local: &str, text: impl Into<String>) -> Element {
        let mut element = self.element(ns, local);
        element.children.push(XMLNode::Text(text.into()));
        element
    }

    /// Ajoute `s:mustUnderstand="true"`
    pub fn mark_must_understand(&self, element: &mut Element) {
        element
            .attributes
            .insert(self.qname(Namespace::Soap, "mustUnderstand"), "true".to_string());
    }

    /// Déclare les trois espaces de noms sur `element` (racine du document)
    pub fn declare(&self, element: &mut Element) {
        for ns in Namespace::ALL {
            element
                .attributes
                .insert(format!("xmlns:{}", self.prefix(ns)), ns.uri().to_string());
        }
    }
}

fn check_prefix(prefix: &str) -> Result<()> {
    let mut chars = prefix.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.')) {
        return Err(WsmanError::invalid_prefix(prefix, "not an XML NCName"));
    }
    if prefix.to_ascii_lowercase().starts_with("xml") {
        return Err(WsmanError::invalid_prefix(prefix, "reserved by XML"));
    }
    if prefix == RESOURCE_PREFIX {
        return Err(WsmanError::invalid_prefix(prefix, "reserved for CIM fragments"));
    }
    Ok(())
}
