//! Construction des enveloppes WS-Management (Get, Invoke, Put)

use tracing::debug;
use uuid::Uuid;
use xmltree::Element;

use crate::envelope::{SoapBody, SoapEnvelope, SoapHeader};
use crate::error::Result;
use crate::namespaces::{METHOD_GET, METHOD_PUT, NamespaceContext};
use crate::selector::SelectorSet;

/// Nouvel identifiant de message `uuid:<v4>`
pub fn new_message_id() -> String {
    format!("uuid:{}", Uuid::new_v4())
}

/// Builder d'enveloppes, sans état autre que son contexte d'espaces de noms
///
/// Chaque appel alloue ses propres structures et son propre `MessageID` :
/// un même builder peut être partagé entre threads.
#[derive(Debug, Clone, Default)]
pub struct EnvelopeBuilder {
    context: NamespaceContext,
}

impl EnvelopeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder sur un contexte personnalisé, refusé si ses préfixes sont invalides
    pub fn with_context(context: NamespaceContext) -> Result<Self> {
        context.validate()?;
        Ok(Self { context })
    }

    pub fn context(&self) -> &NamespaceContext {
        &self.context
    }

    /// Construit un en-tête avec un `MessageID` neuf
    pub fn build_header(
        &self,
        host_uri: &str,
        resource_uri: &str,
        action: &str,
        selector_set: Option<SelectorSet>,
    ) -> SoapHeader {
        SoapHeader::new(
            action.to_string(),
            host_uri.to_string(),
            resource_uri.to_string(),
            new_message_id(),
            selector_set,
        )
    }

    pub fn build_body(&self, method_input: Option<Element>) -> SoapBody {
        SoapBody::new(method_input)
    }

    fn build(
        &self,
        host_uri: &str,
        resource_uri: &str,
        action: &str,
        selector_set: Option<SelectorSet>,
        content: Option<Element>,
    ) -> SoapEnvelope {
        let header = self.build_header(host_uri, resource_uri, action, selector_set);
        let body = self.build_body(content);
        debug!(
            action,
            to = host_uri,
            message_id = header.message_id(),
            "WS-Management envelope built"
        );
        SoapEnvelope::new(self.context.clone(), header, body)
    }

    /// WS-Transfer Get, Body vide
    pub fn get(
        &self,
        host_uri: &str,
        resource_uri: &str,
        selector_set: Option<SelectorSet>,
    ) -> SoapEnvelope {
        self.build(host_uri, resource_uri, METHOD_GET, selector_set, None)
    }

    /// Invocation de `method` ; l'action vaut `{resource_uri}/{method}`
    pub fn invoke(
        &self,
        host_uri: &str,
        resource_uri: &str,
        method: &str,
        selector_set: Option<SelectorSet>,
        method_input: Option<Element>,
    ) -> SoapEnvelope {
        let action = format!("{}/{}", resource_uri, method);
        self.build(host_uri, resource_uri, &action, selector_set, method_input)
    }

    /// WS-Transfer Put d'une représentation complète
    pub fn put(
        &self,
        host_uri: &str,
        resource_uri: &str,
        selector_set: Option<SelectorSet>,
        representation: Element,
    ) -> SoapEnvelope {
        self.build(
            host_uri,
            resource_uri,
            METHOD_PUT,
            selector_set,
            Some(representation),
        )
    }
}

/// Get sur `resource_uri` avec le contexte par défaut
pub fn wsman_get(
    host_uri: &str,
    resource_uri: &str,
    selector_set: Option<SelectorSet>,
) -> SoapEnvelope {
    EnvelopeBuilder::default().get(host_uri, resource_uri, selector_set)
}

/// Invocation de méthode avec le contexte par défaut
pub fn wsman_invoke(
    host_uri: &str,
    resource_uri: &str,
    method: &str,
    selector_set: Option<SelectorSet>,
    method_input: Option<Element>,
) -> SoapEnvelope {
    EnvelopeBuilder::default().invoke(host_uri, resource_uri, method, selector_set, method_input)
}

/// Put avec le contexte par défaut
pub fn wsman_put(
    host_uri: &str,
    resource_uri: &str,
    selector_set: Option<SelectorSet>,
    representation: Element,
) -> SoapEnvelope {
    EnvelopeBuilder::default().put(host_uri, resource_uri, selector_set, representation)
}

/// Requête Get sérialisée
pub fn get_request(host_uri: &str, resource_uri: &str) -> Result<String> {
    wsman_get(host_uri, resource_uri, None).to_xml()
}
