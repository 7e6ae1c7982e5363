//! Structures de l'enveloppe SOAP WS-Management

use tracing::trace;
use xmltree::{Element, XMLNode};

use crate::config::XmlOptions;
use crate::error::Result;
use crate::namespaces::{ANONYMOUS, Namespace, NamespaceContext};
use crate::selector::SelectorSet;

/// En-tête WS-Addressing / WS-Management
///
/// Les champs sont figés à la construction ; le `MessageID` est généré par
/// [`crate::EnvelopeBuilder::build_header`] et n'est jamais réutilisé.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapHeader {
    action: String,
    to: String,
    resource_uri: String,
    message_id: String,
    selector_set: Option<SelectorSet>,
}

impl SoapHeader {
    pub(crate) fn new(
        action: String,
        to: String,
        resource_uri: String,
        message_id: String,
        selector_set: Option<SelectorSet>,
    ) -> Self {
        Self {
            action,
            to,
            resource_uri,
            message_id,
            selector_set,
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn resource_uri(&self) -> &str {
        &self.resource_uri
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn selector_set(&self) -> Option<&SelectorSet> {
        self.selector_set.as_ref()
    }

    /// Ordre fixe : Action, To, ResourceURI, MessageID, ReplyTo, SelectorSet
    pub fn to_element(&self, ctx: &NamespaceContext) -> Element {
        let mut header = ctx.element(Namespace::Soap, "Header");

        let mandatory = [
            (Namespace::Addressing, "Action", &self.action),
            (Namespace::Addressing, "To", &self.to),
            (Namespace::Wsman, "ResourceURI", &self.resource_uri),
            (Namespace::Addressing, "MessageID", &self.message_id),
        ];
        for (ns, local, value) in mandatory {
            let mut el = ctx.text_element(ns, local, value.as_str());
            ctx.mark_must_understand(&mut el);
            header.children.push(XMLNode::Element(el));
        }

        let mut reply_to = ctx.element(Namespace::Addressing, "ReplyTo");
        reply_to.children.push(XMLNode::Element(ctx.text_element(
            Namespace::Addressing,
            "Address",
            ANONYMOUS,
        )));
        header.children.push(XMLNode::Element(reply_to));

        if let Some(selector_set) = &self.selector_set {
            header
                .children
                .push(XMLNode::Element(selector_set.to_element(ctx)));
        }

        header
    }
}

/// Corps SOAP : zéro ou un fragment
#[derive(Debug, Clone, Default)]
pub struct SoapBody {
    content: Option<Element>,
}

impl SoapBody {
    pub fn new(content: Option<Element>) -> Self {
        Self { content }
    }

    pub fn content(&self) -> Option<&Element> {
        self.content.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    pub fn to_element(&self, ctx: &NamespaceContext) -> Element {
        let mut body = ctx.element(Namespace::Soap, "Body");
        if let Some(content) = &self.content {
            body.children.push(XMLNode::Element(content.clone()));
        }
        body
    }
}

/// Enveloppe complète : exactement un Header puis un Body
#[derive(Debug, Clone)]
pub struct SoapEnvelope {
    context: NamespaceContext,
    header: SoapHeader,
    body: SoapBody,
}

impl SoapEnvelope {
    pub fn new(context: NamespaceContext, header: SoapHeader, body: SoapBody) -> Self {
        Self {
            context,
            header,
            body,
        }
    }

    pub fn header(&self) -> &SoapHeader {
        &self.header
    }

    pub fn body(&self) -> &SoapBody {
        &self.body
    }

    pub fn context(&self) -> &NamespaceContext {
        &self.context
    }

    pub fn action(&self) -> &str {
        self.header.action()
    }

    pub fn message_id(&self) -> &str {
        self.header.message_id()
    }

    /// Arbre XML complet, espaces de noms déclarés sur la racine
    pub fn to_element(&self) -> Element {
        let mut envelope = self.context.element(Namespace::Soap, "Envelope");
        self.context.declare(&mut envelope);
        envelope
            .children
            .push(XMLNode::Element(self.header.to_element(&self.context)));
        envelope
            .children
            .push(XMLNode::Element(self.body.to_element(&self.context)));
        envelope
    }

    /// Sérialise avec les options par défaut (déclaration XML, indentation)
    pub fn to_xml(&self) -> Result<String> {
        self.to_xml_with(&XmlOptions::default())
    }

    pub fn to_xml_with(&self, options: &XmlOptions) -> Result<String> {
        let mut buf = Vec::new();
        self.to_element()
            .write_with_config(&mut buf, options.emitter_config())?;
        let xml = String::from_utf8(buf)?;

        trace!(
            message_id = %self.header.message_id,
            bytes = xml.len(),
            "WS-Management envelope serialized"
        );
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::METHOD_GET;

    fn sample_header(selector_set: Option<SelectorSet>) -> SoapHeader {
        SoapHeader::new(
            METHOD_GET.to_string(),
            "http://10.0.0.5:16992/wsman".to_string(),
            "http://example.com/Resource".to_string(),
            "uuid:00000000-0000-4000-8000-000000000000".to_string(),
            selector_set,
        )
    }

    fn child_names(el: &Element) -> Vec<String> {
        el.children
            .iter()
            .filter_map(|n| n.as_element())
            .map(|e| e.name.clone())
            .collect()
    }

    #[test]
    fn test_body_content_accessor() {
        let body = SoapBody::new(Some(Element::new("n1:Thing")));
        assert!(!body.is_empty());
        assert_eq!(body.content().map(|e| e.name.as_str()), Some("n1:Thing"));
        assert!(SoapBody::default().content().is_none());
    }

    #[test]
    fn test_header_field_order() {
        let ctx = NamespaceContext::default();
        let header = sample_header(Some(SelectorSet::single("Name", "x"))).to_element(&ctx);

        assert_eq!(
            child_names(&header),
            vec![
                "wsa:Action",
                "wsa:To",
                "wsman:ResourceURI",
                "wsa:MessageID",
                "wsa:ReplyTo",
                "wsman:SelectorSet"
            ]
        );
    }

    #[test]
    fn test_must_understand_markers() {
        let ctx = NamespaceContext::default();
        let header = sample_header(None).to_element(&ctx);

        for name in ["wsa:Action", "wsa:To", "wsman:ResourceURI", "wsa:MessageID"] {
            let el = header.get_child(name).unwrap();
            assert_eq!(
                el.attributes.get("s:mustUnderstand").map(|v| v.as_str()),
                Some("true"),
                "{} must be marked mustUnderstand",
                name
            );
        }
        let reply_to = header.get_child("wsa:ReplyTo").unwrap();
        assert!(reply_to.attributes.is_empty());
        assert!(header.get_child("wsman:SelectorSet").is_none());
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = SoapEnvelope::new(
            NamespaceContext::default(),
            sample_header(None),
            SoapBody::default(),
        );
        let root = envelope.to_element();

        assert_eq!(root.name, "s:Envelope");
        assert_eq!(child_names(&root), vec!["s:Header", "s:Body"]);
        assert!(root.get_child("s:Body").unwrap().children.is_empty());
    }

    #[test]
    fn test_serialization_options() {
        let envelope = SoapEnvelope::new(
            NamespaceContext::default(),
            sample_header(None),
            SoapBody::default(),
        );

        let pretty = envelope.to_xml().unwrap();
        assert!(pretty.starts_with("<?xml"));
        assert!(pretty.contains("xmlns:s=\"http://www.w3.org/2003/05/soap-envelope\""));

        let compact = envelope
            .to_xml_with(&XmlOptions {
                write_declaration: false,
                indent: false,
                ..XmlOptions::default()
            })
            .unwrap();
        assert!(compact.starts_with("<s:Envelope"));
        assert!(!compact.contains('\n'));
    }
}
