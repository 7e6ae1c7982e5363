//! SelectorSet et références (EPR) WS-Management

use xmltree::{Element, XMLNode};

use crate::namespaces::{ANONYMOUS, Namespace, NamespaceContext};

/// Un couple nom/valeur identifiant une instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub name: String,
    pub value: String,
}

/// Ensemble ordonné de sélecteurs
///
/// L'ordre d'insertion est conservé dans le XML produit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorSet {
    selectors: Vec<Selector>,
}

impl SelectorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// SelectorSet à un seul sélecteur
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with(name, value)
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.selectors.push(Selector {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.selectors
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selector> {
        self.selectors.iter()
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// `<wsman:SelectorSet><wsman:Selector Name="...">value</wsman:Selector>...`
    pub fn to_element(&self, ctx: &NamespaceContext) -> Element {
        let mut selector_set = ctx.element(Namespace::Wsman, "SelectorSet");
        for selector in &self.selectors {
            let mut el = ctx.text_element(Namespace::Wsman, "Selector", selector.value.clone());
            el.attributes.insert("Name".to_string(), selector.name.clone());
            selector_set.children.push(XMLNode::Element(el));
        }
        selector_set
    }
}

/// Crée un SelectorSet à un sélecteur
///
/// # Arguments
///
/// * `name` - valeur de l'attribut `Name` du sélecteur
/// * `value` - texte du sélecteur
pub fn create_selectorset(name: &str, value: &str) -> SelectorSet {
    SelectorSet::single(name, value)
}

/// Construit une référence vers une autre instance managée
///
/// ```xml
/// <qname>
///   <wsa:Address>anonymous</wsa:Address>
///   <wsa:ReferenceParameters>
///     <wsman:ResourceURI>resource_uri</wsman:ResourceURI>
///     <wsman:SelectorSet>...</wsman:SelectorSet>
///   </wsa:ReferenceParameters>
/// </qname>
/// ```
///
/// # Arguments
///
/// * `qname` - nom qualifié de l'élément référence (ex: "n1:ManagedElement")
/// * `resource_uri` - URI de la ressource ciblée
/// * `selector_set` - instance ciblée
pub fn create_reference(
    ctx: &NamespaceContext,
    qname: &str,
    resource_uri: &str,
    selector_set: &SelectorSet,
) -> Element {
    let mut reference = Element::new(qname);
    reference.children.push(XMLNode::Element(ctx.text_element(
        Namespace::Addressing,
        "Address",
        ANONYMOUS,
    )));

    let mut parameters = ctx.element(Namespace::Addressing, "ReferenceParameters");
    parameters.children.push(XMLNode::Element(ctx.text_element(
        Namespace::Wsman,
        "ResourceURI",
        resource_uri,
    )));
    parameters
        .children
        .push(XMLNode::Element(selector_set.to_element(ctx)));

    reference.children.push(XMLNode::Element(parameters));
    reference
}
