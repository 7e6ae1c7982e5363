//! Fragments CIM placés dans le Body d'une requête
//!
//! Deux formes :
//! - `<n1:Method_INPUT>` pour l'invocation d'une méthode,
//! - `<n1:ClassName>` pour une représentation complète envoyée par Put.
//!
//! Le préfixe [`RESOURCE_PREFIX`] est déclaré sur la racine du fragment.

use xmltree::{Element, XMLNode};

use crate::namespaces::{NamespaceContext, RESOURCE_PREFIX};
use crate::resources::class_name;
use crate::selector::{SelectorSet, create_reference};

#[derive(Debug, Clone)]
pub struct CimFragment {
    context: NamespaceContext,
    element: Element,
}

impl CimFragment {
    fn with_root(ctx: &NamespaceContext, resource_uri: &str, local: &str) -> Self {
        let mut element = Element::new(&format!("{}:{}", RESOURCE_PREFIX, local));
        element
            .attributes
            .insert(format!("xmlns:{}", RESOURCE_PREFIX), resource_uri.to_string());
        Self {
            context: ctx.clone(),
            element,
        }
    }

    /// Fragment `<n1:{method}_INPUT xmlns:n1="{resource_uri}">`
    pub fn method_input(ctx: &NamespaceContext, resource_uri: &str, method: &str) -> Self {
        Self::with_root(ctx, resource_uri, &format!("{}_INPUT", method))
    }

    /// Représentation d'instance, racine nommée d'après la classe de `resource_uri`
    pub fn instance(ctx: &NamespaceContext, resource_uri: &str) -> Self {
        Self::with_root(ctx, resource_uri, class_name(resource_uri))
    }

    /// Ajoute un paramètre à valeur simple
    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        let mut child = Element::new(&format!("{}:{}", RESOURCE_PREFIX, name));
        child.children.push(XMLNode::Text(value.to_string()));
        self.element.children.push(XMLNode::Element(child));
        self
    }

    /// Ajoute un paramètre référence (EPR) vers une autre instance
    pub fn reference(mut self, name: &str, resource_uri: &str, selector_set: &SelectorSet) -> Self {
        let qname = format!("{}:{}", RESOURCE_PREFIX, name);
        let reference = create_reference(&self.context, &qname, resource_uri, selector_set);
        self.element.children.push(XMLNode::Element(reference));
        self
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }
}
