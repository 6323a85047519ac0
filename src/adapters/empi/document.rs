//! Path-based reading of HL7 v2 XML documents
//!
//! HL7 v2 XML nests segment, field and component elements whose names carry
//! their position (`PID.5`, `XPN.1`, `FN.1`). [`Element`] walks such paths by
//! local name, ignoring namespaces, and treats any missing step as empty text
//! so callers can read optional fields without ceremony.

use roxmltree::Node;

/// An element within a parsed document
#[derive(Debug, Clone, Copy)]
pub struct Element<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> Element<'a, 'input> {
    pub fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// Local name, without namespace prefix
    pub fn name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    /// First child element with the given local name
    pub fn child(&self, name: &str) -> Option<Self> {
        self.children(name).next()
    }

    /// All child elements with the given local name, in document order
    pub fn children<'n>(&self, name: &'n str) -> impl Iterator<Item = Self> + 'n
    where
        'a: 'n,
        'input: 'n,
    {
        self.node
            .children()
            .filter(move |n| n.is_element() && n.tag_name().name() == name)
            .map(Self::new)
    }

    /// Follow a path of local names, taking the first match at each step
    pub fn at(&self, path: &[&str]) -> Option<Self> {
        path.iter().try_fold(*self, |element, name| element.child(name))
    }

    /// Trimmed character data at the end of a path, or an empty string if any
    /// step is missing
    ///
    /// All text children are joined, so comments inside a field do not cut
    /// its value short.
    pub fn text(&self, path: &[&str]) -> String {
        self.at(path)
            .map(|element| {
                element
                    .node
                    .children()
                    .filter(|n| n.is_text())
                    .filter_map(|n| n.text())
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .unwrap_or_default()
    }

    /// Attribute value by local name, or an empty string
    pub fn attribute(&self, name: &str) -> String {
        self.node
            .attributes()
            .find(|attr| attr.name() == name)
            .map(|attr| attr.value().to_string())
            .unwrap_or_default()
    }
}
