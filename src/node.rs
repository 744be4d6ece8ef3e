use crate::position::Span;
use std::borrow::Cow;

/// A node of the production tree.
///
/// Every successful rule evaluation yields one node, named after the rule,
/// spanning the text it matched. Children are the nodes of the sub-rules that
/// contributed to the match, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'code> {
    name: Cow<'static, str>,
    span: Span<'code>,
    children: Vec<Node<'code>>,
}

impl<'code> Node<'code> {
    pub fn new(name: Cow<'static, str>, span: Span<'code>, children: Vec<Node<'code>>) -> Self {
        Node {
            name,
            span,
            children,
        }
    }

    /// A node without children, produced by primitive matchers
    pub fn leaf(name: Cow<'static, str>, span: Span<'code>) -> Self {
        Node::new(name, span, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn span(&self) -> Span<'code> {
        self.span
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn children(&self) -> &[Node<'code>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The exact input text this node matched
    pub fn as_str(&self) -> &'code str {
        self.span.as_str()
    }

    /// First node named `name`, searching this node and its descendants in
    /// pre-order
    pub fn find(&self, name: &str) -> Option<&Node<'code>> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// All nodes named `name`, in pre-order. Matches nested inside a match
    /// are included.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Node<'code>> {
        let mut found = Vec::new();
        self.collect(name, &mut found);
        found
    }

    fn collect<'a>(&'a self, name: &str, found: &mut Vec<&'a Node<'code>>) {
        if self.name == name {
            found.push(self);
        }
        for child in &self.children {
            child.collect(name, found);
        }
    }
}
