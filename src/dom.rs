//! The document model walked by the outline renderer.
//!
//! The html5ever DOM is converted once into an owned tree of [`Node`]s.
//! Only what the outline needs is kept: tag names, attributes, the
//! element's own leading text, comments and the child order.

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::io;

/// One node of the outline tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// An element with its attributes and children.
    Element(Element),
    /// A comment.
    Comment(Comment),
}

/// An HTML element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    /// Local tag name, lower case as produced by the parser.
    pub tag: String,
    /// Attributes in source order.  Keys are unique.
    pub attributes: Vec<(String, String)>,
    /// Text appearing before the first child node, if any.
    pub text: Option<String>,
    /// Child elements and comments, in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// True if the element has no text of its own (children and
    /// attributes don't count).
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, |t| t.trim().is_empty())
    }
}

// Children are freed from a work stack so that dropping a deeply
// nested tree doesn't recurse once per level.
impl Drop for Element {
    fn drop(&mut self) {
        let mut nodes = std::mem::take(&mut self.children);
        while let Some(node) = nodes.pop() {
            if let Node::Element(mut elt) = node {
                nodes.append(&mut elt.children);
            }
        }
    }
}

/// A comment node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comment {
    /// The comment text, untrimmed.
    pub text: String,
}

/// A parsed document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Top level nodes (normally comments followed by the `html` element).
    pub children: Vec<Node>,
}

impl Document {
    /// The document's root element, normally `html`.
    pub fn root(&self) -> Option<&Element> {
        self.children.iter().find_map(|node| match node {
            Node::Element(elt) => Some(elt),
            Node::Comment(_) => None,
        })
    }
}

/// Reads and parses HTML from `input`.
///
/// Malformed markup is never an error; html5ever recovers and builds
/// a best-effort tree.  Only failures to read `input` are reported.
pub fn parse(mut input: impl io::Read) -> crate::Result<Document> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut input)?;
    Ok(dom_to_document(dom.document.clone()))
}

/// Convert an html5ever DOM (from its document node) into a [`Document`].
pub fn dom_to_document(handle: Handle) -> Document {
    let result = tree_map_reduce(&mut (), handle, |_, handle| process_dom_node(handle));
    let children = match result {
        Some(Converted::Document(children)) => children,
        Some(Converted::Node(node)) => vec![node],
        Some(Converted::Text(_)) | None => Vec::new(),
    };
    log::trace!("dom_to_document: {} top level nodes", children.len());
    Document { children }
}

/// The intermediate result of converting one DOM node.
enum Converted {
    Document(Vec<Node>),
    Node(Node),
    Text(String),
}

/// Combines the converted children into the result for their parent.
type ResultReducer<'a, C, R> = dyn Fn(&mut C, Vec<R>) -> Option<R> + 'a;

/// The result of converting one node.
enum TreeMapResult<'a, C, N, R> {
    /// A completed result.
    Finished(R),
    /// Deferred completion: finished by `cons` once the children are done.
    PendingChildren {
        children: Vec<N>,
        cons: Box<ResultReducer<'a, C, R>>,
    },
    /// Nothing (e.g. a doctype or processing instruction).
    Nothing,
}

/// Map over a tree bottom-up without recursing, so arbitrarily deep
/// documents don't exhaust the call stack.
fn tree_map_reduce<'a, C, N, R, M>(context: &mut C, top: N, mut process_node: M) -> Option<R>
where
    M: for<'c> FnMut(&'c mut C, N) -> TreeMapResult<'a, C, N, R>,
{
    /// A node partially converted, waiting for its children.
    struct PendingNode<'a, C, R, N> {
        construct: Box<ResultReducer<'a, C, R>>,
        children: Vec<R>,
        to_process: std::vec::IntoIter<N>,
    }

    let mut pending_stack = vec![PendingNode {
        // We only expect one child, which we'll just return.
        construct: Box::new(|_, mut cs| cs.pop()),
        children: Vec::new(),
        to_process: vec![top].into_iter(),
    }];
    loop {
        let current = pending_stack.last_mut()?;
        if let Some(h) = current.to_process.next() {
            match process_node(context, h) {
                TreeMapResult::Finished(result) => current.children.push(result),
                TreeMapResult::PendingChildren { children, cons } => {
                    pending_stack.push(PendingNode {
                        construct: cons,
                        children: Vec::new(),
                        to_process: children.into_iter(),
                    });
                }
                TreeMapResult::Nothing => {}
            }
        } else {
            // No more children, so finally construct the parent.
            let completed = pending_stack.pop()?;
            let reduced = (completed.construct)(context, completed.children);
            match (reduced, pending_stack.last_mut()) {
                (Some(node), Some(parent)) => parent.children.push(node),
                (Some(node), None) => break Some(node),
                (None, None) => break None,
                (None, Some(_)) => {}
            }
        }
    }
}

fn pending<'a>(
    handle: &Handle,
    f: impl Fn(&mut (), Vec<Converted>) -> Option<Converted> + 'a,
) -> TreeMapResult<'a, (), Handle, Converted> {
    TreeMapResult::PendingChildren {
        children: handle.children.borrow().clone(),
        cons: Box::new(f),
    }
}

fn process_dom_node<'a>(handle: Handle) -> TreeMapResult<'a, (), Handle, Converted> {
    use TreeMapResult::*;

    match &handle.data {
        NodeData::Document => pending(&handle, |_, cs| {
            Some(Converted::Document(
                cs.into_iter()
                    .filter_map(|c| match c {
                        Converted::Node(node) => Some(node),
                        _ => None,
                    })
                    .collect(),
            ))
        }),
        NodeData::Comment { contents } => Finished(Converted::Node(Node::Comment(Comment {
            text: contents.to_string(),
        }))),
        NodeData::Text { contents } => Finished(Converted::Text(contents.borrow().to_string())),
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.to_string();
            let attributes: Vec<(String, String)> = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            pending(&handle, move |_, cs| {
                let mut text = None;
                let mut children = Vec::new();
                for (i, child) in cs.into_iter().enumerate() {
                    match child {
                        // Only text before the first child node belongs
                        // to the element itself.
                        Converted::Text(t) if i == 0 => text = Some(t),
                        Converted::Text(_) => {}
                        Converted::Node(node) => children.push(node),
                        Converted::Document(_) => {}
                    }
                }
                Some(Converted::Node(Node::Element(Element {
                    tag: tag.clone(),
                    attributes: attributes.clone(),
                    text,
                    children,
                })))
            })
        }
        NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => Nothing,
    }
}
