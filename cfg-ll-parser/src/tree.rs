//! Concrete parse trees, stored in an arena.

use std::fmt;

use cfg_grammar::Cfg;
use cfg_symbol::Symbol;

/// Identifies a node within its tree.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the node's position in the arena.
    pub fn usize(self) -> usize {
        self.0 as usize
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
struct Node {
    value: Symbol,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A derivation tree. Every inner node is a nonterminal whose children
/// are the right-hand side of the rule applied to it. An epsilon
/// production gets a single child holding the empty marker.
///
/// The tree owns all of its nodes. Nodes refer to each other by
/// [`NodeId`]; the root always comes first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseTree {
    nodes: Vec<Node>,
    epsilon: Symbol,
}

impl ParseTree {
    pub(crate) fn new(root: Symbol, epsilon: Symbol) -> Self {
        ParseTree {
            nodes: vec![Node {
                value: root,
                parent: None,
                children: vec![],
            }],
            epsilon,
        }
    }

    /// Appends children to a childless node. Returns the leftmost new child.
    pub(crate) fn attach_children(&mut self, parent: NodeId, values: &[Symbol]) -> NodeId {
        debug_assert!(self.nodes[parent.usize()].children.is_empty());
        debug_assert!(!values.is_empty());
        let first = NodeId(self.nodes.len() as u32);
        for &value in values {
            let id = NodeId(self.nodes.len() as u32);
            self.nodes.push(Node {
                value,
                parent: Some(parent),
                children: vec![],
            });
            self.nodes[parent.usize()].children.push(id);
        }
        first
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The symbol held by the node.
    pub fn value(&self, node: NodeId) -> Symbol {
        self.nodes[node.usize()].value
    }

    /// Ordered children of the node.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.usize()].children[..]
    }

    /// Parent of the node, or `None` for the root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.usize()].parent
    }

    /// The node's right neighbour under the same parent. If the node is
    /// the last child, the right neighbour of its nearest ancestor that
    /// has one. The root has none.
    ///
    /// This is the order in which the parser visits the symbols it has
    /// pushed onto its stack.
    pub fn next_in_preorder(&self, node: NodeId) -> Option<NodeId> {
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            let siblings = self.children(parent);
            let position = siblings.iter().position(|&sibling| sibling == current)?;
            if let Some(&next) = siblings.get(position + 1) {
                return Some(next);
            }
            current = parent;
        }
        None
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over nodes depth-first, left to right.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            next: Some(self.root()),
        }
    }

    /// Symbols of childless nodes, left to right, skipping the empty
    /// marker. After a successful parse, these are the input terminals.
    pub fn leaves(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.preorder()
            .filter(move |&node| self.children(node).is_empty())
            .map(move |node| self.value(node))
            .filter(move |&value| value != self.epsilon)
    }

    /// Renders the tree with symbol names in a compact bracketed form,
    /// such as `S(a A(ε) b)`.
    pub fn bracketed(&self, grammar: &Cfg) -> String {
        let mut out = String::new();
        out.push_str(grammar.name(self.value(self.root())));
        // Open nodes with the index of their next child to render.
        let mut stack = vec![(self.root(), 0)];
        while let Some(top) = stack.last_mut() {
            let (node, next) = *top;
            let children = self.children(node);
            let Some(&child) = children.get(next) else {
                if !children.is_empty() {
                    out.push(')');
                }
                stack.pop();
                continue;
            };
            top.1 += 1;
            out.push(if next == 0 { '(' } else { ' ' });
            out.push_str(grammar.name(self.value(child)));
            stack.push((child, 0));
        }
        out
    }

    /// Returns a value that displays the tree with symbol names, one node
    /// per line, indented by depth.
    pub fn display<'a>(&'a self, grammar: &'a Cfg) -> DisplayTree<'a> {
        DisplayTree {
            tree: self,
            grammar,
        }
    }
}

/// Pre-order iterator over tree nodes.
pub struct Preorder<'a> {
    tree: &'a ParseTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = match self.tree.children(current).first() {
            Some(&first_child) => Some(first_child),
            None => self.tree.next_in_preorder(current),
        };
        Some(current)
    }
}

/// Displays a parse tree. See [`ParseTree::display`].
pub struct DisplayTree<'a> {
    tree: &'a ParseTree,
    grammar: &'a Cfg,
}

impl<'a> fmt::Display for DisplayTree<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut stack = vec![(self.tree.root(), 0)];
        while let Some((node, depth)) = stack.pop() {
            writeln!(
                f,
                "{:indent$}{}",
                "",
                self.grammar.name(self.tree.value(node)),
                indent = 2 * depth
            )?;
            stack.extend(
                self.tree
                    .children(node)
                    .iter()
                    .rev()
                    .map(|&child| (child, depth + 1)),
            );
        }
        Ok(())
    }
}
