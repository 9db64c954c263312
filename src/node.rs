use crate::label::EdgeLabel;
use crate::symbol::Symbol;
use ahash::AHashMap as HashMap;
use slotmap::DefaultKey;
use std::hash::Hash;

/// Classification of a node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Root,
    Internal,
    Leaf,
}

/// A vertex of the suffix tree.
///
/// Children are arena keys owned by this node. The suffix link is a plain key
/// as well, but never an owning one.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub children: HashMap<Symbol<T>, DefaultKey>,
    /// Incoming edge label; `None` only for the root.
    pub label: Option<EdgeLabel>,
    pub suffix_link: Option<DefaultKey>,
    pub kind: NodeKind,
}

impl<T> Node<T> {
    pub(crate) fn root() -> Self {
        Self {
            children: HashMap::default(),
            label: None,
            suffix_link: None,
            kind: NodeKind::Root,
        }
    }

    /// A leaf whose open edge starts at `start`.
    pub(crate) fn leaf(start: usize) -> Self {
        Self {
            children: HashMap::default(),
            label: Some(EdgeLabel::open(start)),
            suffix_link: None,
            kind: NodeKind::Leaf,
        }
    }

    pub(crate) fn internal(start: usize, end: usize) -> Self {
        Self {
            children: HashMap::default(),
            label: Some(EdgeLabel::closed(start, end)),
            suffix_link: None,
            kind: NodeKind::Internal,
        }
    }

    #[inline]
    pub(crate) fn is_root(&self) -> bool {
        self.kind == NodeKind::Root
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    /// Incoming edge label.
    ///
    /// # Panics
    ///
    /// Panics when called on the root, which has no incoming edge.
    #[inline]
    pub(crate) fn label(&self) -> &EdgeLabel {
        match &self.label {
            Some(label) => label,
            None => panic!("root node has no incoming edge label"),
        }
    }

    #[inline]
    pub(crate) fn label_mut(&mut self) -> &mut EdgeLabel {
        match &mut self.label {
            Some(label) => label,
            None => panic!("root node has no incoming edge label"),
        }
    }

    /// Records a suffix link from this node.
    ///
    /// # Panics
    ///
    /// Panics on leaves and on self-links; both indicate a construction defect.
    pub(crate) fn set_suffix_link(&mut self, own_key: DefaultKey, target: DefaultKey) {
        assert!(!self.is_leaf(), "suffix link set on a leaf");
        assert_ne!(own_key, target, "suffix link must not point to itself");
        self.suffix_link = Some(target);
    }
}

impl<T: Hash + Eq> Node<T> {
    /// Attaches (or replaces) the edge keyed by `symbol`.
    #[inline]
    pub(crate) fn add_edge(&mut self, symbol: Symbol<T>, child: DefaultKey) {
        assert!(!self.is_leaf(), "leaves cannot have children");
        self.children.insert(symbol, child);
    }

    /// Looks up the edge starting with `symbol`; `None` means no such edge.
    #[inline]
    pub(crate) fn get_node(&self, symbol: &Symbol<T>) -> Option<DefaultKey> {
        self.children.get(symbol).copied()
    }
}

impl<T: Ord> Node<T> {
    /// Children ordered by their first edge symbol.
    pub(crate) fn sorted_children(&self) -> Vec<(&Symbol<T>, DefaultKey)> {
        let mut children: Vec<_> = self.children.iter().map(|(s, &k)| (s, k)).collect();
        children.sort_unstable_by(|a, b| a.0.cmp(b.0));
        children
    }
}
