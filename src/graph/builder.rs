//! Directed link graph builder
//!
//! Nodes are identified by name and receive dense ids in insertion order.
//! Each node keeps a set of outgoing targets, so repeated links collapse
//! into one edge.

use rustc_hash::FxHashMap;

/// A node in the link graph
#[derive(Debug, Clone)]
pub struct LinkNode {
    /// The node's name
    pub name: String,
    /// Outgoing targets in first-seen order, without duplicates
    pub targets: Vec<u32>,
}

impl LinkNode {
    /// Create a new node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            targets: Vec::new(),
        }
    }

    /// Number of outgoing links
    pub fn out_degree(&self) -> usize {
        self.targets.len()
    }

    /// Whether the node has no outgoing links
    pub fn is_dangling(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A mutable directed graph keyed by node name
#[derive(Debug, Default, Clone)]
pub struct LinkGraph {
    /// Maps name -> node ID
    name_to_id: FxHashMap<String, u32>,
    /// Node storage
    nodes: Vec<LinkNode>,
}

impl LinkGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            name_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Build a graph from `(node, neighbors)` pairs.
    ///
    /// Source nodes get ids in iteration order; a neighbor that never appears
    /// as a source gets the next id when first seen.
    pub fn from_adjacency<'a, I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, N)>,
        N: IntoIterator<Item = &'a str>,
    {
        let adjacency: Vec<(&str, Vec<&str>)> = adjacency
            .into_iter()
            .map(|(node, neighbors)| (node, neighbors.into_iter().collect()))
            .collect();

        let mut graph = Self::with_capacity(adjacency.len());
        for (node, _) in &adjacency {
            graph.get_or_create_node(node);
        }
        for (node, neighbors) in &adjacency {
            for target in neighbors {
                graph.add_link(node, target);
            }
        }
        graph
    }

    /// Get or create a node for the given name, returning its ID
    pub fn get_or_create_node(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.name_to_id.insert(name.to_string(), id);
        self.nodes.push(LinkNode::new(name));
        id
    }

    /// Add a directed link, creating either endpoint if needed.
    ///
    /// Returns `false` if the link already existed.
    pub fn add_link(&mut self, from: &str, to: &str) -> bool {
        let from = self.get_or_create_node(from);
        let to = self.get_or_create_node(to);
        self.add_link_by_id(from, to)
    }

    /// Add a directed link between existing node ids
    pub fn add_link_by_id(&mut self, from: u32, to: u32) -> bool {
        if to as usize >= self.nodes.len() {
            return false;
        }
        match self.nodes.get_mut(from as usize) {
            Some(node) if !node.targets.contains(&to) => {
                node.targets.push(to);
                true
            }
            _ => false,
        }
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(LinkNode::out_degree).sum()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&LinkNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by name
    pub fn get_node_id(&self, name: &str) -> Option<u32> {
        self.name_to_id.get(name).copied()
    }

    /// Get the name for a node ID
    pub fn get_name(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.name.as_str())
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &LinkNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Find dangling nodes (nodes with no outgoing links)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        self.nodes()
            .filter(|(_, n)| n.is_dangling())
            .map(|(id, _)| id)
            .collect()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ids_are_stable() {
        let mut graph = LinkGraph::new();

        let id_a = graph.get_or_create_node("webpage-1");
        let id_b = graph.get_or_create_node("webpage-2");
        let id_c = graph.get_or_create_node("webpage-1");

        assert_eq!(id_a, id_c);
        assert_ne!(id_a, id_b);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.get_name(id_b), Some("webpage-2"));
    }

    #[test]
    fn test_links_are_directed_sets() {
        let mut graph = LinkGraph::new();

        assert!(graph.add_link("a", "b"));
        assert!(!graph.add_link("a", "b"));

        let a = graph.get_node_id("a").unwrap();
        let b = graph.get_node_id("b").unwrap();
        assert_eq!(graph.get_node(a).unwrap().targets, vec![b]);
        assert!(graph.get_node(b).unwrap().is_dangling());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_from_adjacency_orders_sources_first() {
        let graph = LinkGraph::from_adjacency([("x", vec!["z"]), ("y", vec!["x"])]);

        assert_eq!(graph.get_node_id("x"), Some(0));
        assert_eq!(graph.get_node_id("y"), Some(1));
        assert_eq!(graph.get_node_id("z"), Some(2));
        assert_eq!(graph.dangling_nodes(), vec![2]);
    }

    #[test]
    fn test_add_link_by_id_rejects_unknown_nodes() {
        let mut graph = LinkGraph::new();
        let a = graph.get_or_create_node("a");

        assert!(!graph.add_link_by_id(a, 7));
        assert!(!graph.add_link_by_id(7, a));
        assert!(graph.add_link_by_id(a, a));
    }
}
