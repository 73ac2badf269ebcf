use slotmap::SlotMap;

use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a navigation graph node.
    pub struct NodeId;
}

slotmap::new_key_type! {
    /// Unique identifier for a navigation graph connection.
    pub struct ConnectionId;
}

/// A navigation graph node, placed at the midpoint of an interior mesh edge.
#[derive(Debug, Clone)]
pub struct GraphNode {
    /// Position of the node.
    pub position: Point2,
    /// Connections incident to this node.
    pub connections: Vec<ConnectionId>,
}

/// A bidirectional link between two nodes.
///
/// The cost is the Euclidean distance between the endpoint positions; both
/// endpoints store the connection.
#[derive(Debug, Clone, Copy)]
pub struct GraphConnection {
    /// One endpoint.
    pub start: NodeId,
    /// The other endpoint.
    pub end: NodeId,
    /// Euclidean distance between the endpoints.
    pub cost: f64,
}

/// The navigation graph produced for one triangulation.
///
/// Nodes and connections live in slotmap arenas and reference each other via
/// typed keys, so the cyclic node/connection structure needs no shared
/// ownership.
#[derive(Debug, Default)]
pub struct NavGraph {
    nodes: SlotMap<NodeId, GraphNode>,
    connections: SlotMap<ConnectionId, GraphConnection>,
}

impl NavGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node at the given position, with no connections yet.
    pub fn add_node(&mut self, position: Point2) -> NodeId {
        self.nodes.insert(GraphNode {
            position,
            connections: Vec::new(),
        })
    }

    /// Connects two nodes, registering the connection on both endpoints.
    ///
    /// The cost is the Euclidean distance between the node positions. If the
    /// pair is already connected, the existing connection is returned instead
    /// of creating a parallel one.
    pub fn connect(&mut self, start: NodeId, end: NodeId) -> ConnectionId {
        if let Some(existing) = self.connection_between(start, end) {
            return existing;
        }
        let cost = nalgebra::distance(&self.nodes[start].position, &self.nodes[end].position);
        let id = self.connections.insert(GraphConnection { start, end, cost });
        self.nodes[start].connections.push(id);
        self.nodes[end].connections.push(id);
        id
    }

    /// Returns the existing connection between two nodes, if any.
    #[must_use]
    pub fn connection_between(&self, a: NodeId, b: NodeId) -> Option<ConnectionId> {
        self.nodes.get(a)?.connections.iter().copied().find(|&id| {
            let connection = self.connections[id];
            (connection.start == a && connection.end == b)
                || (connection.start == b && connection.end == a)
        })
    }

    /// Returns the node on the other side of a connection.
    ///
    /// Returns `None` if the given node is not an endpoint of the connection.
    #[must_use]
    pub fn neighbor_of(&self, connection: ConnectionId, node: NodeId) -> Option<NodeId> {
        let connection = self.connections.get(connection)?;
        if connection.start == node {
            Some(connection.end)
        } else if connection.end == node {
            Some(connection.start)
        } else {
            None
        }
    }

    /// Returns a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// Returns a connection by id.
    #[must_use]
    pub fn connection(&self, id: ConnectionId) -> Option<&GraphConnection> {
        self.connections.get(id)
    }

    /// Iterates over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &GraphNode)> {
        self.nodes.iter()
    }

    /// Iterates over all connections.
    pub fn connections(&self) -> impl Iterator<Item = (ConnectionId, &GraphConnection)> {
        self.connections.iter()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of connections.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}
