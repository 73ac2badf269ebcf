use std::collections::HashMap;

use crate::error::{GeometryError, Result};
use crate::graph::{NavGraph, NodeId};
use crate::mesh::MeshTopology;

/// Builds the navigation graph as the dual of a triangulation.
///
/// Every interior (two-triangle) edge reachable from the seed gets exactly one
/// node at its midpoint. Connections are created between a node and the node
/// that led to it during traversal, and between the two far-edge nodes of a
/// triangle whose remaining edges are both interior (closing the triangle's
/// third side in the dual). Boundary edges never produce nodes.
///
/// The traversal runs on an explicit work stack keyed by triangle index, so
/// mesh size never translates into call-stack depth. Triangles unreachable
/// from the seed (disconnected mesh islands) are silently excluded.
#[derive(Debug)]
pub struct BuildNavGraph<'a> {
    topology: &'a MeshTopology,
}

impl<'a> BuildNavGraph<'a> {
    /// Creates a new graph building operation.
    #[must_use]
    pub fn new(topology: &'a MeshTopology) -> Self {
        Self { topology }
    }

    /// Executes the operation, returning the navigation graph.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NoInteriorEdge` if no edge in the mesh has two
    /// adjacent triangles, leaving nothing to seed the traversal with.
    pub fn execute(&self) -> Result<NavGraph> {
        let seed = self
            .topology
            .first_interior_edge()
            .ok_or(GeometryError::NoInteriorEdge)?;

        let mut graph = NavGraph::new();
        let mut node_for_edge: HashMap<usize, NodeId> = HashMap::new();
        let mut visited = vec![false; self.topology.triangles.len()];

        let seed_node = graph.add_node(self.topology.edge_midpoint(seed));
        node_for_edge.insert(seed, seed_node);
        let mut stack = vec![(seed, seed_node)];

        while let Some((edge_index, node)) = stack.pop() {
            for &triangle_index in &self.topology.edges[edge_index].triangles {
                if visited[triangle_index] {
                    continue;
                }
                visited[triangle_index] = true;

                let triangle = &self.topology.triangles[triangle_index];
                let mut far_nodes: [Option<NodeId>; 2] = [None, None];
                let mut slot = 0;

                for &other_edge in &triangle.edges {
                    if other_edge == edge_index || slot == 2 {
                        continue;
                    }
                    if self.topology.edges[other_edge].is_interior() {
                        let far_node = match node_for_edge.get(&other_edge) {
                            Some(&existing) => existing,
                            None => {
                                let created =
                                    graph.add_node(self.topology.edge_midpoint(other_edge));
                                node_for_edge.insert(other_edge, created);
                                stack.push((other_edge, created));
                                created
                            }
                        };
                        graph.connect(far_node, node);
                        far_nodes[slot] = Some(far_node);
                    }
                    slot += 1;
                }

                // Both far edges interior: close the triangle's third side.
                if let [Some(a), Some(b)] = far_nodes {
                    graph.connect(a, b);
                }
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use approx::assert_relative_eq;

    use crate::geometry::Polygon;
    use crate::math::Point2;
    use crate::operations::{BuildAdjacency, PunchHoles, Triangulate};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn topology_of(polygon: Polygon) -> MeshTopology {
        let triangulation = Triangulate::new(polygon).execute().unwrap();
        BuildAdjacency::new(triangulation).execute().unwrap()
    }

    fn interior_edge_count(topology: &MeshTopology) -> usize {
        topology.edges.iter().filter(|e| e.is_interior()).count()
    }

    fn is_connected(graph: &NavGraph) -> bool {
        let Some((start, _)) = graph.nodes().next() else {
            return true;
        };
        let mut seen = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for &connection in &graph.node(node).unwrap().connections {
                let neighbor = graph.neighbor_of(connection, node).unwrap();
                if seen.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
        seen.len() == graph.node_count()
    }

    #[test]
    fn square_yields_single_node_at_diagonal_midpoint() {
        let topology = topology_of(Polygon::with_default_order(vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 4.0),
            p(0.0, 4.0),
        ]));
        let graph = BuildNavGraph::new(&topology).execute().unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.connection_count(), 0);
        let (_, node) = graph.nodes().next().unwrap();
        assert_relative_eq!(node.position, p(2.0, 2.0));
    }

    #[test]
    fn one_node_per_interior_edge() {
        let topology = topology_of(Polygon::with_default_order(vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(6.0, 3.0),
            p(4.0, 6.0),
            p(0.0, 6.0),
            p(-2.0, 3.0),
        ]));
        let graph = BuildNavGraph::new(&topology).execute().unwrap();
        assert_eq!(graph.node_count(), interior_edge_count(&topology));

        let midpoints: Vec<Point2> = topology
            .edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_interior())
            .map(|(i, _)| topology.edge_midpoint(i))
            .collect();
        for (_, node) in graph.nodes() {
            assert!(midpoints.iter().any(|&m| (m - node.position).norm() < 1e-9));
        }
    }

    #[test]
    fn connection_costs_are_euclidean_distances() {
        let topology = topology_of(Polygon::with_default_order(vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(6.0, 3.0),
            p(4.0, 6.0),
            p(0.0, 6.0),
            p(-2.0, 3.0),
        ]));
        let graph = BuildNavGraph::new(&topology).execute().unwrap();
        assert!(graph.connection_count() > 0);
        for (_, connection) in graph.connections() {
            let start = graph.node(connection.start).unwrap().position;
            let end = graph.node(connection.end).unwrap().position;
            assert_relative_eq!(connection.cost, (end - start).norm());
        }
    }

    #[test]
    fn graph_from_connected_region_is_connected() {
        let boundary =
            Polygon::with_default_order(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]);
        let hole =
            Polygon::with_default_order(vec![p(1.0, 1.0), p(2.0, 1.0), p(2.0, 2.0), p(1.0, 2.0)]);
        let punched = PunchHoles::new(boundary, vec![hole]).execute().unwrap();
        let topology = topology_of(punched);

        let graph = BuildNavGraph::new(&topology).execute().unwrap();
        assert_eq!(graph.node_count(), interior_edge_count(&topology));
        assert!(is_connected(&graph));
    }

    #[test]
    fn mesh_without_interior_edge_rejected() {
        let topology = topology_of(Polygon::with_default_order(vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(2.0, 3.0),
        ]));
        assert!(BuildNavGraph::new(&topology).execute().is_err());
    }
}
