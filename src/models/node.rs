//! Node and role types.

use serde::{Deserialize, Serialize};

use crate::distance::haversine;

/// Role of a node in the routing problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeRole {
    /// Fixed start/end point of every route.
    Depot,
    /// A delivery stop.
    Store,
}

/// A geographic node: identity, WGS84 coordinates, and a role tag.
///
/// Nodes are immutable once loaded. The dataset may contain several
/// depot-tagged nodes; a single optimization run picks one of them.
///
/// # Examples
///
/// ```
/// use vrp_anneal::models::Node;
///
/// let depot = Node::depot("DC Central", 24.8070, -107.3900);
/// assert!(depot.is_depot());
///
/// let store = Node::store("Store 1", 24.8211, -107.4101);
/// assert!(store.is_store());
/// assert_eq!(store.id(), "Store 1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: String,
    lat: f64,
    lon: f64,
    role: NodeRole,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: impl Into<String>, lat: f64, lon: f64, role: NodeRole) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            role,
        }
    }

    /// Creates a depot node.
    pub fn depot(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self::new(id, lat, lon, NodeRole::Depot)
    }

    /// Creates a store node.
    pub fn store(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self::new(id, lat, lon, NodeRole::Store)
    }

    /// Node identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.lon
    }

    /// Role tag.
    pub fn role(&self) -> NodeRole {
        self.role
    }

    /// Returns `true` if this node is a depot.
    pub fn is_depot(&self) -> bool {
        self.role == NodeRole::Depot
    }

    /// Returns `true` if this node is a store.
    pub fn is_store(&self) -> bool {
        self.role == NodeRole::Store
    }

    /// Great-circle distance to another node in kilometers.
    pub fn distance_to(&self, other: &Node) -> f64 {
        haversine(self.lat, self.lon, other.lat, other.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let n = Node::store("Store 3", 24.8, -107.4);
        assert_eq!(n.id(), "Store 3");
        assert_eq!(n.latitude(), 24.8);
        assert_eq!(n.longitude(), -107.4);
        assert_eq!(n.role(), NodeRole::Store);
    }

    #[test]
    fn test_role_predicates() {
        assert!(Node::depot("D", 0.0, 0.0).is_depot());
        assert!(!Node::depot("D", 0.0, 0.0).is_store());
        assert!(Node::store("S", 0.0, 0.0).is_store());
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let n = Node::store("S", 24.8, -107.4);
        assert!(n.distance_to(&n).abs() < 1e-9);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Node::depot("D", 24.8070, -107.3900);
        let b = Node::store("S", 24.8211, -107.4101);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }
}
