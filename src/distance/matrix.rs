//! Dense distance matrix.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::Node;

/// A dense n×n matrix of pairwise great-circle distances in kilometers,
/// stored in row-major order.
///
/// Built once per optimization session from an ordered node list and
/// never mutated afterwards. Square, zero on the diagonal, symmetric.
///
/// # Examples
///
/// ```
/// use vrp_anneal::models::Node;
/// use vrp_anneal::distance::DistanceMatrix;
///
/// let nodes = vec![
///     Node::depot("D", 0.0, 0.0),
///     Node::store("A", 0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes).unwrap();
/// assert_eq!(dm.size(), 2);
/// assert!((dm.get(0, 1) - dm.get(1, 0)).abs() < 1e-12);
/// assert_eq!(dm.index_of("A"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
    index: HashMap<String, usize>,
}

impl DistanceMatrix {
    /// Computes the haversine distance matrix over an ordered node list.
    ///
    /// O(n²) time and space. Fails if the node list is empty or two nodes
    /// share an identity.
    pub fn from_nodes(nodes: &[Node]) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::EmptyNodeList);
        }

        let n = nodes.len();
        let mut index = HashMap::with_capacity(n);
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id().to_string(), i).is_some() {
                return Err(Error::DuplicateNodeId(node.id().to_string()));
            }
        }

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = nodes[i].distance_to(&nodes[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Ok(Self {
            data,
            size: n,
            index,
        })
    }

    /// Distance from node index `from` to node index `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of a node identity, if present.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Distance between two node identities, if both are present.
    pub fn get_by_id(&self, from: &str, to: &str) -> Option<f64> {
        Some(self.get(self.index_of(from)?, self.index_of(to)?))
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
