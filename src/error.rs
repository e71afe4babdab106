//! Crate error types.

/// Errors surfaced by the optimization core.
///
/// Two groups:
///
/// - Configuration errors (`EmptyNodeList` through `InvalidParameter`) are
///   raised before any optimization step and are not retried.
/// - Invariant violations (`CoverageViolation`, `DepotInRoute`) are
///   defensive checks that indicate a solver bug rather than a runtime
///   condition; they should never occur in correct use.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The node list supplied to the matrix builder was empty.
    #[error("node list is empty")]
    EmptyNodeList,

    /// Two nodes carry the same identity.
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(String),

    /// A node index does not fall inside the node list.
    #[error("node index {index} out of range for {len} nodes")]
    NodeOutOfRange {
        /// Offending index.
        index: usize,
        /// Length of the node list.
        len: usize,
    },

    /// The node chosen as depot is not tagged with the depot role.
    #[error("node '{0}' is not tagged as a depot")]
    NotDepot(String),

    /// There are no store nodes to route.
    #[error("no store nodes to route")]
    NoStores,

    /// A configuration parameter is outside its valid range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A solution does not cover the store set exactly once.
    #[error("solution violates store coverage: {0}")]
    CoverageViolation(String),

    /// A depot-tagged node appears in a route interior.
    #[error("depot-tagged node '{0}' appears inside a route")]
    DepotInRoute(String),
}

impl Error {
    /// Returns `true` for errors caused by invalid caller-supplied
    /// configuration (as opposed to internal invariant violations).
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            Error::CoverageViolation(_) | Error::DepotInRoute(_)
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::DuplicateNodeId("Store 7".into());
        assert_eq!(e.to_string(), "duplicate node id: Store 7");
    }

    #[test]
    fn test_is_configuration() {
        assert!(Error::EmptyNodeList.is_configuration());
        assert!(Error::NotDepot("X".into()).is_configuration());
        assert!(!Error::CoverageViolation("missing Store 1".into()).is_configuration());
        assert!(!Error::DepotInRoute("Depot".into()).is_configuration());
    }
}
