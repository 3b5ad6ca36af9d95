//! Node identity.
//!
//! Every AST node carries an [`AstId`]. Decoded nodes keep the id the producer
//! assigned so that they join against the location map; nodes built locally
//! draw a fresh id from an [`AstSession`].

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::Serialize;

use crate::ast::{Ident, QualIdent};
use crate::errors::Result;
use crate::locations::Locations;

/// Integer identity of an AST node.
pub type AstId = u64;

/// A payload paired with its node identity.
///
/// # Examples
///
/// ```rust
/// use fpp_model::ast::AstNode;
/// let node = AstNode::with_id("Sensor".to_string(), 42);
/// assert_eq!(node.id, 42);
/// assert_eq!(node.data, "Sensor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AstNode<T> {
    pub data: T,
    pub id: AstId,
}

impl<T> AstNode<T> {
    /// Wraps `data` with an id carried over from the input.
    pub fn with_id(data: T, id: AstId) -> Self {
        Self { data, id }
    }

    /// Replaces the payload, keeping the identity.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AstNode<U> {
        AstNode {
            data: f(self.data),
            id: self.id,
        }
    }
}

/// Per-run translation state: the fresh-id counter and a decoded-node tally.
///
/// A session replaces any process-wide counter, so independent translation
/// runs never share ids. Both counters are atomic and a session can be shared
/// across parallel decoding.
#[derive(Debug, Default)]
pub struct AstSession {
    next_id: AtomicU64,
    decoded: AtomicUsize,
}

impl AstSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose first fresh id is `first`. Use this to keep fresh ids
    /// clear of the ids carried by decoded nodes.
    pub fn starting_at(first: AstId) -> Self {
        Self {
            next_id: AtomicU64::new(first),
            decoded: AtomicUsize::new(0),
        }
    }

    /// Allocates the next identity.
    pub fn fresh_id(&self) -> AstId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Wraps `data` in a node with a freshly allocated identity.
    ///
    /// ```rust
    /// use fpp_model::ast::AstSession;
    /// let session = AstSession::starting_at(100);
    /// assert_eq!(session.create("a").id, 100);
    /// assert_eq!(session.create("b").id, 101);
    /// ```
    pub fn create<T>(&self, data: T) -> AstNode<T> {
        AstNode::with_id(data, self.fresh_id())
    }

    /// Number of nodes the translator has decoded under this session.
    pub fn decoded_nodes(&self) -> usize {
        self.decoded.load(Ordering::Relaxed)
    }

    pub(crate) fn note_decoded(&self) {
        self.decoded.fetch_add(1, Ordering::Relaxed);
    }

    /// Builds a qualified-identifier node from a flat token list.
    ///
    /// The new node gets a fresh id, and the location of the first token is
    /// recorded for it in `locations`.
    pub fn node_from_node_list(
        &self,
        node_list: &[AstNode<Ident>],
        locations: &mut Locations,
    ) -> Result<AstNode<QualIdent>> {
        let qual_ident = QualIdent::from_node_list(node_list)?;
        let node = self.create(qual_ident);
        // from_node_list already rejected an empty list
        let first = node_list
            .first()
            .ok_or_else(|| crate::internal!("node list should not be empty"))?;
        let loc = locations.get(first.id)?.clone();
        locations.put(node.id, loc);
        Ok(node)
    }
}
