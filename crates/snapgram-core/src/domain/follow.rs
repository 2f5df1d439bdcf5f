use serde::{Deserialize, Serialize};

/// A directed follower edge: `follower_id` follows `followee_id`.
///
/// The pair is the identity; there is no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Follow {
    pub follower_id: i32,
    pub followee_id: i32,
}

impl Follow {
    pub fn new(follower_id: i32, followee_id: i32) -> Self {
        Self {
            follower_id,
            followee_id,
        }
    }

    /// The same edge pointing the other way.
    pub fn reversed(self) -> Self {
        Self::new(self.followee_id, self.follower_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_directed() {
        let edge = Follow::new(1, 2);
        assert_ne!(edge, edge.reversed());
        assert_eq!(edge, edge.reversed().reversed());
    }
}
