//! Resources that record the identity that created them.

/// A resource whose mutations are restricted to a single owning identity.
pub trait Owned {
    /// The identity recorded at creation time.
    fn owner(&self) -> &str;

    /// Whether `identity` is the recorded owner.
    fn is_owned_by(&self, identity: &str) -> bool {
        self.owner() == identity
    }
}
