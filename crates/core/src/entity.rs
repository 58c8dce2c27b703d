//! Entity trait: identity of a stored record across transactions.

/// A record with a stable identifier, optionally scoped to a namespace.
///
/// Event keys and namespaces are derived through this trait, so every record
/// kind that can appear in an event payload implements it.
pub trait Entity {
    /// Primary identifier of the record (unique within its table).
    fn id(&self) -> &str;

    /// Namespace the record lives in.
    ///
    /// Cluster-scoped records (e.g. nodes) return `None`.
    fn namespace(&self) -> Option<&str> {
        None
    }
}

impl<T> Entity for std::sync::Arc<T>
where
    T: Entity + ?Sized,
{
    fn id(&self) -> &str {
        (**self).id()
    }

    fn namespace(&self) -> Option<&str> {
        (**self).namespace()
    }
}
