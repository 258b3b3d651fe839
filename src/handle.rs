/// Opaque reference to an externally owned GPU resource (texture, shader view,
/// transfer function).
///
/// Two handles are equal iff they name the same resource. The handle carries no
/// ownership: nothing in this crate allocates, copies or releases the resource,
/// and handles are never written to config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResourceHandle(u64);

impl ResourceHandle {
    /// Wrap the owner's identifier for a resource (e.g. a view pointer or slot id).
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality() {
        let a = ResourceHandle::from_raw(7);
        assert_eq!(a, ResourceHandle::from_raw(7));
        assert_ne!(a, ResourceHandle::from_raw(8));
        assert_eq!(a.raw(), 7);
    }

    #[test]
    fn test_absent_differs_from_present() {
        let none: Option<ResourceHandle> = None;
        assert_ne!(none, Some(ResourceHandle::from_raw(0)));
    }
}
