use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Where a listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerScope {
    /// Bound to the field container for the field's whole lifetime.
    Field,
    /// Bound to the document for the duration of one interaction.
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerKind {
    MouseDown,
    TouchStart,
    Wheel,
    MouseMove,
    MouseUp,
    TouchMove,
    TouchEnd,
}

impl ListenerKind {
    #[must_use]
    pub const fn scope(self) -> ListenerScope {
        match self {
            Self::MouseDown | Self::TouchStart | Self::Wheel => ListenerScope::Field,
            Self::MouseMove | Self::MouseUp | Self::TouchMove | Self::TouchEnd => {
                ListenerScope::Document
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerHandle {
    pub id: u64,
    pub kind: ListenerKind,
}

/// Listener handles owned by a single field.
///
/// Attaching is idempotent per kind, so repeated gesture starts never stack
/// duplicate document listeners.
#[derive(Debug, Default)]
pub struct ListenerSet {
    next_id: u64,
    handles: SmallVec<[ListenerHandle; 8]>,
}

impl ListenerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, kind: ListenerKind) -> ListenerHandle {
        if let Some(existing) = self.handles.iter().find(|handle| handle.kind == kind) {
            return *existing;
        }
        let handle = ListenerHandle {
            id: self.next_id,
            kind,
        };
        self.next_id += 1;
        self.handles.push(handle);
        handle
    }

    pub fn detach(&mut self, kind: ListenerKind) -> bool {
        let before = self.handles.len();
        self.handles.retain(|handle| handle.kind != kind);
        self.handles.len() != before
    }

    /// Detaches every listener in `scope`. Returns the number removed.
    pub fn detach_scope(&mut self, scope: ListenerScope) -> usize {
        let before = self.handles.len();
        self.handles.retain(|handle| handle.kind.scope() != scope);
        before - self.handles.len()
    }

    pub fn detach_all(&mut self) -> usize {
        let removed = self.handles.len();
        self.handles.clear();
        removed
    }

    #[must_use]
    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.handles.iter().any(|handle| handle.kind == kind)
    }

    #[must_use]
    pub fn count(&self, scope: ListenerScope) -> usize {
        self.handles
            .iter()
            .filter(|handle| handle.kind.scope() == scope)
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListenerHandle> {
        self.handles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_is_idempotent_per_kind() {
        let mut set = ListenerSet::new();
        let first = set.attach(ListenerKind::MouseMove);
        let again = set.attach(ListenerKind::MouseMove);
        assert_eq!(first, again);
        assert_eq!(set.count(ListenerScope::Document), 1);
    }

    #[test]
    fn detach_scope_leaves_field_listeners() {
        let mut set = ListenerSet::new();
        set.attach(ListenerKind::MouseDown);
        set.attach(ListenerKind::Wheel);
        set.attach(ListenerKind::TouchMove);
        set.attach(ListenerKind::TouchEnd);

        assert_eq!(set.detach_scope(ListenerScope::Document), 2);
        assert!(set.is_attached(ListenerKind::MouseDown));
        assert!(!set.is_attached(ListenerKind::TouchEnd));
        assert_eq!(set.detach_all(), 2);
        assert!(set.is_empty());
    }
}
