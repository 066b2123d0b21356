use futures_util::stream::BoxStream;
use navrail_types::{MenuItem, StructuralSubtype, UserRole};

/// Stream of menu snapshots; each item replaces the previous one.
pub type MenuStream = BoxStream<'static, Vec<MenuItem>>;

/// Contract of the external navigation data service.
///
/// Implementations own the menu data. `set_role_state` is fire-and-forget; the
/// stream returned by `filtered_navigation_by_subtype_and_state` may emit more
/// than once (for example when the role state changes) and may never complete.
pub trait NavigationalListService: Send + Sync {
    /// Records the role used to filter subsequent menu snapshots.
    fn set_role_state(&self, role: UserRole);

    /// Menu entries for `subtype` in display `state` (an uppercased mode key).
    fn filtered_navigation_by_subtype_and_state(&self, subtype: &StructuralSubtype, state: &str) -> MenuStream;
}
