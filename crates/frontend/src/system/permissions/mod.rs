pub mod api;
pub mod context;
pub mod guard;
pub mod state;

pub use context::{use_permissions, PermissionContext, PermissionProvider};
pub use guard::{NotAllowed, RequirePermission};
