//! Clinic client core types: roles, session, persisted storage and routing

pub mod error;
pub mod role;
pub mod routes;
pub mod session;
pub mod storage;

pub use error::{CoreError, CoreResult};
pub use role::Role;
pub use routes::{
    GuardDecision, ResolvedRoute, RouteEntry, View, check_access, find_by_name, href, resolve,
    route_table,
};
pub use session::{Session, UserProfile};
pub use storage::{MemoryStorage, PersistedRecord, StorageKeys, StoragePort};
