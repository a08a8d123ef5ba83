pub mod hierarchy_source;
pub use hierarchy_source::HierarchySource;
pub mod seed;
pub use seed::seed_hierarchy;
pub mod warehouse_repo;
pub use warehouse_repo::{WarehouseRepository, DEFAULT_LOOKUP_DELAY};
pub mod timeout_source;
pub use timeout_source::TimeoutSource;
