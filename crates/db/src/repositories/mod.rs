//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod location_repo;
pub mod move_in_repo;
pub mod move_out_repo;
pub mod notice_and_eviction_repo;
pub mod payment_repo;
pub mod record_table;
pub mod vendor_task_repo;

pub use location_repo::LocationRepo;
pub use move_in_repo::MoveInRepo;
pub use move_out_repo::MoveOutRepo;
pub use notice_and_eviction_repo::NoticeAndEvictionRepo;
pub use payment_repo::PaymentRepo;
pub use vendor_task_repo::VendorTaskRepo;
