pub mod location;
pub mod move_in;
pub mod move_out;
pub mod notice_and_eviction;
pub mod payment;
pub mod record;
pub mod vendor_task;
