pub mod locations;
pub mod move_ins;
pub mod move_outs;
pub mod notices_and_evictions;
pub mod payments;
pub mod records;
pub mod vendor_tasks;
