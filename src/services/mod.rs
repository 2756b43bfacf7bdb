pub mod alert_store;
pub mod expiry_scheduler;
pub mod side_effect;

pub mod alert_center;

pub use alert_center::AlertCenter;
