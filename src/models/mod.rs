pub mod alert;

pub use alert::{Alert, AlertId, AlertKind, Recommendation, TradeSide};
