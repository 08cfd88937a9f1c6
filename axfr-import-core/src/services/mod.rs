//! 业务逻辑服务层

mod zone_service;

pub use zone_service::{ZoneOutcome, ZoneService};
