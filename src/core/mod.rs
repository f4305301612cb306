//! Core modules for Salat

pub mod julian;
pub mod solar;
pub mod solver;
pub mod schedule;
pub mod window;
pub mod config;
pub mod watch;
pub mod api;

pub use julian::julian_date;
pub use solar::{solar_position, normalize_degrees, SolarPosition};
pub use solver::{solve, solar_noon, asr_altitude, normalize_hours, Side};
pub use schedule::{ScheduleBuilder, compute_schedule};
pub use window::{active_period, next_period, build_report, progress};
pub use config::{Config, ConfigError, Overrides, offset_from_hours};
pub use watch::{WatchEngine, WatchTick};
pub use api::{create_router, run_server};
