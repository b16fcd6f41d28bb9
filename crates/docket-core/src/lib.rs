//! # Docket Core Library
//!
//! This library provides the scheduling engine for Docket, a
//! legal-practice calendar. It follows a CLI-first philosophy: all
//! operations are available through a standalone CLI binary, with any
//! GUI being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Store**: The single stateful component, an in-memory owner of the
//!   events, deadlines, and notifications collections with validated,
//!   atomic mutations
//! - **Recurrence**: Bounded expansion of recurring events into concrete
//!   occurrences
//! - **Conflict**: Advisory half-open interval-overlap detection, used
//!   in a two-phase check-then-commit insertion protocol
//! - **Notify**: Pure evaluation of reminder/deadline windows producing
//!   notification drafts; the store materializes drafts with ids and
//!   timestamps
//! - **Timeline**: Chronologically ordered case timelines merged from
//!   both collections
//!
//! Every component except the store is a pure function over snapshots
//! the store provides; external timers drive periodic evaluation.
//!
//! ## Key Components
//!
//! - [`ScheduleStore`]: Collection owner and command surface
//! - [`expand`]: Recurrence expansion
//! - [`find_conflicts`]: Interval-overlap queries
//! - [`evaluate`]: Notification drafting
//! - [`build_timeline`]: Case timeline aggregation
//! - [`Config`]: TOML configuration management

pub mod config;
pub mod conflict;
pub mod error;
pub mod model;
pub mod notify;
pub mod recurrence;
pub mod store;
pub mod timeline;
pub mod timetext;

pub use config::Config;
pub use conflict::find_conflicts;
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use model::{
    Deadline, Event, EventCategory, Frequency, Notification, NotificationDraft, NotificationKind,
    Priority,
};
pub use notify::{evaluate, is_urgent};
pub use recurrence::{expand, MAX_OCCURRENCES};
pub use store::{ScheduleStore, StoreSnapshot};
pub use timeline::{build_timeline, CaseFilter, TimelineItem};
