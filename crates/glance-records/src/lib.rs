//! Raw record-set snapshot types and the path naming contract.
#![forbid(unsafe_code)]

pub mod path;
pub mod snapshot;

pub use path::{PathClass, classify, project_name};
pub use snapshot::{Audit, EventUser, RecordSet, Transaction, User, XpView};
