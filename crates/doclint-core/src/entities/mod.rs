//! Record types produced by a lint run.

mod api;
mod member;

pub use api::{Api, ApiBuilder, ApiSummary, Process};
pub use member::{Member, MemberCollection, Parameter, PossibleValue};
