//! Input model: loosely-typed entries as produced by the external entry store.

pub mod coerce;
pub mod common;
pub mod entry;

pub use coerce::Fields;
pub use common::{total_amount, Amounted, Identifiable, NamedEntity};
pub use entry::DomainEntry;
