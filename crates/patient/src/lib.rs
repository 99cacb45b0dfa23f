//! Patient record model for the clinic roster.
//!
//! This crate defines the closed set of patient record variants shared by the
//! roster container:
//!
//! - [`GenericPatient`] — the three common fields only
//! - [`ChildPatient`] — adds a parent contact and a derived parental-permission flag
//! - [`ElderPatient`] — adds allergies and contraindications
//!
//! The variants are carried as a single enum, [`PatientRecord`], rather than a
//! trait-object hierarchy: the set is fixed, so a tagged value type gives the
//! same "one interface, different behaviour" contract for descriptions and
//! wire lines without dynamic dispatch, and `Clone` on the enum is already a
//! deep, variant-preserving copy.
//!
//! ## Equality
//!
//! Two records compare equal when their `name` and `age` match. The diagnosis
//! and the variant-specific extras are deliberately ignored, matching the
//! behaviour the roster was built against. Compare [`PatientRecord::to_line`]
//! output when full-content comparison is needed.
//!
//! ## Wire format
//!
//! [`PatientRecord::to_line`] renders one record as a single `|`-separated
//! line (`Patient|…`, `Child|…`, `Elder|…`). There is no escaping: field
//! values must not contain `|`.
//!
//! None of the operations in this crate can fail.

mod record;

pub use record::{ChildPatient, ElderPatient, GenericPatient, PatientRecord, RecordKind};
