//! Clinic roster.
//!
//! This crate provides [`Roster`], an ordered, mutable collection of patient
//! records owned by a single clinic, together with its error taxonomy and a
//! line-oriented file export.
//!
//! ## Ownership model
//!
//! A roster exclusively owns every record in its sequence. Records enter a
//! roster by value and leave it only through roster operations; copying or
//! merging a roster always clones records into the destination, so no record
//! is ever shared between two rosters. `Clone` on a roster is therefore a
//! deep copy: mutating the copy's records never affects the source.
//!
//! ## Equality
//!
//! Two rosters compare equal when they hold the same **number** of records.
//! Record content is not compared. This coarse, count-only equality is kept
//! for compatibility with the behaviour existing callers rely on; it is not
//! a recommendation. Compare serialized lines when content equality matters.
//!
//! ## Errors
//!
//! All fallible operations return [`RosterError`] and leave the roster
//! unchanged on failure. The crate performs no logging and no internal
//! recovery; callers at the boundary decide whether to retry or surface the
//! failure.

mod roster;

pub use roster::Roster;

// Re-exported so callers can build records without a second direct dependency.
pub use clinic_patient::{ChildPatient, ElderPatient, GenericPatient, PatientRecord, RecordKind};

/// Errors that can occur during roster operations.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// A tail removal was attempted on a roster with no records.
    #[error("No patients to remove: the roster is empty")]
    EmptyRoster,

    /// An indexed removal targeted a position past the end of the sequence.
    #[error("Patient index {index} out of range (roster holds {len} records)")]
    IndexOutOfRange {
        /// The requested zero-based position.
        index: usize,
        /// The roster's length at the time of the call.
        len: usize,
    },

    /// The export target could not be opened or written.
    #[error("Cannot save roster file: {0}")]
    FileSave(String),
}
