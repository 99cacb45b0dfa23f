//! The roster container and its operations.
//!
//! Responsibilities:
//! - Own the ordered sequence of patient records for one clinic
//! - Provide the mutation surface (add, remove, merge, increment/decrement)
//! - Export the roster snapshot to the line-oriented file format
//!
//! Every operation is a single atomic step from the caller's perspective:
//! a failed removal or export leaves the roster exactly as it was.

use crate::RosterError;
use clinic_patient::{ChildPatient, ElderPatient, GenericPatient, PatientRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::{Add, AddAssign};
use std::path::Path;

/// A clinic's patient roster.
///
/// The record sequence preserves insertion order; duplicates by value are
/// allowed. `Clone` produces a deep copy (fresh records, same order).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    name: String,
    address: String,
    doctor_count: u32,
    records: Vec<PatientRecord>,
}

impl Roster {
    /// Creates an empty roster for a clinic.
    ///
    /// A negative `doctor_count` is silently clamped to zero; it is not an
    /// error.
    pub fn new(name: impl Into<String>, address: impl Into<String>, doctor_count: i32) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            doctor_count: doctor_count.max(0) as u32,
            records: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// The clinic's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clinic's address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Number of doctors at the clinic.
    #[must_use]
    pub fn doctor_count(&self) -> u32 {
        self.doctor_count
    }

    /// Number of records currently in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only view of the record at `index`, or `None` past the end.
    ///
    /// The reference is a view into the roster: do not hold it across a
    /// mutating operation.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PatientRecord> {
        self.records.get(index)
    }

    /// Mutable view of the record at `index`, or `None` past the end.
    ///
    /// Record fields may be edited in place; records can only be added or
    /// removed through the roster's own operations.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PatientRecord> {
        self.records.get_mut(index)
    }

    /// The records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Appends a record to the end of the sequence. Always succeeds.
    ///
    /// The roster takes ownership; accepts any of the variant structs or a
    /// ready [`PatientRecord`].
    pub fn add_record(&mut self, record: impl Into<PatientRecord>) {
        self.records.push(record.into());
    }

    /// Appends a default-constructed generic patient.
    pub fn add_default_patient(&mut self) {
        self.add_record(GenericPatient::default());
    }

    /// Builds a child record in place and appends it.
    pub fn add_child(
        &mut self,
        name: impl Into<String>,
        age: i32,
        disease: impl Into<String>,
        parent_contact: impl Into<String>,
    ) {
        self.add_record(ChildPatient::new(name, age, disease, parent_contact));
    }

    /// Builds an elderly record in place and appends it.
    pub fn add_elder(
        &mut self,
        name: impl Into<String>,
        age: i32,
        disease: impl Into<String>,
        allergies: impl Into<String>,
        contraindications: impl Into<String>,
    ) {
        self.add_record(ElderPatient::new(
            name,
            age,
            disease,
            allergies,
            contraindications,
        ));
    }

    /// Removes and returns the tail record.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyRoster`] if the roster holds no records;
    /// the roster is left unchanged.
    pub fn remove_last(&mut self) -> Result<PatientRecord, RosterError> {
        self.records.pop().ok_or(RosterError::EmptyRoster)
    }

    /// Removes and returns the record at the given zero-based position,
    /// shifting subsequent records down by one.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::IndexOutOfRange`] if `index >= len()`; the
    /// sequence is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<PatientRecord, RosterError> {
        if index >= self.records.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    // ------------------------------------------------------------------
    // Merging
    // ------------------------------------------------------------------

    /// Returns a new roster combining this one with `other`.
    ///
    /// The result's name is `"{self} + {other}"`, its doctor count the sum,
    /// its address this roster's address, and its records this roster's
    /// records followed by clones of `other`'s, order preserved. Neither
    /// input is mutated.
    #[must_use]
    pub fn merge(&self, other: &Roster) -> Roster {
        let mut merged = self.clone();
        merged.merge_in_place(other);
        merged
    }

    /// Appends clones of `other`'s records to this roster, renaming it to
    /// `"{self} + {other}"` and summing the doctor counts.
    pub fn merge_in_place(&mut self, other: &Roster) -> &mut Self {
        self.name = format!("{} + {}", self.name, other.name);
        self.doctor_count += other.doctor_count;
        self.records.reserve(other.records.len());
        self.records.extend(other.records.iter().cloned());
        self
    }

    // ------------------------------------------------------------------
    // Increment / decrement
    // ------------------------------------------------------------------

    /// Appends one default patient (the prefix-increment of the roster).
    pub fn increment(&mut self) -> &mut Self {
        self.add_default_patient();
        self
    }

    /// Appends one default patient and returns a deep copy of the roster as
    /// it was before the append.
    #[must_use = "the returned roster is the pre-increment snapshot"]
    pub fn increment_postfix(&mut self) -> Roster {
        let before = self.clone();
        self.increment();
        before
    }

    /// Removes the tail record (the prefix-decrement of the roster).
    ///
    /// # Errors
    ///
    /// Propagates [`RosterError::EmptyRoster`] from the removal; the roster
    /// is left unchanged.
    pub fn decrement(&mut self) -> Result<&mut Self, RosterError> {
        self.remove_last()?;
        Ok(self)
    }

    /// Removes the tail record and returns a deep copy of the roster as it
    /// was before the removal.
    ///
    /// # Errors
    ///
    /// Propagates [`RosterError::EmptyRoster`]; the roster is left unchanged
    /// and no copy is made.
    pub fn decrement_postfix(&mut self) -> Result<Roster, RosterError> {
        if self.records.is_empty() {
            return Err(RosterError::EmptyRoster);
        }
        let before = self.clone();
        self.remove_last()?;
        Ok(before)
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Writes the roster snapshot to `path`, truncating any existing file.
    ///
    /// One serialized line per record, in sequence order, `\n`-terminated,
    /// UTF-8. The file reflects the roster at call time; later mutations do
    /// not change an already-written file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::FileSave`] if the target cannot be opened for
    /// writing (missing parent directory, permissions) or a write fails.
    /// The roster's in-memory state is never affected by export failure; no
    /// partially written file is cleaned up.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), RosterError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            RosterError::FileSave(format!("Cannot open {} for writing: {e}", path.display()))
        })?;

        let mut writer = BufWriter::new(file);
        for record in &self.records {
            writeln!(writer, "{}", record.to_line()).map_err(|e| {
                RosterError::FileSave(format!("Cannot write to {}: {e}", path.display()))
            })?;
        }
        writer
            .flush()
            .map_err(|e| RosterError::FileSave(format!("Cannot write to {}: {e}", path.display())))
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new("Unnamed clinic", "Unknown", 0)
    }
}

/// One-line clinic summary (name, address, doctor and patient counts).
impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Clinic '{}' at {} | doctors: {} | patients: {}",
            self.name,
            self.address,
            self.doctor_count,
            self.records.len()
        )
    }
}

/// Rosters compare equal when they hold the same number of records.
///
/// Content is deliberately not compared; see the crate docs. Use serialized
/// lines to compare record content.
impl PartialEq for Roster {
    fn eq(&self, other: &Self) -> bool {
        self.records.len() == other.records.len()
    }
}

impl Add<&Roster> for &Roster {
    type Output = Roster;

    fn add(self, other: &Roster) -> Roster {
        self.merge(other)
    }
}

impl AddAssign<&Roster> for Roster {
    fn add_assign(&mut self, other: &Roster) {
        self.merge_in_place(other);
    }
}
