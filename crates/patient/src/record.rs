//! Patient record variants and their shared behaviour.
//!
//! Responsibilities:
//! - Define the three concrete record variants and their defaults
//! - Carry them uniformly as [`PatientRecord`]
//! - Render the human-readable description (`Display`) and the
//!   single-line wire form ([`PatientRecord::to_line`])

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Variant kinds
// ============================================================================

/// Kind discriminant for a patient record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// A patient with no variant-specific fields.
    Generic,
    /// A child patient (parent contact, parental-permission rule).
    Child,
    /// An elderly patient (allergies, contraindications).
    Elder,
}

impl RecordKind {
    /// Fixed wire tag identifying this kind in a serialized line.
    ///
    /// The tags are part of the file format and must never change:
    /// any future reader keys on them.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            RecordKind::Generic => "Patient",
            RecordKind::Child => "Child",
            RecordKind::Elder => "Elder",
        }
    }
}

// ============================================================================
// Variant structs
// ============================================================================

/// A patient record with the three common fields only.
///
/// `age` is expected to be non-negative but is not enforced; callers own
/// validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenericPatient {
    /// Patient's full name.
    pub name: String,

    /// Age in years. Non-negative expected, not enforced.
    pub age: i32,

    /// Current diagnosis.
    pub disease: String,
}

impl GenericPatient {
    /// Creates a record from the three common fields.
    pub fn new(name: impl Into<String>, age: i32, disease: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            disease: disease.into(),
        }
    }
}

impl Default for GenericPatient {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            age: 0,
            disease: "None".to_string(),
        }
    }
}

/// A child patient; adds the parent contact.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChildPatient {
    /// Patient's full name.
    pub name: String,

    /// Age in years. Non-negative expected, not enforced.
    pub age: i32,

    /// Current diagnosis.
    pub disease: String,

    /// How to reach a parent or guardian.
    pub parent_contact: String,
}

impl ChildPatient {
    /// Creates a child record with a parent contact.
    pub fn new(
        name: impl Into<String>,
        age: i32,
        disease: impl Into<String>,
        parent_contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            disease: disease.into(),
            parent_contact: parent_contact.into(),
        }
    }

    /// Whether treating this patient requires parental permission.
    ///
    /// The rule is age-based: anyone under 18 needs permission.
    #[must_use]
    pub fn needs_parental_permission(&self) -> bool {
        self.age < 18
    }
}

impl Default for ChildPatient {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            age: 0,
            disease: "None".to_string(),
            parent_contact: "No parent contact".to_string(),
        }
    }
}

/// An elderly patient; adds allergies and contraindications.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElderPatient {
    /// Patient's full name.
    pub name: String,

    /// Age in years. Non-negative expected, not enforced.
    pub age: i32,

    /// Current diagnosis.
    pub disease: String,

    /// Known allergies, free text.
    pub allergies: String,

    /// Treatment contraindications, free text.
    pub contraindications: String,
}

impl ElderPatient {
    /// Creates an elderly record with its medical warnings.
    pub fn new(
        name: impl Into<String>,
        age: i32,
        disease: impl Into<String>,
        allergies: impl Into<String>,
        contraindications: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            disease: disease.into(),
            allergies: allergies.into(),
            contraindications: contraindications.into(),
        }
    }
}

impl Default for ElderPatient {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            age: 0,
            disease: "None".to_string(),
            allergies: "None".to_string(),
            contraindications: "None".to_string(),
        }
    }
}

// ============================================================================
// Uniform carrier
// ============================================================================

/// One patient record, in any of the three variants.
///
/// Cloning a `PatientRecord` yields an independent copy of the same concrete
/// variant; the roster relies on this for its deep-copy semantics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum PatientRecord {
    /// Plain patient record.
    Generic(GenericPatient),
    /// Child patient record.
    Child(ChildPatient),
    /// Elderly patient record.
    Elder(ElderPatient),
}

impl PatientRecord {
    /// Which variant this record is.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            PatientRecord::Generic(_) => RecordKind::Generic,
            PatientRecord::Child(_) => RecordKind::Child,
            PatientRecord::Elder(_) => RecordKind::Elder,
        }
    }

    /// Patient's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            PatientRecord::Generic(p) => &p.name,
            PatientRecord::Child(p) => &p.name,
            PatientRecord::Elder(p) => &p.name,
        }
    }

    /// Patient's age in years.
    #[must_use]
    pub fn age(&self) -> i32 {
        match self {
            PatientRecord::Generic(p) => p.age,
            PatientRecord::Child(p) => p.age,
            PatientRecord::Elder(p) => p.age,
        }
    }

    /// Patient's diagnosis.
    #[must_use]
    pub fn disease(&self) -> &str {
        match self {
            PatientRecord::Generic(p) => &p.disease,
            PatientRecord::Child(p) => &p.disease,
            PatientRecord::Elder(p) => &p.disease,
        }
    }

    /// Replaces the patient's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self {
            PatientRecord::Generic(p) => p.name = name,
            PatientRecord::Child(p) => p.name = name,
            PatientRecord::Elder(p) => p.name = name,
        }
    }

    /// Replaces the patient's age.
    pub fn set_age(&mut self, age: i32) {
        match self {
            PatientRecord::Generic(p) => p.age = age,
            PatientRecord::Child(p) => p.age = age,
            PatientRecord::Elder(p) => p.age = age,
        }
    }

    /// Replaces the patient's diagnosis.
    pub fn set_disease(&mut self, disease: impl Into<String>) {
        let disease = disease.into();
        match self {
            PatientRecord::Generic(p) => p.disease = disease,
            PatientRecord::Child(p) => p.disease = disease,
            PatientRecord::Elder(p) => p.disease = disease,
        }
    }

    /// Renders this record as one line of the roster file format.
    ///
    /// Layout: `TAG|name|age|disease`, followed by the variant's extra fields
    /// in declaration order. Fields are joined with a literal `|` and no
    /// escaping is applied, so field values must not contain `|`.
    #[must_use]
    pub fn to_line(&self) -> String {
        let tag = self.kind().tag();
        match self {
            PatientRecord::Generic(p) => {
                format!("{tag}|{}|{}|{}", p.name, p.age, p.disease)
            }
            PatientRecord::Child(p) => {
                format!(
                    "{tag}|{}|{}|{}|{}",
                    p.name, p.age, p.disease, p.parent_contact
                )
            }
            PatientRecord::Elder(p) => {
                format!(
                    "{tag}|{}|{}|{}|{}|{}",
                    p.name, p.age, p.disease, p.allergies, p.contraindications
                )
            }
        }
    }
}

/// Human-readable description of the record.
///
/// Includes every field; for children also the computed parental-permission
/// flag, and for elders a second line with the medical warnings.
impl fmt::Display for PatientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientRecord::Generic(p) => {
                write!(f, "Patient: {}, age: {}, diagnosis: {}", p.name, p.age, p.disease)
            }
            PatientRecord::Child(p) => {
                write!(
                    f,
                    "Child patient: {}, age: {}, diagnosis: {}, parent contact: {}, permission required: {}",
                    p.name,
                    p.age,
                    p.disease,
                    p.parent_contact,
                    if p.needs_parental_permission() { "yes" } else { "no" }
                )
            }
            PatientRecord::Elder(p) => {
                writeln!(
                    f,
                    "Elderly patient: {}, age: {}, diagnosis: {}",
                    p.name, p.age, p.disease
                )?;
                write!(
                    f,
                    "  Allergies: {} | Contraindications: {}",
                    p.allergies, p.contraindications
                )
            }
        }
    }
}

/// Records compare equal on `(name, age)` only, across variants.
///
/// Diagnosis and variant-specific fields are intentionally ignored; this
/// matches the comparison the roster's callers were built against.
impl PartialEq for PatientRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.age() == other.age()
    }
}

impl From<GenericPatient> for PatientRecord {
    fn from(p: GenericPatient) -> Self {
        PatientRecord::Generic(p)
    }
}

impl From<ChildPatient> for PatientRecord {
    fn from(p: ChildPatient) -> Self {
        PatientRecord::Child(p)
    }
}

impl From<ElderPatient> for PatientRecord {
    fn from(p: ElderPatient) -> Self {
        PatientRecord::Elder(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_defaults() {
        let p = GenericPatient::default();
        assert_eq!(p.name, "Unknown");
        assert_eq!(p.age, 0);
        assert_eq!(p.disease, "None");
    }

    #[test]
    fn child_line_matches_wire_format() {
        let record: PatientRecord =
            ChildPatient::new("Marta", 7, "Cold", "+380501112233").into();
        assert_eq!(record.to_line(), "Child|Marta|7|Cold|+380501112233");
    }

    #[test]
    fn generic_line_matches_wire_format() {
        let record: PatientRecord = GenericPatient::new("Oleksii", 40, "Flu").into();
        assert_eq!(record.to_line(), "Patient|Oleksii|40|Flu");
    }

    #[test]
    fn elder_line_matches_wire_format() {
        let record: PatientRecord = ElderPatient::new(
            "Petro",
            72,
            "Heart disease",
            "Penicillin",
            "Intense exercise",
        )
        .into();
        assert_eq!(
            record.to_line(),
            "Elder|Petro|72|Heart disease|Penicillin|Intense exercise"
        );
    }

    #[test]
    fn wire_tags_are_fixed() {
        assert_eq!(RecordKind::Generic.tag(), "Patient");
        assert_eq!(RecordKind::Child.tag(), "Child");
        assert_eq!(RecordKind::Elder.tag(), "Elder");
    }

    #[test]
    fn parental_permission_boundary() {
        let minor = ChildPatient::new("A", 17, "Cold", "contact");
        let adult = ChildPatient::new("B", 18, "Cold", "contact");
        assert!(minor.needs_parental_permission());
        assert!(!adult.needs_parental_permission());
    }

    #[test]
    fn equality_ignores_disease_and_variant() {
        let a: PatientRecord = GenericPatient::new("Iryna", 67, "Diabetes").into();
        let b: PatientRecord =
            ElderPatient::new("Iryna", 67, "Arthritis", "None", "None").into();
        assert_eq!(a, b);

        let c: PatientRecord = GenericPatient::new("Iryna", 68, "Diabetes").into();
        assert_ne!(a, c);
    }

    #[test]
    fn clone_preserves_variant_and_is_independent() {
        let original: PatientRecord =
            ChildPatient::new("Oleh", 12, "Injury", "+380631234567").into();
        let mut copy = original.clone();

        assert_eq!(copy.kind(), RecordKind::Child);
        assert_eq!(copy.to_line(), original.to_line());

        copy.set_name("Someone else");
        copy.set_disease("Recovered");
        assert_eq!(original.name(), "Oleh");
        assert_eq!(original.disease(), "Injury");
    }

    #[test]
    fn setters_update_shared_fields_on_any_variant() {
        let mut record: PatientRecord = ElderPatient::default().into();
        record.set_name("Petro");
        record.set_age(72);
        record.set_disease("Heart disease");
        assert_eq!(record.name(), "Petro");
        assert_eq!(record.age(), 72);
        assert_eq!(record.disease(), "Heart disease");
        assert_eq!(record.kind(), RecordKind::Elder);
    }

    #[test]
    fn display_includes_permission_flag_for_children() {
        let record: PatientRecord =
            ChildPatient::new("Marta", 7, "Cold", "+380501112233").into();
        let text = record.to_string();
        assert!(text.contains("Marta"));
        assert!(text.contains("+380501112233"));
        assert!(text.contains("permission required: yes"));
    }

    #[test]
    fn display_includes_warnings_line_for_elders() {
        let record: PatientRecord = ElderPatient::new(
            "Petro",
            72,
            "Heart disease",
            "Penicillin",
            "Intense exercise",
        )
        .into();
        let text = record.to_string();
        assert!(text.lines().count() >= 2);
        assert!(text.contains("Allergies: Penicillin"));
        assert!(text.contains("Contraindications: Intense exercise"));
    }

    #[test]
    fn serde_preserves_variant() {
        let record: PatientRecord =
            ChildPatient::new("Marta", 7, "Cold", "+380501112233").into();
        let json = serde_json::to_string(&record).expect("serialize record");
        let back: PatientRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(back.kind(), RecordKind::Child);
        assert_eq!(back.to_line(), record.to_line());
    }
}
