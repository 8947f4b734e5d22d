use crate::error::{Result, SprintError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_STATUS: &str = "Application Pending";

/// The three internship variants, in global index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Software,
    Hardware,
    General,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Software, Kind::Hardware, Kind::General];

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Software => "software",
            Kind::Hardware => "hardware",
            Kind::General => "general",
        }
    }

    /// The field only this variant carries.
    pub fn variant_field(self) -> Field {
        match self {
            Kind::Software => Field::TechStack,
            Kind::Hardware => Field::EmbeddedSystems,
            Kind::General => Field::Department,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An editable attribute of an internship, addressed by its flag token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Company,
    Role,
    Eligibility,
    Description,
    Expectations,
    Status,
    TechStack,
    EmbeddedSystems,
    Department,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Company,
        Field::Role,
        Field::Eligibility,
        Field::Description,
        Field::Expectations,
        Field::Status,
        Field::TechStack,
        Field::EmbeddedSystems,
        Field::Department,
    ];

    pub fn flag(self) -> &'static str {
        match self {
            Field::Company => "/c",
            Field::Role => "/r",
            Field::Eligibility => "/eli",
            Field::Description => "/desc",
            Field::Expectations => "/ex",
            Field::Status => "/status",
            Field::TechStack => "/tech",
            Field::EmbeddedSystems => "/hardtech",
            Field::Department => "/dept",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.flag() == flag)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Company => "Company",
            Field::Role => "Role",
            Field::Eligibility => "Eligibility",
            Field::Description => "Description",
            Field::Expectations => "Expectations",
            Field::Status => "Status",
            Field::TechStack => "Tech Stack",
            Field::EmbeddedSystems => "Hardware Technologies",
            Field::Department => "Department",
        }
    }

    /// The variant a field is restricted to, or `None` for common fields.
    pub fn owner(self) -> Option<Kind> {
        match self {
            Field::TechStack => Some(Kind::Software),
            Field::EmbeddedSystems => Some(Kind::Hardware),
            Field::Department => Some(Kind::General),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Details {
    Software { tech_stack: String },
    Hardware { embedded_systems: String },
    General { department: String },
}

impl Details {
    fn kind(&self) -> Kind {
        match self {
            Details::Software { .. } => Kind::Software,
            Details::Hardware { .. } => Kind::Hardware,
            Details::General { .. } => Kind::General,
        }
    }

    fn value(&self) -> &str {
        match self {
            Details::Software { tech_stack } => tech_stack,
            Details::Hardware { embedded_systems } => embedded_systems,
            Details::General { department } => department,
        }
    }

    fn value_mut(&mut self) -> &mut String {
        match self {
            Details::Software { tech_stack } => tech_stack,
            Details::Hardware { embedded_systems } => embedded_systems,
            Details::General { department } => department,
        }
    }
}

/// A tracked internship application.
///
/// Equality compares every field, which is what duplicate detection relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expectations: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(flatten)]
    pub details: Details,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

impl Internship {
    pub fn new(
        kind: Kind,
        company: impl Into<String>,
        role: impl Into<String>,
        variant_value: impl Into<String>,
    ) -> Self {
        let variant_value = variant_value.into();
        let details = match kind {
            Kind::Software => Details::Software {
                tech_stack: variant_value,
            },
            Kind::Hardware => Details::Hardware {
                embedded_systems: variant_value,
            },
            Kind::General => Details::General {
                department: variant_value,
            },
        };
        Self {
            company: company.into(),
            role: role.into(),
            eligibility: String::new(),
            description: String::new(),
            expectations: String::new(),
            status: default_status(),
            details,
        }
    }

    pub fn software(
        company: impl Into<String>,
        role: impl Into<String>,
        tech_stack: impl Into<String>,
    ) -> Self {
        Self::new(Kind::Software, company, role, tech_stack)
    }

    pub fn hardware(
        company: impl Into<String>,
        role: impl Into<String>,
        embedded_systems: impl Into<String>,
    ) -> Self {
        Self::new(Kind::Hardware, company, role, embedded_systems)
    }

    pub fn general(
        company: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self::new(Kind::General, company, role, department)
    }

    pub fn kind(&self) -> Kind {
        self.details.kind()
    }

    /// Reads a field; variant fields of another variant read as `None`.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Company => Some(&self.company),
            Field::Role => Some(&self.role),
            Field::Eligibility => Some(&self.eligibility),
            Field::Description => Some(&self.description),
            Field::Expectations => Some(&self.expectations),
            Field::Status => Some(&self.status),
            variant => {
                if variant.owner() == Some(self.kind()) {
                    Some(self.details.value())
                } else {
                    None
                }
            }
        }
    }

    /// Writes a field. Variant fields fail with `FieldTypeMismatch` on any other variant
    /// and leave the record untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let slot = match field {
            Field::Company => &mut self.company,
            Field::Role => &mut self.role,
            Field::Eligibility => &mut self.eligibility,
            Field::Description => &mut self.description,
            Field::Expectations => &mut self.expectations,
            Field::Status => &mut self.status,
            variant => {
                let kind = self.kind();
                if variant.owner() != Some(kind) {
                    return Err(SprintError::FieldTypeMismatch {
                        flag: variant.flag(),
                        kind,
                    });
                }
                self.details.value_mut()
            }
        };
        *slot = value.into();
        Ok(())
    }

    /// One line used by listings.
    pub fn summary(&self) -> String {
        format!(
            "[{}] {} - {} ({})",
            self.kind(),
            self.role,
            self.company,
            self.status
        )
    }

    /// Full field dump used by `desc` and command confirmations.
    pub fn to_description(&self) -> String {
        let mut lines = vec![
            format!("Company: {}", self.company),
            format!("Role: {}", self.role),
            format!("Type: {}", self.kind()),
        ];
        let variant = self.kind().variant_field();
        lines.push(format!("{}: {}", variant.label(), self.details.value()));

        for field in [Field::Eligibility, Field::Description, Field::Expectations] {
            if let Some(value) = self.get(field).filter(|v| !v.is_empty()) {
                lines.push(format!("{}: {}", field.label(), value));
            }
        }
        lines.push(format!("Status: {}", self.status));
        lines.join("\n")
    }
}

/// Free-text preferences the user keeps about themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub preferred_companies: String,
    pub preferred_roles: String,
    pub target_stipend_range: String,
    pub preferred_industries: String,
    pub internship_date_range: String,
    pub yearly_goals: String,
    pub monthly_goals: String,
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("Name", &self.name),
            ("Preferred Companies", &self.preferred_companies),
            ("Preferred Roles", &self.preferred_roles),
            ("Target Pay Range", &self.target_stipend_range),
            ("Preferred Industries", &self.preferred_industries),
            ("Internship Time Range", &self.internship_date_range),
            ("Yearly Goals", &self.yearly_goals),
            ("Monthly Goals", &self.monthly_goals),
        ];
        for (i, (label, value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let shown = if value.is_empty() { "Not set" } else { value };
            write!(f, "{}: {}", label, shown)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_defaults() {
        let internship = Internship::software("Google", "SWE Intern", "Rust");
        assert_eq!(internship.kind(), Kind::Software);
        assert_eq!(internship.status, DEFAULT_STATUS);
        assert!(internship.eligibility.is_empty());
        assert_eq!(internship.get(Field::TechStack), Some("Rust"));
        assert_eq!(internship.get(Field::Department), None);
    }

    #[test]
    fn equality_covers_variant_field() {
        let a = Internship::software("Google", "SWE", "C");
        let b = Internship::software("Google", "SWE", "C++");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());

        // Same text in the variant slot of another variant is a different record
        let c = Internship::hardware("Google", "SWE", "C");
        assert_ne!(a, c);
    }

    #[test]
    fn set_common_field_on_any_variant() {
        for kind in Kind::ALL {
            let mut internship = Internship::new(kind, "A", "B", "C");
            internship.set(Field::Status, "Offer").unwrap();
            assert_eq!(internship.status, "Offer");
        }
    }

    #[test]
    fn set_variant_field_on_wrong_variant_fails() {
        let mut internship = Internship::software("Facebook", "Automation Intern", "C");
        let before = internship.clone();

        match internship.set(Field::Department, "QA") {
            Err(SprintError::FieldTypeMismatch { flag, kind }) => {
                assert_eq!(flag, "/dept");
                assert_eq!(kind, Kind::Software);
            }
            other => panic!("Expected FieldTypeMismatch, got {:?}", other),
        }
        assert_eq!(internship, before);
    }

    #[test]
    fn set_variant_field_on_matching_variant() {
        let mut internship = Internship::hardware("AMD", "Engineer", "Arduino");
        internship.set(Field::EmbeddedSystems, "FPGA").unwrap();
        assert_eq!(internship.get(Field::EmbeddedSystems), Some("FPGA"));
    }

    #[test]
    fn flags_map_back_to_fields() {
        for field in Field::ALL {
            assert_eq!(Field::from_flag(field.flag()), Some(field));
        }
        assert_eq!(Field::from_flag("/deadline"), None);
        assert_eq!(Field::from_flag("/C"), None);
    }

    #[test]
    fn description_skips_empty_optional_fields() {
        let mut internship = Internship::general("UBS", "IT Intern", "Technology");
        internship.expectations = "Fast learner".to_string();

        let text = internship.to_description();
        assert!(text.contains("Company: UBS"));
        assert!(text.contains("Type: general"));
        assert!(text.contains("Department: Technology"));
        assert!(text.contains("Expectations: Fast learner"));
        assert!(!text.contains("Eligibility"));
        assert!(text.ends_with("Status: Application Pending"));
    }

    #[test]
    fn serializes_with_type_tag() {
        let internship = Internship::hardware("Xilinx", "Engineering Intern", "FPGA");
        let json = serde_json::to_value(&internship).unwrap();
        assert_eq!(json["type"], "hardware");
        assert_eq!(json["embedded_systems"], "FPGA");

        let parsed: Internship = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, internship);
    }

    #[test]
    fn profile_display_marks_unset_fields() {
        let profile = UserProfile {
            name: "John Doe".to_string(),
            ..Default::default()
        };
        let text = profile.to_string();
        assert!(text.starts_with("Name: John Doe"));
        assert!(text.contains("Target Pay Range: Not set"));
    }
}
