//! Staff member model and related types.
//!
//! This module defines the StaffMember struct and the employment/status
//! enums for representing workers in the scheduling system.

use serde::{Deserialize, Serialize};

use super::Shift;

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    /// Full-time employment (regular weekly schedule).
    FullTime,
    /// Part-time employment (reduced weekly schedule).
    PartTime,
    /// PRN ("as needed") employment with no guaranteed hours.
    Prn,
}

/// Represents the lifecycle status of a staff member.
///
/// Staff members are never deleted, only deactivated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffStatus {
    /// Actively working and schedulable.
    Active,
    /// Deactivated; retained for history.
    Inactive,
    /// Temporarily on leave.
    OnLeave,
}

/// Represents a staff member subject to attendance adjudication.
///
/// Accumulated `points` are mutated only through attendance events, never
/// directly by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier for the staff member.
    pub id: String,
    /// The staff member's full name.
    pub name: String,
    /// The staff member's email address.
    pub email: String,
    /// Optional contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// The staff member's clinical role (e.g., "RN", "CNA").
    pub role: String,
    /// The department the staff member belongs to.
    pub department: String,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// The staff member's lifecycle status.
    pub status: StaffStatus,
    /// Certifications held (e.g., "BLS", "ACLS").
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Accumulated attendance points (non-negative).
    pub points: i32,
    /// Number of recovery shifts completed.
    pub recovery_shifts: u32,
    /// Shifts currently owned by this staff member.
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl StaffMember {
    /// Returns true if the staff member is active and schedulable.
    pub fn is_active(&self) -> bool {
        self.status == StaffStatus::Active
    }

    /// Returns true if the staff member works PRN (as needed).
    pub fn is_prn(&self) -> bool {
        self.employment_type == EmploymentType::Prn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_staff(employment_type: EmploymentType) -> StaffMember {
        StaffMember {
            id: "staff_001".to_string(),
            name: "Dana Reyes".to_string(),
            email: "dana.reyes@example.com".to_string(),
            phone: None,
            role: "RN".to_string(),
            department: "EMERGENCY".to_string(),
            employment_type,
            status: StaffStatus::Active,
            certifications: vec![],
            points: 0,
            recovery_shifts: 0,
            shifts: vec![],
        }
    }

    #[test]
    fn test_deserialize_full_time_staff() {
        let json = r#"{
            "id": "staff_001",
            "name": "Dana Reyes",
            "email": "dana.reyes@example.com",
            "role": "RN",
            "department": "EMERGENCY",
            "employment_type": "FULL_TIME",
            "status": "ACTIVE",
            "points": 2,
            "recovery_shifts": 1
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.id, "staff_001");
        assert_eq!(staff.employment_type, EmploymentType::FullTime);
        assert_eq!(staff.status, StaffStatus::Active);
        assert_eq!(staff.points, 2);
        assert_eq!(staff.recovery_shifts, 1);
        assert!(staff.phone.is_none());
        assert!(staff.shifts.is_empty());
    }

    #[test]
    fn test_deserialize_prn_staff_with_certifications() {
        let json = r#"{
            "id": "staff_002",
            "name": "Sam Okafor",
            "email": "sam.okafor@example.com",
            "phone": "555-0142",
            "role": "CNA",
            "department": "ICU",
            "employment_type": "PRN",
            "status": "ON_LEAVE",
            "certifications": ["BLS"],
            "points": 0,
            "recovery_shifts": 0
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.employment_type, EmploymentType::Prn);
        assert_eq!(staff.status, StaffStatus::OnLeave);
        assert_eq!(staff.certifications, vec!["BLS"]);
        assert_eq!(staff.phone.as_deref(), Some("555-0142"));
    }

    #[test]
    fn test_serialize_staff_round_trip() {
        let staff = create_test_staff(EmploymentType::PartTime);
        let json = serde_json::to_string(&staff).unwrap();
        let deserialized: StaffMember = serde_json::from_str(&json).unwrap();
        assert_eq!(staff, deserialized);
    }

    #[test]
    fn test_employment_type_serialization() {
        assert_eq!(
            serde_json::to_string(&EmploymentType::FullTime).unwrap(),
            "\"FULL_TIME\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentType::PartTime).unwrap(),
            "\"PART_TIME\""
        );
        assert_eq!(serde_json::to_string(&EmploymentType::Prn).unwrap(), "\"PRN\"");
    }

    #[test]
    fn test_is_active_for_each_status() {
        let mut staff = create_test_staff(EmploymentType::FullTime);
        assert!(staff.is_active());

        staff.status = StaffStatus::Inactive;
        assert!(!staff.is_active());

        staff.status = StaffStatus::OnLeave;
        assert!(!staff.is_active());
    }

    #[test]
    fn test_is_prn() {
        assert!(create_test_staff(EmploymentType::Prn).is_prn());
        assert!(!create_test_staff(EmploymentType::FullTime).is_prn());
    }
}
