//! Domain types for Ergani declarations and receipts
//!
//! These are plain values in idiomatic Rust types. None of them knows about
//! the wire format; see [`crate::encoder`] for that.

use crate::codes::{
    LateDeclarationJustification, MovementType, OvertimeJustification, ScheduleWorkType,
};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Deserialize;

/// A single clock-in or clock-out event for one employee
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkCardEntry {
    /// Employee tax ID (AFM)
    pub employee_tax_id: String,
    /// Employee last name
    pub employee_last_name: String,
    /// Employee first name
    pub employee_first_name: String,
    /// Arrival or departure
    pub movement: MovementType,
    /// Reference date the card is declared for
    pub submission_date: NaiveDate,
    /// When the movement happened
    pub movement_time: DateTime<FixedOffset>,
    /// Why the movement is declared late, if it is
    pub late_justification: Option<LateDeclarationJustification>,
}

/// Work-card entries of one business branch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyWorkCardBatch {
    /// Employer tax ID
    pub employer_tax_id: String,
    /// Branch number (0 for headquarters)
    pub branch_number: u32,
    /// Free-text comment
    pub comments: Option<String>,
    pub entries: Vec<WorkCardEntry>,
}

/// Overtime worked by one employee on one date
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OvertimeEntry {
    pub employee_tax_id: String,
    /// Social security number (AMKA)
    pub employee_ssn: String,
    pub employee_last_name: String,
    pub employee_first_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Whether this entry cancels a previous declaration
    #[serde(default)]
    pub cancellation: bool,
    /// Profession code (STEP)
    pub profession_code: String,
    pub justification: OvertimeJustification,
    /// Workdays per week of the employee, normally 5 or 6
    pub weekly_workdays: u8,
    /// Approval reference (ASEE), when one was issued
    pub asee_approval: Option<String>,
}

/// Overtime entries of one business branch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyOvertimeBatch {
    pub branch_number: u32,
    /// SEPE (labor inspectorate) service code
    pub sepe_service_code: String,
    pub primary_activity_code: String,
    pub branch_activity_code: String,
    pub kallikratis_code: String,
    /// Tax ID of the legal representative
    pub legal_rep_tax_id: String,
    pub entries: Vec<OvertimeEntry>,
    /// Protocol number of a previous submission this one relates to
    pub related_protocol_id: Option<String>,
    pub related_protocol_date: Option<NaiveDate>,
    pub employer_organization: Option<String>,
    pub secondary_activity_code_1: Option<String>,
    pub secondary_activity_code_2: Option<String>,
    pub secondary_activity_code_3: Option<String>,
    pub secondary_activity_code_4: Option<String>,
    pub comments: Option<String>,
}

/// One stretch of a workday; split shifts have several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WorkdaySegment {
    pub work_type: ScheduleWorkType,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Schedule of one employee for one date
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeDailySchedule {
    pub employee_tax_id: String,
    pub employee_last_name: String,
    pub employee_first_name: String,
    pub date: NaiveDate,
    pub segments: Vec<WorkdaySegment>,
}

/// Schedule of one employee for one day of the week
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeWeeklySchedule {
    pub employee_tax_id: String,
    pub employee_last_name: String,
    pub employee_first_name: String,
    pub day: Weekday,
    pub segments: Vec<WorkdaySegment>,
}

/// Daily schedules of one business branch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyDailyScheduleBatch {
    pub branch_number: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub employees: Vec<EmployeeDailySchedule>,
    pub related_protocol_id: Option<String>,
    pub related_protocol_date: Option<NaiveDate>,
    pub comments: Option<String>,
}

/// Weekly schedules of one business branch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyWeeklyScheduleBatch {
    pub branch_number: u32,
    /// First day the weekly pattern applies to
    pub start_date: Option<NaiveDate>,
    /// Last day the weekly pattern applies to
    pub end_date: Option<NaiveDate>,
    pub employees: Vec<EmployeeWeeklySchedule>,
    pub related_protocol_id: Option<String>,
    pub related_protocol_date: Option<NaiveDate>,
    pub comments: Option<String>,
}

/// The server's acknowledgment of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Opaque submission ID
    pub id: String,
    /// Protocol number assigned by Ergani
    pub protocol: String,
    /// When the server registered the submission
    pub submitted_at: NaiveDateTime,
}
