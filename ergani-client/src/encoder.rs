//! Payload builders for the four Ergani document kinds
//!
//! The API expects a bespoke JSON shape:
//!
//! - the batch list is wrapped under a two-level envelope (`{"Cards": {"Card": [...]}}`),
//! - nested collections are stored under a single key spelled `Parent>Child`
//!   (e.g. `"Details>CardDetails": [...]`) instead of nested objects,
//! - scalars are strings produced by [`crate::codec`] and enum values are their
//!   wire codes (e.g. [`MovementType::code`](crate::MovementType::code)),
//! - optional fields are left out entirely when unset.
//!
//! Each payload is built field by field so the output shape is exactly what
//! is written here.

use crate::codec::{encode_bool, encode_date, encode_datetime, encode_time, encode_weekday};
use crate::models::{
    CompanyDailyScheduleBatch, CompanyOvertimeBatch, CompanyWeeklyScheduleBatch,
    CompanyWorkCardBatch, EmployeeDailySchedule, EmployeeWeeklySchedule, OvertimeEntry,
    WorkCardEntry, WorkdaySegment,
};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::fmt;

/// The kinds of document the API accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Clock-in / clock-out declarations
    WorkCard,
    /// Overtime declarations
    Overtime,
    /// Daily work-time organisation
    DailySchedule,
    /// Weekly work-time organisation
    WeeklySchedule,
}

impl DocumentKind {
    /// Path segments of the submission endpoint, relative to the base URL
    pub fn path_segments(self) -> [&'static str; 2] {
        match self {
            DocumentKind::WorkCard => ["Documents", "WRKCardSE"],
            DocumentKind::Overtime => ["Documents", "OvTime"],
            DocumentKind::DailySchedule => ["Documents", "WTODaily"],
            DocumentKind::WeeklySchedule => ["Documents", "WTOWeek"],
        }
    }

    /// Outer and inner envelope keys wrapping the batch list
    pub fn envelope_keys(self) -> (&'static str, &'static str) {
        match self {
            DocumentKind::WorkCard => ("Cards", "Card"),
            DocumentKind::Overtime => ("Overtimes", "Overtime"),
            DocumentKind::DailySchedule | DocumentKind::WeeklySchedule => ("WTOS", "WTO"),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::WorkCard => "work card",
            DocumentKind::Overtime => "overtime",
            DocumentKind::DailySchedule => "daily schedule",
            DocumentKind::WeeklySchedule => "weekly schedule",
        };
        f.write_str(name)
    }
}

/// A batch type that can be submitted as one element of a document
pub trait Document {
    /// Which document this batch belongs to
    const KIND: DocumentKind;

    /// Build the wire object of this batch
    fn to_wire(&self) -> Map<String, Value>;
}

/// Wrap a list of batches in the envelope of their document kind
pub fn encode_document<D: Document>(batches: &[D]) -> Value {
    let (outer, inner) = D::KIND.envelope_keys();
    let items: Vec<Value> = batches.iter().map(|b| Value::Object(b.to_wire())).collect();

    let mut inner_obj = Map::new();
    inner_obj.insert(inner.to_string(), Value::Array(items));

    let mut root = Map::new();
    root.insert(outer.to_string(), Value::Object(inner_obj));
    Value::Object(root)
}

/// Field-by-field builder for one wire object
struct WireObject(Map<String, Value>);

impl WireObject {
    fn new() -> Self {
        Self(Map::new())
    }

    fn text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.insert(key.to_string(), Value::String(value.into()));
        self
    }

    fn opt_text(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.text(key, v),
            None => self,
        }
    }

    fn number(mut self, key: &str, value: impl Into<serde_json::Number>) -> Self {
        self.0.insert(key.to_string(), Value::Number(value.into()));
        self
    }

    fn date(self, key: &str, value: NaiveDate) -> Self {
        self.text(key, encode_date(value))
    }

    fn opt_date(self, key: &str, value: Option<NaiveDate>) -> Self {
        match value {
            Some(v) => self.date(key, v),
            None => self,
        }
    }

    /// Nested collection under a `Parent>Child` key
    fn nested<T>(mut self, key: &str, items: &[T], encode: impl Fn(&T) -> Map<String, Value>) -> Self {
        let values = items.iter().map(|item| Value::Object(encode(item))).collect();
        self.0.insert(key.to_string(), Value::Array(values));
        self
    }

    fn finish(self) -> Map<String, Value> {
        self.0
    }
}

fn work_card_entry(entry: &WorkCardEntry) -> Map<String, Value> {
    WireObject::new()
        .text("f_afm", &entry.employee_tax_id)
        .text("f_eponymo", &entry.employee_last_name)
        .text("f_onoma", &entry.employee_first_name)
        .text("f_type", entry.movement.code())
        .date("f_reference_date", entry.submission_date)
        .text("f_date", encode_datetime(entry.movement_time))
        .opt_text("f_aitiologia", entry.late_justification.map(|j| j.code()))
        .finish()
}

fn overtime_entry(entry: &OvertimeEntry) -> Map<String, Value> {
    WireObject::new()
        .text("f_afm", &entry.employee_tax_id)
        .text("f_amka", &entry.employee_ssn)
        .text("f_eponymo", &entry.employee_last_name)
        .text("f_onoma", &entry.employee_first_name)
        .date("f_date", entry.date)
        .text("f_from", encode_time(entry.start_time))
        .text("f_to", encode_time(entry.end_time))
        .text("f_cancellation", encode_bool(entry.cancellation))
        .text("f_step", &entry.profession_code)
        .text("f_reason", entry.justification.code())
        .number("f_weekdates", entry.weekly_workdays)
        .opt_text("f_asee", entry.asee_approval.as_deref())
        .finish()
}

fn workday_segment(segment: &WorkdaySegment) -> Map<String, Value> {
    WireObject::new()
        .text("f_type", segment.work_type.code())
        .text("f_from", encode_time(segment.start_time))
        .text("f_to", encode_time(segment.end_time))
        .finish()
}

fn daily_schedule(schedule: &EmployeeDailySchedule) -> Map<String, Value> {
    WireObject::new()
        .text("f_afm", &schedule.employee_tax_id)
        .text("f_eponymo", &schedule.employee_last_name)
        .text("f_onoma", &schedule.employee_first_name)
        .date("f_date", schedule.date)
        .nested(
            "ErgazomenosAnalytics>ErgazomenosWTOAnalytics",
            &schedule.segments,
            workday_segment,
        )
        .finish()
}

fn weekly_schedule(schedule: &EmployeeWeeklySchedule) -> Map<String, Value> {
    WireObject::new()
        .text("f_afm", &schedule.employee_tax_id)
        .text("f_eponymo", &schedule.employee_last_name)
        .text("f_onoma", &schedule.employee_first_name)
        .number("f_day", encode_weekday(schedule.day))
        .nested(
            "ErgazomenosAnalytics>ErgazomenosWTOAnalytics",
            &schedule.segments,
            workday_segment,
        )
        .finish()
}

impl Document for CompanyWorkCardBatch {
    const KIND: DocumentKind = DocumentKind::WorkCard;

    fn to_wire(&self) -> Map<String, Value> {
        WireObject::new()
            .text("f_afm_ergodoti", &self.employer_tax_id)
            .number("f_aa", self.branch_number)
            .opt_text("f_comments", self.comments.as_deref())
            .nested("Details>CardDetails", &self.entries, work_card_entry)
            .finish()
    }
}

impl Document for CompanyOvertimeBatch {
    const KIND: DocumentKind = DocumentKind::Overtime;

    fn to_wire(&self) -> Map<String, Value> {
        WireObject::new()
            .number("f_aa_pararthmatos", self.branch_number)
            .text("f_ypiresia_sepe", &self.sepe_service_code)
            .text("f_kad_kyria", &self.primary_activity_code)
            .text("f_kad_pararthmatos", &self.branch_activity_code)
            .text("f_kallikratis_pararthmatos", &self.kallikratis_code)
            .text("f_afm_proswpoy", &self.legal_rep_tax_id)
            .nested(
                "Ergazomenoi>OvertimeErgazomenosDate",
                &self.entries,
                overtime_entry,
            )
            .opt_text("f_rel_protocol", self.related_protocol_id.as_deref())
            .opt_date("f_rel_date", self.related_protocol_date)
            .opt_text("f_ergodotikh_organwsh", self.employer_organization.as_deref())
            .opt_text("f_kad_deyt_1", self.secondary_activity_code_1.as_deref())
            .opt_text("f_kad_deyt_2", self.secondary_activity_code_2.as_deref())
            .opt_text("f_kad_deyt_3", self.secondary_activity_code_3.as_deref())
            .opt_text("f_kad_deyt_4", self.secondary_activity_code_4.as_deref())
            .opt_text("f_comments", self.comments.as_deref())
            .finish()
    }
}

impl Document for CompanyDailyScheduleBatch {
    const KIND: DocumentKind = DocumentKind::DailySchedule;

    fn to_wire(&self) -> Map<String, Value> {
        WireObject::new()
            .number("f_aa_pararthmatos", self.branch_number)
            .opt_date("f_from_date", self.start_date)
            .opt_date("f_to_date", self.end_date)
            .nested("Ergazomenoi>ErgazomenoiWTO", &self.employees, daily_schedule)
            .opt_text("f_rel_protocol", self.related_protocol_id.as_deref())
            .opt_date("f_rel_date", self.related_protocol_date)
            .opt_text("f_comments", self.comments.as_deref())
            .finish()
    }
}

impl Document for CompanyWeeklyScheduleBatch {
    const KIND: DocumentKind = DocumentKind::WeeklySchedule;

    fn to_wire(&self) -> Map<String, Value> {
        WireObject::new()
            .number("f_aa_pararthmatos", self.branch_number)
            .opt_date("f_from_date", self.start_date)
            .opt_date("f_to_date", self.end_date)
            .nested("Ergazomenoi>ErgazomenoiWTO", &self.employees, weekly_schedule)
            .opt_text("f_rel_protocol", self.related_protocol_id.as_deref())
            .opt_date("f_rel_date", self.related_protocol_date)
            .opt_text("f_comments", self.comments.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{
        LateDeclarationJustification, MovementType, OvertimeJustification, ScheduleWorkType,
    };
    use chrono::{NaiveTime, TimeZone, Utc, Weekday};
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn work_card_batch(justification: Option<LateDeclarationJustification>) -> CompanyWorkCardBatch {
        CompanyWorkCardBatch {
            employer_tax_id: "999999999".to_string(),
            branch_number: 1,
            comments: None,
            entries: vec![WorkCardEntry {
                employee_tax_id: "123456789".to_string(),
                employee_last_name: "Doe".to_string(),
                employee_first_name: "John".to_string(),
                movement: MovementType::Arrival,
                submission_date: date(2025, 7, 10),
                movement_time: Utc.with_ymd_and_hms(2025, 7, 10, 9, 0, 0).unwrap().fixed_offset(),
                late_justification: justification,
            }],
        }
    }

    #[test]
    fn test_work_card_payload_shape() {
        let payload = encode_document(&[work_card_batch(None)]);

        assert_eq!(
            payload,
            json!({
                "Cards": {
                    "Card": [{
                        "f_afm_ergodoti": "999999999",
                        "f_aa": 1,
                        "Details>CardDetails": [{
                            "f_afm": "123456789",
                            "f_eponymo": "Doe",
                            "f_onoma": "John",
                            "f_type": "0",
                            "f_reference_date": "10/07/2025",
                            "f_date": "2025-07-10T09:00:00.000Z"
                        }]
                    }]
                }
            })
        );
    }

    #[test]
    fn test_late_justification_is_code_or_absent() {
        let with = encode_document(&[work_card_batch(Some(
            LateDeclarationJustification::EmployerSystemsUnavailable,
        ))]);
        let entry = &with["Cards"]["Card"][0]["Details>CardDetails"][0];
        assert_eq!(entry["f_aitiologia"], json!("002"));

        let without = encode_document(&[work_card_batch(None)]);
        let entry = without["Cards"]["Card"][0]["Details>CardDetails"][0]
            .as_object()
            .unwrap();
        assert!(!entry.contains_key("f_aitiologia"));
        // Unset comment is dropped, not sent as null
        assert!(
            !without["Cards"]["Card"][0]
                .as_object()
                .unwrap()
                .contains_key("f_comments")
        );
    }

    #[test]
    fn test_overtime_payload_codes() {
        let batch = CompanyOvertimeBatch {
            branch_number: 0,
            sepe_service_code: "10001".to_string(),
            primary_activity_code: "1234".to_string(),
            branch_activity_code: "1234".to_string(),
            kallikratis_code: "12345678".to_string(),
            legal_rep_tax_id: "111111111".to_string(),
            entries: vec![OvertimeEntry {
                employee_tax_id: "123456789".to_string(),
                employee_ssn: "01019012345".to_string(),
                employee_last_name: "Doe".to_string(),
                employee_first_name: "Jane".to_string(),
                date: date(2025, 7, 10),
                start_time: time(17, 0),
                end_time: time(19, 30),
                cancellation: false,
                profession_code: "7231".to_string(),
                justification: OvertimeJustification::ExceptionalWorkload,
                weekly_workdays: 5,
                asee_approval: None,
            }],
            related_protocol_id: Some("ABC123".to_string()),
            related_protocol_date: Some(date(2025, 7, 1)),
            employer_organization: None,
            secondary_activity_code_1: Some("5678".to_string()),
            secondary_activity_code_2: None,
            secondary_activity_code_3: None,
            secondary_activity_code_4: None,
            comments: None,
        };

        let payload = encode_document(&[batch]);
        let element = &payload["Overtimes"]["Overtime"][0];
        assert_eq!(element["f_aa_pararthmatos"], json!(0));
        assert_eq!(element["f_rel_protocol"], json!("ABC123"));
        assert_eq!(element["f_rel_date"], json!("01/07/2025"));
        assert_eq!(element["f_kad_deyt_1"], json!("5678"));
        assert!(element.get("f_kad_deyt_2").is_none());
        assert!(element.get("f_ergodotikh_organwsh").is_none());

        let entry = &element["Ergazomenoi>OvertimeErgazomenosDate"][0];
        assert_eq!(entry["f_from"], json!("17:00"));
        assert_eq!(entry["f_to"], json!("19:30"));
        assert_eq!(entry["f_cancellation"], json!("0"));
        assert_eq!(entry["f_reason"], json!("003"));
        assert_eq!(entry["f_weekdates"], json!(5));
        assert!(entry.get("f_asee").is_none());
    }

    #[test]
    fn test_daily_schedule_split_shift() {
        let batch = CompanyDailyScheduleBatch {
            branch_number: 2,
            start_date: None,
            end_date: None,
            employees: vec![EmployeeDailySchedule {
                employee_tax_id: "123456789".to_string(),
                employee_last_name: "Doe".to_string(),
                employee_first_name: "John".to_string(),
                date: date(2025, 7, 10),
                segments: vec![
                    WorkdaySegment {
                        work_type: ScheduleWorkType::WorkFromOffice,
                        start_time: time(9, 0),
                        end_time: time(13, 0),
                    },
                    WorkdaySegment {
                        work_type: ScheduleWorkType::WorkFromHome,
                        start_time: time(15, 0),
                        end_time: time(19, 0),
                    },
                ],
            }],
            related_protocol_id: None,
            related_protocol_date: None,
            comments: Some("split shift".to_string()),
        };

        let payload = encode_document(&[batch]);
        assert_eq!(
            payload,
            json!({
                "WTOS": {
                    "WTO": [{
                        "f_aa_pararthmatos": 2,
                        "Ergazomenoi>ErgazomenoiWTO": [{
                            "f_afm": "123456789",
                            "f_eponymo": "Doe",
                            "f_onoma": "John",
                            "f_date": "10/07/2025",
                            "ErgazomenosAnalytics>ErgazomenosWTOAnalytics": [
                                {"f_type": "ΕΡΓ", "f_from": "09:00", "f_to": "13:00"},
                                {"f_type": "ΤΗΛ", "f_from": "15:00", "f_to": "19:00"}
                            ]
                        }],
                        "f_comments": "split shift"
                    }]
                }
            })
        );
    }

    #[test]
    fn test_weekly_schedule_day_ordinal_and_range() {
        let batch = CompanyWeeklyScheduleBatch {
            branch_number: 0,
            start_date: Some(date(2025, 7, 7)),
            end_date: Some(date(2025, 7, 13)),
            employees: vec![EmployeeWeeklySchedule {
                employee_tax_id: "123456789".to_string(),
                employee_last_name: "Doe".to_string(),
                employee_first_name: "John".to_string(),
                day: Weekday::Sun,
                segments: vec![WorkdaySegment {
                    work_type: ScheduleWorkType::RestDay,
                    start_time: time(0, 0),
                    end_time: time(23, 59),
                }],
            }],
            related_protocol_id: None,
            related_protocol_date: None,
            comments: None,
        };

        let payload = encode_document(&[batch]);
        let element = &payload["WTOS"]["WTO"][0];
        assert_eq!(element["f_from_date"], json!("07/07/2025"));
        assert_eq!(element["f_to_date"], json!("13/07/2025"));
        let employee = &element["Ergazomenoi>ErgazomenoiWTO"][0];
        assert_eq!(employee["f_day"], json!(0));
        assert_eq!(
            employee["ErgazomenosAnalytics>ErgazomenosWTOAnalytics"][0]["f_type"],
            json!("ΑΝ")
        );
    }

    #[test]
    fn test_empty_batch_list_keeps_envelope() {
        let payload = encode_document::<CompanyWeeklyScheduleBatch>(&[]);
        assert_eq!(payload, json!({"WTOS": {"WTO": []}}));
    }

    #[test]
    fn test_document_paths() {
        assert_eq!(DocumentKind::WorkCard.path_segments(), ["Documents", "WRKCardSE"]);
        assert_eq!(DocumentKind::Overtime.path_segments(), ["Documents", "OvTime"]);
        assert_eq!(DocumentKind::DailySchedule.path_segments(), ["Documents", "WTODaily"]);
        assert_eq!(DocumentKind::WeeklySchedule.path_segments(), ["Documents", "WTOWeek"]);
    }
}
