//! Ergani API Client Library
//!
//! A typed, blocking client for the Greek Ministry of Labour's Ergani web API.
//! It authenticates with employer credentials and submits labor declarations:
//! work-card clock events, overtime, and daily or weekly work schedules.
//!
//! # Features
//!
//! - Plain Rust domain types (`chrono` dates and times, closed enums)
//! - Exact Ergani wire encoding: `DD/MM/YYYY` dates, `"1"`/`"0"` booleans,
//!   numeric and Greek wire codes, `Parent>Child` collection keys
//! - Lazy bearer-token authentication
//! - Typed errors separating transport, API, authentication and decoding failures
//! - Pluggable transport; rustls-based reqwest by default
//!
//! # Example
//!
//! ```no_run
//! use chrono::{NaiveDate, NaiveTime, Weekday};
//! use ergani_client::{
//!     CompanyWeeklyScheduleBatch, EmployeeWeeklySchedule, ErganiClient, ErganiError,
//!     ScheduleWorkType, WorkdaySegment,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = ErganiClient::new("username", "password")?;
//!
//! let schedule = CompanyWeeklyScheduleBatch {
//!     branch_number: 0,
//!     start_date: NaiveDate::from_ymd_opt(2025, 7, 7),
//!     end_date: NaiveDate::from_ymd_opt(2025, 7, 13),
//!     employees: vec![EmployeeWeeklySchedule {
//!         employee_tax_id: "123456789".to_string(),
//!         employee_last_name: "Papadopoulos".to_string(),
//!         employee_first_name: "Giorgos".to_string(),
//!         day: Weekday::Mon,
//!         segments: vec![WorkdaySegment {
//!             work_type: ScheduleWorkType::WorkFromHome,
//!             start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!             end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
//!         }],
//!     }],
//!     related_protocol_id: None,
//!     related_protocol_date: None,
//!     comments: None,
//! };
//!
//! match client.submit_weekly_schedules(&[schedule]) {
//!     Ok(receipts) => {
//!         for receipt in receipts {
//!             println!("accepted: protocol {}", receipt.protocol);
//!         }
//!     }
//!     Err(ErganiError::Api(failure)) => {
//!         println!("rejected ({}): {}", failure.status, failure.message);
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod codec;
mod client;
mod codes;
pub mod encoder;
mod error;
mod models;
pub mod parser;
pub mod transport;

pub use client::{DEFAULT_BASE_URL, ErganiClient, ErganiClientBuilder, USER_TYPE_EMPLOYER};
pub use codes::{
    LateDeclarationJustification, MovementType, OvertimeJustification, ScheduleWorkType,
};
pub use encoder::{Document, DocumentKind, encode_document};
pub use error::{ApiFailure, ErganiError};
pub use models::{
    CompanyDailyScheduleBatch, CompanyOvertimeBatch, CompanyWeeklyScheduleBatch,
    CompanyWorkCardBatch, EmployeeDailySchedule, EmployeeWeeklySchedule, OvertimeEntry,
    SubmissionReceipt, WorkCardEntry, WorkdaySegment,
};
pub use transport::{DEFAULT_TIMEOUT, HttpRequest, HttpResponse, ReqwestTransport, Transport};
