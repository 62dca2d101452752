//! Closed enum families and their Ergani wire codes
//!
//! Every family has a stable domain name per variant (used for parsing and for
//! serde) and a fixed wire code (used only by the document encoder). Parsing a
//! name or a code outside the declared set fails with
//! [`ErganiError::InvalidEnumValue`].

use crate::error::ErganiError;
use std::fmt;
use std::str::FromStr;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $domain:literal, $code:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member of the family, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name of the family, as reported in errors
            pub const FAMILY: &'static str = stringify!($name);

            /// The wire code sent to the API
            pub fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// The stable domain name of this value
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $domain,)+
                }
            }

            /// Look up a value by its wire code
            pub fn from_code(code: &str) -> Result<Self, ErganiError> {
                match code {
                    $($code => Ok($name::$variant),)+
                    other => Err(ErganiError::InvalidEnumValue {
                        family: Self::FAMILY,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl FromStr for $name {
            type Err = ErganiError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($domain => Ok($name::$variant),)+
                    other => Err(ErganiError::InvalidEnumValue {
                        family: Self::FAMILY,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = ErganiError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.name()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

wire_enum! {
    /// Direction of a work-card movement
    MovementType {
        /// Employee clocking in
        Arrival => "ARRIVAL", "0";
        /// Employee clocking out
        Departure => "DEPARTURE", "1";
    }
}

wire_enum! {
    /// Reason for declaring a work-card movement late
    LateDeclarationJustification {
        /// Power outage at the workplace
        PowerOutage => "POWER_OUTAGE", "001";
        /// Failure of the employer's own systems
        EmployerSystemsUnavailable => "EMPLOYER_SYSTEMS_UNAVAILABLE", "002";
        /// Failure of the Ergani systems
        ErganiSystemsUnavailable => "ERGANI_SYSTEMS_UNAVAILABLE", "003";
    }
}

wire_enum! {
    /// Legal justification for overtime work
    OvertimeJustification {
        AccidentPreventionOrDamageRestoration => "ACCIDENT_PREVENTION_OR_DAMAGE_RESTORATION", "001";
        UrgentSeasonalTasks => "URGENT_SEASONAL_TASKS", "002";
        ExceptionalWorkload => "EXCEPTIONAL_WORKLOAD", "003";
        SupplementaryTasks => "SUPPLEMENTARY_TASKS", "004";
        LostHoursSuddenCauses => "LOST_HOURS_SUDDEN_CAUSES", "005";
        LostHoursOfficialHolidays => "LOST_HOURS_OFFICIAL_HOLIDAYS", "006";
        LostHoursWeatherConditions => "LOST_HOURS_WEATHER_CONDITIONS", "007";
        EmergencyClosureDay => "EMERGENCY_CLOSURE_DAY", "008";
        NonWorkdayTasks => "NON_WORKDAY_TASKS", "009";
    }
}

wire_enum! {
    /// Kind of activity in a schedule segment
    ///
    /// The wire codes are Greek abbreviations and must be sent byte-exact.
    ScheduleWorkType {
        /// Work at the employer's premises
        WorkFromOffice => "WORK_FROM_OFFICE", "ΕΡΓ";
        /// Teleworking
        WorkFromHome => "WORK_FROM_HOME", "ΤΗΛ";
        /// Scheduled day off
        RestDay => "REST_DAY", "ΑΝ";
        /// Planned absence
        Absent => "ABSENT", "ΜΕ";
    }
}
