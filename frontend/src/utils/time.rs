use chrono::{DateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// All attendance bookkeeping runs on the organization's wall clock (WIB).
const APP_TIME_ZONE: Tz = chrono_tz::Asia::Jakarta;

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&APP_TIME_ZONE)
}

/// Attendance kind is derived from the local hour, never user-editable:
/// before noon counts as arrival ("masuk"), from noon on as departure
/// ("keluar").
pub fn attendance_kind_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "masuk"
    } else {
        "keluar"
    }
}

pub fn attendance_kind_now() -> &'static str {
    attendance_kind_for_hour(now_in_app_tz().hour())
}

pub fn keterangan_for_kind(kind: &str) -> String {
    match kind {
        "masuk" => "Presensi masuk".to_string(),
        "keluar" => "Presensi keluar".to_string(),
        other => format!("Presensi {}", other),
    }
}

/// Wire format for `waktu_presensi`.
pub fn presensi_timestamp(at: DateTime<Tz>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn presensi_timestamp_now() -> String {
    presensi_timestamp(now_in_app_tz())
}

#[allow(dead_code)]
pub fn app_tz() -> Tz {
    APP_TIME_ZONE
}
