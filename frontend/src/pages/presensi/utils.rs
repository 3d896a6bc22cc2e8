use crate::api::PresensiSubmission;
use crate::utils::time;
use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

/// Scan session phases. Forward-only, except the explicit reset from
/// Result back to Idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning,
    Scanned,
    Submitting,
    Result,
}

impl ScanPhase {
    pub fn can_start(self) -> bool {
        matches!(self, ScanPhase::Idle)
    }

    pub fn accepts_decode(self) -> bool {
        matches!(self, ScanPhase::Scanning)
    }

    pub fn can_submit(self) -> bool {
        matches!(self, ScanPhase::Scanned)
    }

    pub fn can_reset(self) -> bool {
        matches!(self, ScanPhase::Result)
    }
}

/// QR codes carry the pleton number ahead of the first dash,
/// e.g. "12-0345" belongs to Pleton 12.
pub fn pleton_from_code(code: &str) -> Option<String> {
    let prefix = code.split('-').next()?.trim();
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("Pleton {}", prefix))
}

pub fn build_submission(code: &str, now: DateTime<Tz>) -> PresensiSubmission {
    let jenis = time::attendance_kind_for_hour(now.hour());
    PresensiSubmission {
        qrcode_text: code.to_string(),
        jenis: jenis.to_string(),
        keterangan: time::keterangan_for_kind(jenis),
        status: "Hadir".to_string(),
        waktu_presensi: time::presensi_timestamp(now),
    }
}
