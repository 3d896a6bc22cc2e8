use crate::api::PresensiRecord;

pub const STATUS_ALL: &str = "all";

/// Client-side filters over the fully loaded attendance list. Each
/// field is independent; an empty/default value means "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub date: String,
    pub status: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            date: String::new(),
            status: STATUS_ALL.to_string(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.search.is_empty() && self.date.is_empty() && !self.has_status_filter()
    }

    fn has_status_filter(&self) -> bool {
        !self.status.is_empty() && self.status != STATUS_ALL
    }
}

fn matches_search(record: &PresensiRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    record.nama.to_lowercase().contains(&needle)
        || record.qrcode_text.to_lowercase().contains(&needle)
}

fn matches_date(record: &PresensiRecord, date: &str) -> bool {
    if date.is_empty() {
        return true;
    }
    // waktu_presensi is "YYYY-MM-DD HH:MM:SS"; the date filter compares
    // the calendar-day prefix only.
    record.waktu_presensi.starts_with(date)
}

fn matches_status(record: &PresensiRecord, status: &str) -> bool {
    if status.is_empty() || status == STATUS_ALL {
        return true;
    }
    record.status == status
}

pub fn apply_filters(records: &[PresensiRecord], filters: &FilterState) -> Vec<PresensiRecord> {
    records
        .iter()
        .filter(|record| {
            matches_search(record, &filters.search)
                && matches_date(record, &filters.date)
                && matches_status(record, &filters.status)
        })
        .cloned()
        .collect()
}
