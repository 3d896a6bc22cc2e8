use chrono::NaiveDate;

pub const STATUS_OPTIONS: [(&str, &str); 2] = [("Open", "Dibuka"), ("Closed", "Ditutup")];

/// Validate the shared add/edit form. All four fields are required and
/// the date must parse as YYYY-MM-DD (the wire format of the date input).
pub fn validate_form(
    judul: &str,
    deskripsi: &str,
    tanggal: &str,
    status: &str,
) -> Result<NaiveDate, String> {
    if judul.trim().is_empty() {
        return Err("Judul kegiatan wajib diisi".into());
    }
    if deskripsi.trim().is_empty() {
        return Err("Deskripsi wajib diisi".into());
    }
    let tanggal = NaiveDate::parse_from_str(tanggal, "%Y-%m-%d")
        .map_err(|_| "Tanggal tidak valid".to_string())?;
    if !STATUS_OPTIONS.iter().any(|(value, _)| *value == status) {
        return Err("Status tidak dikenal".into());
    }
    Ok(tanggal)
}
