use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use leptos::*;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub telepon: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub nama: String,
    pub telepon: String,
    pub role: String,
    #[serde(default)]
    pub pleton: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nama: String,
    pub telepon: String,
    pub password: String,
    pub alamat: String,
    pub kode_pos: String,
    pub kelurahan: String,
    pub kecamatan: String,
    pub kota: String,
    pub provinsi: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub telepon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub telepon: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub telepon: String,
    pub otp: String,
    pub password_baru: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Kegiatan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kegiatan {
    pub id: i64,
    pub judul: String,
    pub deskripsi: String,
    pub tanggal: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KegiatanListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<Kegiatan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKegiatanRequest {
    pub judul: String,
    pub deskripsi: String,
    pub tanggal: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateKegiatanRequest {
    pub id: i64,
    pub judul: String,
    pub deskripsi: String,
    pub tanggal: NaiveDate,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Presensi
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresensiRecord {
    pub id: i64,
    pub user_id: String,
    #[serde(default)]
    pub nama: String,
    pub qrcode_text: String,
    pub jenis: String,
    #[serde(default)]
    pub keterangan: String,
    pub status: String,
    pub waktu_presensi: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresensiListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<PresensiRecord>,
}

/// Payload for `POST /users/presensi`. `jenis` and `keterangan` are derived
/// from the wall clock at submission time (see `utils::time`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresensiSubmission {
    pub qrcode_text: String,
    pub jenis: String,
    pub keterangan: String,
    pub status: String,
    pub waktu_presensi: String,
}

// ---------------------------------------------------------------------------
// Kodepos
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KodeposResponse {
    pub kelurahan: String,
    pub kecamatan: String,
    pub kota: String,
    pub provinsi: String,
}

// ---------------------------------------------------------------------------
// Quran content API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surah {
    pub nomor: i32,
    pub nama: String,
    pub nama_latin: String,
    pub jumlah_ayat: i32,
    #[serde(default)]
    pub arti: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurahDetail {
    pub nomor: i32,
    pub nama: String,
    pub nama_latin: String,
    pub jumlah_ayat: i32,
    #[serde(default)]
    pub arti: String,
    #[serde(default)]
    pub deskripsi: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ayat {
    pub nomor: i32,
    pub ar: String,
    #[serde(default)]
    pub tr: Option<String>,
    #[serde(rename = "id", default)]
    pub terjemahan: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tafsir {
    pub ayat: i32,
    pub teks: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    /// Generic localized fallback message keyed by HTTP status code, used
    /// when the server body carries no usable message.
    pub fn from_status(status: u16) -> Self {
        let (error, code) = match status {
            401 => ("Sesi Anda telah berakhir, silakan masuk kembali.", "UNAUTHORIZED"),
            403 => ("Anda tidak memiliki akses ke halaman ini.", "FORBIDDEN"),
            404 => ("Data tidak ditemukan.", "NOT_FOUND"),
            500 => ("Terjadi kesalahan pada server.", "SERVER_ERROR"),
            _ => ("Terjadi kesalahan, silakan coba lagi.", "REQUEST_FAILED"),
        };
        Self {
            error: error.to_string(),
            code: code.to_string(),
            details: None,
        }
    }

    /// Server-reported failures surface the message field verbatim; bodies
    /// without one fall back to the status-keyed message.
    pub fn from_body(status: u16, body: Option<Value>) -> Self {
        let message = body.as_ref().and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(|v| v.as_str())
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.to_string())
        });
        match message {
            Some(error) => Self {
                error,
                code: body
                    .as_ref()
                    .and_then(|v| v.get("code"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("REQUEST_FAILED")
                    .to_string(),
                details: body,
            },
            None => Self::from_status(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_presensi_submission_wire_fields() {
        let payload = PresensiSubmission {
            qrcode_text: "12-0345".into(),
            jenis: "masuk".into(),
            keterangan: "Presensi masuk".into(),
            status: "hadir".into(),
            waktu_presensi: "2025-05-01 07:30:00".into(),
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["qrcode_text"], serde_json::json!("12-0345"));
        assert_eq!(v["jenis"], serde_json::json!("masuk"));
        assert_eq!(v["keterangan"], serde_json::json!("Presensi masuk"));
        assert_eq!(v["status"], serde_json::json!("hadir"));
        assert_eq!(v["waktu_presensi"], serde_json::json!("2025-05-01 07:30:00"));
    }

    #[test]
    fn deserialize_kegiatan_list_response() {
        let raw = r#"{
            "success": true,
            "data": [
                { "id": 1, "judul": "Kajian Rutin", "deskripsi": "Kajian mingguan",
                  "tanggal": "2025-05-01", "status": "Open" }
            ]
        }"#;
        let resp: KegiatanListResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].judul, "Kajian Rutin");
        assert_eq!(
            resp.data[0].tanggal,
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
        );
    }

    #[test]
    fn deserialize_kegiatan_list_failure_without_data() {
        let raw = r#"{ "success": false, "message": "tidak ada data" }"#;
        let resp: KegiatanListResponse = serde_json::from_str(raw).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("tidak ada data"));
        assert!(resp.data.is_empty());
    }

    #[test]
    fn deserialize_ayat_maps_translation_field() {
        let raw = r#"{ "nomor": 1, "ar": "بِسْمِ", "id": "Dengan nama Allah" }"#;
        let ayat: Ayat = serde_json::from_str(raw).unwrap();
        assert_eq!(ayat.nomor, 1);
        assert_eq!(ayat.terjemahan.as_deref(), Some("Dengan nama Allah"));
        assert!(ayat.tr.is_none());
    }

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert_eq!(ApiError::validation("x").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
    }

    #[test]
    fn from_status_maps_known_codes_to_localized_messages() {
        assert_eq!(ApiError::from_status(401).code, "UNAUTHORIZED");
        assert!(ApiError::from_status(401).error.contains("Sesi"));
        assert_eq!(ApiError::from_status(403).code, "FORBIDDEN");
        assert_eq!(ApiError::from_status(404).code, "NOT_FOUND");
        assert_eq!(ApiError::from_status(500).code, "SERVER_ERROR");
        assert_eq!(ApiError::from_status(502).code, "REQUEST_FAILED");
    }

    #[test]
    fn from_body_prefers_server_message_verbatim() {
        let body = serde_json::json!({ "message": "QR sudah dipakai" });
        let err = ApiError::from_body(400, Some(body));
        assert_eq!(err.error, "QR sudah dipakai");
    }

    #[test]
    fn from_body_falls_back_to_status_message() {
        let err = ApiError::from_body(500, Some(serde_json::json!({})));
        assert_eq!(err.code, "SERVER_ERROR");
        let err = ApiError::from_body(404, None);
        assert_eq!(err.code, "NOT_FOUND");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::validation("input salah").into();
        assert_eq!(raw, "input salah");
    }
}
