/// Display label for an attendance kind as stored on the wire.
pub fn kind_label(kind: &str) -> String {
    match kind {
        "masuk" => "Masuk".to_string(),
        "keluar" => "Keluar".to_string(),
        other => other.to_string(),
    }
}

pub fn greeting(nama: Option<&str>) -> String {
    match nama {
        Some(nama) if !nama.trim().is_empty() => {
            format!("Assalamu'alaikum, {}", nama.trim())
        }
        _ => "Assalamu'alaikum".to_string(),
    }
}
