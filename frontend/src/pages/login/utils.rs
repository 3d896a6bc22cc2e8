pub fn validate_credentials(telepon: &str, password: &str) -> Result<(), String> {
    if telepon.trim().is_empty() {
        return Err("Nomor telepon wajib diisi".into());
    }
    if password.is_empty() {
        return Err("Kata sandi wajib diisi".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            validate_credentials("", "rahasia"),
            Err("Nomor telepon wajib diisi".into())
        );
        assert_eq!(
            validate_credentials("   ", "rahasia"),
            Err("Nomor telepon wajib diisi".into())
        );
        assert_eq!(
            validate_credentials("0812345678", ""),
            Err("Kata sandi wajib diisi".into())
        );
    }

    #[test]
    fn accepts_filled_credentials() {
        assert!(validate_credentials("0812345678", "rahasia").is_ok());
    }
}
