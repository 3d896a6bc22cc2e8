/// Signup wizard stage. Forward transitions are gated by per-step
/// validation; back transitions are always allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterStep {
    Account,
    Address,
    Confirm,
}

impl RegisterStep {
    pub fn number(self) -> usize {
        match self {
            RegisterStep::Account => 1,
            RegisterStep::Address => 2,
            RegisterStep::Confirm => 3,
        }
    }

    pub fn back(self) -> Self {
        match self {
            RegisterStep::Account | RegisterStep::Address => RegisterStep::Account,
            RegisterStep::Confirm => RegisterStep::Address,
        }
    }
}

pub fn validate_account(
    nama: &str,
    telepon: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), String> {
    if nama.trim().is_empty() {
        return Err("Nama lengkap wajib diisi".into());
    }
    if telepon.trim().is_empty() {
        return Err("Nomor telepon wajib diisi".into());
    }
    if password.len() < 8 {
        return Err("Kata sandi minimal 8 karakter".into());
    }
    if password != confirmation {
        return Err("Konfirmasi kata sandi tidak cocok".into());
    }
    Ok(())
}

pub fn validate_address(
    alamat: &str,
    kode_pos: &str,
    kelurahan: &str,
    kecamatan: &str,
    kota: &str,
    provinsi: &str,
) -> Result<(), String> {
    if alamat.trim().is_empty() {
        return Err("Alamat wajib diisi".into());
    }
    if kode_pos.len() != 5 {
        return Err("Kode pos harus 5 digit".into());
    }
    let regions = [kelurahan, kecamatan, kota, provinsi];
    if regions.iter().any(|field| field.trim().is_empty()) {
        return Err("Data wilayah belum lengkap, isi secara manual".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_numbers_are_one_based() {
        assert_eq!(RegisterStep::Account.number(), 1);
        assert_eq!(RegisterStep::Address.number(), 2);
        assert_eq!(RegisterStep::Confirm.number(), 3);
    }

    #[test]
    fn back_walks_toward_account_and_stops() {
        assert_eq!(RegisterStep::Confirm.back(), RegisterStep::Address);
        assert_eq!(RegisterStep::Address.back(), RegisterStep::Account);
        assert_eq!(RegisterStep::Account.back(), RegisterStep::Account);
    }

    #[test]
    fn account_step_checks_each_field_in_order() {
        assert_eq!(
            validate_account("", "0812", "password123", "password123"),
            Err("Nama lengkap wajib diisi".into())
        );
        assert_eq!(
            validate_account("Budi", "  ", "password123", "password123"),
            Err("Nomor telepon wajib diisi".into())
        );
        assert_eq!(
            validate_account("Budi", "0812", "pendek", "pendek"),
            Err("Kata sandi minimal 8 karakter".into())
        );
        assert_eq!(
            validate_account("Budi", "0812", "password123", "password124"),
            Err("Konfirmasi kata sandi tidak cocok".into())
        );
        assert!(validate_account("Budi", "0812", "password123", "password123").is_ok());
    }

    #[test]
    fn address_step_requires_complete_region() {
        assert_eq!(
            validate_address("", "40286", "a", "b", "c", "d"),
            Err("Alamat wajib diisi".into())
        );
        assert_eq!(
            validate_address("Jl. Merdeka 1", "4028", "a", "b", "c", "d"),
            Err("Kode pos harus 5 digit".into())
        );
        assert_eq!(
            validate_address("Jl. Merdeka 1", "40286", "a", "", "c", "d"),
            Err("Data wilayah belum lengkap, isi secara manual".into())
        );
        assert!(validate_address("Jl. Merdeka 1", "40286", "a", "b", "c", "d").is_ok());
    }
}
