pub const OTP_LEN: usize = 6;

/// Wizard stage. Transitions only move forward, except for the explicit
/// back action from the OTP step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetStep {
    PhoneEntry,
    OtpEntry,
    NewPassword,
}

impl ResetStep {
    pub fn number(self) -> usize {
        match self {
            ResetStep::PhoneEntry => 1,
            ResetStep::OtpEntry => 2,
            ResetStep::NewPassword => 3,
        }
    }
}

pub fn validate_phone(telepon: &str) -> Result<(), String> {
    if telepon.trim().is_empty() {
        return Err("Nomor telepon wajib diisi".into());
    }
    Ok(())
}

/// Each OTP cell holds at most one digit. Pasting or typing extra
/// characters keeps only the last digit entered.
pub fn sanitize_otp_cell(raw: &str) -> String {
    raw.chars()
        .rev()
        .find(|c| c.is_ascii_digit())
        .map(|c| c.to_string())
        .unwrap_or_default()
}

pub fn otp_complete(cells: &[String]) -> bool {
    cells.len() == OTP_LEN
        && cells
            .iter()
            .all(|cell| cell.len() == 1 && cell.chars().all(|c| c.is_ascii_digit()))
}

pub fn join_otp(cells: &[String]) -> String {
    cells.concat()
}

pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Kata sandi minimal 8 karakter".into());
    }
    if password != confirmation {
        return Err("Konfirmasi kata sandi tidak cocok".into());
    }
    Ok(())
}
