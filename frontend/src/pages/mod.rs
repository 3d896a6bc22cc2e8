pub mod admin;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod presensi;
pub mod quran;
pub mod register;
pub mod rundown;
