pub mod kegiatan;
pub mod presensi;
