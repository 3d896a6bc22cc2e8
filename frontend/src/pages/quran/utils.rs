use crate::api::Surah;

/// Client-side surah search: matches the latin name case-insensitively,
/// or the surah number exactly. Empty query passes everything.
pub fn filter_surah(list: &[Surah], query: &str) -> Vec<Surah> {
    let query = query.trim();
    if query.is_empty() {
        return list.to_vec();
    }
    let lowered = query.to_lowercase();
    list.iter()
        .filter(|surah| {
            surah.nama_latin.to_lowercase().contains(&lowered)
                || surah.nomor.to_string() == query
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surah(nomor: i32, nama_latin: &str) -> Surah {
        Surah {
            nomor,
            nama: "س".into(),
            nama_latin: nama_latin.into(),
            jumlah_ayat: 7,
            arti: String::new(),
        }
    }

    #[test]
    fn empty_query_passes_everything() {
        let list = vec![surah(1, "Al-Fatihah"), surah(2, "Al-Baqarah")];
        assert_eq!(filter_surah(&list, "").len(), 2);
        assert_eq!(filter_surah(&list, "   ").len(), 2);
    }

    #[test]
    fn latin_name_matches_case_insensitively() {
        let list = vec![surah(1, "Al-Fatihah"), surah(2, "Al-Baqarah")];
        let hits = filter_surah(&list, "fatihah");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].nomor, 1);
    }

    #[test]
    fn number_matches_exactly() {
        let list = vec![surah(1, "Al-Fatihah"), surah(12, "Yusuf")];
        let hits = filter_surah(&list, "12");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].nama_latin, "Yusuf");
        assert!(filter_surah(&list, "120").is_empty());
    }
}
