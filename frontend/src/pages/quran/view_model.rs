use super::repository::QuranRepository;
use super::utils::filter_surah;
use crate::api::{ApiClient, ApiError, Ayat, Surah, SurahDetail, Tafsir};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct QuranListViewModel {
    pub surah_list: RwSignal<Vec<Surah>>,
    pub search: RwSignal<String>,
    pub filtered: Memo<Vec<Surah>>,
    pub error: RwSignal<Option<String>>,
    pub fetch_action: Action<(), Result<Vec<Surah>, ApiError>>,
}

pub fn use_quran_list_view_model() -> QuranListViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = QuranRepository::new_with_client(Rc::new(api));

    let surah_list = create_rw_signal(Vec::new());
    let search = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let filtered = create_memo(move |_| filter_surah(&surah_list.get(), &search.get()));

    let fetch_action = create_action(move |_: &()| {
        let repository = repository.clone();
        async move {
            let result = repository.fetch_surah_list().await;
            match &result {
                Ok(items) => {
                    surah_list.set(items.clone());
                    error.set(None);
                }
                Err(err) => error.set(Some(err.error.clone())),
            }
            result
        }
    });

    QuranListViewModel {
        surah_list,
        search,
        filtered,
        error,
        fetch_action,
    }
}

impl QuranListViewModel {
    pub fn load(&self) {
        self.fetch_action.dispatch(());
    }
}

#[derive(Clone)]
pub struct QuranDetailViewModel {
    pub nomor: RwSignal<i32>,
    pub surah: RwSignal<Option<SurahDetail>>,
    pub ayat: RwSignal<Vec<Ayat>>,
    pub tafsir: RwSignal<Option<Tafsir>>,
    pub error: RwSignal<Option<String>>,
    pub fetch_action: Action<i32, Result<(SurahDetail, Vec<Ayat>), ApiError>>,
    pub tafsir_action: Action<(i32, i32), Result<Tafsir, ApiError>>,
}

pub fn use_quran_detail_view_model() -> QuranDetailViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = QuranRepository::new_with_client(Rc::new(api));

    let nomor = create_rw_signal(0);
    let surah = create_rw_signal(None::<SurahDetail>);
    let ayat = create_rw_signal(Vec::new());
    let tafsir = create_rw_signal(None::<Tafsir>);
    let error = create_rw_signal(None::<String>);

    let repo = repository.clone();
    let fetch_action = create_action(move |target: &i32| {
        let repo = repo.clone();
        let target = *target;
        async move {
            let detail = repo.fetch_surah(target).await;
            let verses = repo.fetch_ayat(target).await;
            let result = detail.and_then(|detail| verses.map(|verses| (detail, verses)));
            match &result {
                Ok((detail, verses)) => {
                    surah.set(Some(detail.clone()));
                    ayat.set(verses.clone());
                    error.set(None);
                }
                Err(err) => error.set(Some(err.error.clone())),
            }
            result
        }
    });

    let repo = repository;
    let tafsir_action = create_action(move |(surah_nomor, ayat_nomor): &(i32, i32)| {
        let repo = repo.clone();
        let surah_nomor = *surah_nomor;
        let ayat_nomor = *ayat_nomor;
        async move {
            let result = repo.fetch_tafsir(surah_nomor, ayat_nomor).await;
            match &result {
                Ok(found) => tafsir.set(Some(found.clone())),
                Err(err) => error.set(Some(err.error.clone())),
            }
            result
        }
    });

    QuranDetailViewModel {
        nomor,
        surah,
        ayat,
        tafsir,
        error,
        fetch_action,
        tafsir_action,
    }
}

impl QuranDetailViewModel {
    /// Loading a different surah resets whatever tafsir was open.
    pub fn load(&self, target: i32) {
        if target <= 0 {
            self.error.set(Some("Surah tidak ditemukan".into()));
            return;
        }
        self.nomor.set(target);
        self.tafsir.set(None);
        self.fetch_action.dispatch(target);
    }

    pub fn show_tafsir(&self, ayat_nomor: i32) {
        if self.tafsir_action.pending().get_untracked() {
            return;
        }
        self.tafsir_action
            .dispatch((self.nomor.get_untracked(), ayat_nomor));
    }

    pub fn close_tafsir(&self) {
        self.tafsir.set(None);
    }
}
