use super::repository::PresensiRepository;
use super::utils::{self, ScanPhase};
use crate::api::{ApiClient, ApiError, MessageResponse, PresensiSubmission};
use crate::utils::time;
use leptos::*;
use std::rc::Rc;

/// Outcome surfaced after a submission attempt. The message is the
/// server's own text, shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOutcome {
    pub success: bool,
    pub message: String,
}

#[derive(Clone)]
pub struct PresensiViewModel {
    pub phase: RwSignal<ScanPhase>,
    pub scanned_code: RwSignal<Option<String>>,
    pub outcome: RwSignal<Option<ScanOutcome>>,
    pub submit_action: Action<PresensiSubmission, Result<MessageResponse, ApiError>>,
}

pub fn use_presensi_view_model() -> PresensiViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = PresensiRepository::new_with_client(Rc::new(api));

    let phase = create_rw_signal(ScanPhase::Idle);
    let scanned_code = create_rw_signal(None::<String>);
    let outcome = create_rw_signal(None::<ScanOutcome>);

    let submit_action = create_action(move |submission: &PresensiSubmission| {
        let repo = repository.clone();
        let submission = submission.clone();
        async move {
            let result = repo.submit(submission).await;
            let resolved = match &result {
                Ok(response) => ScanOutcome {
                    success: true,
                    message: response.message.clone(),
                },
                Err(err) => ScanOutcome {
                    success: false,
                    message: err.error.clone(),
                },
            };
            outcome.set(Some(resolved));
            phase.set(ScanPhase::Result);
            result
        }
    });

    PresensiViewModel {
        phase,
        scanned_code,
        outcome,
        submit_action,
    }
}

impl PresensiViewModel {
    pub fn start_scanning(&self) {
        if !self.phase.get_untracked().can_start() {
            return;
        }
        self.outcome.set(None);
        self.scanned_code.set(None);
        self.phase.set(ScanPhase::Scanning);
    }

    /// First decode wins; late frames from a stopping camera loop are
    /// ignored once the phase has moved on.
    pub fn on_decoded(&self, code: String) {
        if !self.phase.get_untracked().accepts_decode() {
            return;
        }
        self.scanned_code.set(Some(code));
        self.phase.set(ScanPhase::Scanned);
    }

    pub fn cancel_scanning(&self) {
        if self.phase.get_untracked() == ScanPhase::Scanning {
            self.phase.set(ScanPhase::Idle);
        }
    }

    pub fn submit(&self) {
        if !self.phase.get_untracked().can_submit() {
            return;
        }
        let Some(code) = self.scanned_code.get_untracked() else {
            return;
        };
        self.phase.set(ScanPhase::Submitting);
        self.submit_action
            .dispatch(utils::build_submission(&code, time::now_in_app_tz()));
    }

    pub fn reset(&self) {
        if !self.phase.get_untracked().can_reset() {
            return;
        }
        self.scanned_code.set(None);
        self.outcome.set(None);
        self.phase.set(ScanPhase::Idle);
    }

    /// Leaving the result screen goes straight back into a live scan.
    pub fn rescan(&self) {
        self.reset();
        self.start_scanning();
    }
}
