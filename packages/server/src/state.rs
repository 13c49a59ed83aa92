//! Shared per-process state handed to every handler.

use readcoach_domain::VoiceSelection;
use readcoach_gcloud::GoogleClient;

pub struct AppState {
    /// Shared client for all three Google Cloud services.
    pub gcloud: GoogleClient,
    /// Voice every synthesis request reads with.
    pub voice: VoiceSelection,
}

impl AppState {
    pub fn new(gcloud: GoogleClient, voice: VoiceSelection) -> Self {
        Self { gcloud, voice }
    }
}
