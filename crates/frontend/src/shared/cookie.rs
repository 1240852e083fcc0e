use chrono::{TimeDelta, Utc};
use contracts::shared::cookie::{find_cookie, set_cookie_string};
use contracts::usecases::u601_generate_sources::fields::{state_ttl, STATE_COOKIE_NAME};
use contracts::usecases::u601_generate_sources::StateStore;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// A single cookie used as a durable key-value slot.
#[derive(Clone, Copy, Debug)]
pub struct DocumentCookieStore {
    name: &'static str,
    ttl: TimeDelta,
}

impl DocumentCookieStore {
    pub fn new(name: &'static str, ttl: TimeDelta) -> Self {
        Self { name, ttl }
    }

    /// Cookie holding the generator form state.
    pub fn form_state() -> Self {
        Self::new(STATE_COOKIE_NAME, state_ttl())
    }
}

impl StateStore for DocumentCookieStore {
    fn load(&self) -> Option<String> {
        let jar = html_document()?.cookie().ok()?;
        find_cookie(&jar, self.name)
    }

    fn save(&self, encoded: &str) -> Result<(), String> {
        let document = html_document().ok_or_else(|| "Document is not available".to_string())?;
        let cookie = set_cookie_string(self.name, encoded, Utc::now(), self.ttl);
        document
            .set_cookie(&cookie)
            .map_err(|e| format!("Failed to write cookie: {:?}", e))
    }
}
