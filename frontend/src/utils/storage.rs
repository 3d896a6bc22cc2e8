//! Session token persistence.
//!
//! The auth token is written redundantly to sessionStorage and a cookie so
//! both the SPA and any server-side route guard can read it. There is no
//! expiry logic: the token lives until an explicit logout clears it.

pub const TOKEN_KEY: &str = "ssg_token";
pub const USER_KEY: &str = "ssg_user";

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::{TOKEN_KEY, USER_KEY};
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlDocument, Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn session_storage() -> Result<Storage, String> {
        window()?
            .session_storage()
            .map_err(|_| "No sessionStorage".to_string())?
            .ok_or_else(|| "No sessionStorage".to_string())
    }

    fn html_document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }

    fn read_cookie(name: &str) -> Option<String> {
        let raw = html_document()?.cookie().ok()?;
        super::cookie_value(&raw, name)
    }

    fn write_cookie(name: &str, value: &str) {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&format!("{}={}; path=/; SameSite=Lax", name, value));
        }
    }

    fn delete_cookie(name: &str) {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&format!(
                "{}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT",
                name
            ));
        }
    }

    pub fn stored_token() -> Option<String> {
        if let Ok(storage) = session_storage() {
            if let Ok(Some(token)) = storage.get_item(TOKEN_KEY) {
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
        read_cookie(TOKEN_KEY)
    }

    pub fn persist_token(token: &str) -> Result<(), String> {
        session_storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| "Failed to store token".to_string())?;
        write_cookie(TOKEN_KEY, token);
        Ok(())
    }

    pub fn clear_token() {
        if let Ok(storage) = session_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
        delete_cookie(TOKEN_KEY);
    }

    pub fn stored_user_json() -> Option<String> {
        session_storage().ok()?.get_item(USER_KEY).ok().flatten()
    }

    pub fn persist_user_json(json: &str) -> Result<(), String> {
        session_storage()?
            .set_item(USER_KEY, json)
            .map_err(|_| "Failed to store user profile".to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::cell::RefCell;

    thread_local! {
        static TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
        static USER: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    pub fn stored_token() -> Option<String> {
        TOKEN.with(|t| t.borrow().clone())
    }

    pub fn persist_token(token: &str) -> Result<(), String> {
        TOKEN.with(|t| *t.borrow_mut() = Some(token.to_string()));
        Ok(())
    }

    pub fn clear_token() {
        TOKEN.with(|t| *t.borrow_mut() = None);
        USER.with(|u| *u.borrow_mut() = None);
    }

    pub fn stored_user_json() -> Option<String> {
        USER.with(|u| u.borrow().clone())
    }

    pub fn persist_user_json(json: &str) -> Result<(), String> {
        USER.with(|u| *u.borrow_mut() = Some(json.to_string()));
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(not(target_arch = "wasm32"))]
pub use host::*;

/// Extracts a single cookie value from a raw `document.cookie` string.
pub fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trip_in_browser() {
        persist_token("token-wasm").unwrap();
        assert_eq!(stored_token(), Some("token-wasm".to_string()));
        clear_token();
        assert!(stored_token().is_none());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn token_round_trip_persists_and_clears() {
        persist_token("token-1").unwrap();
        assert_eq!(stored_token(), Some("token-1".to_string()));
        persist_user_json("{\"id\":\"u1\"}").unwrap();
        assert!(stored_user_json().is_some());

        clear_token();
        assert!(stored_token().is_none());
        assert!(stored_user_json().is_none());
    }
}
