//! Share-link codec: session state <-> URL fragment token.
//!
//! Tokens are canonical JSON (sorted keys) escaped with the same character set
//! as JavaScript's `encodeURIComponent`. Decoding is best effort: every field
//! that parses and validates against the catalog is recovered, anything else
//! is dropped, and a token that cannot be parsed at all yields an empty partial.

use super::{ActiveTab, CustomRole, SessionState};
use crate::catalog::Catalog;
use crate::domain::LevelVector;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Characters `encodeURIComponent` leaves alone.
const FRAGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const LEGACY_WORK_SCOPE: &str = "scope";
const WORK_SCOPE: &str = "work_scope";

#[derive(Debug, Error)]
enum DecodeError {
    #[error("token is empty")]
    Empty,
    #[error("token is not valid UTF-8 after unescaping: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("token is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token is not a JSON object")]
    NotAnObject,
}

/// Fields recovered from a token. `None` means "keep the current value".
///
/// `selected_role_id` is `Some(None)` when the token explicitly carries no
/// selection, which clears the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialSessionState {
    pub custom_role: Option<CustomRole>,
    pub selected_role_id: Option<Option<String>>,
    pub active_tab: Option<ActiveTab>,
    pub compare_role_ids: Option<[Option<String>; 2]>,
    pub show_nearest_role: Option<bool>,
    pub show_custom_role: Option<bool>,
}

impl PartialSessionState {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Fresh snapshot: recovered fields over `base`.
    pub fn merge_onto(self, base: SessionState) -> SessionState {
        SessionState {
            custom_role: self.custom_role.unwrap_or(base.custom_role),
            selected_role_id: self.selected_role_id.unwrap_or(base.selected_role_id),
            active_tab: self.active_tab.unwrap_or(base.active_tab),
            compare_role_ids: self.compare_role_ids.unwrap_or(base.compare_role_ids),
            show_nearest_role: self.show_nearest_role.unwrap_or(base.show_nearest_role),
            show_custom_role: self.show_custom_role.unwrap_or(base.show_custom_role),
        }
    }
}

impl From<SessionState> for PartialSessionState {
    fn from(state: SessionState) -> Self {
        Self {
            custom_role: Some(state.custom_role),
            selected_role_id: Some(state.selected_role_id),
            active_tab: Some(state.active_tab),
            compare_role_ids: Some(state.compare_role_ids),
            show_nearest_role: Some(state.show_nearest_role),
            show_custom_role: Some(state.show_custom_role),
        }
    }
}

pub fn encode(state: &SessionState) -> String {
    let value = json!({
        "customRole": {
            "name": state.custom_role.name,
            "levels": state.custom_role.levels,
        },
        "selectedRoleId": state.selected_role_id,
        "activeTab": state.active_tab.as_str(),
        "compareRoleIds": state.compare_role_ids,
        "showNearestRole": state.show_nearest_role,
        "showCustomRole": state.show_custom_role,
    });

    utf8_percent_encode(&value.to_string(), FRAGMENT).to_string()
}

/// Recovers whatever it can from `token`. Never fails.
pub fn decode(token: &str, catalog: &Catalog) -> PartialSessionState {
    match parse_object(token) {
        Ok(object) => recover_fields(&object, catalog),
        Err(err) => {
            warn!(error = %err, "ignoring unreadable session token");
            PartialSessionState::default()
        }
    }
}

/// `base#token` link for `state`.
pub fn share_url(base: &str, state: &SessionState) -> String {
    let base = base.split('#').next().unwrap_or(base);
    format!("{base}#{}", encode(state))
}

/// Accepts a bare token, `#token`, or a whole share URL.
pub fn token_from_fragment(input: &str) -> &str {
    let input = input.trim();
    input
        .split_once('#')
        .map_or(input, |(_, fragment)| fragment)
}

fn parse_object(token: &str) -> Result<Map<String, Value>, DecodeError> {
    let token = token_from_fragment(token);
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let text = percent_decode_str(token).decode_utf8()?;
    match serde_json::from_str::<Value>(&text)? {
        Value::Object(object) => Ok(object),
        _ => Err(DecodeError::NotAnObject),
    }
}

/// Canonical key first, then the key older links used.
fn field<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| object.get(*key))
}

fn recover_fields(object: &Map<String, Value>, catalog: &Catalog) -> PartialSessionState {
    let partial = PartialSessionState {
        custom_role: field(object, &["customRole"]).and_then(|value| custom_role(value, catalog)),
        selected_role_id: field(object, &["selectedRoleId", "selectedRole"])
            .and_then(|value| selection(value, catalog)),
        active_tab: field(object, &["activeTab"])
            .and_then(Value::as_str)
            .and_then(ActiveTab::parse)
            .or_else(|| {
                field(object, &["compareMode"])
                    .and_then(Value::as_bool)
                    .and_then(|compare| compare.then_some(ActiveTab::Compare))
            }),
        compare_role_ids: field(object, &["compareRoleIds", "compareRoles"])
            .and_then(|value| compare_ids(value, catalog)),
        show_nearest_role: field(object, &["showNearestRole", "showNearest"])
            .and_then(Value::as_bool),
        show_custom_role: field(object, &["showCustomRole", "showCustom"])
            .and_then(Value::as_bool),
    };

    debug!(?partial, "recovered session fields");
    partial
}

fn role_id(value: &Value, catalog: &Catalog) -> Option<String> {
    let id = value.as_str()?;
    if catalog.role(id).is_some() {
        Some(id.to_string())
    } else {
        warn!(role = %id, "dropping unknown role from session token");
        None
    }
}

/// An explicit `null` clears the selection; unknown ids and wrong types are ignored.
fn selection(value: &Value, catalog: &Catalog) -> Option<Option<String>> {
    if value.is_null() {
        Some(None)
    } else {
        role_id(value, catalog).map(Some)
    }
}

fn compare_ids(value: &Value, catalog: &Catalog) -> Option<[Option<String>; 2]> {
    let slots = value.as_array()?;
    if slots.len() > 2 {
        return None;
    }

    let mut ids = [None, None];
    for (slot, value) in ids.iter_mut().zip(slots) {
        *slot = role_id(value, catalog);
    }
    Some(ids)
}

fn custom_role(value: &Value, catalog: &Catalog) -> Option<CustomRole> {
    let name = value.get("name")?.as_str()?.to_string();
    let levels_object = value.get("levels")?.as_object()?;

    let mut levels = LevelVector::new();
    for (dimension_id, level) in levels_object {
        let level = u8::try_from(level.as_u64()?).ok()?;
        levels.set(current_dimension_id(dimension_id, catalog), level);
    }

    match levels.validate(catalog.dimensions()) {
        Ok(()) => Some(CustomRole { name, levels }),
        Err(err) => {
            warn!(error = %err, "dropping invalid custom role from session token");
            None
        }
    }
}

/// Older links keyed work scope as `scope`; rename it unless the catalog
/// really has a dimension by that name.
fn current_dimension_id(dimension_id: &str, catalog: &Catalog) -> String {
    match dimension_id {
        LEGACY_WORK_SCOPE if catalog.dimension(LEGACY_WORK_SCOPE).is_none() => {
            WORK_SCOPE.to_string()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionEvent;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    fn sample_state(catalog: &Catalog) -> SessionState {
        let mut state = SessionState::initial(catalog);
        state.custom_role.name = "Staff-ish (platform) & ops".to_string();
        state.custom_role.levels.set("technology", 4);
        state.custom_role.levels.set("people", 3);
        state.selected_role_id = Some("staff-engineer".to_string());
        state.compare_role_ids = [Some("tech-lead".to_string()), None];
        state.show_custom_role = false;
        state
    }

    #[test]
    fn encode_then_decode_recovers_the_state() {
        let catalog = catalog();
        for state in [SessionState::initial(&catalog), sample_state(&catalog)] {
            let token = encode(&state);
            let decoded = decode(&token, &catalog);

            assert_eq!(decoded, PartialSessionState::from(state.clone()));
            assert_eq!(decoded.merge_onto(SessionState::initial(&catalog)), state);
        }
    }

    #[test]
    fn compare_tab_survives_a_round_trip() {
        let catalog = catalog();
        let mut state = SessionState::initial(&catalog);
        state.active_tab = ActiveTab::Compare;
        state.compare_role_ids = [
            Some("software-engineer".to_string()),
            Some("senior-engineer".to_string()),
        ];

        let decoded = decode(&encode(&state), &catalog);
        assert_eq!(decoded.active_tab, Some(ActiveTab::Compare));
        assert_eq!(
            decoded.compare_role_ids,
            Some([
                Some("software-engineer".to_string()),
                Some("senior-engineer".to_string())
            ])
        );
    }

    #[test]
    fn tokens_are_fragment_safe_and_canonical() {
        let catalog = catalog();
        let token = encode(&sample_state(&catalog));

        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.!~*'()%".contains(c)));
        let text = percent_decode_str(&token).decode_utf8_lossy().to_string();
        assert!(text.starts_with(r#"{"activeTab":"explore","compareRoleIds":["tech-lead",null],"customRole":"#));
        assert_eq!(encode(&sample_state(&catalog)), token);
    }

    #[test]
    fn garbage_and_truncated_tokens_decode_to_nothing() {
        let catalog = catalog();
        let token = encode(&sample_state(&catalog));

        for bad in [
            "",
            "#",
            "not-a-token",
            "%E0%A4%A",
            "%FF%FE",
            "%5B1%2C2%5D",
            &token[..token.len() / 2],
        ] {
            assert!(decode(bad, &catalog).is_empty(), "token {bad:?} should decode to nothing");
        }
    }

    #[test]
    fn partially_corrupt_tokens_keep_valid_fields() {
        let catalog = catalog();
        let raw = r#"{
            "activeTab": "compare",
            "selectedRoleId": 42,
            "showNearestRole": "yes",
            "showCustomRole": false,
            "compareRoleIds": ["software-engineer", "principal-engineer"],
            "customRole": {"name": "Mine", "levels": {"people": 9}}
        }"#;
        let token = utf8_percent_encode(raw, FRAGMENT).to_string();

        let decoded = decode(&token, &catalog);
        assert_eq!(
            decoded,
            PartialSessionState {
                active_tab: Some(ActiveTab::Compare),
                compare_role_ids: Some([Some("software-engineer".to_string()), None]),
                show_custom_role: Some(false),
                ..PartialSessionState::default()
            }
        );
    }

    #[test]
    fn unknown_selected_role_is_dropped() {
        let catalog = catalog();
        let mut state = sample_state(&catalog);
        state.selected_role_id = Some("vp-engineering".to_string());

        let decoded = decode(&encode(&state), &catalog);
        assert_eq!(decoded.selected_role_id, None);
        assert!(decoded.custom_role.is_some());
    }

    #[test]
    fn explicit_null_selection_clears_the_current_one() -> Result<(), crate::error::LadderError> {
        let catalog = catalog();
        let initial = SessionState::initial(&catalog);
        let partial = decode(&encode(&initial), &catalog);
        assert_eq!(partial.selected_role_id, Some(None));

        let selected = SessionState::initial(&catalog)
            .apply(SessionEvent::SelectRole(Some("tech-lead".to_string())), &catalog)?;
        let restored = selected.apply(SessionEvent::Restore(partial), &catalog)?;
        assert_eq!(restored, initial);
        Ok(())
    }

    #[test]
    fn legacy_share_links_are_understood() {
        let catalog = catalog();
        // as written by the old web page: `scope` key, `selectedRole`, `compareMode`
        let url = "http://localhost:3000/#%7B%22customRole%22%3A%7B%22name%22%3A%22Mine%22%2C%22levels%22%3A%7B%22people%22%3A3%2C%22scope%22%3A3%2C%22org_scope%22%3A2%2C%22process%22%3A2%2C%22technology%22%3A4%7D%7D%2C%22selectedRole%22%3A%22tech-lead%22%2C%22showCustom%22%3Atrue%2C%22showNearest%22%3Afalse%2C%22compareMode%22%3Atrue%2C%22compareRoles%22%3A%5B%22junior-engineer%22%2Cnull%5D%7D";

        let decoded = decode(url, &catalog);
        assert_eq!(decoded.selected_role_id, Some(Some("tech-lead".to_string())));
        assert_eq!(decoded.active_tab, Some(ActiveTab::Compare));
        assert_eq!(decoded.show_nearest_role, Some(false));
        assert_eq!(decoded.show_custom_role, Some(true));
        assert_eq!(
            decoded.compare_role_ids,
            Some([Some("junior-engineer".to_string()), None])
        );

        let custom = decoded.custom_role.as_ref();
        assert_eq!(custom.map(|role| role.name.as_str()), Some("Mine"));
        assert_eq!(custom.and_then(|role| role.levels.get("work_scope")), Some(3));
        assert_eq!(custom.and_then(|role| role.levels.get("scope")), None);
        assert_eq!(custom.and_then(|role| role.levels.get("technology")), Some(4));
    }

    #[test]
    fn legacy_link_without_selection_keeps_the_current_one() {
        let catalog = catalog();
        let raw = r#"{"customRole":{"name":"Custom Role","levels":{"people":1,"scope":1,"org_scope":1,"process":1,"technology":1}},"showCustom":true,"showNearest":true,"compareMode":false,"compareRoles":[null,null]}"#;
        let decoded = decode(&utf8_percent_encode(raw, FRAGMENT).to_string(), &catalog);

        assert_eq!(decoded.selected_role_id, None);
        assert_eq!(decoded.active_tab, None);
        assert!(decoded.custom_role.is_some());
    }

    #[test]
    fn share_url_replaces_existing_fragment() {
        let catalog = catalog();
        let state = sample_state(&catalog);
        let url = share_url("http://localhost:3000/ladder#old", &state);

        assert!(url.starts_with("http://localhost:3000/ladder#%7B"));
        assert_eq!(token_from_fragment(&url), encode(&state));
        assert_eq!(token_from_fragment("  #abc "), "abc");
        assert_eq!(token_from_fragment("abc"), "abc");
    }

    #[test]
    fn restore_event_merges_decoded_fields() -> Result<(), crate::error::LadderError> {
        let catalog = catalog();
        let shared = sample_state(&catalog);
        let partial = decode(&encode(&shared), &catalog);

        let restored = SessionState::initial(&catalog).apply(SessionEvent::Restore(partial), &catalog)?;
        assert_eq!(restored, shared);

        let untouched = SessionState::initial(&catalog)
            .apply(SessionEvent::Restore(decode("garbage", &catalog)), &catalog)?;
        assert_eq!(untouched, SessionState::initial(&catalog));
        Ok(())
    }
}
