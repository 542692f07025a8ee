use crate::Letter;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "data")]
pub enum UiEvent {
    Guess(Letter),
    StartDaily,
    StartInfinite,
    NextInfiniteWord,
    ToggleTheme,
    Define,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn event_json() {
        let event: UiEvent = serde_json::from_str(r#"{"type":"guess","data":"b"}"#).unwrap();
        assert_eq!(event, UiEvent::Guess(Letter::from_str("B").unwrap()));

        let event: UiEvent = serde_json::from_str(r#"{"type":"next_infinite_word"}"#).unwrap();
        assert_eq!(event, UiEvent::NextInfiniteWord);
    }
}
