use serde::{Deserialize, Serialize};

/// `GET /random`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RandomWordResponse {
    pub word: String,
}

/// `GET /word/{word}` returns a list of these
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DefinitionItem {
    #[serde(default)]
    pub entries: Vec<DefinitionEntry>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DefinitionEntry {
    pub definition: String,
}

pub type DefinitionResponse = Vec<DefinitionItem>;

pub fn first_definition(response: &DefinitionResponse) -> Option<&str> {
    response
        .iter()
        .flat_map(|item| item.entries.iter())
        .map(|entry| entry.definition.trim())
        .find(|definition| !definition.is_empty())
}
