use std::path::Path;

use ngidx::{ExtractError, Field, Fields};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, IoError},
    read,
};

/// A messaging conversation with a lead, as exported by the CRM backend.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub phone_number: Option<String>,
    pub display_name: Option<String>,
    pub last_message: Option<String>,
    pub status: Option<String>,
    pub unread_count: Option<u64>,
}

impl Conversation {
    /// Indexed values.
    pub fn fields(&self) -> Fields {
        vec![
            Field::from(&self.phone_number),
            Field::from(&self.display_name),
            Field::from(&self.last_message),
            Field::from(&self.status),
        ]
    }

    /// Values for the fallback scan. A conversation without a phone number is
    /// skipped by that scan; the index paths still find it by its other fields.
    pub fn fallback_fields(&self) -> Result<Fields, ExtractError> {
        if self.phone_number.as_deref().map_or(true, str::is_empty) {
            return Err(ExtractError::Missing(format!("phoneNumber of {:?}", self.id)));
        }

        Ok(self.fields())
    }
}

pub async fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Conversation>, Error> {
    let buffer = read::read_to_string(path).await?;
    let records = serde_json::from_str(&buffer).map_err(|error| IoError::Decode(error.to_string()))?;
    Ok(records)
}
