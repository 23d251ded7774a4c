use serde::{Deserialize, Serialize};

/// One element of the `data` array in a user list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Avatar image URL, sent on the wire as `avatar`.
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

/// One page of the paginated user list.
///
/// Only the pagination counters and the records are modelled; other
/// top-level fields of the response (`support`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListPage {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub data: Vec<UserRecord>,
}

impl UserListPage {
    /// Returns `true` if the page carries no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }
}
