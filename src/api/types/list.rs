//! List wrapper and pagination parameters.

use serde::{Deserialize, Serialize};

/// A page of results, most recent first as ordered by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    pub data: Vec<T>,
}

impl<T> List<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Last item on the page; its id is the cursor for the next page.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Query parameters of the cursor-paginated list endpoints.
///
/// [`ListParams::new`] drops a zero `limit` and an empty `starting_after`, so
/// the server applies its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Return items after this id (exclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
}

impl ListParams {
    pub fn new(limit: Option<u32>, starting_after: Option<&str>) -> Self {
        Self {
            limit: limit.filter(|&limit| limit > 0),
            starting_after: starting_after
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        }
    }
}
