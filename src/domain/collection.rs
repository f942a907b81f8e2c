use serde::Deserialize;

/// One page of a `{size, collection}` resource.
///
/// `size` is the total collection size reported by the server for this fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default, alias = "Size")]
    pub size: u32,
    #[serde(default = "Vec::new")]
    pub collection: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            size: 0,
            collection: Vec::new(),
        }
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.collection.into_iter()
    }
}

/// Result list returned by the `*.do` endpoints (`{count, list}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyCollection<T> {
    #[serde(default)]
    pub count: u32,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

/// Id of a scheduled message removed through `sch_del`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemovedMessage {
    #[serde(default)]
    pub id: Option<String>,
}
