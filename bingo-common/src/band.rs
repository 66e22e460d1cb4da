use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Display name of a band. Duplicates are allowed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandName(String);

impl BandName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BandName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for BandName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for BandName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BandName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered, immutable list of bands.
///
/// Order is display order (row-major on the bingo card). Clones share the
/// same storage, so passing a list between the provider and the UI is cheap.
/// Serializes as a plain JSON array of names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<BandName>", into = "Vec<BandName>")]
pub struct BandList(Arc<[BandName]>);

impl BandList {
    pub fn new(names: Vec<BandName>) -> Self {
        Self(Arc::from(names))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BandName> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BandName> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[BandName] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<BandName> {
        self.0.to_vec()
    }
}

impl Default for BandList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<BandName>> for BandList {
    fn from(names: Vec<BandName>) -> Self {
        Self::new(names)
    }
}

impl From<BandList> for Vec<BandName> {
    fn from(list: BandList) -> Self {
        list.to_vec()
    }
}

impl FromIterator<BandName> for BandList {
    fn from_iter<I: IntoIterator<Item = BandName>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BandList {
    type Item = &'a BandName;
    type IntoIter = std::slice::Iter<'a, BandName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Response envelope of the bands endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandsResponse {
    pub bands: BandList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_list_preserves_order() {
        let list: BandList = ["b", "a", "c"].into_iter().map(BandName::from).collect();
        let names: Vec<&str> = list.iter().map(BandName::as_str).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_band_list_allows_duplicates() {
        let list: BandList = ["Queen", "Queen"].into_iter().map(BandName::from).collect();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_band_list_serializes_as_array() {
        let list: BandList = ["Queen", "AC/DC"].into_iter().map(BandName::from).collect();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["Queen","AC/DC"]"#);
    }

    #[test]
    fn test_bands_response_from_json() {
        let response: BandsResponse =
            serde_json::from_str(r#"{"bands":["Led Zeppelin","Queen"]}"#).unwrap();
        assert_eq!(response.bands.len(), 2);
        assert_eq!(response.bands.get(0).unwrap(), "Led Zeppelin");
    }

    #[test]
    fn test_clone_shares_contents() {
        let list: BandList = ["Rush"].into_iter().map(BandName::from).collect();
        let copy = list.clone();
        assert_eq!(list, copy);
    }
}
