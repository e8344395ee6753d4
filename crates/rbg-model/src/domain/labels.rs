use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{BuildDate, LABEL_BUILD_DATE, LABEL_VCS_REF};
use crate::error::{ModelError, ModelResult};

/// Build labels attached to an image config blob, keyed by label name.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageLabels(pub BTreeMap<String, String>);

impl ImageLabels {
    /// Create an empty set of labels.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or overwrite a label.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Source revision the image was built from.
    pub fn vcs_ref(&self) -> ModelResult<&str> {
        self.get(LABEL_VCS_REF)
            .ok_or(ModelError::MissingLabel(LABEL_VCS_REF))
    }

    /// Parsed build timestamp of the image.
    pub fn build_date(&self) -> ModelResult<BuildDate> {
        let raw = self
            .get(LABEL_BUILD_DATE)
            .ok_or(ModelError::MissingLabel(LABEL_BUILD_DATE))?;
        BuildDate::parse(raw)
    }
}

impl<K, V> FromIterator<(K, V)> for ImageLabels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
