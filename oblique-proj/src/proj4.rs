//! Ordered proj4 parameter lists.

use std::fmt;

/// An ordered `key=value` list as used in proj4 init strings.
///
/// Keys are unique. Setting an existing key replaces its value in place, new
/// keys are appended, so merging two lists behaves like a dictionary update.
///
/// ```
/// use oblique_proj::Proj4Params;
///
/// let mut base = Proj4Params::new();
/// base.set("proj", "merc");
/// base.set("lon_0", 0.0);
///
/// let mut oblique = Proj4Params::new();
/// oblique.set("proj", "ob_tran");
/// oblique.set("o_proj", "merc");
///
/// let merged = base.merged(&oblique);
/// assert_eq!(merged.to_string(), "+proj=ob_tran +lon_0=0 +o_proj=merc");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Proj4Params {
    entries: Vec<(String, String)>,
}

impl Proj4Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Numeric value of `key`, if present and parseable.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Applies every entry of `other` on top of `self`.
    pub fn merge(&mut self, other: &Proj4Params) {
        for (key, value) in &other.entries {
            self.set(key.clone(), value);
        }
    }

    pub fn merged(mut self, other: &Proj4Params) -> Self {
        self.merge(other);
        self
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for Proj4Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

impl fmt::Display for Proj4Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "+{}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut p: Proj4Params = [("proj", "moll"), ("lon_0", "0"), ("units", "m")]
            .into_iter()
            .collect();
        p.set("lon_0", 120.5);
        assert_eq!(p.to_string(), "+proj=moll +lon_0=120.5 +units=m");
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn test_merge_appends_new_keys() {
        let base: Proj4Params = [("proj", "lcc"), ("lat_1", "33")].into_iter().collect();
        let ob: Proj4Params = [("proj", "ob_tran"), ("o_proj", "lcc"), ("o_lat_p", "40")]
            .into_iter()
            .collect();
        let merged = base.merged(&ob);
        let keys: Vec<&str> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["proj", "lat_1", "o_proj", "o_lat_p"]);
        assert_eq!(merged.get("proj"), Some("ob_tran"));
        assert_eq!(merged.get_f64("o_lat_p"), Some(40.0));
    }

    #[test]
    fn test_empty() {
        let p = Proj4Params::new();
        assert!(p.is_empty());
        assert_eq!(p.to_string(), "");
        assert!(!p.contains_key("proj"));
        assert_eq!(p.get_f64("proj"), None);
    }
}
