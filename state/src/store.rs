//! Parameter store
//!
//! Every operation decodes the live fragment; writes re-encode the whole map
//! and commit it through the [`LocationSynchronizer`].

use hashparam_codec::{create_link, encode};
use hashparam_core::{
    HashParamError, HashParamResult, LocationProvider, ParameterMap, ParameterValue, Scalar,
    SyncConfig,
};
use tracing::debug;

use crate::sync::LocationSynchronizer;

/// Typed key/value access to the parameters of a location's fragment
pub struct ParameterStore<L: LocationProvider> {
    sync: LocationSynchronizer<L>,
}

impl<L: LocationProvider> ParameterStore<L> {
    pub fn new(location: L) -> Self {
        Self::from_synchronizer(LocationSynchronizer::new(location))
    }

    pub fn with_config(location: L, config: SyncConfig) -> Self {
        Self::from_synchronizer(LocationSynchronizer::with_config(location, config))
    }

    pub fn from_synchronizer(sync: LocationSynchronizer<L>) -> Self {
        Self { sync }
    }

    pub fn synchronizer(&self) -> &LocationSynchronizer<L> {
        &self.sync
    }

    /// Whether `key` is present, even with an empty or absent value
    pub fn has(&self, key: &str) -> bool {
        self.get_all().contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<ParameterValue> {
        self.get_all().remove(key)
    }

    /// Snapshot of every parameter in the current fragment
    pub fn get_all(&self) -> ParameterMap {
        self.sync.read()
    }

    pub fn set(&self, key: &str, value: impl Into<ParameterValue>) {
        let mut map = self.get_all();
        map.insert(key, value);
        self.set_all(&map);
    }

    /// Read `key` as a sequence.
    ///
    /// An empty string reads as an empty sequence and any other scalar as a
    /// one-element sequence. `None` when the key is missing.
    pub fn get_array(&self, key: &str) -> Option<Vec<Scalar>> {
        self.get(key).map(|value| value.to_sequence())
    }

    /// Like [`set`](Self::set), but `value` must be a sequence
    pub fn set_array(&self, key: &str, value: impl Into<ParameterValue>) -> HashParamResult<()> {
        let value = value.into();
        if !value.is_sequence() {
            return Err(HashParamError::InvalidArgument(format!(
                "value for '{}' is not a sequence: {:?}",
                key, value
            )));
        }
        self.set(key, value);
        Ok(())
    }

    /// Remove `key`, returning its previous value
    pub fn remove(&self, key: &str) -> Option<ParameterValue> {
        let mut map = self.get_all();
        let removed = map.remove(key);
        self.set_all(&map);
        removed
    }

    /// Overwrite or insert every key of `changes`; other keys are untouched
    pub fn update(&self, changes: &ParameterMap) {
        let mut map = self.get_all();
        map.merge(changes);
        self.set_all(&map);
    }

    /// Replace every parameter with `map`
    pub fn set_all(&self, map: &ParameterMap) {
        let fragment = self.sync.commit(Some(map));
        debug!(params = map.len(), "Committed fragment #{}", fragment);
    }

    /// Remove every parameter, keeping the fragment path
    pub fn remove_all(&self) {
        let fragment = self.sync.commit(None);
        debug!("Cleared parameters, fragment is now #{}", fragment);
    }

    /// Alias of [`remove_all`](Self::remove_all)
    pub fn clear(&self) {
        self.remove_all();
    }

    /// Encode `map` without committing it
    pub fn create_param_string(&self, map: &ParameterMap) -> String {
        encode(map)
    }

    /// Build a `#path/params` link without touching the location
    pub fn create_link(&self, path: &str, params: &ParameterMap) -> String {
        create_link(path, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryLocation;
    use std::sync::Arc;

    fn store(url: &str) -> (ParameterStore<Arc<MemoryLocation>>, Arc<MemoryLocation>) {
        let location = Arc::new(MemoryLocation::parse(url).unwrap());
        (ParameterStore::new(location.clone()), location)
    }

    #[test]
    fn test_set_and_get() {
        let (store, location) = store("https://example.com/#view");

        store.set("x", "hello world");
        assert_eq!(location.fragment(), "#view/x:hello%20world");
        assert_eq!(store.get("x"), Some(ParameterValue::from("hello world")));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_typed_values_survive_commit() {
        let (store, _) = store("https://example.com/");

        store.set("n", 2.5);
        store.set("flag", true);
        store.set("nothing", Scalar::Null);

        assert_eq!(store.get("n"), Some(ParameterValue::from(2.5)));
        assert_eq!(store.get("flag"), Some(ParameterValue::from(true)));
        assert_eq!(store.get("nothing"), Some(ParameterValue::from(Scalar::Null)));
    }

    #[test]
    fn test_string_literals_become_typed() {
        let (store, _) = store("https://example.com/");

        store.set("s", "true");
        assert_eq!(store.get("s"), Some(ParameterValue::from(true)));

        store.set("s", "10");
        assert_eq!(store.get("s"), Some(ParameterValue::from(10)));
    }

    #[test]
    fn test_has_with_empty_and_absent_values() {
        let (store, _) = store("https://example.com/");

        store.set("empty", "");
        assert!(store.has("empty"));

        store.set("gone", Scalar::Absent);
        assert!(store.has("gone"));
        assert_eq!(store.get("gone"), Some(ParameterValue::from(Scalar::Absent)));

        assert!(!store.has("other"));
    }

    #[test]
    fn test_array_roundtrip() {
        let (store, _) = store("https://example.com/#list");

        let items = vec![Scalar::from("a b"), Scalar::from(2), Scalar::from(false), Scalar::Null];
        store.set_array("items", items.clone()).unwrap();

        assert_eq!(store.get_array("items"), Some(items));
    }

    #[test]
    fn test_array_elements_cast_independently() {
        let (store, _) = store("https://example.com/");

        store.set_array("mixed", vec!["1", "true", "x"]).unwrap();
        assert_eq!(
            store.get_array("mixed"),
            Some(vec![Scalar::Number(1.0), Scalar::Bool(true), Scalar::from("x")])
        );
    }

    #[test]
    fn test_get_array_from_scalars() {
        let (store, _) = store("https://example.com/#one:solo/empty:/n:5");

        assert_eq!(store.get_array("one"), Some(vec![Scalar::from("solo")]));
        assert_eq!(store.get_array("empty"), Some(Vec::new()));
        assert_eq!(store.get_array("n"), Some(vec![Scalar::Number(5.0)]));
        assert_eq!(store.get_array("missing"), None);
    }

    #[test]
    fn test_set_array_rejects_scalar() {
        let (store, location) = store("https://example.com/#a:1");

        let err = store.set_array("a", "not a list").unwrap_err();
        assert!(matches!(err, HashParamError::InvalidArgument(_)));
        assert_eq!(location.fragment(), "#a:1");
    }

    #[test]
    fn test_remove() {
        let (store, _) = store("https://example.com/#view/a:1/b:2");

        assert_eq!(store.remove("a"), Some(ParameterValue::from(1)));
        assert!(!store.has("a"));
        assert_eq!(store.synchronizer().raw_fragment(), "view/b:2");
    }

    #[test]
    fn test_remove_missing_key() {
        let (store, _) = store("https://example.com/#view/a:1/b:2");
        let before = store.get_all();

        assert_eq!(store.remove("zzz"), None);
        assert_eq!(store.get_all(), before);
    }

    #[test]
    fn test_update_leaves_other_keys() {
        let (store, _) = store("https://example.com/#a:0/b:2");

        let mut changes = ParameterMap::new();
        changes.insert("a", 1);
        store.update(&changes);

        let expected: ParameterMap = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(store.get_all(), expected);
    }

    #[test]
    fn test_remove_all_keeps_path() {
        let (store, location) = store("https://example.com/#view/junk/a:1/b:2");

        store.remove_all();
        assert!(store.get_all().is_empty());
        assert_eq!(location.fragment(), "#view/junk/");

        store.set("c", 3);
        store.clear();
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_mixed_fragment_scenario() {
        let (store, location) = store("https://example.com/#view/a:1/b:2,3/junk");

        let expected: ParameterMap = vec![
            ("a", ParameterValue::from(1)),
            ("b", ParameterValue::from(vec![2, 3])),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.get_all(), expected);
        assert_eq!(store.synchronizer().fragment_path(), "view/junk");

        store.set("c", "x");
        assert_eq!(location.fragment(), "#view/junk/a:1/b:2,3/c:x");
    }

    #[test]
    fn test_malformed_segments_stay_in_path() {
        let (store, location) = store("https://example.com/#a:b:c/plain/k:v");

        assert_eq!(store.get_all().keys().collect::<Vec<_>>(), vec!["k"]);

        store.set("k", "w");
        assert_eq!(location.fragment(), "#a:b:c/plain/k:w");
    }

    #[test]
    fn test_external_navigation_is_observed() {
        let (store, location) = store("https://example.com/#a:1");

        location.set_fragment("a:2");
        assert_eq!(store.get("a"), Some(ParameterValue::from(2)));

        location.back();
        assert_eq!(store.get("a"), Some(ParameterValue::from(1)));
    }

    #[test]
    fn test_create_param_string_and_link() {
        let (store, location) = store("https://example.com/#view");

        assert_eq!(store.create_param_string(&ParameterMap::new()), "");

        let mut params = ParameterMap::new();
        params.insert("a", 1);
        assert_eq!(store.create_param_string(&params), "a:1");
        assert_eq!(store.create_link("settings", &params), "#settings/a:1");

        // Neither touches the location
        assert_eq!(location.fragment(), "#view");
    }
}
