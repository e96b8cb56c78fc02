use std::collections::HashSet;
use std::marker::PhantomData;

use serde_json::Value;

use super::deep_equal::{deep_equal, numbers_equal};

/// Structural equality with an optional memo of composite pairs found equal.
///
/// With caching enabled, every array/object pair proven equal is recorded by
/// the addresses of both nodes, so comparing the same two sub-trees again costs
/// a hash lookup. Addresses are only meaningful while the compared documents
/// stay borrowed, which the `'a` lifetime enforces: an oracle can never outlive
/// the values it has seen.
///
/// ```
/// use serde_json::json;
/// use json_delta_util::json_equal::EqualityOracle;
///
/// let a = json!([{"k": [1, 2]}, {"k": [3]}]);
/// let b = json!([{"k": [1, 2]}, {"k": [3]}]);
///
/// let mut oracle = EqualityOracle::new(true);
/// assert!(oracle.equal(&a, &b));
/// assert!(oracle.cached_pairs() > 0);
/// ```
#[derive(Debug, Default)]
pub struct EqualityOracle<'a> {
    cache: Option<HashSet<(usize, usize)>>,
    _values: PhantomData<&'a Value>,
}

impl<'a> EqualityOracle<'a> {
    pub fn new(caching: bool) -> Self {
        Self {
            cache: caching.then(HashSet::new),
            _values: PhantomData,
        }
    }

    pub fn is_caching(&self) -> bool {
        self.cache.is_some()
    }

    /// Number of composite pairs remembered as equal.
    pub fn cached_pairs(&self) -> usize {
        self.cache.as_ref().map_or(0, HashSet::len)
    }

    /// Deep structural equality; see [`deep_equal`] for the rules.
    pub fn equal(&mut self, a: &'a Value, b: &'a Value) -> bool {
        if self.cache.is_none() {
            return deep_equal(a, b);
        }
        if std::ptr::eq(a, b) {
            return true;
        }
        match (a, b) {
            (Value::Array(arr_a), Value::Array(arr_b)) => {
                if arr_a.len() != arr_b.len() {
                    return false;
                }
                if self.seen(a, b) {
                    return true;
                }
                let equal = arr_a.iter().zip(arr_b).all(|(x, y)| self.equal(x, y));
                if equal {
                    self.remember(a, b);
                }
                equal
            }
            (Value::Object(obj_a), Value::Object(obj_b)) => {
                if obj_a.len() != obj_b.len() {
                    return false;
                }
                if self.seen(a, b) {
                    return true;
                }
                let equal = obj_a
                    .iter()
                    .all(|(key, x)| obj_b.get(key).is_some_and(|y| self.equal(x, y)));
                if equal {
                    self.remember(a, b);
                }
                equal
            }
            (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
            _ => deep_equal(a, b),
        }
    }

    fn seen(&self, a: &Value, b: &Value) -> bool {
        self.cache
            .as_ref()
            .is_some_and(|cache| cache.contains(&pair_key(a, b)))
    }

    fn remember(&mut self, a: &Value, b: &Value) {
        if let Some(cache) = self.cache.as_mut() {
            cache.insert(pair_key(a, b));
        }
    }
}

fn pair_key(a: &Value, b: &Value) -> (usize, usize) {
    (a as *const Value as usize, b as *const Value as usize)
}
