use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const KEY_ALPHABET: &str = "abcdefgh";
const STRING_ALPHABET: &str = "xyz/~ 01";

/// A seeded generator of random JSON documents and document edits.
///
/// Uses the xoshiro256** PRNG, so a fixed seed reproduces the same sequence
/// of documents. Diff tests pair [`Fuzzer::random_value`] with
/// [`Fuzzer::mutate`] to get a source document and a nearby target.
///
/// # Examples
///
/// ```
/// use json_delta_util::fuzzer::Fuzzer;
///
/// let fuzzer = Fuzzer::new(Some([7u8; 32]));
/// let doc = fuzzer.random_value(3);
/// let edited = fuzzer.mutate(&doc);
///
/// let again = Fuzzer::new(Some([7u8; 32]));
/// assert_eq!(again.random_value(3), doc);
/// assert_eq!(again.mutate(&doc), edited);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Arc::new(Mutex::new(Xoshiro256StarStar::from_seed(seed))),
        }
    }

    fn rng(&self) -> MutexGuard<'_, Xoshiro256StarStar> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng().gen_range(min..=max)
    }

    /// Generate a random index in `0..len`. `len` must be non-zero.
    pub fn random_index(&self, len: usize) -> usize {
        self.rng().gen_range(0..len)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        &elements[self.random_index(elements.len())]
    }

    /// Generate a random boolean with the given probability of being true.
    pub fn random_bool(&self, probability: f64) -> bool {
        self.rng().gen_bool(probability)
    }

    /// Generate a random string of the specified length from the given characters.
    pub fn random_string(&self, len: usize, chars: &str) -> String {
        let chars: Vec<char> = chars.chars().collect();
        let mut rng = self.rng();
        (0..len)
            .map(|_| chars[rng.gen_range(0..chars.len())])
            .collect()
    }

    /// Generate a random scalar: null, boolean, small integer, float, or string.
    pub fn random_scalar(&self) -> Value {
        match self.random_int(0, 5) {
            0 => Value::Null,
            1 => Value::Bool(self.random_bool(0.5)),
            2 | 3 => Value::from(self.random_int(-5, 20)),
            4 => Value::from(self.random_int(-100, 100) as f64 / 4.0),
            _ => {
                let len = self.random_int(0, 4) as usize;
                Value::String(self.random_string(len, STRING_ALPHABET))
            }
        }
    }

    /// Generate a random document nested at most `depth` levels deep.
    pub fn random_value(&self, depth: usize) -> Value {
        if depth == 0 || self.random_bool(0.35) {
            return self.random_scalar();
        }
        if self.random_bool(0.5) {
            let len = self.random_int(0, 6) as usize;
            Value::Array((0..len).map(|_| self.random_value(depth - 1)).collect())
        } else {
            let len = self.random_int(0, 5) as usize;
            let mut map = Map::new();
            for _ in 0..len {
                map.insert(self.random_key(), self.random_value(depth - 1));
            }
            Value::Object(map)
        }
    }

    fn random_key(&self) -> String {
        let len = self.random_int(1, 2) as usize;
        self.random_string(len, KEY_ALPHABET)
    }

    /// Return a copy of `value` with a handful of random edits applied.
    ///
    /// Edits keep most of the structure so that a diff between the two is
    /// dominated by small changes: replaced scalars, inserted, deleted and
    /// reordered array items, added and removed object members.
    pub fn mutate(&self, value: &Value) -> Value {
        let mut out = value.clone();
        let edits = self.random_int(1, 4);
        for _ in 0..edits {
            self.mutate_in_place(&mut out, 4);
        }
        out
    }

    fn mutate_in_place(&self, value: &mut Value, depth: usize) {
        match value {
            Value::Array(arr) if depth > 0 => {
                if !arr.is_empty() && self.random_bool(0.5) {
                    let idx = self.random_index(arr.len());
                    self.mutate_in_place(&mut arr[idx], depth - 1);
                    return;
                }
                match self.random_int(0, 3) {
                    0 => {
                        let idx = self.random_index(arr.len() + 1);
                        arr.insert(idx, self.random_value(2));
                    }
                    1 if !arr.is_empty() => {
                        let idx = self.random_index(arr.len());
                        arr.remove(idx);
                    }
                    2 if arr.len() > 1 => {
                        let from = self.random_index(arr.len());
                        let item = arr.remove(from);
                        let to = self.random_index(arr.len() + 1);
                        arr.insert(to, item);
                    }
                    _ => arr.push(self.random_scalar()),
                }
            }
            Value::Object(map) if depth > 0 => {
                if !map.is_empty() && self.random_bool(0.5) {
                    let idx = self.random_index(map.len());
                    if let Some((_, child)) = map.iter_mut().nth(idx) {
                        self.mutate_in_place(child, depth - 1);
                    }
                    return;
                }
                if !map.is_empty() && self.random_bool(0.4) {
                    let idx = self.random_index(map.len());
                    let key = map.keys().nth(idx).cloned();
                    if let Some(key) = key {
                        map.remove(&key);
                    }
                } else {
                    map.insert(self.random_key(), self.random_value(2));
                }
            }
            _ => *value = self.random_value(2),
        }
    }
}
