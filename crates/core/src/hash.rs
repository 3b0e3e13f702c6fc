//! Order-sensitive combined hashing over sequences of optional values.
//!
//! The intended use is implementing a type's own hash over its fields, paired
//! with field-wise [`null_safe_eq`](crate::eq::null_safe_eq) comparisons:
//! values equal field-by-field hash equally here.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Accumulator seed. Also the hash of the empty sequence.
const SEED: u64 = 1;

/// Per-element fold multiplier.
const MULTIPLIER: u64 = 31;

/// Sentinel contributed by an absent element.
const ABSENT_HASH: u64 = 0;

// ---------------------------------------------------------------------------
// Combiner
// ---------------------------------------------------------------------------

/// Folds a sequence of optional values into a single `u64` hash.
///
/// Elements are combined in push order with `acc = acc * 31 + element`
/// (wrapping), so the result is order-sensitive and deterministic for equal
/// input sequences. An empty combiner finishes at a fixed constant.
///
/// `push` accepts a different element type at every call, which covers the
/// "hash over any number of fields" use:
///
/// ```
/// use optkit_core::HashCombiner;
///
/// let name: Option<&str> = Some("alice");
/// let age: Option<&u32> = None;
/// let h = HashCombiner::new().with(name).with(age).finish();
/// # let _ = h;
/// ```
#[derive(Debug, Clone)]
pub struct HashCombiner {
    acc: u64,
}

impl HashCombiner {
    pub fn new() -> Self {
        Self { acc: SEED }
    }

    /// Folds one element into the accumulator.
    ///
    /// An absent element contributes the fixed sentinel 0. A present element
    /// contributes its own `Hash` digest, so a container pushed as a single
    /// element hashes by contents, not by reference identity.
    pub fn push<T: Hash + ?Sized>(&mut self, value: Option<&T>) -> &mut Self {
        self.acc = self
            .acc
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(element_hash(value));
        self
    }

    /// By-value form of [`push`](Self::push) for builder chains.
    pub fn with<T: Hash + ?Sized>(mut self, value: Option<&T>) -> Self {
        self.push(value);
        self
    }

    pub fn finish(&self) -> u64 {
        self.acc
    }
}

impl Default for HashCombiner {
    fn default() -> Self {
        Self::new()
    }
}

/// Combines a homogeneous sequence of optional values into one hash.
///
/// The empty sequence returns a fixed constant rather than failing.
pub fn combined_hash<'a, T, I>(values: I) -> u64
where
    T: Hash + ?Sized + 'a,
    I: IntoIterator<Item = Option<&'a T>>,
{
    let mut combiner = HashCombiner::new();
    for value in values {
        combiner.push(value);
    }
    combiner.finish()
}

fn element_hash<T: Hash + ?Sized>(value: Option<&T>) -> u64 {
    match value {
        Some(v) => {
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        }
        None => ABSENT_HASH,
    }
}

/// Variadic call shape over [`HashCombiner`], allowing mixed element types.
///
/// `combined_hash!()` with no arguments yields the empty-sequence constant.
#[macro_export]
macro_rules! combined_hash {
    () => {
        $crate::hash::HashCombiner::new().finish()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut combiner = $crate::hash::HashCombiner::new();
        $(combiner.push($value);)+
        combiner.finish()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_fixed_constant() {
        let h = combined_hash(std::iter::empty::<Option<&u8>>());
        assert_eq!(h, combined_hash(std::iter::empty::<Option<&u8>>()));
        assert_eq!(h, HashCombiner::new().finish());
        assert_eq!(h, combined_hash!());
    }

    #[test]
    fn deterministic_across_calls() {
        let values = [Some(&1u32), Some(&2), Some(&3)];
        assert_eq!(combined_hash(values), combined_hash(values));
        assert_eq!(combined_hash!(Some(&1u32), Some(&2), Some(&3)), combined_hash(values));
    }

    #[test]
    fn order_sensitive() {
        let forward = combined_hash([Some(&1u32), Some(&2), Some(&3)]);
        let reverse = combined_hash([Some(&3u32), Some(&2), Some(&1)]);
        assert_ne!(forward, reverse);
    }

    #[test]
    fn absent_contributes_sentinel() {
        let with_absent = combined_hash([Some(&7u64), None]);
        let without = combined_hash([Some(&7u64)]);
        assert_eq!(with_absent, without.wrapping_mul(31));
    }

    #[test]
    fn all_absent_differs_by_length() {
        let one = combined_hash::<u8, _>([None]);
        let two = combined_hash::<u8, _>([None, None]);
        assert_ne!(one, two);
    }

    #[test]
    fn equal_sequences_hash_equal() {
        let a = ["x".to_string(), "y".to_string()];
        let b = ["x".to_string(), "y".to_string()];
        let ha = combined_hash(a.iter().map(Some));
        let hb = combined_hash(b.iter().map(Some));
        assert_eq!(ha, hb);
    }

    #[test]
    fn mixed_types_through_macro() {
        let h = combined_hash!(Some("alice"), None::<&u32>, Some(&true));
        assert_eq!(h, combined_hash!(Some("alice"), None::<&u32>, Some(&true)));
    }

    #[test]
    fn single_container_hashes_by_contents() {
        let a = vec![1u8, 2, 3];
        let b = vec![1u8, 2, 3];
        assert_eq!(combined_hash([Some(&a)]), combined_hash([Some(&b)]));
    }

    #[test]
    fn single_element_differs_from_raw_element_hash() {
        // The combiner folds through the seed, so hashing one element is not
        // the same as that element's own hash.
        let v = 42u64;
        assert_ne!(combined_hash([Some(&v)]), element_hash(Some(&v)));
    }
}
