//! Index types and dense id-keyed storage shared by the lookup tables and the
//! arena forest.
pub mod map;

pub use map::DenseMap;

/// A type that can be used as a dense index into vector-backed storage.
pub trait EntityIndex: Copy + Eq + Default {
    /// Creates an index from a `usize`.
    ///
    /// # Panics
    ///
    /// Panics when `index` does not fit into the backing integer type.
    fn new(index: usize) -> Self {
        match Self::try_new(index) {
            Some(index) => index,
            None => panic!("index {index} exceeds the capacity of the index type"),
        }
    }

    fn try_new(index: usize) -> Option<Self>;
    fn index(self) -> usize;
}

/// Macro which provides the common implementation of an n-bit entity reference
///
/// Based on [`cranelift_entity`'s `entity_impl!`](https://docs.rs/cranelift-entity/0.89.2/cranelift_entity/macro.entity_impl.html)
#[macro_export]
macro_rules! entity_impl {
    ($entity:ident, $backing:ty) => {
        impl $crate::memory::EntityIndex for $entity {
            #[inline(always)]
            fn try_new(ix: usize) -> Option<Self> {
                if ix <= (<$backing>::MAX as usize) || (<$backing>::BITS) > usize::BITS {
                    Some($entity(ix as $backing))
                } else {
                    None
                }
            }

            #[inline(always)]
            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

macro_rules! int_entity_impl {
    ($entity:ident) => {
        impl $crate::memory::EntityIndex for $entity {
            #[inline(always)]
            fn try_new(ix: usize) -> Option<Self> {
                if (ix as u128) <= (<$entity>::MAX as u128) {
                    Some(ix as $entity)
                } else {
                    None
                }
            }

            #[inline(always)]
            fn index(self) -> usize {
                self as usize
            }
        }
    };
}

int_entity_impl!(usize);
int_entity_impl!(u64);
int_entity_impl!(u32);
int_entity_impl!(u16);
