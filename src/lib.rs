//! Fill crossword grids with words using constraint propagation and backtracking search

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod crossword;
pub mod error;
pub mod image;
pub mod solve;

type HashMap<K, V> = ahash::AHashMap<K, V>;
type HashSet<T> = ahash::AHashSet<T>;
type LinkedHashSet<T> = linked_hash_set::LinkedHashSet<T, ahash::RandomState>;
