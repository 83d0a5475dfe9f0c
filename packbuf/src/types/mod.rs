mod array;
mod boolean;
mod number;
mod pair;
mod text;

#[cfg(feature = "alloc")]
mod container;
#[cfg(feature = "alloc")]
mod map;
#[cfg(feature = "alloc")]
mod sequence;
#[cfg(feature = "alloc")]
mod set;
