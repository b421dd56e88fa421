mod pointer;

pub use pointer::Pointer;
