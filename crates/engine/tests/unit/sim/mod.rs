//! Unit tests for the simulation drivers.


/// Dynamic-fit allocator tests.
pub mod dynamic;


/// Trace frame and serialization tests.
pub mod frame;
