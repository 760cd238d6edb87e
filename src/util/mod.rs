pub mod alloc;
pub mod error;
pub mod fmt;
pub mod hash;
pub mod log;
pub mod option;
pub mod panic;
pub mod result;
