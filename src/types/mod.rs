/*!
Shared error and result types used across the library.
*/

pub mod domain;
pub mod err;
