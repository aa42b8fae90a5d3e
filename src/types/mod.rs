/*!
Types shared across the library.
*/

pub mod err;
