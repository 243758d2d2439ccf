pub mod hash;
pub mod io;
