mod chunked;
mod counter;
mod io;
mod strict;

pub use chunked::*;
pub use counter::*;
pub use io::*;
