pub use abilities::*;
pub use grid::*;
pub use placement::*;
pub use protocol::*;
pub use ships::*;
pub use targeting::*;
pub use visualization::*;

mod abilities;
#[cfg(test)]
mod arbitrary;
mod grid;
mod placement;
mod protocol;
mod ships;
mod targeting;
mod visualization;
