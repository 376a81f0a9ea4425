mod buffer;
mod listing;
mod program;

pub use self::buffer::{CodeGen, Slot};
pub use self::listing::ListingError;
pub use self::program::{Instruction, Program};
