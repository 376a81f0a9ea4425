pub type Int = i64;
pub type Var = String;

/// Position of an instruction in a program, or of a variable in memory.
pub type Address = usize;
