mod util;

#[path="vm/expressions.rs"]
mod expressions;
#[path="vm/faults.rs"]
mod faults;
#[path="vm/stepping.rs"]
mod stepping;
