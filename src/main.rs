//! # B_code
//!
//! Command line front end for the B_code compiler.
//!

mod term;

fn main() {
    term::main();
}
