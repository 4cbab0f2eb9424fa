//! Test: unions cannot derive `Inspect`.

use redaction_tree::Inspect;

#[derive(Inspect)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
