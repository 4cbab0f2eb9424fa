//! Test: unknown field options are rejected.

use redaction_tree::Inspect;

#[derive(Inspect)]
struct Account {
    // ERROR: `flatten` is not an inspect option
    #[inspect(flatten)]
    owner: String,
}

fn main() {}
