//! Test: `skip` and `display` cannot both apply to one field.

use redaction_tree::Inspect;

#[derive(Inspect)]
struct Payment {
    #[inspect(skip, display)]
    amount: u64,
}

fn main() {}
