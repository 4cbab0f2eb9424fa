//! Test: `rename` is only accepted on unit variants.

use redaction_tree::Inspect;

#[derive(Inspect)]
enum Shipment {
    #[inspect(rename = "sent")]
    Sent { carrier: String },
}

fn main() {}
