//! Binary for building contract schemas from odra modules.
#![doc = "Binary for building contract schemas from odra modules."]

#[allow(unused_imports)]
use simpledex_contracts;

fn main() {
    // This binary is used by the Odra build system to generate contract schemas
    // The actual generation is handled by the odra-build crate
}
