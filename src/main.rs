//! gazetrail main entrypoint.

use gazetrail::run;
use gazetrail::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
