//! rStaffRecords main entrypoint.

use rstaffrecords::run;
use rstaffrecords::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
