//! rPlantao main entrypoint.

use rplantao::run;
use rplantao::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
