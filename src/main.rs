use givenergy_commands::prelude::*;

fn main() {
    let options = Options::new();

    if let Err(e) = givenergy_commands::app(options) {
        error!("Application error: {:#}", e);
        std::process::exit(255);
    }
}
