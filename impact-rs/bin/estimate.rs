use std::{env, fs, process};

use impact::prelude::*;
use log::*;

pub fn main() {
    use simple_logger::SimpleLogger;
    SimpleLogger::new().init().unwrap();

    let path = env::args().nth(1).unwrap_or_else(|| "input.toml".to_string());
    let data = fs::read_to_string(&path).unwrap();
    let input: EstimatorInput = toml::from_str(&data).unwrap();

    match estimate(&input) {
        Ok(est) => {
            println!("{}", serde_json::to_string_pretty(&est).unwrap());
        }
        Err(err) => {
            error!("{}: {}", path, err);
            process::exit(1);
        }
    }
}
