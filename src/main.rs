use std::process::ExitCode;

use log::error;
use mandelbrot_ppm::{config, render};

fn main() -> ExitCode {
    env_logger::init();

    match render::run(config::OUTPUT_FILE) {
        Ok(report) => {
            println!("Time taken: {:.6} seconds", report.elapsed.as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
