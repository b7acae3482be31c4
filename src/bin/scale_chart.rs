//! Cross-scale chart for eyeballing the calibration tables

use diffscale::convert::from_punter;
use diffscale::{convert, format_number, to_visual, Scale};
use std::env;

const DEFAULT_STEP: f64 = 0.5;
const CHART_MAX: f64 = 16.0;

fn main() {
    let step = match env::args().nth(1) {
        Some(arg) => match arg.parse::<f64>() {
            Ok(s) if s > 0.0 => s,
            _ => {
                eprintln!("Usage: scale_chart [step]");
                std::process::exit(1);
            }
        },
        None => DEFAULT_STEP,
    };

    println!(
        "{:>6}  {:<22} {:>8} {:<8} {:>7} {:<16} {}",
        "PUNTER", "", "MC", "", "SCHEEP", "", "GRASSY"
    );
    println!("{}", "=".repeat(90));

    let mut i = 0u32;
    loop {
        let punter = f64::from(i) * step;
        if punter > CHART_MAX {
            break;
        }

        let mc = from_punter(punter, Scale::MichaelChan);
        let scheep = convert(punter, Scale::Punter, Scale::Scheep);

        println!(
            "{:>6}  {:<22} {:>8} {:<8} {:>7} {:<16} {}",
            format_number(punter),
            to_visual(punter, Scale::Punter),
            format_number((mc * 100.0).round() / 100.0),
            to_visual(mc, Scale::MichaelChan),
            format_number(scheep),
            to_visual(scheep, Scale::Scheep),
            to_visual(punter, Scale::Grassy),
        );
        i += 1;
    }
}
