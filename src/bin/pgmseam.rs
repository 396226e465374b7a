use pgmseam::{
    accumulate_energy, calculate_energy, carve, carve_seam, grid_to_image, read_graymap, render,
    write_graymap, CarveError,
};
use std::fs;
use std::io::{self, BufReader};

use clap::{App, Arg};
use failure::Error;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let matches = App::new("pgmseam")
        .version("0.1.0")
        .about("Seam carving for plain-text graymaps")
        .arg(
            Arg::with_name("pgmfile")
                .help("The P2 graymap to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("seams")
                .short("n")
                .long("seams")
                .takes_value(true)
                .default_value("1")
                .help("Number of vertical seams to remove"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Write the carved graymap here instead of stdout"),
        )
        .arg(
            Arg::with_name("maps")
                .short("m")
                .long("maps")
                .help("Print each intermediate map to stderr"),
        )
        .arg(
            Arg::with_name("energy-out")
                .long("energy-out")
                .takes_value(true)
                .help("Also write the energy map as a grayscale image"),
        )
        .get_matches();

    let path = matches.value_of("pgmfile").unwrap();
    let seams: u32 = matches.value_of("seams").unwrap().parse()?;

    let mut reader = BufReader::new(fs::File::open(path)?);
    let mut map = read_graymap(&mut reader)?;

    if let Some(out) = matches.value_of("energy-out") {
        grid_to_image(&calculate_energy(&map.pixels)).save(out)?;
    }

    if seams >= map.pixels.width {
        return Err(CarveError {
            width: map.pixels.width,
            seams,
        }
        .into());
    }

    if matches.is_present("maps") {
        eprintln!("graymap for '{}':\n{}", path, render(&map.pixels));
        for _ in 0..seams {
            let energy = calculate_energy(&map.pixels);
            eprintln!("\nenergy:\n{}", render(&energy));
            let cumulative = accumulate_energy(&energy);
            eprintln!("\ncumulative energy:\n{}", render(&cumulative));
            carve_seam(&mut map.pixels, &cumulative);
            eprintln!("\ncarved:\n{}", render(&map.pixels));
        }
    } else {
        carve(&mut map.pixels, seams)?;
    }

    match matches.value_of("output") {
        Some(out) => write_graymap(&mut fs::File::create(out)?, &map)?,
        None => write_graymap(&mut io::stdout(), &map)?,
    }
    Ok(())
}
