use chrono::NaiveDate;
use lib::{
    DATE_FORMAT, Result, SimpleLogger, average_by_city, extremes_on, load_records,
    render_bar_chart,
};
use log::debug;
use std::io::{self, BufRead};
use std::path::Path;
use std::time::Instant;

static LOGGER: SimpleLogger = SimpleLogger;

const CSV_PATH: &str = "Temperaturas.csv";

fn main() -> Result<()> {
    // Initialize timer and logger
    let total_start = Instant::now();
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Info);

    println!("Analizador de Temperaturas");

    let records = load_records(Path::new(CSV_PATH))?;
    debug!("Input file: {} | {} records", CSV_PATH, records.len());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let start = prompt_date(&mut input, "Ingrese fecha inicial (dd/mm/yyyy):")?;
    let end = prompt_date(&mut input, "Ingrese fecha final (dd/mm/yyyy):")?;

    let averages = average_by_city(&records, start, end);
    debug!(
        "Date range: {} - {} | {} cities",
        start.format(DATE_FORMAT),
        end.format(DATE_FORMAT),
        averages.len()
    );

    match render_bar_chart(&averages, start, end, Path::new(".")) {
        Ok(path) => println!("Gráfica guardada en: {}", path.display()),
        Err(e) => eprintln!("Error al guardar la gráfica: {}", e),
    }

    let query = prompt_date(
        &mut input,
        "\nIngrese fecha para consulta puntual (dd/mm/yyyy):",
    )?;
    match extremes_on(&records, query) {
        None => println!("No hay datos para la fecha especificada."),
        Some((hottest, coldest)) => {
            println!(
                "Fecha {}: Ciudad más calurosa: {} ({:.1}°C)",
                query.format(DATE_FORMAT),
                hottest.city,
                hottest.temperature
            );
            println!(
                "Fecha {}: Ciudad más fría: {} ({:.1}°C)",
                query.format(DATE_FORMAT),
                coldest.city,
                coldest.temperature
            );
        }
    }

    debug!("Completed in {:.2?}", total_start.elapsed());
    Ok(())
}

fn prompt_date(input: &mut impl BufRead, prompt: &str) -> Result<NaiveDate> {
    println!("{prompt}");
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(NaiveDate::parse_from_str(line.trim(), DATE_FORMAT)?)
}
