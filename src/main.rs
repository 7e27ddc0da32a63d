fn main() {
    if let Err(e) = acidcalc_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
