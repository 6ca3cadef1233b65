fn main() {
    if let Err(err) = qmetrics::run() {
        eprintln!("{}", qmetrics::format_error(&err));
        std::process::exit(1);
    }
}
