use clap::Parser;
use league_roster::core::ConfigProvider;
use league_roster::utils::error::ErrorSeverity;
use league_roster::utils::logger;
use league_roster::{CliConfig, FileRecordStore, RecordBook, RosterError, Shell};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    logger::init_cli_logger(cli.verbose, config.log_filter());
    tracing::info!("Starting league-roster");
    tracing::debug!("Resolved config: {:?}", config);

    let store = FileRecordStore::new(config.record_book_path());
    let mut book = match RecordBook::open(store) {
        Ok(book) => book,
        Err(e) => fail(&e),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(&mut book, stdin.lock(), stdout.lock());

    if let Err(e) = shell.run() {
        fail(&e);
    }

    tracing::info!("Record book saved to {}", config.record_book_path());
    Ok(())
}

fn fail(e: &RosterError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(exit_code(e));
}

fn exit_code(e: &RosterError) -> i32 {
    match e.severity() {
        // recoverable errors never reach the top level; treat a stray one as a failure anyway
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}
