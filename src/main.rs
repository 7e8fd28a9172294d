use std::error::Error;
use std::io::Read;
use subnet_planner::output::render_report;
use subnet_planner::SubnetPlan;

fn init_logging() {
    let config = std::env::var("SUBNET_PLANNER_LOG_CONFIG").unwrap_or("log4rs.yml".to_string());
    if let Err(e) = log4rs::init_file(&config, Default::default()) {
        let stderr = log4rs::append::console::ConsoleAppender::builder()
            .target(log4rs::append::console::Target::Stderr)
            .build();
        let fallback = log4rs::config::Config::builder()
            .appender(log4rs::config::Appender::builder().build("stderr", Box::new(stderr)))
            .build(
                log4rs::config::Root::builder()
                    .appender("stderr")
                    .build(log::LevelFilter::Warn),
            );
        if let Ok(fallback) = fallback {
            let _ = log4rs::init_config(fallback);
        }
        log::warn!("Could not load {config} ({e}), logging warnings to stderr");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging();
    if std::env::var_os("SUBNET_PLANNER_NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
    log::info!("#Start main()");

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let mut plan = SubnetPlan::new();
    let outcome = plan.add_lines(&input);
    for error in &outcome.errors {
        eprintln!("{error}");
    }
    if !outcome.is_valid() {
        eprintln!(
            "{} of {} subnets added",
            outcome.valid_count(),
            outcome.total_count
        );
    }

    let analysis = plan.analyze();
    if std::env::args().any(|arg| arg == "--json") {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render_report(&analysis)?);
    }

    Ok(())
}
