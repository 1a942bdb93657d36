use charge_schedule::{
    cell::WatchCell,
    cli::{Args, Command},
    prelude::*,
    rate::Rate,
    state::TariffState,
    tables::{build_catalog_table, build_hours_table},
};
use chrono::Local;
use clap::{Parser, crate_version};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let state: TariffState<WatchCell<Rate>, _> = TariffState::builder().store(args.store()).build();
    state.initialize();
    let mut rate = state.observe();

    match args.command {
        Command::Show => {
            let current = *rate.borrow_and_update();
            println!("{}", build_catalog_table(current));
            println!("{}", build_hours_table(current));
        }
        Command::Set(set_args) => {
            state.set_rate(&set_args.name);
            let current = *rate.borrow_and_update();
            info!(name = %current.name(), "selected");
            println!("{}", build_hours_table(current));
        }
        Command::List => {
            println!("{}", build_catalog_table(state.current()));
        }
        Command::Check(check_args) => {
            let at = check_args.at.unwrap_or_else(Local::now);
            let current = state.current();
            let is_off_peak = current.is_off_peak_at(&at);
            info!(name = %current.name(), %at, is_off_peak, "checked");
            println!("{}", if is_off_peak { "off-peak" } else { "peak" });
        }
    }

    info!("done!");
    Ok(())
}
