use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use census_cli::render::{report_to_csv, report_to_json};
use census_cli::request::SelectionRequest;
use census_core::{Engine, LoadOutcome, SelectionLog, Session};
use census_ingest::DataConfig;
use census_model::{EstimateYears, JurisdictionType};

use crate::cli::{DataArgs, KindArg, OptionsArgs, ReportArgs, ReportFormatArg, ResolveArgs};
use crate::summary::{print_options, print_report, print_states};

/// Environment configuration with command-line overrides applied.
pub fn data_config(args: &DataArgs) -> DataConfig {
    let mut config = DataConfig::from_env();
    if let Some(year) = args.current_year {
        // Paths still at the vintage default follow the requested year.
        let previous = DataConfig::for_years(config.years);
        let vintage = DataConfig::for_years(EstimateYears::ending(year));
        if config.places == previous.places {
            config.places = vintage.places;
        }
        if config.counties == previous.counties {
            config.counties = vintage.counties;
        }
        config.years = vintage.years;
    }
    if let Some(path) = &args.places {
        config.places = path.clone();
    }
    if let Some(path) = &args.counties {
        config.counties = path.clone();
    }
    config
}

/// Load both datasets and return the published engine.
pub fn load_engine(args: &DataArgs) -> Result<Arc<Engine>> {
    let config = data_config(args);
    info!(
        places = %config.places.display(),
        counties = %config.counties.display(),
        year = config.years.current,
        "loading datasets"
    );
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let session = Session::new();
    let outcome = runtime.block_on(session.load(
        config.place_source(),
        config.county_source(),
        config.years,
    ));
    match outcome {
        LoadOutcome::Published { places, counties } => {
            debug!(
                places = places.retained,
                counties = counties.retained,
                "datasets ready"
            );
        }
        LoadOutcome::Failed(error) => {
            return Err(anyhow::Error::new(error).context("load datasets"));
        }
        LoadOutcome::Discarded(reason) => bail!("dataset load was discarded ({reason:?})"),
    }
    session.engine().context("load datasets")
}

pub fn run_states(engine: &Engine) -> Result<()> {
    if engine.states().is_empty() {
        eprintln!("No states found in the loaded datasets.");
        return Ok(());
    }
    print_states(engine.states());
    Ok(())
}

pub fn run_options(engine: &Engine, args: &OptionsArgs) -> Result<()> {
    let kind = jurisdiction_type(args.kind);
    let options = engine.options_for(&args.state, kind);
    if options.is_empty() {
        eprintln!("No {kind} entries for state '{}'.", args.state);
        return Ok(());
    }
    print_options(&options);
    Ok(())
}

pub fn run_resolve(engine: &Engine, args: &ResolveArgs) -> Result<()> {
    let kind = jurisdiction_type(args.kind);
    let metric = engine.metric(&args.metric)?;
    let value = engine.resolve(args.code.trim(), kind, metric)?;
    println!("{value}");
    Ok(())
}

pub fn run_report(engine: &Engine, args: &ReportArgs) -> Result<()> {
    let mut log = SelectionLog::new();
    for raw in &args.selections {
        let request: SelectionRequest = raw.parse()?;
        let metric = engine
            .metric(&request.metric)
            .with_context(|| format!("selection '{raw}'"))?;
        let entry = engine
            .select(request.state_code()?, request.kind, &request.code, metric)
            .with_context(|| format!("selection '{raw}'"))?;
        log.record(entry);
    }

    let report = log.aggregate();
    let years = engine.years();
    match args.format {
        ReportFormatArg::Table => print_report(&report, years),
        ReportFormatArg::Csv => print!("{}", report_to_csv(&report, years)?),
        ReportFormatArg::Json => println!("{}", report_to_json(&report, years)?),
    }
    Ok(())
}

fn jurisdiction_type(kind: KindArg) -> JurisdictionType {
    match kind {
        KindArg::Place => JurisdictionType::Place,
        KindArg::County => JurisdictionType::County,
    }
}
