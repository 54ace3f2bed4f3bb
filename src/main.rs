use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use campus_catalog::filter::{HousingRequirement, InterestLevel, QuickFilter};
use campus_catalog::{
    active_dimension_count, distinct_states, filter, filter_bounds, load_catalog, Catalog,
    DeadlineWindow, FilterSpec, Settings, University,
};
use campus_catalog::university::DeadlineKind;

#[derive(Parser)]
#[command(name = "campus_catalog", about = "Browse and filter the university catalog")]
struct Cli {
    /// Config file (default: ./catalog.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Fetch sources over HTTP from this base URL
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Read sources from this directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List universities matching the filters
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
        /// Print matching records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one university by id
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Distinct states in the catalog
    States,
    /// Slider upper bounds per metric
    Bounds,
    /// Load statistics per source
    Stats,
}

#[derive(Args)]
struct FilterArgs {
    /// JSON filter specification; flags below override it
    #[arg(long)]
    spec: Option<PathBuf>,
    /// Search name, city, or state
    #[arg(short, long)]
    search: Option<String>,
    #[arg(long)]
    state: Option<String>,
    /// Deadline window, e.g. "Jan 1 - Jan 5"
    #[arg(long)]
    deadline: Option<DeadlineWindow>,
    /// Quick filter: free, noessays, aid, ed2, intl (repeatable)
    #[arg(short, long)]
    quick: Vec<QuickFilter>,
    #[arg(long)]
    test_optional: bool,
    /// Demonstrated interest level (repeatable)
    #[arg(long)]
    interest: Vec<InterestLevel>,
    #[arg(long)]
    housing: Option<HousingRequirement>,
    #[arg(long)]
    acceptance_min: Option<f64>,
    #[arg(long)]
    acceptance_max: Option<f64>,
    #[arg(long)]
    sat_min: Option<f64>,
    #[arg(long)]
    sat_max: Option<f64>,
    #[arg(long)]
    act_min: Option<f64>,
    #[arg(long)]
    act_max: Option<f64>,
    #[arg(long)]
    cost_max: Option<f64>,
    #[arg(long)]
    enrollment_min: Option<f64>,
    #[arg(long)]
    enrollment_max: Option<f64>,
}

impl FilterArgs {
    fn into_spec(self) -> anyhow::Result<FilterSpec> {
        let mut spec = match &self.spec {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str::<FilterSpec>(&text)
                    .with_context(|| format!("Invalid filter spec in {}", path.display()))?
            }
            None => FilterSpec::default(),
        };

        if let Some(s) = self.search {
            spec.search = s;
        }
        if self.state.is_some() {
            spec.state = self.state;
        }
        if self.deadline.is_some() {
            spec.deadline_range = self.deadline;
        }
        for q in self.quick {
            spec = spec.with_quick(q);
        }
        if self.test_optional {
            spec.test_optional = Some(true);
        }
        if !self.interest.is_empty() {
            spec.demonstrated_interest = Some(self.interest);
        }
        if self.housing.is_some() {
            spec.housing_requirement = self.housing;
        }
        let overrides = [
            (&mut spec.acceptance_rate_min, self.acceptance_min),
            (&mut spec.acceptance_rate_max, self.acceptance_max),
            (&mut spec.sat_score_min, self.sat_min),
            (&mut spec.sat_score_max, self.sat_max),
            (&mut spec.act_score_min, self.act_min),
            (&mut spec.act_score_max, self.act_max),
            (&mut spec.cost_of_attendance_max, self.cost_max),
            (&mut spec.enrollment_min, self.enrollment_min),
            (&mut spec.enrollment_max, self.enrollment_max),
        ];
        for (slot, value) in overrides {
            if value.is_some() {
                *slot = value;
            }
        }
        Ok(spec)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(url) = cli.base_url {
        settings.sources.base_url = Some(url);
    }
    if let Some(dir) = cli.data_dir {
        settings.sources.base_url = None;
        settings.sources.data_dir = dir;
    }

    let catalog = load_with_spinner(&settings).await?;

    match cli.command {
        Commands::List {
            filters,
            limit,
            json,
        } => {
            let spec = filters.into_spec()?;
            let rows = filter(&catalog, &spec);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
                return Ok(());
            }
            if rows.is_empty() {
                println!("No universities found. Try adjusting your search or filters.");
                return Ok(());
            }
            print_table(&rows, limit);
            println!(
                "\n{} of {} universities | {} active filters",
                rows.len(),
                catalog.len(),
                active_dimension_count(&spec)
            );
        }
        Commands::Show { id, json } => {
            let u = catalog
                .get(&id)
                .with_context(|| format!("No university with id '{}'", id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(u)?);
            } else {
                print_detail(u);
            }
        }
        Commands::States => {
            for state in distinct_states(&catalog) {
                println!("{}", state);
            }
        }
        Commands::Bounds => {
            for (metric, bound) in filter_bounds(&catalog) {
                let key = serde_json::to_value(metric)?;
                println!("{:<24} {:>12}", key.as_str().unwrap_or_default(), bound);
            }
        }
        Commands::Stats => print_stats(&catalog),
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

async fn load_with_spinner(settings: &Settings) -> anyhow::Result<Catalog> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Loading universities...");
    pb.enable_steady_tick(Duration::from_millis(100));
    let result = load_catalog(&settings.sources).await;
    pb.finish_and_clear();
    result.context("Unable to load data")
}

fn print_table(rows: &[&University], limit: usize) {
    println!(
        "{:>3} | {:<32} | {:<16} | {:<5} | {:>6} | {:>24} | {:<8}",
        "#", "University", "City", "State", "Accept", "Cost", "RD"
    );
    println!("{}", "-".repeat(112));

    for (i, u) in rows.iter().take(limit).enumerate() {
        println!(
            "{:>3} | {:<32} | {:<16} | {:<5} | {:>6} | {:>24} | {:<8}",
            i + 1,
            truncate(&u.institution, 32),
            truncate(&u.city, 16),
            truncate(&u.state, 5),
            or_dash(&u.overall_acceptance_rate.raw),
            truncate(or_dash(&u.cost_of_attendance.raw), 24),
            or_dash(&u.regular_decision),
        );
    }
    if rows.len() > limit {
        println!("... {} more", rows.len() - limit);
    }
}

fn print_detail(u: &University) {
    println!("{} ({}, {})", u.institution, or_dash(&u.city), or_dash(&u.state));
    println!("id: {}", u.id);

    let flag = |v: Option<bool>| match v {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    };
    let sections: [(&str, Vec<(&str, &str)>); 5] = [
        (
            "Admissions",
            vec![
                ("Overall acceptance", u.overall_acceptance_rate.raw.as_str()),
                ("ED acceptance", u.ed_acceptance_rate.raw.as_str()),
                ("RD acceptance", u.regular_acceptance_rate.raw.as_str()),
                ("International acceptance", u.international_acceptance_rate.as_str()),
                ("SAT Math (25th-75th)", u.sat_math.raw.as_str()),
                ("SAT R/W (25th-75th)", u.sat_rw.raw.as_str()),
                ("ACT (25th-75th)", u.act.raw.as_str()),
                ("% submitting SAT", u.percent_submitting_sat.raw.as_str()),
                ("% submitting ACT", u.percent_submitting_act.raw.as_str()),
                ("Demonstrated interest", u.demonstrated_interest.as_str()),
                ("No supplemental essays", flag(u.no_supplemental_essays)),
                ("Free application", flag(u.free_application)),
            ],
        ),
        (
            "Deadlines",
            DeadlineKind::ALL
                .iter()
                .map(|k| (k.label(), u.deadline(*k)))
                .collect(),
        ),
        (
            "Cost & aid",
            vec![
                ("Cost of attendance", u.cost_of_attendance.raw.as_str()),
                ("% need met", u.percent_need_met.raw.as_str()),
                ("Avg need-based grant", u.avg_need_based_grant.as_str()),
                ("% merit aid", u.percent_merit_aid.raw.as_str()),
                ("Avg merit award", u.avg_merit_award.raw.as_str()),
                ("Notable scholarships", u.notable_scholarships.as_str()),
            ],
        ),
        (
            "Outcomes",
            vec![
                ("Freshman retention", u.freshman_retention.raw.as_str()),
                ("4-year graduation", u.graduation_rate_4_year.raw.as_str()),
                ("6-year graduation", u.graduation_rate_6_year.raw.as_str()),
                ("Median earnings (6y)", u.median_earnings_6_years.as_str()),
                ("Median earnings (10y)", u.median_earnings_10_years.raw.as_str()),
                ("Net ROI (20y)", u.net_roi_20_years.raw.as_str()),
                ("CS median salary", u.cs_median_salary.as_str()),
            ],
        ),
        (
            "Campus",
            vec![
                ("Total enrollment", u.total_enrollment.raw.as_str()),
                ("% international", u.percent_international.raw.as_str()),
                ("% on campus", u.percent_on_campus.raw.as_str()),
                ("Housing requirement", u.housing_requirement.as_str()),
                ("Avg Jan temp", u.avg_jan_temp.raw.as_str()),
                ("Avg Apr temp", u.avg_april_temp.as_str()),
                ("Avg Jul temp", u.avg_july_temp.as_str()),
                ("Avg Oct temp", u.avg_oct_temp.as_str()),
                ("Sunny days", u.sunny_days.raw.as_str()),
                ("Days with precipitation", u.days_with_precipitation.raw.as_str()),
            ],
        ),
    ];

    for (title, items) in sections {
        println!("\n--- {} ---", title);
        for (label, value) in items {
            println!("  {:<26} {}", label, or_dash(value));
        }
    }
}

fn print_stats(catalog: &Catalog) {
    let stats = catalog.stats();
    for s in &stats.sources {
        println!(
            "{:<28} {:>5} records {:>4} dropped",
            s.name, s.records, s.dropped_rows
        );
    }
    println!("Extras entries:     {}", stats.extras_entries);
    println!("Overlay matches:    {}", stats.overlay_matches);
    println!("Duplicates removed: {}", stats.duplicates_removed);
    println!("Total:              {}", stats.total);
    println!("States:             {}", distinct_states(catalog).len());
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
