use chrono::{Datelike, Local, NaiveDate, Utc};
use clap::Parser;
use tracing::{info, warn};

use ns_nutrition_rs::catalog::{Catalog, find_by_name};
use ns_nutrition_rs::cli::{Cli, Command};
use ns_nutrition_rs::config::PlannerConfig;
use ns_nutrition_rs::error::{PlannerError, Result};
use ns_nutrition_rs::export::write_week_csv;
use ns_nutrition_rs::interface::{
    display_breakfast_options, display_day_plan, display_energy_budget, display_intake,
    display_progress, prompt_breakfast, prompt_profile, prompt_yes_no,
};
use ns_nutrition_rs::models::{Day, EnergyBudget, MealType, NewIntake, ProfileRecord};
use ns_nutrition_rs::planner::{
    build_combinations_with, compute_energy_budget, compute_macro_targets, compute_progress,
    days_elapsed, plan_day, plan_week, select_breakfast,
};
use ns_nutrition_rs::store::{IntakeStore, JsonFileStore, ProfileStore};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log filter from `NS_NUTRITION_LOG`, falling back to `RUST_LOG`, default `warn`.
fn init_tracing() {
    let log_env = std::env::var("NS_NUTRITION_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

/// Everything a command needs, loaded from the global flags.
struct Context {
    user: String,
    store: JsonFileStore,
    catalog: Catalog,
    config: PlannerConfig,
}

impl Context {
    fn load(cli: &Cli) -> Result<Self> {
        let store = JsonFileStore::open(&cli.store)?;

        let catalog = match &cli.catalog {
            Some(path) => {
                info!(path = %path.display(), "loading catalog");
                Catalog::load(path)?
            }
            None => Catalog::builtin()?,
        };

        let config = match &cli.config {
            Some(path) => {
                info!(path = %path.display(), "loading planner config");
                PlannerConfig::load(path)?
            }
            None => PlannerConfig::default(),
        };

        Ok(Self {
            user: cli.user.clone(),
            store,
            catalog,
            config,
        })
    }

    fn profile(&self) -> Result<ProfileRecord> {
        self.store
            .load_profile(&self.user)?
            .ok_or_else(|| PlannerError::ProfileNotFound(self.user.clone()))
    }

    fn budget(&self) -> Result<(ProfileRecord, EnergyBudget)> {
        let record = self.profile()?;
        let budget = compute_energy_budget(&record.profile)?;
        if !budget.deficit_safe {
            warn!(
                deficit = budget.daily_deficit_kcal,
                tdee = budget.tdee_kcal,
                "daily deficit exceeds the safe limit"
            );
        }
        Ok((record, budget))
    }

    /// Calories of the named café item, or zero when no breakfast is given.
    fn breakfast_kcal(&self, name: Option<&str>) -> Result<f64> {
        match name {
            Some(name) => Ok(self.catalog.find_cafe_item(name)?.calories),
            None => Ok(0.0),
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = Context::load(&cli)?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Profile => cmd_profile(&mut ctx),
        Command::Budget => cmd_budget(&ctx),
        Command::Meals { day, breakfast } => {
            cmd_meals(&ctx, day.as_deref(), breakfast.as_deref())
        }
        Command::Breakfast { target } => cmd_breakfast(&ctx, target),
        Command::Log {
            meal,
            item,
            day,
            date,
        } => cmd_log(&mut ctx, &meal, &item, day.as_deref(), date),
        Command::Intake { date, delete } => cmd_intake(&mut ctx, date, delete),
        Command::Progress { weight } => cmd_progress(&mut ctx, weight),
        Command::Export { csv, breakfast } => cmd_export(&ctx, &csv, breakfast.as_deref()),
    }
}

fn parse_day(day: Option<&str>) -> Result<Day> {
    match day {
        Some(d) => d.parse(),
        None => Ok(Day::today()),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Create or update the profile, then show its budget.
fn cmd_profile(ctx: &mut Context) -> Result<()> {
    let existing = ctx.store.load_profile(&ctx.user)?;
    let profile = prompt_profile(existing.as_ref().map(|r| &r.profile))?;

    let restart = match existing {
        Some(_) => prompt_yes_no("Restart progress tracking from today?", false)?,
        None => true,
    };
    let record = match existing {
        Some(previous) if !restart => ProfileRecord {
            profile,
            ..previous
        },
        _ => ProfileRecord::start(&ctx.user, profile, Utc::now()),
    };

    ctx.store.save_profile(record)?;
    info!(user = %ctx.user, path = %ctx.store.path().display(), "profile saved");
    println!("Profile saved.");

    cmd_budget(ctx)
}

fn cmd_budget(ctx: &Context) -> Result<()> {
    let (record, budget) = ctx.budget()?;
    let macros = compute_macro_targets(budget.daily_budget_kcal, budget.lean_body_mass_kg);
    display_energy_budget(&record.profile, &budget, &macros);
    Ok(())
}

/// Recommend lunch and dinner for a day.
fn cmd_meals(ctx: &Context, day: Option<&str>, breakfast: Option<&str>) -> Result<()> {
    let day = parse_day(day)?;
    let (_, budget) = ctx.budget()?;

    let breakfast_kcal = match breakfast {
        Some(name) => ctx.breakfast_kcal(Some(name))?,
        None => {
            let target = ctx.config.breakfast_target(budget.daily_budget_kcal);
            let options = select_breakfast(
                ctx.catalog.cafe_items(),
                target,
                ctx.config.breakfast_slack_kcal,
                ctx.config.breakfast_count,
            );
            display_breakfast_options(target, &options);
            prompt_breakfast(&options)?.map_or(0.0, |item| item.calories)
        }
    };

    let plan = plan_day(
        &ctx.catalog,
        day,
        budget.daily_budget_kcal,
        breakfast_kcal,
        &ctx.config,
    );
    display_day_plan(&plan);
    Ok(())
}

fn cmd_breakfast(ctx: &Context, target: Option<f64>) -> Result<()> {
    let target = match target {
        Some(t) if t.is_finite() && t >= 0.0 => t,
        Some(t) => {
            return Err(PlannerError::InvalidInput(format!(
                "breakfast target must be non-negative, got {}",
                t
            )));
        }
        None => {
            let (_, budget) = ctx.budget()?;
            ctx.config.breakfast_target(budget.daily_budget_kcal)
        }
    };

    let options = select_breakfast(
        ctx.catalog.cafe_items(),
        target,
        ctx.config.breakfast_slack_kcal,
        ctx.config.breakfast_count,
    );
    display_breakfast_options(target, &options);
    Ok(())
}

/// Record a café item or a menu combination as eaten.
fn cmd_log(
    ctx: &mut Context,
    meal: &str,
    item: &str,
    day: Option<&str>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let meal: MealType = meal.parse()?;
    let date = date.unwrap_or_else(today);

    let intake = if meal == MealType::Breakfast {
        let found = ctx.catalog.find_cafe_item(item)?;
        NewIntake::from_item(&ctx.user, date, meal, found)
    } else {
        let day = match day {
            Some(d) => d.parse()?,
            None => Day::from_weekday(date.weekday()),
        };
        let combos = ctx
            .catalog
            .meal(day, meal)
            .map(|option| build_combinations_with(option, ctx.config.extras))
            .unwrap_or_default();

        if let Some(combo) = find_by_name(&combos, item, |c| c.name.as_str()) {
            NewIntake::from_combination(&ctx.user, date, meal, combo)
        } else {
            let found = ctx.catalog.find_cafe_item(item)?;
            NewIntake::from_item(&ctx.user, date, meal, found)
        }
    };

    let record = ctx.store.append_intake(intake)?;
    info!(id = record.id, user = %ctx.user, %date, "intake recorded");
    println!(
        "Logged #{}: {} ({}) - {:.0} kcal",
        record.id, record.item_name, record.meal_type, record.calories
    );
    Ok(())
}

fn cmd_intake(ctx: &mut Context, date: Option<NaiveDate>, delete: Option<u64>) -> Result<()> {
    if let Some(id) = delete {
        if ctx.store.delete_intake(id)? {
            println!("Deleted intake record #{}.", id);
        } else {
            println!("No intake record #{}.", id);
        }
        return Ok(());
    }

    let date = date.unwrap_or_else(today);
    let records = ctx.store.list_intake(&ctx.user, date)?;

    // Intake is still shown when no profile exists, just without the remainder.
    let daily_budget = match ctx.budget() {
        Ok((_, budget)) => Some(budget.daily_budget_kcal),
        Err(PlannerError::ProfileNotFound(_)) => None,
        Err(e) => return Err(e),
    };

    println!("Intake for {}:", date);
    display_intake(&records, daily_budget);
    Ok(())
}

/// Update the current weight and show progress since the plan started.
fn cmd_progress(ctx: &mut Context, weight: Option<f64>) -> Result<()> {
    let mut record = ctx.profile()?;

    if let Some(weight) = weight {
        record.profile.current_weight_kg = weight;
        record.profile.validate()?;
        ctx.store.save_profile(record.clone())?;
        info!(user = %ctx.user, weight, "weight updated");
    }

    let elapsed = days_elapsed(record.started_at, Utc::now());
    let progress = compute_progress(&record.profile, record.start_weight_kg, elapsed);
    display_progress(&record.profile, record.start_weight_kg, &progress);
    Ok(())
}

fn cmd_export(ctx: &Context, path: &std::path::Path, breakfast: Option<&str>) -> Result<()> {
    let (_, budget) = ctx.budget()?;
    let breakfast_kcal = ctx.breakfast_kcal(breakfast)?;

    let plans = plan_week(
        &ctx.catalog,
        budget.daily_budget_kcal,
        breakfast_kcal,
        &ctx.config,
    );
    write_week_csv(&plans, path)?;

    info!(path = %path.display(), days = plans.len(), "week exported");
    println!("Exported {} days to {}", plans.len(), path.display());
    Ok(())
}
