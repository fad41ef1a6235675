use std::io;

use clap::Parser;
use log::info;

use weekly_shopping_planner::cli::{Cli, Command, OutputFormat};
use weekly_shopping_planner::error::{PlannerError, Result};
use weekly_shopping_planner::interface::{
    display_inventory, display_recipe_detail, display_shopping_list,
    display_shortfall_breakdown, display_weekly_menu, prompt_daily_menu, prompt_day_number,
    prompt_inventory_item, prompt_main_menu, write_shopping_csv, write_shopping_json,
    MainMenuChoice,
};
use weekly_shopping_planner::state::{load_seed, sample_seed, ShoppingPlanner};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut planner = build_planner(&cli)?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(&mut planner),
        Command::Menu => {
            display_weekly_menu(planner.weekly_menu());
            Ok(())
        }
        Command::Inventory => {
            display_inventory(planner.inventory());
            Ok(())
        }
        Command::Shopping {
            format,
            no_breakdown,
        } => cmd_shopping(&planner, format, no_breakdown),
        Command::Detail { day } => {
            let index = day.checked_sub(1).ok_or(PlannerError::DayNotFound(day))?;
            cmd_detail(&planner, index)
        }
    }
}

/// Create the planner from a seed file, the sample week, or nothing.
fn build_planner(cli: &Cli) -> Result<ShoppingPlanner> {
    let mut planner = ShoppingPlanner::new();

    if let Some(path) = &cli.seed {
        load_seed(path)?.apply(&mut planner)?;
    } else if !cli.empty {
        sample_seed().apply(&mut planner)?;
        info!("Sample week loaded");
    }

    Ok(planner)
}

/// Print the shopping list in the requested format.
fn cmd_shopping(planner: &ShoppingPlanner, format: OutputFormat, no_breakdown: bool) -> Result<()> {
    let list = planner.shopping_list();

    match format {
        OutputFormat::Text => {
            display_shopping_list(&list);
            if !no_breakdown && !list.is_empty() {
                display_shortfall_breakdown(&planner.shortfall_breakdown());
            }
        }
        OutputFormat::Json => write_shopping_json(&list, io::stdout().lock())?,
        OutputFormat::Csv => write_shopping_csv(&list, io::stdout().lock())?,
    }

    Ok(())
}

/// Show one day's recipe compared with the inventory.
fn cmd_detail(planner: &ShoppingPlanner, index: usize) -> Result<()> {
    let (daily, comparison) = planner.recipe_detail(index)?;
    display_recipe_detail(daily, &comparison);
    Ok(())
}

/// Run the interactive menu loop until the user quits.
fn cmd_interactive(planner: &mut ShoppingPlanner) -> Result<()> {
    loop {
        println!();
        match prompt_main_menu()? {
            MainMenuChoice::ShowMenu => {
                display_weekly_menu(planner.weekly_menu());
                let days = planner.weekly_menu().len();
                if days > 0 {
                    if let Some(index) = prompt_day_number(days)? {
                        cmd_detail(planner, index)?;
                    }
                }
            }
            MainMenuChoice::ShowInventory => display_inventory(planner.inventory()),
            MainMenuChoice::ShoppingList => cmd_shopping(planner, OutputFormat::Text, false)?,
            MainMenuChoice::AddRecipe => {
                let daily = prompt_daily_menu()?;
                // Bad input is reported and the loop carries on
                match planner.add_daily_menu(daily) {
                    Ok(()) => println!("Recipe added to the weekly menu."),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            MainMenuChoice::AddInventoryItem => {
                let item = prompt_inventory_item(planner.inventory())?;
                match planner.add_inventory_item(item) {
                    Ok(()) => println!("Inventory updated."),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            MainMenuChoice::Quit => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}
