pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_shopping_csv, write_shopping_json};
pub use prompts::{
    check_ingredient_count, parse_quantity, prompt_daily_menu, prompt_day_number,
    prompt_ingredient, prompt_inventory_item, prompt_main_menu, prompt_quantity, prompt_text,
    prompt_yes_no, suggest_stocked_name, MainMenuChoice, MAX_RECIPE_INGREDIENTS,
};
pub use render::{
    describe_status, display_inventory, display_recipe_detail, display_shopping_list,
    display_shortfall_breakdown, display_weekly_menu,
};
