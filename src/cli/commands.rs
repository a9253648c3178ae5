use crate::app::{AppContext, LarderError, Result};
use crate::config::Config;
use crate::domain::{Category, Item, Mode};
use crate::list::Command;
use crate::views::{self, Filter, SortMode};

pub fn add(
    ctx: &mut AppContext,
    text: &str,
    category: Option<&str>,
    quantity: Option<i64>,
) -> Result<()> {
    let category = category.map(parse_category);
    let before = ctx.list().len();

    ctx.dispatch(Command::Add {
        text: text.into(),
        category,
        quantity,
    });

    if ctx.list().len() == before {
        println!("Nothing added: item text is empty");
    } else {
        let item = &ctx.list().items()[0];
        println!("Added {}", format_item(item));
    }
    Ok(())
}

pub fn toggle(ctx: &mut AppContext, id: u64) -> Result<()> {
    if find(ctx, id).is_none() {
        println!("No item with id {}", id);
        return Ok(());
    }

    ctx.dispatch(Command::Toggle { id });

    if let Some(item) = find(ctx, id) {
        if item.purchased {
            println!("Purchased: {}", item.text);
        } else {
            println!("Needed again: {}", item.text);
        }
    }
    Ok(())
}

pub fn remove(ctx: &mut AppContext, id: u64) -> Result<()> {
    let Some(item) = find(ctx, id) else {
        println!("No item with id {}", id);
        return Ok(());
    };
    let text = item.text.clone();

    ctx.dispatch(Command::Delete { id });
    println!("Removed: {}", text);
    Ok(())
}

pub fn edit(ctx: &mut AppContext, id: u64, text: &str, category: Option<&str>) -> Result<()> {
    let Some(current) = find(ctx, id) else {
        println!("No item with id {}", id);
        return Ok(());
    };
    let category = category.map_or(current.category, parse_category);

    ctx.dispatch(Command::Edit {
        id,
        text: text.into(),
        category,
    });

    if let Some(item) = find(ctx, id) {
        println!("Updated {}", format_item(item));
    }
    Ok(())
}

pub fn quantity(ctx: &mut AppContext, id: u64, quantity: i64) -> Result<()> {
    if find(ctx, id).is_none() {
        println!("No item with id {}", id);
        return Ok(());
    }

    ctx.dispatch(Command::SetQuantity { id, quantity });

    if let Some(item) = find(ctx, id) {
        println!("Quantity of {} is now {}", item.text, item.quantity);
    }
    Ok(())
}

pub fn list_items(
    ctx: &AppContext,
    config: &Config,
    filter: Option<&str>,
    sort: Option<&str>,
    mode: Option<&str>,
    grouped: bool,
) -> Result<()> {
    let filter = filter.map_or(Ok(Filter::All), parse_filter)?;
    let sort = sort.map_or(Ok(config.list.default_sort), parse_sort)?;
    let scope = match mode {
        Some(s) => parse_scope(s)?,
        None => config.list.default_mode,
    };

    let visible: Vec<Item> = views::filtered(ctx.list().items(), scope, filter)
        .into_iter()
        .cloned()
        .collect();

    if visible.is_empty() {
        println!("No items");
        return Ok(());
    }

    if grouped {
        for (category, members) in views::grouped(&visible, scope) {
            println!("{} {} ({} items)", category.icon(), category, members.len());
            for item in members {
                println!("  {}", format_item(item));
            }
        }
    } else {
        for item in views::sorted(&visible, scope, sort) {
            println!("{}", format_item(item));
        }
    }
    Ok(())
}

pub fn stats(ctx: &AppContext, config: &Config, mode: Option<&str>) -> Result<()> {
    let scope = match mode {
        Some(s) => parse_scope(s)?,
        None => config.list.default_mode,
    };

    let counts = views::counts(ctx.list().items(), scope);
    println!(
        "{} needed, {} purchased, {} total ({} units)",
        counts.needed, counts.purchased, counts.total, counts.total_quantity
    );
    Ok(())
}

pub fn clear(ctx: &mut AppContext, purchased: bool, mode: Option<&str>) -> Result<()> {
    let before = ctx.list().len();

    if purchased {
        if mode.is_some() {
            return Err(LarderError::Other(
                "--purchased cannot be combined with --mode".into(),
            ));
        }
        ctx.dispatch(Command::ClearPurchased);
        println!("Removed {} purchased item(s)", before - ctx.list().len());
        return Ok(());
    }

    let scope = match mode {
        Some(s) => parse_scope(s)?,
        None => None,
    };
    ctx.dispatch(Command::ClearAll { scope });
    match scope {
        None => println!("Cleared the entire list"),
        Some(m) => println!("Removed {} {} item(s)", before - ctx.list().len(), m),
    }
    Ok(())
}

fn find(ctx: &AppContext, id: u64) -> Option<&Item> {
    ctx.list().items().iter().find(|item| item.id == id)
}

fn format_item(item: &Item) -> String {
    let marker = if item.purchased { "[x]" } else { "[ ]" };
    let quantity = if item.quantity > 1 {
        format!(" x{}", item.quantity)
    } else {
        String::new()
    };
    format!(
        "{} #{} {} {}{}",
        marker,
        item.id,
        item.category.icon(),
        item.text,
        quantity
    )
}

/// Unknown category names fall back to the catch-all instead of erroring,
/// matching how items with unrecognized categories load from storage.
fn parse_category(name: &str) -> Category {
    Category::parse(name).unwrap_or(Category::Other)
}

fn parse_filter(name: &str) -> Result<Filter> {
    match name.to_ascii_lowercase().as_str() {
        "all" => Ok(Filter::All),
        "needed" => Ok(Filter::Needed),
        "purchased" => Ok(Filter::Purchased),
        _ => Err(LarderError::Other(format!(
            "Unknown filter: {} (expected all, needed or purchased)",
            name
        ))),
    }
}

fn parse_sort(name: &str) -> Result<SortMode> {
    match name.to_ascii_lowercase().as_str() {
        "alphabetical" => Ok(SortMode::Alphabetical),
        "category" => Ok(SortMode::Category),
        _ => Err(LarderError::Other(format!(
            "Unknown sort order: {} (expected category or alphabetical)",
            name
        ))),
    }
}

fn parse_scope(name: &str) -> Result<Option<Mode>> {
    match name.to_ascii_lowercase().as_str() {
        "all" => Ok(None),
        "grocery" => Ok(Some(Mode::Grocery)),
        "home" => Ok(Some(Mode::Home)),
        _ => Err(LarderError::Other(format!(
            "Unknown mode: {} (expected grocery, home or all)",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("needed").unwrap(), Filter::Needed);
        assert_eq!(parse_filter("PURCHASED").unwrap(), Filter::Purchased);
        assert!(parse_filter("bought").is_err());
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("alphabetical").unwrap(), SortMode::Alphabetical);
        assert_eq!(parse_sort("Category").unwrap(), SortMode::Category);
        assert!(parse_sort("newest").is_err());
    }

    #[test]
    fn test_parse_scope() {
        assert_eq!(parse_scope("grocery").unwrap(), Some(Mode::Grocery));
        assert_eq!(parse_scope("home").unwrap(), Some(Mode::Home));
        assert_eq!(parse_scope("all").unwrap(), None);
        assert!(parse_scope("garage").is_err());
    }

    #[test]
    fn test_parse_category_falls_back() {
        assert_eq!(parse_category("Dairy"), Category::Dairy);
        assert_eq!(parse_category("Charcuterie"), Category::Other);
    }

    #[test]
    fn test_format_item() {
        let mut item = Item::new(3, "Milk", Category::Dairy, 2);
        assert_eq!(format_item(&item), "[ ] #3 🥛 Milk x2");

        item.purchased = true;
        item.quantity = 1;
        assert_eq!(format_item(&item), "[x] #3 🥛 Milk");
    }
}
