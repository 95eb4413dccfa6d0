use clap::Parser;
use colored::Colorize;
use showroom::errors::map_catalog_load_error;
use showroom::{GalleryController, InMemoryAddressBar, NoopViewport};
use showroom_core::{group_categories_by_nav, load_catalog, sort_products_by_name, FacetCount};
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

/// Showroom catalog browser - faceted brand/category filtering with
/// cross-filtered counts and pagination
///
/// Examples:
///   # Browse the full catalog
///   showroom catalog.json
///
///   # Hydrate the filter state from an address query string
///   showroom catalog.json --query "brand=artifort,gelderland&category=sofas"
///
///   # Toggle facets directly (OR within a group, AND between groups)
///   showroom catalog.json --brand artifort --category sofas
///
///   # Show page 2 with 6 products per page
///   showroom catalog.json --category sofas --page 2 --page-size 6
#[derive(Parser, Debug)]
#[command(name = "showroom")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Multiple --brand values are combined with OR\n  \
    - Multiple --category values are combined with OR\n  \
    - Brand and category constraints are combined with AND\n  \
    - An empty group imposes no constraint\n\n\
Facet Counts:\n  \
    - A group's counts ignore that group's own selection\n  \
    - Counts shrink only when the other group is constrained\n  \
    - Zero-count values show as disabled unless currently selected\n\n\
Address:\n  \
    - The canonical serialized address is printed after the listing")]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Initial address query string, as after a deep link or reload
    #[arg(short, long, value_name = "QUERY")]
    query: Option<String>,

    /// Toggle a brand (can be specified multiple times for OR logic)
    #[arg(short, long = "brand", value_name = "SLUG")]
    brands: Vec<String>,

    /// Toggle a category (can be specified multiple times for OR logic)
    #[arg(short, long = "category", value_name = "SLUG")]
    categories: Vec<String>,

    /// Page to show (clamped to the valid range)
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Products per page
    #[arg(long, default_value_t = showroom_core::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Sort the displayed page by product name
    #[arg(long)]
    sort_name: bool,
}

fn main() {
    let cli = Cli::parse();

    let catalog = load_catalog(&cli.file).unwrap_or_else(|err| {
        let (title, message, details) = map_catalog_load_error(err.as_ref(), &cli.file);
        eprintln!("{} {}", title.red().bold(), message);
        eprintln!("{}", details.dimmed());
        process::exit(1);
    });

    let address = InMemoryAddressBar::new(cli.query.as_deref().unwrap_or(""));
    let mut gallery = GalleryController::with_page_size(
        Rc::new(catalog),
        cli.page_size,
        address.clone(),
        NoopViewport,
    );

    for slug in &cli.brands {
        gallery.toggle_brand(slug);
    }
    for slug in &cli.categories {
        gallery.toggle_category(slug);
    }
    gallery.jump_to_page(cli.page);

    print_facet_groups(&mut gallery);
    print_product_page(&mut gallery, cli.sort_name);

    let query = gallery.address_query();
    if query.is_empty() {
        println!("\nAddress: {}", "(no filter keys)".dimmed());
    } else {
        println!("\nAddress: ?{}", query);
    }
}

fn print_facet_groups(gallery: &mut GalleryController) {
    let counts = gallery.facet_counts().clone();

    println!("{}", "Brands".bold());
    for facet in &counts.brands {
        println!("  {}", format_facet_line(facet));
    }

    // Categories render grouped by their nav section
    let catalog = gallery.catalog();
    let canonical = catalog.canonical_categories();
    let nav_groups = group_categories_by_nav(&canonical);

    println!("\n{}", "Categories".bold());
    for (nav_group, members) in nav_groups {
        println!("  {}", nav_group.underline());
        for value in members {
            if let Some(facet) = counts.categories.iter().find(|c| c.slug == value.slug) {
                println!("    {}", format_facet_line(facet));
            }
        }
    }
}

fn format_facet_line(facet: &FacetCount) -> String {
    let checkbox = if facet.selected { "[x]" } else { "[ ]" };
    let line = format!("{} {} ({})", checkbox, facet.label, facet.count);

    if facet.disabled {
        line.dimmed().to_string()
    } else {
        line
    }
}

fn print_product_page(gallery: &mut GalleryController, sort_name: bool) {
    let mut view = gallery.page_view();

    if sort_name {
        sort_products_by_name(&mut view.items);
    }

    println!(
        "\n{} (page {} of {}, {} total)",
        "Products".bold(),
        view.current_page,
        view.total_pages,
        gallery.narrowed_len()
    );

    if view.items.is_empty() {
        println!("  {}", "No products match the current filters.".yellow());
        println!("  Use fewer --brand/--category flags to clear filters.");
        return;
    }

    for item in &view.items {
        let mut line = format!("  - {}", item.display_name());
        // Display-only fields ride along in `extra`
        if let Some(serde_json::Value::String(price)) = item.extra.get("price") {
            line.push_str(&format!("  {}", price.green()));
        }
        println!("{}", line);
    }
}
