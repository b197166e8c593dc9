//! CLI administration tool for customer-order-service.
//!
//! Provides commands for inspecting and cleaning up customers and orders and
//! for database maintenance without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # List customers
//! cargo run --bin admin -- customer list
//!
//! # Delete a customer together with its orders
//! cargo run --bin admin -- customer delete 67e55044-10b1-426f-9247-bb680e5fe0c8
//!
//! # List orders
//! cargo run --bin admin -- order list
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required): PostgreSQL connection

use customer_order_service::config::Config;
use customer_order_service::domain::repositories::{CustomerRepository, OrderRepository};
use customer_order_service::infrastructure::persistence::{
    PgCustomerRepository, PgOrderRepository,
};
use customer_order_service::server;
use customer_order_service::utils::parse_resource_id;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing customer-order-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage customers
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Manage orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// List all customers
    List,

    /// Delete a customer and its orders
    Delete {
        /// Customer UUID
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List all orders
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_USER, DB_PASSWORD, DB_NAME) must be set")?;

    let pool = server::connect_pool(&database_url, &config).await?;

    match cli.command {
        Commands::Customer { action } => handle_customer_action(action, pool).await?,
        Commands::Order { action } => handle_order_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_customer_action(action: CustomerAction, pool: PgPool) -> Result<()> {
    let pool = Arc::new(pool);
    let customers = PgCustomerRepository::new(pool.clone());
    let orders = PgOrderRepository::new(pool);

    match action {
        CustomerAction::List => list_customers(&customers, &orders).await,
        CustomerAction::Delete { id, yes } => delete_customer(&customers, &orders, &id, yes).await,
    }
}

async fn handle_order_action(action: OrderAction, pool: PgPool) -> Result<()> {
    let orders = PgOrderRepository::new(Arc::new(pool));

    match action {
        OrderAction::List => list_orders(&orders).await,
    }
}

/// Lists customers with their registration time and order count.
///
/// # Output Format
///
/// ```text
/// 👥 Customers
///
///   ID                                    Name                 Registered        Orders
///   ──────────────────────────────────────────────────────────────────────────────────────
///   67e55044-10b1-426f-9247-bb680e5fe0c8  Frej                 2024-01-15 10:30  2
/// ```
async fn list_customers(
    customers: &PgCustomerRepository,
    orders: &PgOrderRepository,
) -> Result<()> {
    println!("{}", "👥 Customers".bright_blue().bold());
    println!();

    let customers = customers.list().await.context("Failed to list customers")?;

    if customers.is_empty() {
        println!("{}", "  No customers found".yellow());
        return Ok(());
    }

    println!(
        "  {:<37} {:<20} {:<17} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Registered".bright_white().bold(),
        "Orders".bright_white().bold()
    );
    println!("  {}", "─".repeat(86).bright_black());

    for customer in &customers {
        let order_count = orders
            .list_by_customer(customer.id)
            .await
            .context("Failed to list orders")?
            .len();

        println!(
            "  {:<37} {:<20} {:<17} {}",
            customer.id.to_string().bright_black(),
            customer.name.as_deref().unwrap_or("-").cyan(),
            customer
                .registration
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            order_count
        );
    }

    println!();
    println!(
        "  Total: {}",
        customers.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a customer after confirmation. Orders go with it.
async fn delete_customer(
    customers: &PgCustomerRepository,
    orders: &PgOrderRepository,
    id: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑  Delete Customer".bright_blue().bold());
    println!();

    let id = parse_resource_id(id)?;

    let customer = customers
        .find_by_id(id)
        .await
        .context("Failed to load customer")?
        .context("Customer not found")?;

    let order_count = orders
        .list_by_customer(id)
        .await
        .context("Failed to list orders")?
        .len();

    println!(
        "  Customer: {}",
        customer.name.as_deref().unwrap_or("-").cyan()
    );
    println!("  ID:       {}", customer.id.to_string().bright_black());
    println!("  Orders:   {}", order_count.to_string().bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this customer and all of its orders?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    customers
        .delete(id)
        .await
        .context("Failed to delete customer")?;

    println!();
    println!("{}", "✅ Customer deleted".green().bold());
    println!();

    Ok(())
}

async fn list_orders(orders: &PgOrderRepository) -> Result<()> {
    println!("{}", "📦 Orders".bright_blue().bold());
    println!();

    let orders = orders.list().await.context("Failed to list orders")?;

    if orders.is_empty() {
        println!("{}", "  No orders found".yellow());
        return Ok(());
    }

    println!(
        "  {:<37} {:<37} {:<10} {}",
        "ID".bright_white().bold(),
        "Customer".bright_white().bold(),
        "Amount".bright_white().bold(),
        "Products".bright_white().bold()
    );
    println!("  {}", "─".repeat(100).bright_black());

    for order in &orders {
        let amount = order
            .amount
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<37} {:<37} {:<10} {}",
            order.id.to_string().bright_black(),
            order.customer_id.to_string().bright_black(),
            amount.bright_green(),
            order.products.join(", ")
        );
    }

    println!();
    println!("  Total: {}", orders.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🔧 Applying migrations...".bright_blue());

            server::migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
