use crate::model::{ActivityType, CropStatus, CustomerStatus, OrderStatus, ReminderPriority, ReminderType};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldbook")]
#[command(
    author,
    version,
    about = "Farm CRM and crop planning from the command line"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .fieldbook.yml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory of seed JSON files (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Treat this date as today
    #[arg(long, global = true, env = "FIELDBOOK_TODAY", hide = true)]
    pub today: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .fieldbook.yml in the current directory
    Init {
        /// Also copy the sample data into ./data and use it as the data directory
        #[arg(long)]
        seed: bool,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Manage customers
    #[command(subcommand, visible_alias = "cust")]
    Customers(CustomerCommand),

    /// Inspect orders
    #[command(subcommand)]
    Orders(OrderCommand),

    /// Inspect the activity log
    #[command(subcommand)]
    Activities(ActivityCommand),

    /// Manage crop cycles
    #[command(subcommand)]
    Crops(CropCommand),

    /// Project a harvest date from a crop type and planting date
    HarvestDate {
        /// Crop type, e.g. Corn
        crop_type: String,

        /// Planting date (YYYY-MM-DD)
        planting_date: NaiveDate,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known crop types and their growing periods
    CropTypes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the planting calendar for a month
    #[command(visible_alias = "cal")]
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage reminders
    #[command(subcommand)]
    Reminders(ReminderCommand),

    /// Show CRM and planning metrics
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum CustomerCommand {
    /// List customers
    #[command(visible_alias = "ls")]
    List {
        /// Filter by status
        #[arg(short, long)]
        status: Option<CustomerStatus>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a customer with order totals and recent activity
    Show {
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search by name, farm, email, city or crop
    Search {
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a customer
    Create {
        name: String,

        #[arg(long)]
        farm: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        state: Option<String>,

        /// Acres under cultivation
        #[arg(long)]
        farm_size: Option<f64>,

        /// Primary crop (repeatable)
        #[arg(long)]
        crop: Vec<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a customer
    Delete {
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum OrderCommand {
    /// List orders
    #[command(visible_alias = "ls")]
    List {
        /// Only orders for this customer ID
        #[arg(short, long)]
        customer: Option<u32>,

        /// Filter by status
        #[arg(short, long)]
        status: Option<OrderStatus>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an order with its line items
    Show {
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change an order's status
    Status {
        id: u32,

        status: OrderStatus,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ActivityCommand {
    /// List activities, newest first
    #[command(visible_alias = "ls")]
    List {
        /// Only activities for this customer ID
        #[arg(short, long)]
        customer: Option<u32>,

        /// Filter by type
        #[arg(short = 't', long = "type")]
        activity_type: Option<ActivityType>,

        /// Show at most this many (default 10 when unfiltered)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one activity
    Show {
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum CropCommand {
    /// List crop cycles
    #[command(visible_alias = "ls")]
    List {
        /// Filter by status
        #[arg(short, long)]
        status: Option<CropStatus>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a crop cycle and its reminders
    Show {
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Crop cycles whose season overlaps a date range
    Range {
        /// First day of the range (YYYY-MM-DD)
        start: NaiveDate,

        /// Last day of the range (YYYY-MM-DD)
        end: NaiveDate,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Plan a new crop cycle
    #[command(visible_alias = "new")]
    Create {
        /// Crop type, e.g. Corn
        crop_type: Option<String>,

        /// Field location, e.g. "North Field A"
        #[arg(short, long)]
        field: Option<String>,

        /// Planting date (YYYY-MM-DD)
        #[arg(short, long)]
        planted: Option<NaiveDate>,

        #[arg(long)]
        variety: Option<String>,

        #[arg(long)]
        acreage: Option<f64>,

        /// Planned harvest date; defaults to the projected one
        #[arg(long)]
        planned_harvest: Option<NaiveDate>,

        #[arg(long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a crop cycle
    Update {
        id: u32,

        #[arg(long)]
        crop_type: Option<String>,

        #[arg(short, long)]
        planted: Option<NaiveDate>,

        /// Explicit harvest date; skips re-projection
        #[arg(long)]
        harvest: Option<NaiveDate>,

        #[arg(short, long)]
        field: Option<String>,

        #[arg(long)]
        variety: Option<String>,

        #[arg(long)]
        acreage: Option<f64>,

        #[arg(long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a crop cycle's status
    Status {
        id: u32,

        status: CropStatus,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a crop cycle and its reminders
    Delete {
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ReminderCommand {
    /// List reminders
    #[command(visible_alias = "ls")]
    List {
        /// Only reminders for this crop cycle ID
        #[arg(short, long)]
        crop: Option<u32>,

        /// Hide completed reminders
        #[arg(long)]
        open: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open reminders due within the next N days
    Upcoming {
        /// Horizon in days (defaults to planning.upcoming_days)
        #[arg(short, long)]
        days: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a reminder
    #[command(visible_alias = "new")]
    Create {
        title: Option<String>,

        /// Reminder date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        #[arg(short = 't', long = "type")]
        reminder_type: Option<ReminderType>,

        #[arg(short, long)]
        priority: Option<ReminderPriority>,

        /// Link to a crop cycle ID
        #[arg(short, long)]
        crop: Option<u32>,

        #[arg(long)]
        description: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a reminder as completed
    #[command(visible_alias = "done")]
    Complete {
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a reminder
    Delete {
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
