use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::config::RosterConfig;
use crate::employees::form::{check_date, check_email, check_required, compose_phone};
use crate::employees::phone::{self, COUNTRY_CODES, LOCAL_NUMBER_LEN};
use crate::employees::{
    seed_employees, Department, Employee, EmployeeDraft, EmployeeId, EmployeePatch, Position,
};
use crate::listing::{EmployeeListing, PageItem, ViewMode};
use crate::locale::Locale;
use crate::store::{CommitReport, EmployeeStore, MutationOutcome, PersistStatus};

/// Roster - Employee records kept in a local store
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage employee records kept in a local durable store")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the record slot (overrides the configuration)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Label language (en, tr)
    #[arg(long, global = true)]
    pub lang: Option<Locale>,
}

impl Cli {
    /// Effective configuration: file (or defaults) with command-line overrides
    pub fn load_config(&self) -> Result<RosterConfig> {
        let mut config = match &self.config {
            Some(path) => RosterConfig::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => RosterConfig::load().context("Failed to load config")?,
        };

        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(locale) = self.lang {
            config.locale = locale;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List employees, one page at a time
    List(ListArgs),

    /// Show a single employee
    Show {
        /// Employee id
        id: String,
    },

    /// Add a new employee
    Add(EmployeeFields),

    /// Update fields of an existing employee
    Update {
        /// Employee id
        id: String,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// Delete an employee
    Delete {
        /// Employee id
        id: String,
    },

    /// Replace every record with the built-in sample data
    Reset,

    /// Show the effective configuration
    Config,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show employees with a field containing this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page to show
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Layout (table, list)
    #[arg(long, default_value = "table")]
    pub view: ViewMode,
}

#[derive(Args, Default)]
pub struct EmployeeFields {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Phone country code (+90, +1, +44, +49, +33)
    #[arg(long)]
    pub country_code: Option<String>,

    /// 10-digit local phone number
    #[arg(long)]
    pub phone_number: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub dob: Option<String>,

    /// Date of employment (YYYY-MM-DD)
    #[arg(long)]
    pub doe: Option<String>,

    /// Analytics or Tech
    #[arg(long)]
    pub department: Option<Department>,

    /// Junior, Medior or Senior
    #[arg(long)]
    pub position: Option<Position>,
}

impl EmployeeFields {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.country_code.is_none()
            && self.phone_number.is_none()
            && self.dob.is_none()
            && self.doe.is_none()
            && self.department.is_none()
            && self.position.is_none()
    }

    /// Copy the given fields onto a form draft
    pub fn apply_to(self, draft: &mut EmployeeDraft) -> Result<()> {
        if let Some(value) = self.first_name {
            draft.first_name = value;
        }
        if let Some(value) = self.last_name {
            draft.last_name = value;
        }
        if let Some(value) = self.email {
            draft.email = value;
        }
        if let Some(code) = self.country_code {
            check_country_code(&code)?;
            draft.country_code = code;
        }
        if let Some(number) = self.phone_number {
            if !draft.set_phone_number(&number) {
                bail!("Phone number cannot have more than 10 digits");
            }
        }
        if let Some(value) = self.dob {
            draft.date_of_birth = value;
        }
        if let Some(value) = self.doe {
            draft.date_of_employment = value;
        }
        if let Some(value) = self.department {
            draft.department = value;
        }
        if let Some(value) = self.position {
            draft.position = value;
        }
        Ok(())
    }

    /// Patch holding only the given fields, each checked on its own
    ///
    /// Fields that are not passed are left as stored, even when the stored value
    /// would not satisfy the form rules. The phone is recomposed only when a
    /// country code or number is given; the missing half comes from `existing`.
    pub fn into_patch(self, existing: &Employee) -> Result<EmployeePatch> {
        let mut patch = EmployeePatch::new();

        if let Some(value) = self.first_name {
            check_required("first name", &value)?;
            patch.first_name = Some(value.trim().to_string());
        }
        if let Some(value) = self.last_name {
            check_required("last name", &value)?;
            patch.last_name = Some(value.trim().to_string());
        }
        if let Some(value) = self.email {
            check_email(&value)?;
            patch.email = Some(value.trim().to_string());
        }
        if self.country_code.is_some() || self.phone_number.is_some() {
            let stored = phone::parse_phone(&existing.phone);
            let code = match self.country_code {
                Some(code) => {
                    check_country_code(&code)?;
                    code
                }
                None => stored.country_code,
            };
            let number = self.phone_number.unwrap_or(stored.number);
            if phone::digits_only(&number).len() > LOCAL_NUMBER_LEN {
                bail!("Phone number cannot have more than 10 digits");
            }
            patch.phone = Some(compose_phone(&code, &number)?);
        }
        if let Some(value) = self.dob {
            check_date("date of birth", &value)?;
            patch.date_of_birth = Some(value.trim().to_string());
        }
        if let Some(value) = self.doe {
            check_date("date of employment", &value)?;
            patch.date_of_employment = Some(value.trim().to_string());
        }
        patch.department = self.department;
        patch.position = self.position;
        Ok(patch)
    }
}

fn check_country_code(code: &str) -> Result<()> {
    if !COUNTRY_CODES.iter().any(|(known, _)| *known == code) {
        let known: Vec<&str> = COUNTRY_CODES.iter().map(|(c, _)| *c).collect();
        bail!("Unsupported country code {} (expected one of {})", code, known.join(", "));
    }
    Ok(())
}

/// Command-line interface handler
pub struct CliHandler {
    config: RosterConfig,
    store: EmployeeStore,
}

impl CliHandler {
    /// Open the store described by `config`
    pub fn new(config: RosterConfig) -> Self {
        let store = EmployeeStore::open(&config);
        debug!(
            "Opened store '{}' in {}",
            store.slot_name(),
            config.data_dir.display()
        );
        Self { config, store }
    }

    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    /// Handle CLI commands
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::List(args) => self.handle_list(args),
            Commands::Show { id } => self.handle_show(&EmployeeId::new(id)),
            Commands::Add(fields) => self.handle_add(fields),
            Commands::Update { id, fields } => self.handle_update(&EmployeeId::new(id), fields),
            Commands::Delete { id } => self.handle_delete(&EmployeeId::new(id)),
            Commands::Reset => self.handle_reset(),
            Commands::Config => self.handle_config(),
        }
    }

    fn handle_list(&self, args: ListArgs) -> Result<()> {
        let mut listing = EmployeeListing::with_employees(self.store.get_all()?, self.config.page_size);
        listing.set_view_mode(args.view);
        if let Some(term) = &args.search {
            listing.set_search_term(term);
        }

        if args.page != listing.current_page() && !listing.go_to_page(args.page) {
            bail!(
                "Page {} is out of range (1-{})",
                args.page,
                listing.total_pages()
            );
        }

        let rows = listing.page_items();
        if rows.is_empty() {
            println!("No employees found");
        } else {
            match listing.view_mode() {
                ViewMode::Table => self.print_table(&rows),
                ViewMode::List => self.print_cards(&rows),
            }
        }

        println!();
        println!("{}", listing.summary());
        let strip = listing.page_strip();
        if !strip.is_empty() {
            println!("{}", render_strip(&strip, listing.current_page()));
        }
        Ok(())
    }

    fn handle_show(&self, id: &EmployeeId) -> Result<()> {
        let employee = self
            .store
            .get_by_id(id)?
            .ok_or_else(|| anyhow!("Employee not found: {}", id))?;
        self.print_cards(&[&employee]);
        Ok(())
    }

    fn handle_add(&self, fields: EmployeeFields) -> Result<()> {
        let mut draft = EmployeeDraft::new();
        fields.apply_to(&mut draft)?;
        let new_employee = draft.into_new_employee()?;

        let report = self.store.add(new_employee)?;
        if let Some(id) = report.outcome.added_id() {
            println!("✅ Added employee {}", id);
        }
        warn_if_unsaved(&report);
        Ok(())
    }

    fn handle_update(&self, id: &EmployeeId, fields: EmployeeFields) -> Result<()> {
        if fields.is_empty() {
            bail!("Nothing to update; pass at least one field flag");
        }
        let existing = self
            .store
            .get_by_id(id)?
            .ok_or_else(|| anyhow!("Employee not found: {}", id))?;

        let patch = fields.into_patch(&existing)?;

        let report = self.store.update(id, patch)?;
        match &report.outcome {
            MutationOutcome::Updated(id) => println!("✅ Updated employee {}", id),
            MutationOutcome::NotFound(id) => bail!("Employee not found: {}", id),
            other => debug!("Unexpected update outcome: {:?}", other),
        }
        warn_if_unsaved(&report);
        Ok(())
    }

    fn handle_delete(&self, id: &EmployeeId) -> Result<()> {
        let mut listing = EmployeeListing::with_employees(self.store.get_all()?, self.config.page_size);
        if !listing.request_delete(id) {
            bail!("Employee not found: {}", id);
        }
        if let Some(employee) = listing.pending_delete() {
            println!(
                "{} ({})",
                self.config.locale.label("confirmDelete"),
                employee.full_name()
            );
        }

        if let Some(report) = listing.confirm_delete(&self.store)? {
            println!("🗑️  Deleted employee {}", id);
            warn_if_unsaved(&report);
        }
        Ok(())
    }

    fn handle_reset(&self) -> Result<()> {
        let report = self.store.replace_all(seed_employees())?;
        if let MutationOutcome::Replaced(count) = report.outcome {
            println!("🔄 Restored {} sample employees", count);
        }
        warn_if_unsaved(&report);
        Ok(())
    }

    fn handle_config(&self) -> Result<()> {
        println!("⚙️  Configuration");
        println!("================\n");
        if let Some(path) = RosterConfig::config_file_path() {
            println!("Config file: {}", path.display());
        }
        println!(
            "Record file: {}",
            self.config
                .data_dir
                .join(format!("{}.json", self.config.slot_name))
                .display()
        );
        println!();
        let rendered = toml::to_string_pretty(&self.config).context("Failed to render config")?;
        print!("{}", rendered);
        Ok(())
    }

    fn print_table(&self, rows: &[&Employee]) {
        let locale = self.config.locale;
        println!(
            "{:<14} {:<12} {:<12} {:<20} {:<12} {:<12} {:<22} {:<28} {:<10}",
            "ID",
            locale.label("firstName"),
            locale.label("lastName"),
            locale.label("doe"),
            locale.label("dob"),
            locale.label("department"),
            locale.label("phone"),
            locale.label("email"),
            locale.label("position"),
        );
        for employee in rows {
            println!(
                "{:<14} {:<12} {:<12} {:<20} {:<12} {:<12} {:<22} {:<28} {:<10}",
                employee.id.as_str(),
                employee.first_name,
                employee.last_name,
                employee.date_of_employment,
                employee.date_of_birth,
                employee.department.as_str(),
                employee.phone,
                employee.email,
                employee.position.as_str(),
            );
        }
    }

    fn print_cards(&self, rows: &[&Employee]) {
        let locale = self.config.locale;
        for employee in rows {
            println!("👤 {} [{}]", employee.full_name(), employee.id);
            println!("   {}: {}", locale.label("email"), employee.email);
            println!("   {}: {}", locale.label("phone"), employee.phone);
            println!("   {}: {}", locale.label("department"), employee.department);
            println!("   {}: {}", locale.label("position"), employee.position);
            println!("   {}: {}", locale.label("dob"), employee.date_of_birth);
            println!("   {}: {}", locale.label("doe"), employee.date_of_employment);
            println!();
        }
    }
}

fn warn_if_unsaved(report: &CommitReport) {
    if let PersistStatus::Failed(reason) = &report.persistence {
        eprintln!("⚠️  Change kept in memory only, saving failed: {}", reason);
    }
}

fn render_strip(strip: &[PageItem], current: usize) -> String {
    strip
        .iter()
        .map(|item| match item {
            PageItem::Page(page) if *page == current => format!("[{}]", page),
            PageItem::Page(page) => page.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_strip_marks_current_page() {
        let strip = crate::listing::page_strip(6, 10);
        assert_eq!(render_strip(&strip, 6), "1 … 5 [6] 7 … 10");
    }

    #[test]
    fn test_fields_reject_unknown_country_code() {
        let fields = EmployeeFields {
            country_code: Some("+7".to_string()),
            ..EmployeeFields::default()
        };
        let mut draft = EmployeeDraft::new();
        assert!(fields.apply_to(&mut draft).is_err());
    }

    #[test]
    fn test_fields_reject_long_phone_number() {
        let fields = EmployeeFields {
            phone_number: Some("12345678901".to_string()),
            ..EmployeeFields::default()
        };
        let mut draft = EmployeeDraft::new();
        assert!(fields.apply_to(&mut draft).is_err());
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "roster", "list", "--search", "tech", "--page", "2", "--lang", "tr", "--view", "list",
        ])
        .unwrap();
        assert_eq!(cli.lang, Some(Locale::Tr));
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.search.as_deref(), Some("tech"));
                assert_eq!(args.page, 2);
                assert_eq!(args.view, ViewMode::List);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_patch_carries_only_given_fields() {
        let existing = seed_employees()[9].clone();
        let fields = EmployeeFields {
            position: Some(Position::Senior),
            ..EmployeeFields::default()
        };

        let patch = fields.into_patch(&existing).unwrap();
        assert_eq!(patch, EmployeePatch::new().with_position(Position::Senior));
    }

    #[test]
    fn test_patch_recomposes_phone_from_stored_code() {
        let existing = seed_employees()[0].clone();
        let fields = EmployeeFields {
            phone_number: Some("5559876543".to_string()),
            ..EmployeeFields::default()
        };

        let patch = fields.into_patch(&existing).unwrap();
        assert_eq!(patch.phone.as_deref(), Some("+(90) 555 987 65 43"));
    }

    #[test]
    fn test_patch_checks_given_fields() {
        let existing = seed_employees()[0].clone();
        let fields = EmployeeFields {
            email: Some("broken".to_string()),
            ..EmployeeFields::default()
        };
        assert!(fields.into_patch(&existing).is_err());

        let fields = EmployeeFields {
            dob: Some("12/04/1990".to_string()),
            ..EmployeeFields::default()
        };
        assert!(fields.into_patch(&existing).is_err());
    }

    #[test]
    fn test_empty_update_fields() {
        assert!(EmployeeFields::default().is_empty());
    }
}
