// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use payroll::{Applied, CoreError};
use payroll_domain::{DomainError, Employee, EmployeeId};
use payroll_persistence::{Persistence, PersistenceError};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Payroll - manage employee records and compute payroll
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file. Created on the first change if missing.
    #[arg(
        short,
        long,
        env = "PAYROLL_DATA_FILE",
        default_value = "employees.json"
    )]
    data_file: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Add an employee
    #[command(subcommand)]
    Add(AddCommand),

    /// Show every employee
    #[command(visible_alias = "ls")]
    List,

    /// Show one employee
    Show {
        /// Employee id
        id: String,
    },

    /// Remove an employee
    #[command(visible_alias = "rm")]
    Remove {
        /// Employee id
        id: String,
    },

    /// Print the total monthly payroll
    Total,

    /// Print the payroll report
    Report,

    /// Move an employee to another department
    SetDepartment {
        /// Employee id
        id: String,
        /// New department
        department: String,
    },

    /// Change the monthly salary of a full-time employee or manager
    SetSalary {
        /// Employee id
        id: String,
        /// New monthly salary
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Change the hourly rate of a part-time employee
    SetRate {
        /// Employee id
        id: String,
        /// New hourly rate
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Change the monthly hours of a part-time employee
    SetHours {
        /// Employee id
        id: String,
        /// New hours worked per month
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Change a manager's bonus
    SetBonus {
        /// Employee id
        id: String,
        /// New bonus
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}

#[derive(Subcommand, Debug)]
enum AddCommand {
    /// Add a salaried full-time employee
    #[command(name = "fulltime")]
    FullTime {
        /// Employee id
        id: String,
        /// Employee name
        name: String,
        /// Department
        department: String,
        /// Monthly salary
        monthly_salary: f64,
    },

    /// Add an hourly part-time employee
    #[command(name = "parttime")]
    PartTime {
        /// Employee id
        id: String,
        /// Employee name
        name: String,
        /// Department
        department: String,
        /// Pay per hour
        hourly_rate: f64,
        /// Hours worked per month
        hours_worked_per_month: f64,
    },

    /// Add a manager
    Manager {
        /// Employee id
        id: String,
        /// Employee name
        name: String,
        /// Department
        department: String,
        /// Monthly salary
        monthly_salary: f64,
        /// Monthly bonus
        bonus: f64,
    },
}

impl AddCommand {
    fn into_employee(self) -> Result<Employee, DomainError> {
        match self {
            Self::FullTime {
                id,
                name,
                department,
                monthly_salary,
            } => Employee::full_time(&id, &name, &department, monthly_salary),
            Self::PartTime {
                id,
                name,
                department,
                hourly_rate,
                hours_worked_per_month,
            } => Employee::part_time(&id, &name, &department, hourly_rate, hours_worked_per_month),
            Self::Manager {
                id,
                name,
                department,
                monthly_salary,
                bonus,
            } => Employee::manager(&id, &name, &department, monthly_salary, bonus),
        }
    }
}

/// Errors that end a command.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Whether a command did what was asked.
///
/// Duplicate ids, unknown ids and rejected values are reported to the user
/// rather than treated as errors, but still fail the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    Refused,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => Self::SUCCESS,
            Outcome::Refused => Self::FAILURE,
        }
    }
}

const NOT_FOUND: &str = "Employee not found.";

fn run(args: Args, out: &mut impl Write) -> Result<Outcome, CliError> {
    let mut persistence: Persistence = Persistence::open(&args.data_file)?;

    match args.command {
        CliCommand::Add(add) => {
            let employee: Employee = add.into_employee()?;
            if persistence.add(employee)? {
                writeln!(out, "Employee added successfully.")?;
                Ok(Outcome::Done)
            } else {
                writeln!(out, "Employee ID already exists.")?;
                Ok(Outcome::Refused)
            }
        }
        CliCommand::List => {
            if persistence.all().is_empty() {
                writeln!(out, "No employees.")?;
            }
            for employee in persistence.all() {
                writeln!(out, "{employee}")?;
            }
            Ok(Outcome::Done)
        }
        CliCommand::Show { id } => {
            let employee_id: EmployeeId = EmployeeId::new(&id)?;
            if let Some(employee) = persistence.find(&employee_id) {
                writeln!(out, "{employee}")?;
                Ok(Outcome::Done)
            } else {
                writeln!(out, "{NOT_FOUND}")?;
                Ok(Outcome::Refused)
            }
        }
        CliCommand::Remove { id } => {
            let employee_id: EmployeeId = EmployeeId::new(&id)?;
            if persistence.remove(&employee_id)? {
                writeln!(out, "Employee removed.")?;
                Ok(Outcome::Done)
            } else {
                writeln!(out, "{NOT_FOUND}")?;
                Ok(Outcome::Refused)
            }
        }
        CliCommand::Total => {
            writeln!(out, "Total Payroll: {:.2}", persistence.total_payroll())?;
            Ok(Outcome::Done)
        }
        CliCommand::Report => {
            writeln!(out, "{}", persistence.report())?;
            Ok(Outcome::Done)
        }
        CliCommand::SetDepartment { id, department } => {
            let employee_id: EmployeeId = EmployeeId::new(&id)?;
            let result = persistence.update_department(&employee_id, &department);
            report_update(out, result, None)
        }
        CliCommand::SetSalary { id, amount } => {
            let employee_id: EmployeeId = EmployeeId::new(&id)?;
            let result = persistence.set_monthly_salary(&employee_id, amount);
            report_update(out, result, Some("Monthly salary not changed."))
        }
        CliCommand::SetRate { id, amount } => {
            let employee_id: EmployeeId = EmployeeId::new(&id)?;
            let result = persistence.set_hourly_rate(&employee_id, amount);
            report_update(out, result, Some("Hourly rate not changed."))
        }
        CliCommand::SetHours { id, amount } => {
            let employee_id: EmployeeId = EmployeeId::new(&id)?;
            let result = persistence.set_hours_worked(&employee_id, amount);
            report_update(out, result, Some("Hours worked not changed."))
        }
        CliCommand::SetBonus { id, amount } => {
            let employee_id: EmployeeId = EmployeeId::new(&id)?;
            let result = persistence.set_bonus(&employee_id, amount);
            report_update(out, result, Some("Bonus not changed."))
        }
    }
}

/// Prints the result of a field update.
///
/// An unchanged department means the value was already set, which counts as
/// success. An unchanged amount means the value was rejected, and `rejected`
/// is printed instead.
fn report_update(
    out: &mut impl Write,
    result: Result<Applied, PersistenceError>,
    rejected: Option<&str>,
) -> Result<Outcome, CliError> {
    match (result, rejected) {
        (Ok(Applied::Changed), _) | (Ok(Applied::Unchanged), None) => {
            writeln!(out, "Employee updated.")?;
            Ok(Outcome::Done)
        }
        (Ok(Applied::Unchanged), Some(rejected)) => {
            writeln!(
                out,
                "{rejected} Amounts must be non-negative and apply to this employee type."
            )?;
            Ok(Outcome::Refused)
        }
        (Err(PersistenceError::Core(CoreError::EmployeeNotFound(_))), _) => {
            writeln!(out, "{NOT_FOUND}")?;
            Ok(Outcome::Refused)
        }
        (Err(err), _) => Err(err.into()),
    }
}

fn main() -> ExitCode {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; RUST_LOG overrides the -v/-q level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.verbosity.log_level_filter().as_trace().into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    info!(data_file = %args.data_file.display(), "Starting payroll");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(args, &mut out) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            error!("{err}");
            // Logging may be filtered out, so always tell the user.
            let _ = writeln!(io::stderr(), "Error: {err}");
            ExitCode::FAILURE
        }
    }
}
