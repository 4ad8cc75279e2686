// 🖥️ Console Menu - the operator-facing command loop
//
// Reads one menu letter at a time, prompts for the fields that command
// needs, and reports every outcome as a printed line. The loop owns all
// bank state for the lifetime of the process and only ends on the Exit
// command or on end of input.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::config::BankConfig;
use crate::entities::{Agency, RegisterOutcome};
use crate::validation::{parse_amount, validate_cpf};

// ============================================================================
// COMMANDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    CreateAccount,
    CreateUser,
    ListAccounts,
    UserInfo,
    Exit,
}

impl Command {
    /// Menu order
    pub const ALL: [Command; 8] = [
        Command::Deposit,
        Command::Withdraw,
        Command::Statement,
        Command::CreateAccount,
        Command::CreateUser,
        Command::ListAccounts,
        Command::UserInfo,
        Command::Exit,
    ];

    pub fn key(&self) -> char {
        match self {
            Command::Deposit => 'D',
            Command::Withdraw => 'W',
            Command::Statement => 'S',
            Command::CreateAccount => 'C',
            Command::CreateUser => 'A',
            Command::ListAccounts => 'L',
            Command::UserInfo => 'U',
            Command::Exit => 'E',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::Deposit => "Deposit",
            Command::Withdraw => "Withdraw",
            Command::Statement => "Statement",
            Command::CreateAccount => "Create Account",
            Command::CreateUser => "Create User",
            Command::ListAccounts => "List Accounts",
            Command::UserInfo => "User Info",
            Command::Exit => "Exit",
        }
    }

    /// Map one typed menu letter (case-insensitive, surrounding
    /// whitespace ignored) to a command.
    pub fn parse(input: &str) -> Option<Command> {
        let normalized = input.trim().to_uppercase();
        Command::ALL
            .into_iter()
            .find(|command| normalized == command.key().to_string())
    }
}

// ============================================================================
// APP
// ============================================================================

/// The interactive console session.
///
/// Generic over its reader and writer so the whole loop can be driven by
/// in-memory buffers in tests.
pub struct App<R, W> {
    agency: Agency,
    config: BankConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: BankConfig, input: R, output: W) -> Self {
        App {
            agency: Agency::new(&config),
            config,
            input,
            output,
        }
    }

    /// Run the menu loop until Exit or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.render_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            match Command::parse(&line) {
                Some(Command::Exit) => break,
                Some(Command::Deposit) => self.handle_deposit()?,
                Some(Command::Withdraw) => self.handle_withdraw()?,
                Some(Command::Statement) => self.handle_statement()?,
                Some(Command::CreateAccount) => self.handle_create_account()?,
                Some(Command::CreateUser) => self.handle_create_user()?,
                Some(Command::ListAccounts) => self.handle_list_accounts()?,
                Some(Command::UserInfo) => self.handle_user_info()?,
                None => {
                    writeln!(
                        self.output,
                        "Invalid operation, please enter a valid option."
                    )?;
                }
            }
        }
        Ok(())
    }

    fn render_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for command in Command::ALL {
            writeln!(self.output, "[{}] -> {}", command.key(), command.label())?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Prompting
    // ------------------------------------------------------------------------

    /// One trimmed line from the operator; None on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    // ------------------------------------------------------------------------
    // Handlers
    // ------------------------------------------------------------------------

    fn handle_deposit(&mut self) -> Result<()> {
        let Some(cpf) = self.prompt("Enter your CPF: ")? else {
            return Ok(());
        };
        if self.agency.user(&cpf).is_none() {
            writeln!(self.output, "User not found.")?;
            return Ok(());
        }
        let Some(number) = self.prompt("Enter your account number: ")? else {
            return Ok(());
        };
        if self
            .agency
            .user(&cpf)
            .and_then(|user| user.account(&number))
            .is_none()
        {
            writeln!(self.output, "Account not found.")?;
            return Ok(());
        }
        let Some(raw) = self.prompt("Enter the deposit amount: ")? else {
            return Ok(());
        };
        let amount = match parse_amount(&raw) {
            Ok(amount) => amount,
            Err(err) => {
                writeln!(self.output, "Operation failed: {err}")?;
                return Ok(());
            }
        };

        let Some(account) = self
            .agency
            .user_mut(&cpf)
            .and_then(|user| user.account_mut(&number))
        else {
            return Ok(());
        };
        match account.deposit(amount) {
            Ok(value) => writeln!(self.output, "Successfully deposited R$ {value:.2}")?,
            Err(err) => writeln!(self.output, "Operation failed: {err}")?,
        }
        Ok(())
    }

    fn handle_withdraw(&mut self) -> Result<()> {
        let Some(cpf) = self.prompt("Enter your CPF: ")? else {
            return Ok(());
        };
        if self.agency.user(&cpf).is_none() {
            writeln!(self.output, "User not found.")?;
            return Ok(());
        }
        let Some(number) = self.prompt("Enter your account number: ")? else {
            return Ok(());
        };
        if self
            .agency
            .user(&cpf)
            .and_then(|user| user.account(&number))
            .is_none()
        {
            writeln!(self.output, "Account not found.")?;
            return Ok(());
        }
        let Some(raw) = self.prompt("Enter the amount you want to withdraw: ")? else {
            return Ok(());
        };
        let amount = match parse_amount(&raw) {
            Ok(amount) => amount,
            Err(err) => {
                writeln!(self.output, "Operation failed: {err}")?;
                return Ok(());
            }
        };

        let Some(account) = self
            .agency
            .user_mut(&cpf)
            .and_then(|user| user.account_mut(&number))
        else {
            return Ok(());
        };
        match account.withdraw(amount) {
            Ok(value) => writeln!(self.output, "Successfully withdrew R$ {value:.2}")?,
            Err(err) => writeln!(self.output, "Operation failed: {err}")?,
        }
        Ok(())
    }

    fn handle_statement(&mut self) -> Result<()> {
        let Some(cpf) = self.prompt("Enter your CPF: ")? else {
            return Ok(());
        };
        if self.agency.user(&cpf).is_none() {
            writeln!(self.output, "User not found.")?;
            return Ok(());
        }
        let Some(number) = self.prompt("Enter your account number: ")? else {
            return Ok(());
        };
        let Some(account) = self
            .agency
            .user(&cpf)
            .and_then(|user| user.account(&number))
        else {
            writeln!(self.output, "Account not found.")?;
            return Ok(());
        };

        writeln!(self.output, "\n====== Statement ======\n")?;
        if !account.has_transactions() {
            writeln!(self.output, "No transactions were made.")?;
        } else {
            for entry in account.entries() {
                writeln!(self.output, "{entry}")?;
            }
        }
        writeln!(self.output, "\nBalance: R$ {:.2}", account.balance())?;
        writeln!(self.output, "\n=======================")?;
        Ok(())
    }

    fn handle_create_account(&mut self) -> Result<()> {
        let Some(cpf) = self.prompt("Enter your CPF: ")? else {
            return Ok(());
        };
        let Some(user) = self.agency.user_mut(&cpf) else {
            writeln!(self.output, "User not found.")?;
            return Ok(());
        };
        let number = user.open_account(&self.config);
        writeln!(
            self.output,
            "Account created successfully! Your account number is {number}"
        )?;
        Ok(())
    }

    fn handle_create_user(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter your name: ")? else {
            return Ok(());
        };
        let Some(date_of_birth) = self.prompt("Enter your date of birth (dd-mm-yyyy): ")? else {
            return Ok(());
        };
        let Some(cpf) = self.prompt("Enter your CPF (only numbers): ")? else {
            return Ok(());
        };
        if let Err(err) = validate_cpf(&cpf) {
            writeln!(self.output, "Operation failed: {err}")?;
            return Ok(());
        }
        let Some(address) = self.prompt("Enter your address (street, number, district, city/state): ")?
        else {
            return Ok(());
        };

        let (outcome, user) = self
            .agency
            .register_user(name, date_of_birth, cpf, address);
        if outcome == RegisterOutcome::AlreadyRegistered {
            writeln!(self.output, "User with this CPF already exists.")?;
        }
        // Either way the command ends by opening one account
        let number = user.open_account(&self.config);
        match outcome {
            RegisterOutcome::Created => writeln!(
                self.output,
                "User and account created successfully! Your account number is {number}"
            )?,
            RegisterOutcome::AlreadyRegistered => writeln!(
                self.output,
                "Account created successfully! Your account number is {number}"
            )?,
        }
        Ok(())
    }

    fn handle_list_accounts(&mut self) -> Result<()> {
        let Some(cpf) = self.prompt("Enter your CPF: ")? else {
            return Ok(());
        };
        let Some(user) = self.agency.user(&cpf) else {
            writeln!(self.output, "User not found.")?;
            return Ok(());
        };
        if !user.has_accounts() {
            writeln!(self.output, "No accounts found for this user.")?;
            return Ok(());
        }
        writeln!(self.output, "User: {}", user.name())?;
        for account in user.accounts() {
            writeln!(
                self.output,
                "Account Number: {}, Agency: {}",
                account.number(),
                self.agency.code()
            )?;
        }
        Ok(())
    }

    fn handle_user_info(&mut self) -> Result<()> {
        let Some(cpf) = self.prompt("Enter your CPF: ")? else {
            return Ok(());
        };
        let Some(user) = self.agency.user(&cpf) else {
            writeln!(self.output, "User not found.")?;
            return Ok(());
        };
        writeln!(self.output, "Name: {}", user.name())?;
        writeln!(self.output, "Date of Birth: {}", user.date_of_birth())?;
        writeln!(self.output, "CPF: {}", user.formatted_cpf())?;
        writeln!(self.output, "Address: {}", user.address())?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
