//! Interactive rental menu
//!
//! Reads a menu selection, asks for whatever the action needs, runs it
//! against the [`RentalDesk`], and prints the outcome. A [`RentalError`] is
//! reported and the menu comes back; I/O failures and end of input stop the
//! session.

use std::io::{self, BufRead, Write};

use anyhow::bail;
use colored::Colorize;
use log::{debug, info, warn};

use movie_rental::config::RentalConfig;
use movie_rental::core::RentalError;
use movie_rental::core::models::MovieKind;
use movie_rental::core::services::RentalDesk;
use movie_rental::output::{
    AvailableList, CatalogList, ErrorResult, HistoryList, OperationResult, OutputMode, Render,
    RentalList, ReturnReceipt,
};

const MENU: [&str; 7] = [
    "1. Add a new customer",
    "2. Add a new movie",
    "3. Rent a movie",
    "4. Return a movie",
    "5. Show all movies",
    "6. Show rental history",
    "7. Exit",
];

/// Run the interactive menu on stdin and stdout until the user exits
pub fn shell(config: &RentalConfig, mode: OutputMode) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(config, stdin.lock(), stdout.lock(), mode).run()
}

/// Menu actions, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddCustomer,
    AddMovie,
    Rent,
    Return,
    ListMovies,
    History,
    Exit,
}

impl std::str::FromStr for MenuChoice {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::AddCustomer),
            "2" => Ok(Self::AddMovie),
            "3" => Ok(Self::Rent),
            "4" => Ok(Self::Return),
            "5" => Ok(Self::ListMovies),
            "6" => Ok(Self::History),
            "7" => Ok(Self::Exit),
            _ => Err(RentalError::InvalidMenuChoice {
                input: s.trim().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Parse an index typed by the user; negative numbers are out of range
fn parse_index(input: &str, len: usize) -> Result<usize, RentalError> {
    let value: i64 = input.parse().map_err(|_| RentalError::InvalidNumber {
        input: input.to_string(),
    })?;
    usize::try_from(value).map_err(|_| RentalError::IndexOutOfRange { index: value, len })
}

/// Parse a day count typed by the user
fn parse_days(input: &str) -> Result<u32, RentalError> {
    input.parse().map_err(|_| RentalError::InvalidNumber {
        input: input.to_string(),
    })
}

/// One interactive session over a desk built from config
struct Session<'a, R, W> {
    desk: RentalDesk,
    config: &'a RentalConfig,
    input: R,
    out: W,
    mode: OutputMode,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    fn new(config: &'a RentalConfig, input: R, out: W, mode: OutputMode) -> Self {
        Self {
            desk: config.build_desk(),
            config,
            input,
            out,
            mode,
        }
    }

    fn run(&mut self) -> anyhow::Result<()> {
        info!(
            "desk open with {} movie(s) and {} customer(s)",
            self.desk.catalog().len(),
            self.desk.customers().len()
        );

        loop {
            self.print_menu()?;
            let selection = self.ask("Choose: ")?;

            let outcome = match selection.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!("menu choice {choice:?}");
                    self.dispatch(choice)
                },
                Err(err) => Err(err.into()),
            };

            match outcome {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {},
                Err(err) => match err.downcast_ref::<RentalError>() {
                    Some(rental_err) => {
                        debug!("command failed: {rental_err}");
                        self.emit(&ErrorResult::from(rental_err))?;
                    },
                    None => return Err(err),
                },
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<Flow> {
        match choice {
            MenuChoice::AddCustomer => self.add_customer()?,
            MenuChoice::AddMovie => self.add_movie()?,
            MenuChoice::Rent => self.rent()?,
            MenuChoice::Return => self.return_movie()?,
            MenuChoice::ListMovies => {
                self.heading("All Movies")?;
                self.emit(&CatalogList::from_catalog(self.desk.catalog()))?;
            },
            MenuChoice::History => {
                self.heading("Rental History (sorted)")?;
                self.emit(&HistoryList::from_ledger(self.desk.ledger()))?;
            },
            MenuChoice::Exit => {
                writeln!(self.out, "Thank you for using the Movie Rental System. Exiting!")?;
                return Ok(Flow::Exit);
            },
        }
        Ok(Flow::Continue)
    }

    fn add_customer(&mut self) -> anyhow::Result<()> {
        self.heading("Welcome New Customer")?;
        let name = self.ask("Customer name: ")?;

        let result = if self.desk.add_customer(&name) {
            OperationResult::ok(format!("Customer '{name}' added successfully."))
        } else {
            OperationResult::unchanged(format!("Customer '{name}' already exists."))
        };
        self.emit(&result)
    }

    fn add_movie(&mut self) -> anyhow::Result<()> {
        self.heading("Add a Movie")?;
        let title = self.ask("Movie title: ")?;
        let kind: MovieKind = self.ask("Is it digital or physical? (d/p): ")?.parse()?;

        let id = self.desk.add_movie(&title, kind);
        self.emit(&OperationResult::ok(format!("Added {kind} movie '{title}' at index {id}.")))
    }

    fn rent(&mut self) -> anyhow::Result<()> {
        self.heading("Rent a Movie")?;
        let customer = self.ask("Customer name: ")?;
        self.desk.require_customer(&customer)?;

        self.emit(&AvailableList::from_catalog(self.desk.catalog()))?;

        // Indices address the whole catalog, not just the list above
        let input = self.ask("Enter movie index to rent: ")?;
        let index = parse_index(&input, self.desk.catalog().len())?;
        let id = self.desk.rent(&customer, index)?;

        let title = self.desk.catalog().get(id.index())?.title().to_string();
        self.emit(&OperationResult::ok(format!("{title} has been rented to {customer}.")))
    }

    fn return_movie(&mut self) -> anyhow::Result<()> {
        self.heading("Return a Movie")?;
        let customer = self.ask("Customer name: ")?;

        let held = self.desk.active_rentals(&customer).len();
        if held == 0 {
            return self.emit(&OperationResult::unchanged(format!(
                "No movies rented by {customer}."
            )));
        }
        self.emit(&RentalList::for_customer(&self.desk, &customer, &self.config.currency))?;

        let input = self.ask("Enter movie index to return: ")?;
        let index = parse_index(&input, held)?;
        self.desk.active_rental(&customer, index)?;

        let days = parse_days(&self.ask("Days rented: ")?)?;
        let summary = self.desk.return_rental(&customer, index, days)?;
        self.emit(&ReturnReceipt::new(summary, &self.config.currency))
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.heading("Movie Rental System")?;
        for line in MENU {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("--- {title} ---").as_str().bold())
    }

    fn emit(&mut self, result: &impl Render) -> anyhow::Result<()> {
        result.render(self.mode, &mut self.out)?;
        Ok(())
    }

    /// Prompt and read one trimmed line; end of input ends the session
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("input closed before exit was chosen");
            writeln!(self.out)?;
            bail!("input stream closed");
        }
        Ok(line.trim().to_string())
    }
}
