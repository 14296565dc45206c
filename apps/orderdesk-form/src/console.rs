//! # Console Form
//!
//! Line-oriented stand-in for the order entry window. Each form field is a
//! text buffer set by a command; the two buttons are the `add` and
//! `display` commands.
//!
//! ## Commands
//! ```text
//! order-id <text>      set the Order ID field
//! customer <text>      set the Customer Name field
//! product <text>       set the Product Name field
//! quantity <text>      set the Quantity field
//! price <text>         set the Price per Unit field
//! add                  Add Product
//! display              Display Order Details
//! totals               print the totals as JSON
//! show                 print the current field values
//! help                 print this list
//! quit                 end the session (EOF works too)
//! ```
//!
//! The keyword ends at the first whitespace character (space or tab). Field
//! text is kept exactly as typed after it, so `product  Red Widget` names
//! the product ` Red Widget`.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use orderdesk_core::ProductInput;

use crate::commands;
use crate::error::FormError;
use crate::state::{FormConfig, OrderDetails, OrderSession};

const HELP: &str = "\
Commands:
  order-id <text>   set the Order ID field
  customer <text>   set the Customer Name field
  product <text>    set the Product Name field
  quantity <text>   set the Quantity field
  price <text>      set the Price per Unit field
  add               add the product to the order
  display           display order details
  totals            print order totals as JSON
  show              print the current field values
  help              print this list
  quit              end the session";

/// The text fields of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub details: OrderDetails,
    pub product: ProductInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    OrderId,
    CustomerName,
    ProductName,
    Quantity,
    UnitPrice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Set(Field, String),
    Add,
    Display,
    Totals,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    fn parse(line: &str) -> Result<Option<Command>, FormError> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let (keyword, value) = match line.trim_start().split_once(char::is_whitespace) {
            Some((keyword, value)) => (keyword, value),
            None => (line.trim(), ""),
        };

        let set = |field: Field| -> Result<Option<Command>, FormError> {
            Ok(Some(Command::Set(field, value.to_string())))
        };
        match keyword.to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "order-id" => set(Field::OrderId),
            "customer" => set(Field::CustomerName),
            "product" => set(Field::ProductName),
            "quantity" => set(Field::Quantity),
            "price" => set(Field::UnitPrice),
            "add" => Ok(Some(Command::Add)),
            "display" => Ok(Some(Command::Display)),
            "totals" => Ok(Some(Command::Totals)),
            "show" => Ok(Some(Command::Show)),
            "help" => Ok(Some(Command::Help)),
            "quit" | "exit" => Ok(Some(Command::Quit)),
            _ => Err(FormError::unknown_command(keyword)),
        }
    }
}

/// Interactive form over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    prompt: String,
    fields: FormFields,
    display: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with the configured prompt and initial field text.
    pub fn new(input: R, output: W, config: &FormConfig) -> Self {
        Console {
            input,
            output,
            prompt: config.prompt.clone(),
            fields: FormFields {
                details: OrderDetails::new(config.order_id.clone(), config.customer_name.clone()),
                product: ProductInput::default(),
            },
            display: String::new(),
        }
    }

    /// Current field values.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Text currently shown in the order details area.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Runs until `quit` or end of input.
    ///
    /// Invalid input and unknown commands are reported and the loop goes on;
    /// only I/O failures end it early.
    pub fn run(&mut self, session: &mut OrderSession) -> Result<(), FormError> {
        writeln!(self.output, "Order Management (type 'help' for commands)")?;

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(self.output, "{}", err.message)?;
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }

            match self.execute(command, session) {
                Ok(()) => {}
                Err(err) if err.is_recoverable() => writeln!(self.output, "{}", err.message)?,
                Err(err) => return Err(err),
            }
        }

        info!(
            products = session.with_order(|order| order.product_count()),
            "Form session ended"
        );
        Ok(())
    }

    fn execute(&mut self, command: Command, session: &mut OrderSession) -> Result<(), FormError> {
        match command {
            Command::Set(field, value) => {
                let slot = match field {
                    Field::OrderId => &mut self.fields.details.order_id,
                    Field::CustomerName => &mut self.fields.details.customer_name,
                    Field::ProductName => &mut self.fields.product.name,
                    Field::Quantity => &mut self.fields.product.quantity,
                    Field::UnitPrice => &mut self.fields.product.unit_price,
                };
                *slot = value;
            }
            Command::Add => {
                let totals =
                    commands::order::add_product(session, &self.fields.details, &self.fields.product)?;
                self.fields.product.clear();
                writeln!(
                    self.output,
                    "Product added ({} in order)",
                    totals.product_count
                )?;
            }
            Command::Display => {
                self.display = commands::order::display_order(session, &self.fields.details);
                write!(self.output, "{}", self.display)?;
            }
            Command::Totals => {
                let totals = commands::order::get_totals(session);
                writeln!(self.output, "{}", serde_json::to_string_pretty(&totals)?)?;
            }
            Command::Show => {
                let FormFields { details, product } = &self.fields;
                writeln!(self.output, "Order ID: {}", details.order_id)?;
                writeln!(self.output, "Customer Name: {}", details.customer_name)?;
                writeln!(self.output, "Product Name: {}", product.name)?;
                writeln!(self.output, "Quantity: {}", product.quantity)?;
                writeln!(self.output, "Price per Unit: {}", product.unit_price)?;
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }
}
