/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use clap::{Parser, Subcommand};
use civil::{CivilText, Date, DateTime, Error, Time};
use serde::Serialize;

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Checks a date (e.g., 2020-02-29) and prints it back
    Date {
        /// The date to check
        text: String,
    },

    /// Checks a time of day (e.g., 03:42:31.000000876) and prints it back
    Time {
        /// The time to check
        text: String,
    },

    /// Checks a date and time (e.g., 2020-02-29T03:42:31) and prints it back
    Datetime {
        /// The date-time to check
        text: String,
    },

    /// Adds calendar months to a date, rolling over into the next
    /// month when the day does not exist
    AddMonths {
        /// The starting date
        date: String,

        /// Number of months (may be negative)
        #[clap(allow_hyphen_values = true)]
        months: i32,
    },

    /// Adds calendar years to a date
    AddYears {
        /// The starting date
        date: String,

        /// Number of years (may be negative)
        #[clap(allow_hyphen_values = true)]
        years: i32,
    },

    /// Prints the number of days from OTHER to DATE
    DaysSince {
        /// The later date
        date: String,

        /// The earlier date
        other: String,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Inputs {
    #[command(subcommand)]
    command: Command,

    /// Print the result as a JSON string
    #[clap(short, long, global = true)]
    json: bool,
}

fn emit<T: CivilText + Serialize>(value: &T, json: bool) -> Result<(), String> {
    let out = if json {
        serde_json::to_string(value).map_err(|e| e.to_string())?
    } else {
        value.to_text().map_err(|e| e.to_string())?
    };
    println!("{}", out);
    Ok(())
}

fn add(date: &str, f: impl Fn(&Date) -> Option<Date>) -> Result<Date, Error> {
    let date = Date::from_text(date)?;
    f(&date).ok_or(Error::Overflow { type_name: "Date" })
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let inputs = Inputs::parse();
    let json = inputs.json;

    match inputs.command {
        Command::Date { text } => {
            let d = Date::from_text(&text).map_err(|e| e.to_string())?;
            emit(&d, json)
        }
        Command::Time { text } => {
            let t = Time::from_text(&text).map_err(|e| e.to_string())?;
            emit(&t, json)
        }
        Command::Datetime { text } => {
            let dt = DateTime::from_text(&text).map_err(|e| e.to_string())?;
            emit(&dt, json)
        }
        Command::AddMonths { date, months } => {
            let d = add(&date, |d| d.add_months(months)).map_err(|e| e.to_string())?;
            emit(&d, json)
        }
        Command::AddYears { date, years } => {
            let d = add(&date, |d| d.add_years(years)).map_err(|e| e.to_string())?;
            emit(&d, json)
        }
        Command::DaysSince { date, other } => {
            let a = Date::from_text(&date).map_err(|e| e.to_string())?;
            let b = Date::from_text(&other).map_err(|e| e.to_string())?;
            let n = a
                .days_since(b)
                .ok_or_else(|| Error::Overflow { type_name: "Date" }.to_string())?;
            println!("{}", n);
            Ok(())
        }
    }
}
