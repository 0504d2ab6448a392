//! Loads transaction records from JSON or CSV files.
//!
//! JSON files hold an array of records. CSV files have a header row with the
//! same camelCase field names, e.g.
//!
//! ```text
//! id,title,amount,category,date,transactionType,description,userId
//! t1,Lunch,100,Food,2024-03-05,expense,,user-1
//! ```

use std::{fs, path::Path};

use crate::{Error, Transaction};

/// The file formats transactions can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// A JSON array of transaction records.
    Json,
    /// A CSV file with a header row.
    Csv,
}

impl FileType {
    /// Picks the file type from the extension of `path`, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        match extension.as_str() {
            "json" => Some(FileType::Json),
            "csv" => Some(FileType::Csv),
            _ => None,
        }
    }
}

/// Reads every transaction in the file at `path`.
///
/// # Errors
/// This function will return an:
/// - [Error::UnsupportedFileType] if the file is not a `.json` or `.csv` file,
/// - [Error::ReadError] if the file could not be read,
/// - [Error::InvalidTransactionFile] if a record is malformed,
/// - [Error::InvalidAmount] if a transaction has a negative, infinite or NaN
///   amount.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, Error> {
    let display_path = path.display().to_string();

    let Some(file_type) = FileType::from_path(path) else {
        tracing::error!("Unsupported transaction file {display_path}");
        return Err(Error::UnsupportedFileType(display_path));
    };

    let text = fs::read_to_string(path).map_err(|error| {
        tracing::error!("Could not read {display_path}: {error}");
        Error::ReadError(display_path.clone(), error.to_string())
    })?;

    let transactions = parse_transactions(&text, file_type)
        .map_err(|reason| {
            tracing::error!("Could not parse {display_path}: {reason}");
            Error::InvalidTransactionFile(display_path.clone(), reason)
        })?;

    validate_amounts(&transactions)?;

    tracing::info!(
        "Loaded {} transactions from {display_path}",
        transactions.len()
    );

    Ok(transactions)
}

/// Parses transactions from the contents of a file.
///
/// On failure the reason is returned as a string so the caller can attach
/// the file it came from.
pub fn parse_transactions(text: &str, file_type: FileType) -> Result<Vec<Transaction>, String> {
    match file_type {
        FileType::Json => serde_json::from_str(text).map_err(|error| error.to_string()),
        FileType::Csv => csv::Reader::from_reader(text.as_bytes())
            .deserialize()
            .collect::<Result<Vec<Transaction>, _>>()
            .map_err(|error| error.to_string()),
    }
}

fn validate_amounts(transactions: &[Transaction]) -> Result<(), Error> {
    match transactions
        .iter()
        .find(|transaction| !transaction.amount.is_finite() || transaction.amount < 0.0)
    {
        Some(transaction) => {
            tracing::error!(
                "Transaction {} has the invalid amount {}",
                transaction.id,
                transaction.amount
            );
            Err(Error::InvalidAmount(
                transaction.id.clone(),
                transaction.amount,
            ))
        }
        None => Ok(()),
    }
}

/// Keeps only the transactions owned by `user_id`.
pub fn for_user(transactions: Vec<Transaction>, user_id: &str) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|transaction| transaction.user_id == user_id)
        .collect()
}
