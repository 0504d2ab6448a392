//! Seedable random transactions for exercising the dashboard in tests.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use time::{Date, Duration};

use crate::{Transaction, TransactionType, calendar::YearMonth};

const TRANSACTION_COUNT: usize = 150;
const MONTHS_OF_HISTORY: i32 = 6;

const CATEGORIES: [(&str, &[&str]); 10] = [
    (
        "Groceries",
        &["Weekly Groceries", "Vegetables", "Dairy Products", "Rice & Lentils"],
    ),
    ("Rent", &["Monthly Rent", "House Rent"]),
    ("Salary", &["Monthly Salary", "Freelance Payment", "Bonus"]),
    ("Tip", &["Restaurant Tip", "Delivery Tip"]),
    ("Food", &["Lunch", "Dinner", "Snacks", "Coffee"]),
    ("Medical", &["Doctor Visit", "Medicine", "Health Checkup"]),
    (
        "Utilities",
        &["Electricity Bill", "Water Bill", "Internet Bill", "Gas Bill"],
    ),
    (
        "Entertainment",
        &["Movie Ticket", "Netflix Subscription", "Concert"],
    ),
    (
        "Transportation",
        &["Petrol", "Bus Fare", "Uber Ride", "Metro Card"],
    ),
    ("Other", &["Shopping", "Gift", "Miscellaneous"]),
];

/// Builds realistic-looking transactions from a fixed seed.
///
/// The same seed always produces the same transactions.
pub(crate) struct SampleData {
    rng: StdRng,
    user_id: String,
}

impl SampleData {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            user_id: "sample-user".to_owned(),
        }
    }

    pub(crate) fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = user_id.to_owned();
        self
    }

    /// Generates transactions spread over the six months before `today`,
    /// newest first.
    pub(crate) fn transactions(mut self, today: Date) -> Vec<Transaction> {
        let start = months_before(today, MONTHS_OF_HISTORY);
        let span_days = (today - start).whole_days();

        let mut transactions: Vec<_> = (0..TRANSACTION_COUNT)
            .map(|index| {
                let date = start + Duration::days(self.rng.gen_range(0..span_days));
                self.transaction(index, date)
            })
            .collect();

        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions
    }

    fn transaction(&mut self, index: usize, date: Date) -> Transaction {
        let (category, titles) = CATEGORIES[self.rng.gen_range(0..CATEGORIES.len())];
        let title = titles.choose(&mut self.rng).copied().unwrap_or(category);

        let transaction_type = if category == "Salary" || self.rng.gen_bool(0.3) {
            TransactionType::Credit
        } else {
            TransactionType::Expense
        };

        let amount: u32 = match (transaction_type, category) {
            (TransactionType::Credit, _) => self.rng.gen_range(10_000..60_000),
            (TransactionType::Expense, "Rent") => self.rng.gen_range(15_000..35_000),
            (TransactionType::Expense, "Groceries") => self.rng.gen_range(1_000..6_000),
            (TransactionType::Expense, "Utilities") => self.rng.gen_range(500..3_500),
            (TransactionType::Expense, "Food") => self.rng.gen_range(100..1_100),
            (TransactionType::Expense, "Transportation") => self.rng.gen_range(200..2_200),
            (TransactionType::Expense, _) => self.rng.gen_range(100..2_100),
        };

        let kind = match transaction_type {
            TransactionType::Credit => "credit",
            TransactionType::Expense => "expense",
        };

        Transaction::build(transaction_type, f64::from(amount), date, category)
            .id(&format!("sample_{index}"))
            .title(title)
            .description(&format!("Sample {kind} transaction"))
            .user_id(&self.user_id)
            .finalise()
    }
}

/// The same day `months` calendar months earlier, clamped to the month's end.
fn months_before(date: Date, months: i32) -> Date {
    let total = date.year() * 12 + i32::from(u8::from(date.month())) - 1 - months;
    let year = total.div_euclid(12);
    let month_number = u8::try_from(total.rem_euclid(12) + 1).unwrap();
    let month = time::Month::try_from(month_number).unwrap();
    let month = YearMonth::new(year, month);

    let day = date.day().min(month.last_day().day());
    Date::from_calendar_date(year, month.month(), day).unwrap()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{SampleData, months_before};

    #[test]
    fn same_seed_gives_same_transactions() {
        let today = date!(2024 - 06 - 30);

        assert_eq!(
            SampleData::new(42).transactions(today),
            SampleData::new(42).transactions(today)
        );
    }

    #[test]
    fn transactions_are_newest_first_and_in_window() {
        let today = date!(2024 - 06 - 30);

        let transactions = SampleData::new(1).transactions(today);

        assert_eq!(transactions.len(), 150);
        assert!(transactions.windows(2).all(|pair| pair[0].date >= pair[1].date));
        assert!(
            transactions
                .iter()
                .all(|t| t.date >= date!(2023 - 12 - 30) && t.date < today)
        );
        assert!(
            transactions
                .iter()
                .filter(|t| t.category == "Salary")
                .all(|t| t.is_credit())
        );
    }

    #[test]
    fn months_before_clamps_day() {
        assert_eq!(months_before(date!(2024 - 08 - 31), 6), date!(2024 - 02 - 29));
        assert_eq!(months_before(date!(2024 - 03 - 15), 6), date!(2023 - 09 - 15));
    }
}
