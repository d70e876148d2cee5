//! Daily reducing-balance loan math.
//!
//! # Responsibility
//! - Compute the fixed daily installment for a loan.
//! - Expand a loan record into its full daily amortization schedule.
//!
//! # Invariants
//! - All currency values are `Decimal` rounded to 2 places; no binary floats.
//! - The final installment clears rounding residue so the schedule's closing
//!   balance is exactly zero.
//! - Out-of-range inputs surface as `CalcError`, never as a panic.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::model::record::LoanRecord;

/// Standard assumption for converting an annual rate to a daily one.
pub const DAYS_IN_YEAR: u32 = 365;

/// Longest supported tenure, 100 years of daily installments.
pub const MAX_TENURE_DAYS: u32 = 36_500;

pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug)]
pub enum CalcError {
    /// The record's `date` field is not a `YYYY-MM-DD` date.
    InvalidDate(String),
    /// A schedule needs at least one repayment day.
    ZeroTenure,
    /// Tenure exceeds `MAX_TENURE_DAYS`.
    TenureTooLong { days: u32, max: u32 },
    /// Negative annual rates are not meaningful for a loan schedule.
    RateOutOfRange,
    /// The amount/rate combination exceeds the supported numeric range.
    Overflow,
}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => write!(f, "invalid disbursement date `{value}`"),
            Self::ZeroTenure => write!(f, "tenure must be at least one day"),
            Self::TenureTooLong { days, max } => {
                write!(f, "tenure of {days} days exceeds the {max}-day limit")
            }
            Self::RateOutOfRange => write!(f, "annual rate must not be negative"),
            Self::Overflow => write!(
                f,
                "amount and rate combination exceeds the supported numeric range"
            ),
        }
    }
}

impl Error for CalcError {}

/// One row of a daily amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installment {
    /// 1-based day number within the tenure.
    pub number: u32,
    pub due_date: NaiveDate,
    pub principal_due: Decimal,
    pub interest_due: Decimal,
    pub total_due: Decimal,
    /// Outstanding principal after this installment.
    pub balance: Decimal,
}

/// Fixed daily installment under the reducing-balance method.
///
/// `annual_rate` is a fraction (0.12 for 12% p.a.). A zero rate degenerates
/// to straight division of the principal over the tenure.
pub fn daily_installment(principal: Decimal, annual_rate: Decimal, tenure_days: u32) -> CalcResult<Decimal> {
    if tenure_days == 0 {
        return Err(CalcError::ZeroTenure);
    }
    if tenure_days > MAX_TENURE_DAYS {
        return Err(CalcError::TenureTooLong {
            days: tenure_days,
            max: MAX_TENURE_DAYS,
        });
    }
    if annual_rate < Decimal::ZERO {
        return Err(CalcError::RateOutOfRange);
    }

    let rate_daily = annual_rate / Decimal::from(DAYS_IN_YEAR);
    if rate_daily.is_zero() {
        return Ok((principal / Decimal::from(tenure_days)).round_dp(2));
    }

    // EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)
    let growth = pow(Decimal::ONE + rate_daily, tenure_days).ok_or(CalcError::Overflow)?;
    let emi = principal
        .checked_mul(rate_daily)
        .and_then(|value| value.checked_mul(growth))
        .and_then(|value| value.checked_div(growth - Decimal::ONE))
        .ok_or(CalcError::Overflow)?;
    Ok(emi.round_dp(2))
}

/// Expands `record` into its daily schedule starting the day after the
/// disbursement date.
pub fn daily_schedule(
    record: &LoanRecord,
    annual_rate: Decimal,
    tenure_days: u32,
) -> CalcResult<Vec<Installment>> {
    let disbursed_on = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
        .map_err(|_| CalcError::InvalidDate(record.date.clone()))?;

    let principal = Decimal::from(record.amount);
    let emi = daily_installment(principal, annual_rate, tenure_days)?;
    let rate_daily = annual_rate / Decimal::from(DAYS_IN_YEAR);

    let mut schedule = Vec::with_capacity(tenure_days as usize);
    let mut balance = principal;
    let mut due_date = disbursed_on;

    for number in 1..=tenure_days {
        let interest_due = balance
            .checked_mul(rate_daily)
            .ok_or(CalcError::Overflow)?
            .round_dp(2);
        let mut principal_due = (emi - interest_due).round_dp(2);

        // Last day pays off whatever principal is left, absorbing the
        // rounding drift accumulated over the tenure.
        let total_due = if number == tenure_days {
            principal_due = balance;
            principal_due
                .checked_add(interest_due)
                .ok_or(CalcError::Overflow)?
                .round_dp(2)
        } else {
            emi
        };

        balance = (balance - principal_due).round_dp(2);
        due_date = due_date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| CalcError::InvalidDate(record.date.clone()))?;

        schedule.push(Installment {
            number,
            due_date,
            principal_due,
            interest_due,
            total_due,
            balance,
        });
    }

    Ok(schedule)
}

fn pow(base: Decimal, exponent: u32) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    for _ in 0..exponent {
        result = result.checked_mul(base)?;
    }
    Some(result)
}
