use crate::{
    model::city::{AnalysisDto, CensusRecord, IncomeDirection},
    server::error::{city::CityError, Error},
};

/// Ratio window treated as "about the same" when comparing home values.
const COMPARABLE_WINDOW: f64 = 0.02;

/// Slack around the income ratio within which home values track income.
const INCOME_TRACKING_SLACK: f64 = 0.05;

static ADVICE_GOOD: &str = "This could be a good move for you!";
static ADVICE_DEFINITELY_GOOD: &str = "This is definitely a good move for you!";
static ADVICE_LOWER_BUYING_POWER: &str = "Your buying power is lower. Not a good move.";
static ADVICE_SLIGHTLY_BETTER: &str =
    "Your buying power is a little better. How important is this move?";
static ADVICE_PAY_CUT: &str = "Can you afford to take a pay cut and keep the same expenses?";
static ADVICE_LESS_INCOME: &str =
    "Do you want to earn less income even if housing prices are lower? How important is this move?";
static ADVICE_TERRIBLE: &str = "Lower pay and less buying power. Terrible move!";

/// Computes the affordability verdict for a move between two cities.
///
/// Compares the destination-to-current ratios of median income and median
/// home value. Ratios are rounded to two decimals before banding so that
/// near-identical figures land in the "about the same" cases.
///
/// # Returns
/// - `Err(CityError::NonNumericCensusField)` - An input figure was suppressed
///   by the Census Bureau and cannot be analyzed
pub fn analyze(current: &CensusRecord, destination: &CensusRecord) -> Result<AnalysisDto, Error> {
    let current_income = numeric(current, "median income", &current.median_income)?;
    let destination_income = numeric(destination, "median income", &destination.median_income)?;
    let current_home = numeric(current, "median home value", &current.median_home_value)?;
    let destination_home = numeric(destination, "median home value", &destination.median_home_value)?;

    let income_ratio = round2(destination_income / current_income);
    let home_ratio = round2(destination_home / current_home);

    let comparable = (home_ratio - 1.0).abs() <= COMPARABLE_WINDOW
        || (home_ratio - income_ratio).abs() <= INCOME_TRACKING_SLACK;

    let (income_percent, income_direction) = if income_ratio >= 1.0 {
        (
            ((income_ratio - 1.0) * 100.0).round() as i64,
            IncomeDirection::Higher,
        )
    } else {
        (
            (100.0 - income_ratio * 100.0).round() as i64,
            IncomeDirection::Lower,
        )
    };

    let (home_description, advice) = if income_ratio >= 1.0 {
        if home_ratio < 1.0 {
            (
                format!(
                    "are {}% lower",
                    (100.0 - home_ratio * 100.0).round() as i64
                ),
                ADVICE_DEFINITELY_GOOD,
            )
        } else if comparable {
            (
                format!(
                    "are about the same or would increase by about the same percentage ({}%)",
                    ((home_ratio - 1.0) * 100.0).round() as i64
                ),
                ADVICE_GOOD,
            )
        } else if home_ratio > income_ratio + INCOME_TRACKING_SLACK {
            (
                format!(
                    "would be {}% more",
                    ((home_ratio - 1.0) * 100.0).round() as i64
                ),
                ADVICE_LOWER_BUYING_POWER,
            )
        } else {
            (
                format!(
                    "would only be {}% more",
                    ((home_ratio - 1.0) * 100.0).round() as i64
                ),
                ADVICE_SLIGHTLY_BETTER,
            )
        }
    } else if comparable {
        (
            format!(
                "are about the same or would decrease by about the same percentage ({}%)",
                ((home_ratio - 1.0) * 100.0).abs().round() as i64
            ),
            ADVICE_PAY_CUT,
        )
    } else if home_ratio <= 1.0 {
        (
            format!(
                "would be {}% lower",
                (100.0 - home_ratio * 100.0).round() as i64
            ),
            ADVICE_LESS_INCOME,
        )
    } else {
        (
            format!(
                "would be {}% more",
                ((home_ratio - 1.0) * 100.0).round() as i64
            ),
            ADVICE_TERRIBLE,
        )
    };

    Ok(AnalysisDto {
        income_percent,
        income_direction,
        home_description,
        advice: advice.to_string(),
    })
}

fn numeric(record: &CensusRecord, field: &'static str, value: &str) -> Result<f64, Error> {
    value.parse::<f64>().map_err(|_| {
        CityError::NonNumericCensusField {
            city: record.city.clone(),
            field,
        }
        .into()
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
