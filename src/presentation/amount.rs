use rust_decimal::{Decimal, RoundingStrategy};

/// Separators used when printing amounts for a language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleFormat {
    /// Resolves a tag such as `en-US` or `de_DE` by its language subtag.
    ///
    /// Unknown languages fall back to the `en-US` separators.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
            "fr" | "pl" | "sv" | "nb" | "fi" | "cs" | "ru" => Self {
                decimal_separator: ',',
                grouping_separator: ' ',
            },
            _ => Self::default(),
        }
    }
}

pub fn symbol_for(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "AUD" => "A$",
        _ => code,
    }
}

pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats a signed amount as `+$2,400.00` / `-$5.75`; zero carries no sign.
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    format_amount_for(amount, currency, &LocaleFormat::default())
}

/// [`format_amount`] with the separators of `locale`.
pub fn format_amount_for(amount: Decimal, currency: &str, locale: &LocaleFormat) -> String {
    let precision = minor_units_for(currency);
    let magnitude = amount
        .abs()
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let body = group_digits(&format!("{:.*}", precision as usize, magnitude), locale);

    let sign = if magnitude.is_zero() {
        ""
    } else if amount.is_sign_negative() {
        "-"
    } else {
        "+"
    };
    let symbol = symbol_for(currency);
    let spacer = if symbol.chars().all(|c| c.is_ascii_alphabetic()) {
        " "
    } else {
        ""
    };
    format!("{sign}{symbol}{spacer}{body}")
}

fn group_digits(number: &str, locale: &LocaleFormat) -> String {
    let (int_part, fraction) = match number.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (number, None),
    };
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(number.len() + digits.len() / 3);
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(locale.grouping_separator);
        }
        grouped.push(*ch);
    }
    if let Some(fraction) = fraction {
        grouped.push(locale.decimal_separator);
        grouped.push_str(fraction);
    }
    grouped
}
