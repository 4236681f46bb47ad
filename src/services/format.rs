use crate::models::Portfolio;

/// Render grouped holdings as one line per asset class, e.g.
/// `- Equity: ₹8,00,000 (Large Cap 75%, Mid Cap 25%)`.
///
/// Asset classes are emitted in map order; each sub-category's share is
/// its percentage of the class total, rendered with zero decimals. An
/// asset class with no holdings gets an empty parenthetical. When the
/// class total is zero the percentage split is undefined, so holdings
/// fall back to raw amounts instead.
pub fn format_portfolio(portfolio: &Portfolio) -> String {
    let mut lines = Vec::with_capacity(portfolio.len());

    for (asset_class, holdings) in portfolio {
        let total: f64 = holdings.iter().map(|h| h.amount).sum();

        let sub_cats: Vec<String> = if total == 0.0 {
            holdings
                .iter()
                .map(|h| {
                    format!("{} ₹{}", h.sub_category, format_indian_currency(h.amount))
                })
                .collect()
        } else {
            holdings
                .iter()
                .map(|h| {
                    let percentage = h.amount / total * 100.0;
                    format!("{} {:.0}%", h.sub_category, percentage)
                })
                .collect()
        };

        let sub_categories = if sub_cats.is_empty() {
            String::new()
        } else {
            format!("({})", sub_cats.join(", "))
        };

        // The template always carries the space before the parenthetical,
        // even when it is empty.
        lines.push(format!(
            "- {}: ₹{} {}",
            asset_class,
            format_indian_currency(total),
            sub_categories
        ));
    }

    lines.join("\n")
}

/// Group digits in the Indian numbering system: the last three digits
/// form the first group, then pairs toward the left (8,00,000 rather
/// than 800,000). The fractional part is discarded, not rounded.
/// Negative amounts truncate toward zero and keep a leading minus.
pub fn format_indian_currency(amount: f64) -> String {
    let truncated = amount.trunc() as i64;
    let digits = truncated.unsigned_abs().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (mut head, tail) = digits.split_at(digits.len() - 3);
        let mut result = tail.to_string();
        while !head.is_empty() {
            let cut = head.len().saturating_sub(2);
            let (rest, group) = head.split_at(cut);
            result = format!("{},{}", group, result);
            head = rest;
        }
        result
    };

    if truncated < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
