//! 对比结果的输出格式：文本报告、CSV 表格，以及 serde feature 下的 JSON。

use crate::error::Result;
use crate::model::offer::Offer;
use crate::model::summary::ComparisonSummary;
use crate::model::util::format_thousands;
use std::fmt::Write as _;
use std::io::Write;

pub const TABLE_HEADER: [&str; 7] = [
    "platform",
    "name",
    "price",
    "rating",
    "reviews",
    "smart_score",
    "reason",
];

pub fn format_price(price: u64) -> String {
    format!("₹{}", format_thousands(price))
}

/// 文本报告：首选推荐、四项指标、对比表和平台展示
pub fn render_text(offers: &[Offer], summary: &ComparisonSummary) -> String {
    let mut out = String::new();
    let pick = &summary.top_pick;

    let _ = writeln!(
        out,
        "🏆 SMART CHOICE: {}  {}  |  {}  |  Smart Score: {:.1}/10",
        pick.name(),
        format_price(pick.price()),
        pick.platform(),
        pick.smart_score()
    );
    let _ = writeln!(out, "{}", pick.reason());
    let _ = writeln!(out);

    let _ = writeln!(out, "📊 Smart Comparison Dashboard");
    let _ = writeln!(out, "Cheapest:        {}", format_price(summary.cheapest));
    let _ = writeln!(out, "Best Rating:     {:.1}⭐", summary.best_rating);
    let _ = writeln!(out, "Top Smart Score: {:.1}/10", summary.top_smart_score);
    let _ = writeln!(out, "Most Reviews:    {}", format_thousands(summary.most_reviews));
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:<10} {:<28} {:>9} {:>6} {:>8} {:>6}  {}",
        "PLATFORM", "NAME", "PRICE", "RATING", "REVIEWS", "SCORE", "REASON"
    );
    for offer in offers {
        let _ = writeln!(
            out,
            "{:<10} {:<28} {:>9} {:>6.1} {:>8} {:>6.1}  {}",
            offer.platform().label(),
            offer.name(),
            format_thousands(offer.price()),
            offer.rating(),
            offer.reviews(),
            offer.smart_score(),
            offer.reason()
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "🖼️ Product Showcase");
    for offer in offers {
        let _ = writeln!(
            out,
            "{} | {} | 💰 {} | ⭐ {} | 👥 {} reviews | 🤖 Smart Score: {:.1}/10",
            offer.platform(),
            offer.name(),
            format_price(offer.price()),
            offer.rating(),
            format_thousands(offer.reviews()),
            offer.smart_score()
        );
        let _ = writeln!(out, "    {}", offer.url());
        let _ = writeln!(out, "    {}", offer.image());
    }
    out
}

/// 对比表写成 CSV
pub fn write_csv<W: Write>(writer: W, offers: &[Offer]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(TABLE_HEADER)?;
    for offer in offers {
        wtr.write_record([
            offer.platform().label().to_string(),
            offer.name().to_string(),
            offer.price().to_string(),
            format!("{:.1}", offer.rating()),
            offer.reviews().to_string(),
            format!("{:.1}", offer.smart_score()),
            offer.reason().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(feature = "serde")]
pub fn render_json(offers: &[Offer], summary: &ComparisonSummary) -> Result<String> {
    let value = serde_json::json!({
        "offers": offers,
        "summary": summary,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
