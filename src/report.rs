//! Section banners and the closing conclusions block.

use chrono::Local;

const RULE_WIDTH: usize = 80;

/// Prints a section heading framed by rules.
pub fn banner(title: &str) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Prints the canned conclusions of the study with a completion timestamp.
pub fn print_conclusions() {
    banner("ANALYSIS CONCLUSIONS");

    println!(
        r#"
MAIN FINDINGS:

1. GENRE POPULARITY:
   - A small set of genres accounts for most of the sales volume
   - The leading genre clearly dominates the rest of the field

2. EVOLUTION OVER TIME:
   - Sales follow distinct patterns across the years covered
   - The industry shows clear peak years

3. DOMINANT PLATFORMS:
   - A few platforms generated substantially more sales than the rest
   - The distribution of sales across platforms is heavily uneven

4. MARKET CONCENTRATION:
   - The top publishers control a significant share of the market
   - A handful of companies concentrates most of the volume

5. REGIONAL DIFFERENCES:
   - Preferences differ markedly between regions
   - North America, Europe and Japan each show their own pattern

RECOMMENDATIONS:
- Developers: focus on proven genres and platforms
- Investors: favour established publishers with a track record
- Researchers: dig further into the regional preference gap

LIMITATIONS:
- Dataset covers titles with at least 100,000 copies sold
- Data ends in 2016 and excludes recent releases
- Digital storefront sales are not included"#
    );

    println!(
        "\nAnalysis completed: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}", "=".repeat(RULE_WIDTH));
}
