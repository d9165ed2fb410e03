use crate::categories::category::Category;
use once_cell::sync::Lazy;
use regex::Regex;

//keyword rules in priority order; the first matching rule wins
//keywords match as plain substrings, so "gas" wins over "gas company"
const RULES: [(Category, &str); 7] = [
    (
        Category::FoodAndDrink,
        r"restaurant|cafe|coffee|food|grocery|supermarket|mcdonalds|starbucks|uber eats|doordash",
    ),
    (
        Category::Transportation,
        r"gas|fuel|uber|lyft|taxi|parking|metro|bus|train|car wash|auto",
    ),
    (
        Category::Entertainment,
        r"movie|cinema|netflix|spotify|entertainment|concert|theater|gaming",
    ),
    (
        Category::Shops,
        r"amazon|target|walmart|mall|shop|store|retail|clothing|electronics",
    ),
    (
        Category::RentAndUtilities,
        r"electric|gas company|water|sewer|internet|phone|cable|rent|mortgage",
    ),
    (
        Category::Healthcare,
        r"hospital|clinic|doctor|pharmacy|medical|dental|health|cvs pharmacy|walgreens",
    ),
    (
        Category::Transfer,
        r"transfer|atm|withdrawal|deposit|bank|venmo|paypal|zelle",
    ),
];

static COMPILED_RULES: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    RULES
        .iter()
        .filter_map(|(category, pattern)| Regex::new(pattern).ok().map(|re| (*category, re)))
        .collect()
});

//suggests a category from merchant name and description
pub fn suggest_category(merchant_name: &str, description: &str) -> Category {
    let text = format!("{} {}", merchant_name, description).to_lowercase();

    COMPILED_RULES
        .iter()
        .find(|(_, re)| re.is_match(&text))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_compile() {
        assert_eq!(COMPILED_RULES.len(), RULES.len());
    }

    #[test]
    fn matches_each_rule() {
        assert_eq!(suggest_category("Starbucks", ""), Category::FoodAndDrink);
        assert_eq!(suggest_category("Lyft", "ride home"), Category::Transportation);
        assert_eq!(suggest_category("Netflix", "monthly"), Category::Entertainment);
        assert_eq!(suggest_category("Walmart", ""), Category::Shops);
        assert_eq!(suggest_category("City Water", "bill"), Category::RentAndUtilities);
        assert_eq!(suggest_category("Walgreens", ""), Category::Healthcare);
        assert_eq!(suggest_category("Zelle", "to Sam"), Category::Transfer);
        assert_eq!(suggest_category("Acme Corp", "misc"), Category::Other);
    }

    #[test]
    fn case_insensitive_and_uses_description() {
        assert_eq!(suggest_category("", "NETFLIX.COM"), Category::Entertainment);
        assert_eq!(suggest_category("SQ *BLUE", "Coffee shop"), Category::FoodAndDrink);
    }

    #[test]
    fn first_rule_wins_over_better_match() {
        //"gas company" is a utility keyword, but "gas" is checked first
        assert_eq!(
            suggest_category("National Gas Company", "bill"),
            Category::Transportation
        );
        //"uber eats" is food, before plain "uber" in transportation
        assert_eq!(suggest_category("Uber Eats", ""), Category::FoodAndDrink);
        //both pharmacy keywords land in healthcare
        assert_eq!(suggest_category("CVS Pharmacy", ""), Category::Healthcare);
    }

    #[test]
    fn substring_semantics() {
        //"rent" inside "parent" still matches after earlier rules miss
        assert_eq!(suggest_category("Parent Payment", ""), Category::RentAndUtilities);
    }
}
