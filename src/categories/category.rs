use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

//transaction categories, serialized by display name ("Food & Drink")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Income,
    Transfer,
    FoodAndDrink,
    Shops,
    Transportation,
    Recreation,
    Service,
    Healthcare,
    Deposit,
    Payment,
    CashAdvance,
    BankFees,
    Entertainment,
    Education,
    ProfessionalServices,
    Travel,
    RentAndUtilities,
    HomeImprovement,
    PersonalCare,
    GeneralMerchandise,
    GovernmentAndNonProfit,
    Other,
}

impl Category {
    pub const ALL: [Category; 22] = [
        Category::Income,
        Category::Transfer,
        Category::FoodAndDrink,
        Category::Shops,
        Category::Transportation,
        Category::Recreation,
        Category::Service,
        Category::Healthcare,
        Category::Deposit,
        Category::Payment,
        Category::CashAdvance,
        Category::BankFees,
        Category::Entertainment,
        Category::Education,
        Category::ProfessionalServices,
        Category::Travel,
        Category::RentAndUtilities,
        Category::HomeImprovement,
        Category::PersonalCare,
        Category::GeneralMerchandise,
        Category::GovernmentAndNonProfit,
        Category::Other,
    ];

    //human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Transfer => "Transfer",
            Category::FoodAndDrink => "Food & Drink",
            Category::Shops => "Shops",
            Category::Transportation => "Transportation",
            Category::Recreation => "Recreation",
            Category::Service => "Service",
            Category::Healthcare => "Healthcare",
            Category::Deposit => "Deposit",
            Category::Payment => "Payment",
            Category::CashAdvance => "Cash Advance",
            Category::BankFees => "Bank Fees",
            Category::Entertainment => "Entertainment",
            Category::Education => "Education",
            Category::ProfessionalServices => "Professional Services",
            Category::Travel => "Travel",
            Category::RentAndUtilities => "Rent & Utilities",
            Category::HomeImprovement => "Home Improvement",
            Category::PersonalCare => "Personal Care",
            Category::GeneralMerchandise => "General Merchandise",
            Category::GovernmentAndNonProfit => "Government & Non-Profit",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

//keys compare without case, spaces, underscores, dashes or ampersands
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .replace("and", "")
}

impl FromStr for Category {
    type Err = UnknownCategory;

    //accepts "Food & Drink", "FOOD_AND_DRINK", "FoodAndDrink" and similar
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Category::ALL
            .iter()
            .copied()
            .find(|c| normalize(c.display_name()) == key)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.display_name().to_string()
    }
}
