// 🏷️ Category Entity - Expense and income categories
//
// "Category name is a VALUE (shown to users), category id is IDENTITY (stored)"
//
// - Two disjoint sets: expense categories and income categories
// - `id` is a stable slug ("food-dining") used for classification and storage
// - The registry is built once and never mutated afterwards

use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORY TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    /// Expense category (money going out)
    Expense,

    /// Income category (money coming in)
    Income,
}

impl CategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Expense => "expense",
            CategoryType::Income => "income",
        }
    }
}

impl std::str::FromStr for CategoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(CategoryType::Expense),
            "income" => Ok(CategoryType::Income),
            other => Err(format!("Unknown category type: {}", other)),
        }
    }
}

// ============================================================================
// CATEGORY ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identity (e.g., "food-dining")
    pub id: String,

    /// User-facing name (e.g., "Food & Dining")
    pub name: String,

    /// Optional icon for UI (e.g., "🍽️")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            icon: None,
            description: None,
        }
    }

    /// Create category with icon and description
    pub fn with_display(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut category = Self::new(id, name);
        category.icon = Some(icon.into());
        category.description = Some(description.into());
        category
    }
}

// ============================================================================
// CATEGORY REGISTRY
// ============================================================================

/// Registry of expense and income categories
///
/// Insertion order is preserved; it is the order pickers show categories in.
/// Id uniqueness across both sets is checked by [`crate::Catalog`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryRegistry {
    expense: Vec<Category>,
    income: Vec<Category>,
}

impl CategoryRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        CategoryRegistry::default()
    }

    pub fn from_parts(expense: Vec<Category>, income: Vec<Category>) -> Self {
        CategoryRegistry { expense, income }
    }

    /// Create registry with default categories pre-loaded
    pub fn with_defaults() -> Self {
        let mut registry = CategoryRegistry::new();
        registry.register_default_categories();
        registry
    }

    fn register_default_categories(&mut self) {
        // ====================================================================
        // EXPENSE CATEGORIES
        // ====================================================================

        let expense = [
            ("food-dining", "Food & Dining", "🍽️", "Groceries, restaurants, cafes and takeaways"),
            ("transportation", "Transportation", "🚗", "Fuel, public transport, rideshare and parking"),
            ("shopping", "Shopping", "🛍️", "Clothing, electronics and general retail"),
            ("entertainment", "Entertainment", "🎬", "Movies, events, games and nights out"),
            ("bills-utilities", "Bills & Utilities", "💡", "Power, water, internet and phone"),
            ("healthcare", "Healthcare", "🏥", "Doctor, pharmacy, dental and optical"),
            ("education", "Education", "📚", "School fees, courses and books"),
            ("travel", "Travel", "✈️", "Flights, accommodation and holidays"),
            ("housing", "Housing", "🏠", "Rent, mortgage and property costs"),
            ("personal-care", "Personal Care", "💇", "Hair, beauty and fitness"),
            ("insurance", "Insurance", "🛡️", "Car, home, health and life cover"),
            ("gifts-donations", "Gifts & Donations", "🎁", "Presents and charitable giving"),
            ("subscriptions", "Subscriptions", "📺", "Streaming, software and memberships"),
            ("other-expense", "Other", "📦", "Fees and anything else"),
        ];
        for (id, name, icon, description) in expense {
            self.register(CategoryType::Expense, Category::with_display(id, name, icon, description));
        }

        // ====================================================================
        // INCOME CATEGORIES
        // ====================================================================

        let income = [
            ("salary", "Salary", "💼", "Wages and salary from an employer"),
            ("freelance", "Freelance", "💻", "Contract and freelance work"),
            ("business", "Business", "📈", "Business revenue and payouts"),
            ("investments", "Investments", "📊", "Dividends, interest and capital gains"),
            ("rental-income", "Rental Income", "🏘️", "Rent received from tenants or boarders"),
            ("gifts-received", "Gifts", "🎉", "Money received as a gift"),
            ("refunds", "Refunds", "↩️", "Refunds, reimbursements and cashback"),
            ("other-income", "Other Income", "💰", "Prizes, winnings and anything else"),
        ];
        for (id, name, icon, description) in income {
            self.register(CategoryType::Income, Category::with_display(id, name, icon, description));
        }
    }

    /// Register a category under the given type
    pub fn register(&mut self, category_type: CategoryType, category: Category) {
        match category_type {
            CategoryType::Expense => self.expense.push(category),
            CategoryType::Income => self.income.push(category),
        }
    }

    pub fn expense(&self) -> &[Category] {
        &self.expense
    }

    pub fn income(&self) -> &[Category] {
        &self.income
    }

    /// Categories of one type, in registration order
    pub fn by_type(&self, category_type: CategoryType) -> &[Category] {
        match category_type {
            CategoryType::Expense => &self.expense,
            CategoryType::Income => &self.income,
        }
    }

    /// All categories, expense first
    pub fn all_categories(&self) -> impl Iterator<Item = &Category> {
        self.expense.iter().chain(self.income.iter())
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Category> {
        self.all_categories().find(|c| c.id == id)
    }

    /// Find category by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        let lower_name = name.trim().to_lowercase();
        self.all_categories()
            .find(|c| c.name.to_lowercase() == lower_name)
    }

    /// Which set a category id belongs to
    pub fn type_of(&self, id: &str) -> Option<CategoryType> {
        if self.expense.iter().any(|c| c.id == id) {
            Some(CategoryType::Expense)
        } else if self.income.iter().any(|c| c.id == id) {
            Some(CategoryType::Income)
        } else {
            None
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.type_of(id).is_some()
    }

    pub fn count(&self) -> usize {
        self.expense.len() + self.income.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
