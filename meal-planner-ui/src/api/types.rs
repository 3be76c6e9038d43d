//! API Data Types
//!
//! Shapes of the JSON documents returned by the meal planner API.

use serde::Deserialize;

/// A protein source from the food database
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProteinFood {
    pub name: String,
    /// Grams of protein per serving
    pub protein: u32,
    pub cost: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A single meal in a plan
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Meal {
    /// Display label, e.g. "Breakfast"
    #[serde(rename = "type")]
    pub label: String,
    pub protein: ProteinFood,
    pub veggie: String,
    pub carb: String,
}

/// Meal slots in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn key(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }
}

/// A generated daily meal plan
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MealPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub total_protein: u32,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub protein_goal: Option<u32>,
    /// Generation timestamp as formatted by the server
    #[serde(default)]
    pub date: Option<String>,
}

impl MealPlan {
    pub fn meal(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Meals in breakfast, lunch, dinner order
    pub fn meals(&self) -> [(MealSlot, &Meal); 3] {
        MealSlot::ALL.map(|slot| (slot, self.meal(slot)))
    }
}

/// Envelope returned by the meal plan endpoint
#[derive(Clone, Debug, Deserialize)]
pub struct MealPlanResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<MealPlan>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TipsResponse {
    pub tips: Vec<String>,
}

/// Full food database
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct FoodDatabase {
    pub proteins: Vec<ProteinFood>,
    pub veggies: Vec<String>,
    pub carbs: Vec<String>,
}
