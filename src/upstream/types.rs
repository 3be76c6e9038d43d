//! Meal Planner Data Types
//!
//! JSON documents exchanged with the meal-plan service. The server passes
//! them through to the frontend unchanged, so the same types serve both
//! directions.

use serde::{Deserialize, Serialize};

/// A protein source from the food database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinFood {
    pub name: String,
    /// Grams of protein per serving
    pub protein: u32,
    pub cost: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One meal of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "type")]
    pub label: String,
    pub protein: ProteinFood,
    pub veggie: String,
    pub carb: String,
}

/// A generated daily plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub total_protein: u32,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_goal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Envelope of the meal plan endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<MealPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MealPlanResponse {
    pub fn success(plan: MealPlan) -> Self {
        Self {
            success: true,
            data: Some(plan),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipsResponse {
    pub tips: Vec<String>,
}

/// The full food database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodDatabase {
    pub proteins: Vec<ProteinFood>,
    pub veggies: Vec<String>,
    pub carbs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_envelope_omits_data() {
        let json = serde_json::to_value(MealPlanResponse::failure("no foods available")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "error": "no foods available"})
        );
    }

    #[test]
    fn test_protein_kind_uses_type_key() {
        let food: ProteinFood = serde_json::from_str(
            r#"{"name": "Dhal (1 cup cooked)", "protein": 18, "cost": "Very Low", "type": "Plant"}"#,
        )
        .unwrap();
        assert_eq!(food.kind, "Plant");

        let json = serde_json::to_value(&food).unwrap();
        assert_eq!(json["type"], "Plant");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_plan_extra_fields_optional() {
        let meal = r#"{"type": "Dinner", "protein": {"name": "Mackerel (100g)", "protein": 19, "cost": "Medium", "type": "Animal"}, "veggie": "Cucumber Salad", "carb": "Roti (1 piece)"}"#;
        let json = format!(
            r#"{{"breakfast": {m}, "lunch": {m}, "dinner": {m}, "total_protein": 57}}"#,
            m = meal
        );

        let plan: MealPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan.total_protein, 57);
        assert!(plan.tips.is_empty());
        assert!(plan.date.is_none());
    }
}
