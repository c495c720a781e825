use rust_decimal::prelude::ToPrimitive;
use serde_json::{Value, json};

use crate::domain::menu::value_objects::MenuDetails;

/// System prompt for the quantity-prediction completion. Pins the model
/// to deterministic interpolation and JSON output.
pub const SYSTEM_PROMPT: &str = "You are a calculator for food quantities. Your only job is to \
     perform linear interpolation based on party sizes and return correctly formatted JSON. \
     Maintain the original units.";

/// Flattens the nested menu into the reference structure the model
/// interpolates from. Quantities are emitted as floats so the payload
/// carries plain numbers.
pub fn build_reference_data(party_size: i32, menu: &MenuDetails) -> Value {
    let courses: Vec<Value> = menu
        .courses
        .iter()
        .map(|course| {
            let items: Vec<Value> = course
                .menu_items
                .iter()
                .map(|item| {
                    let references: Vec<Value> = item
                        .quantity_references
                        .iter()
                        .map(|reference| {
                            json!({
                                "party_size": reference.party_size,
                                "quantity": reference.quantity_value.to_f64().unwrap_or(0.0),
                                "unit": reference.unit,
                            })
                        })
                        .collect();

                    json!({
                        "item_name": item.name,
                        "reference_quantities": references,
                    })
                })
                .collect();

            json!({
                "course_name": course.name,
                "items": items,
            })
        })
        .collect();

    json!({
        "party_size": party_size,
        "courses": courses,
    })
}

/// Builds the user prompt: worked interpolation examples, the reference
/// payload, and the exact response shape the model must return.
pub fn build_prediction_prompt(party_size: i32, reference_data: &Value) -> String {
    let reference = serde_json::to_string_pretty(reference_data).unwrap_or_default();

    format!(
        r#"Your task is to predict food quantities needed for a party of {party_size} people.

The reference data contains known quantities for standard party sizes (typically 50, 100, 250, 500 people).

The relationship between party size and quantity is typically linear. For example:
- If 50 people need 2KG and 100 people need 4KG, then 75 people would need 3KG.
- If 50 people need 200 pieces and 100 people need 500 pieces, then 75 people would need 350 pieces.

Here is the reference data:
{reference}

For each menu item, calculate the appropriate quantity for {party_size} people by using linear interpolation/extrapolation from the reference data.

Return a JSON object with the following structure:
{{
  "predictions": [
    {{
      "course_name": "COURSE_NAME",
      "items": [
        {{
          "item_name": "ITEM_NAME",
          "quantity_value": NUMERIC_VALUE,
          "unit": "ORIGINAL_UNIT"
        }},
        ...
      ]
    }},
    ...
  ]
}}

Important:
1. Preserve the original units exactly as they appear in the reference data (KG, PC, etc.)
2. Include ALL courses and ALL items from the reference data in your prediction
3. Calculate each value by proper linear scaling based on party size"#
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{
        menu::{
            entities::{Course, Menu, MenuItem, QuantityReference},
            value_objects::{CourseWithItems, MenuItemWithReferences},
        },
        user::{
            entities::{User, UserConfig},
            value_objects::UserSummary,
        },
    };

    fn sample_menu() -> MenuDetails {
        let creator = User::new(UserConfig {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: String::new(),
            is_staff: true,
        });
        let menu = Menu::new(
            "Basic Menu 1".to_string(),
            "Standard banquet menu".to_string(),
            creator.id,
        );
        let course = Course::new(menu.id, "APPETIZERS".to_string(), 1);
        let item = MenuItem::new(course.id, "PANEER TIKKA".to_string());
        let references = vec![
            QuantityReference::new(item.id, 50, Decimal::from(2), "KG".to_string()),
            QuantityReference::new(item.id, 100, Decimal::from(4), "KG".to_string()),
        ];

        MenuDetails::new(
            menu,
            UserSummary::from(creator),
            vec![CourseWithItems::new(
                course,
                vec![MenuItemWithReferences::new(item, references)],
            )],
        )
    }

    #[test]
    fn reference_data_flattens_the_menu() {
        let data = build_reference_data(75, &sample_menu());

        assert_eq!(data["party_size"], 75);
        assert_eq!(data["courses"][0]["course_name"], "APPETIZERS");
        let item = &data["courses"][0]["items"][0];
        assert_eq!(item["item_name"], "PANEER TIKKA");
        assert_eq!(item["reference_quantities"][0]["party_size"], 50);
        assert_eq!(item["reference_quantities"][0]["quantity"], 2.0);
        assert_eq!(item["reference_quantities"][1]["unit"], "KG");
    }

    #[test]
    fn prompt_embeds_party_size_and_reference_data() {
        let data = build_reference_data(75, &sample_menu());
        let prompt = build_prediction_prompt(75, &data);

        assert!(prompt.contains("party of 75 people"));
        assert!(prompt.contains("PANEER TIKKA"));
        assert!(prompt.contains("\"predictions\""));
        assert!(prompt.contains("linear interpolation/extrapolation"));
    }
}
