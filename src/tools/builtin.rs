//! Built-in tools for the chat agent.
//!
//! Four stateless tools (`calculator`, `greet`, `weather`,
//! `currency_converter`). Each is a plain function returning a sentence, plus
//! a constructor wrapping it in an [`AgentTool`] with a description and a
//! parameter schema so the agent can call it. The chat loop also calls
//! [`calculator`] directly for its arithmetic shortcut.
//!
//! # Usage
//!
//! ```rust
//! use toolchat::tools::builtin::{all_tools, greet};
//!
//! assert_eq!(greet("Ada"), "Hello, Ada! How can I assist you today?");
//! assert_eq!(all_tools().len(), 4);
//! ```

use std::sync::Arc;

use crate::tools::tool::{AgentTool, Tool, ToolExecutionContext};
use crate::tools::types::AgentToolParameters;

/// Operation names understood by [`calculator`].
pub const CALCULATOR_OPERATIONS: [&str; 4] = ["add", "subtract", "multiply", "divide"];

/// Fixed exchange rate applied by [`currency_converter`].
pub const CONVERSION_RATE: f64 = 1.2;

const DIVIDE_BY_ZERO: &str = "Error: Cannot divide by zero.";
const UNSUPPORTED_OPERATION: &str =
    "Error: Unsupported operation. Please use 'add', 'subtract', 'multiply', or 'divide'.";

/// Perform one arithmetic operation and describe the result.
///
/// Division by zero and unknown operation names produce an error sentence
/// instead of failing.
pub fn calculator(a: f64, b: f64, operation: &str) -> String {
    let (x, y) = (format_float(a), format_float(b));
    match operation {
        "add" => format!("The sum of {x} and {y} is {}.", format_float(a + b)),
        "subtract" => format!("The difference between {x} and {y} is {}.", format_float(a - b)),
        "multiply" => format!("The product of {x} and {y} is {}.", format_float(a * b)),
        "divide" if b == 0.0 => DIVIDE_BY_ZERO.to_string(),
        "divide" => format!("The quotient of {x} divided by {y} is {}.", format_float(a / b)),
        _ => UNSUPPORTED_OPERATION.to_string(),
    }
}

/// Greet a person by name.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}! How can I assist you today?")
}

/// Report the weather for a location. Always sunny, always 25°C.
pub fn weather(location: &str) -> String {
    format!("The current weather in {location} is sunny with a temperature of 25°C.")
}

/// Convert an amount between currencies at [`CONVERSION_RATE`].
///
/// The amount prints without a trailing `.0` (`100`, `12.5`); the converted
/// value always has two decimals.
pub fn currency_converter(amount: f64, from_currency: &str, to_currency: &str) -> String {
    let converted = amount * CONVERSION_RATE;
    let converted = if converted.is_finite() {
        format!("{converted:.2}")
    } else {
        format_float(converted)
    };
    format!(
        "{} {from_currency} is equal to {converted} {to_currency}.",
        format_amount(amount)
    )
}

fn format_amount(amount: f64) -> String {
    let text = format_float(amount);
    match text.strip_suffix(".0") {
        Some(integral) => integral.to_string(),
        None => text,
    }
}

/// Render a float the way the calculator's sentences expect: integral values
/// keep a trailing `.0`, very large or very small magnitudes switch to
/// scientific notation with a signed two-digit exponent (`1e+20`, `5e-05`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{value:e}");
        if let Some((mantissa, exponent)) = sci.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
        return sci;
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

fn text_result(text: String) -> serde_json::Value {
    serde_json::Value::String(text)
}

/// Create the `calculator` tool.
pub fn calculator_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        "calculator",
        "Perform basic arithmetic operations (addition, subtraction, multiplication, division).",
        AgentToolParameters::object()
            .number("a", "The first operand (number)", true)
            .number("b", "The second operand (number)", true)
            .string_enum(
                "operation",
                "The operation to perform ('add', 'subtract', 'multiply', 'divide')",
                &CALCULATOR_OPERATIONS,
                true,
            )
            .build(),
        |args, _ctx: ToolExecutionContext| async move {
            let a = args.get_f64("a")?;
            let b = args.get_f64("b")?;
            let operation = args.get_str("operation")?;
            Ok(text_result(calculator(a, b, operation)))
        },
    ))
}

/// Create the `greet` tool.
pub fn greet_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        "greet",
        "Greets a person with the provided name.",
        AgentToolParameters::object()
            .string("name", "Name of the person to greet", true)
            .build(),
        |args, _ctx: ToolExecutionContext| async move {
            Ok(text_result(greet(args.get_str("name")?)))
        },
    ))
}

/// Create the `weather` tool.
pub fn weather_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        "weather",
        "Returns the current weather for a given location.",
        AgentToolParameters::object()
            .string("location", "City or place to report on", true)
            .build(),
        |args, _ctx: ToolExecutionContext| async move {
            Ok(text_result(weather(args.get_str("location")?)))
        },
    ))
}

/// Create the `currency_converter` tool.
pub fn currency_converter_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        "currency_converter",
        "Converts currency from one type to another.",
        AgentToolParameters::object()
            .number("amount", "Amount of money to convert", true)
            .string("from_currency", "Currency code to convert from, e.g. USD", true)
            .string("to_currency", "Currency code to convert to, e.g. EUR", true)
            .build(),
        |args, _ctx: ToolExecutionContext| async move {
            let amount = args.get_f64("amount")?;
            let from = args.get_str("from_currency")?;
            let to = args.get_str("to_currency")?;
            Ok(text_result(currency_converter(amount, from, to)))
        },
    ))
}

/// Every built-in tool, in registration order.
pub fn all_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        calculator_tool(),
        greet_tool(),
        weather_tool(),
        currency_converter_tool(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolArguments;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn calculator_describes_each_operation() {
        assert_eq!(calculator(5.0, 3.0, "add"), "The sum of 5.0 and 3.0 is 8.0.");
        assert_eq!(
            calculator(5.0, 3.0, "subtract"),
            "The difference between 5.0 and 3.0 is 2.0."
        );
        assert_eq!(
            calculator(2.5, 4.0, "multiply"),
            "The product of 2.5 and 4.0 is 10.0."
        );
        assert_eq!(
            calculator(7.0, 2.0, "divide"),
            "The quotient of 7.0 divided by 2.0 is 3.5."
        );
    }

    #[test]
    fn calculator_reports_divide_by_zero_in_band() {
        assert_eq!(calculator(42.0, 0.0, "divide"), "Error: Cannot divide by zero.");
        assert_eq!(calculator(-1.0, -0.0, "divide"), "Error: Cannot divide by zero.");
    }

    #[test]
    fn calculator_rejects_unknown_operations() {
        let expected =
            "Error: Unsupported operation. Please use 'add', 'subtract', 'multiply', or 'divide'.";
        assert_eq!(calculator(1.0, 2.0, "modulo"), expected);
        assert_eq!(calculator(1.0, 2.0, "ADD"), expected);
    }

    #[test]
    fn format_float_matches_calculator_conventions() {
        assert_eq!(format_float(8.0), "8.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00005), "5e-05");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(-2.5e20), "-2.5e+20");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NAN), "nan");
    }

    #[test]
    fn greet_accepts_empty_name() {
        assert_eq!(greet("Ada"), "Hello, Ada! How can I assist you today?");
        assert_eq!(greet(""), "Hello, ! How can I assist you today?");
    }

    #[test]
    fn weather_ignores_location() {
        assert_eq!(
            weather("Paris"),
            "The current weather in Paris is sunny with a temperature of 25°C."
        );
        assert_eq!(
            weather(""),
            "The current weather in  is sunny with a temperature of 25°C."
        );
    }

    #[test]
    fn currency_converter_applies_fixed_rate() {
        assert_eq!(
            currency_converter(100.0, "USD", "EUR"),
            "100 USD is equal to 120.00 EUR."
        );
        assert_eq!(
            currency_converter(12.5, "GBP", "JPY"),
            "12.5 GBP is equal to 15.00 JPY."
        );
    }

    #[test]
    fn currency_amounts_share_calculator_number_style() {
        let large = currency_converter(1e20, "USD", "EUR");
        assert!(large.starts_with("1e+20 USD is equal to 1"), "{large}");
        assert!(large.ends_with(".00 EUR."), "{large}");
        assert_eq!(
            currency_converter(f64::NAN, "USD", "EUR"),
            "nan USD is equal to nan EUR."
        );
        assert_eq!(
            currency_converter(f64::NEG_INFINITY, "USD", "EUR"),
            "-inf USD is equal to -inf EUR."
        );
        assert_eq!(
            currency_converter(0.00005, "USD", "EUR"),
            "5e-05 USD is equal to 0.00 EUR."
        );
    }

    #[test]
    fn all_tools_are_registered_in_order() {
        let names: Vec<String> = all_tools().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, ["calculator", "greet", "weather", "currency_converter"]);
        for tool in all_tools() {
            assert!(!tool.description().is_empty());
            assert_eq!(tool.parameters().schema["type"], "object");
        }
    }

    #[test]
    fn calculator_schema_lists_operations() {
        let tool = calculator_tool();
        let schema = &tool.parameters().schema;
        assert_eq!(
            schema["properties"]["operation"]["enum"],
            json!(["add", "subtract", "multiply", "divide"])
        );
        assert_eq!(schema["required"], json!(["a", "b", "operation"]));
    }

    #[tokio::test]
    async fn calculator_tool_returns_sentence() {
        let result = calculator_tool()
            .execute(
                &ToolArguments::new(json!({ "a": 6, "b": 7, "operation": "multiply" })),
                &ToolExecutionContext::default(),
            )
            .await
            .expect("calculator should succeed");
        assert_eq!(result, json!("The product of 6.0 and 7.0 is 42.0."));
    }

    #[tokio::test]
    async fn currency_tool_requires_all_arguments() {
        let err = currency_converter_tool()
            .execute(
                &ToolArguments::new(json!({ "amount": 10 })),
                &ToolExecutionContext::default(),
            )
            .await
            .expect_err("missing currencies should fail");
        assert!(err.to_string().contains("from_currency"));
    }
}
