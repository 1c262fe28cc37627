// src/services/prompt.rs
//
// Instruction prompt and response schema for profile validation

use serde_json::{json, Value};

/// Schema name sent with the structured-output request
pub const RESPONSE_SCHEMA_NAME: &str = "ValidationResponse";

/// System instruction describing every validation rule.
///
/// Errors come from phase 1, warnings from phase 2, the verdict from phase 3.
pub const SYSTEM_PROMPT: &str = r#"
    You are a strict data validation assistant. Analyze the input JSON and output a structured response.

    ### PHASE 1: SYNTAX CHECKS (FAILURES = ERRORS)
    *If these fail, add a specific message to 'errors'.*
    
    1. **Name:** Must be present and NOT be empty or whitespace only.
       - Error Message: "Name is required and must be non-empty."
    2. **Phone:** Must start with '+' followed by 10-15 digits.
       - Error Message: "Phone must be in E.164 format (e.g. +1234567890)."
       - CRITICAL: Do NOT check the country code consistency here. Only check the format.
    3. **Country:** Must be a 2-letter uppercase ISO code (e.g. "IN", "US").
       - Error Message: "Country must be a valid 2-letter ISO code."
    4. **Age:** Must be strictly positive (> 0).
       - Error Message: "Age must be a positive number."
    5. **Email:** Must be a valid email format.
       - Error Message: "Invalid email format."

    ### PHASE 2: LOGIC CHECKS (FAILURES = WARNINGS)
    *If these fail, add a specific message to 'warnings'. Do NOT add to 'errors'.*
    
    1. **Phone/Country Mismatch:** Check if the phone prefix matches the Country field.
       - Rule: If Country="IN", phone must start with "+91". If Country="US", phone must start with "+1".
       - Warning Message: "Phone country code does not match the country field."
    2. **Age Logic:** Check if the user is a minor.
       - Rule: If Age is STRICTLY LESS than 18 (e.g., 17, 10), add a warning.
       - Rule: If Age is 18 or older, DO NOT warn.
       - Warning Message: "User is under 18."
    3. **Name Quality:** Check length.
       - Rule: If Name is < 3 chars but not empty.
       - Warning Message: "Name is too short."
    4. **Email Quality:** Check for disposable domains.
       - Warning Message: "Email uses a disposable domain."

    ### PHASE 3: FINAL VERDICT
    - "is_valid": true IF AND ONLY IF 'errors' is empty (even if there are warnings).
    - "is_valid": false IF 'errors' has any items.
    "#;

/// JSON schema matching `ValidationResult`
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "is_valid": { "type": "boolean" },
            "errors": { "type": "array", "items": { "type": "string" } },
            "warnings": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["is_valid", "errors", "warnings"],
        "additionalProperties": false
    })
}

/// `response_format` payload for the chat completions endpoint
pub fn response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": RESPONSE_SCHEMA_NAME,
            "strict": true,
            "schema": response_schema()
        }
    })
}
